//! Violation report: library → component → violated rule identifiers.

use std::collections::BTreeMap;
use std::path::Path;

use schlint_core::errors::ReportError;
use serde::{Deserialize, Serialize};

use crate::atomic::write_atomic;
use crate::suppression::SuppressionTable;

/// Aggregated violations of one run.
///
/// Every processed component has an entry, empty when it passed. Rule
/// identifiers appear at most once per component, in the order recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViolationReport {
    libraries: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl ViolationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a library so it appears even when no component is processed.
    pub fn begin_library(&mut self, library_id: &str) {
        self.libraries.entry(library_id.to_string()).or_default();
    }

    /// Register a component with an empty violation list.
    pub fn begin_component(&mut self, library_id: &str, component: &str) {
        self.libraries
            .entry(library_id.to_string())
            .or_default()
            .entry(component.to_string())
            .or_default();
    }

    /// Record a violation. Returns `false` when it was already recorded.
    pub fn record(&mut self, library_id: &str, component: &str, rule_id: &str) -> bool {
        let rules = self
            .libraries
            .entry(library_id.to_string())
            .or_default()
            .entry(component.to_string())
            .or_default();
        if rules.iter().any(|r| r == rule_id) {
            return false;
        }
        rules.push(rule_id.to_string());
        true
    }

    pub fn violations(&self, library_id: &str, component: &str) -> Option<&[String]> {
        self.libraries
            .get(library_id)
            .and_then(|components| components.get(component))
            .map(Vec::as_slice)
    }

    pub fn library(&self, library_id: &str) -> Option<&BTreeMap<String, Vec<String>>> {
        self.libraries.get(library_id)
    }

    /// Total number of (component, rule) violations across all libraries.
    pub fn total_violations(&self) -> usize {
        self.libraries
            .values()
            .flat_map(|components| components.values())
            .map(Vec::len)
            .sum()
    }

    /// Serialize as `{library_id: {component_name: [rule_id, ...]}}`.
    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self).map_err(|e| ReportError::Serialize(e.to_string()))
    }

    pub fn from_json(json: &str, source: &str) -> Result<Self, ReportError> {
        serde_json::from_str(json).map_err(|e| ReportError::Parse {
            path: source.to_string(),
            message: e.to_string(),
        })
    }

    /// Write the report to `path` in one atomic replacement.
    pub fn write(&self, path: &Path) -> Result<(), ReportError> {
        let mut json = self.to_json()?;
        json.push('\n');
        write_atomic(path, json.as_bytes()).map_err(|e| ReportError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::info!(path = %path.display(), violations = self.total_violations(), "report written");
        Ok(())
    }

    /// The report's violations as an ignore list.
    pub fn to_suppression_table(&self) -> SuppressionTable {
        self.libraries
            .iter()
            .flat_map(|(library, components)| {
                components.iter().flat_map(move |(component, rules)| {
                    rules
                        .iter()
                        .map(move |rule| (library.as_str(), component.as_str(), rule.as_str()))
                })
            })
            .collect()
    }
}
