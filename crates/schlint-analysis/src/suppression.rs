//! Ignore lists: per library, per component, per rule exemptions.
//!
//! The document shape is `{library_id: {component_name: [rule_id, ...]}}`,
//! the same shape as the violation report, so a report can be fed back in
//! verbatim to accept its current violations.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use schlint_core::errors::ReportError;
use serde::{Deserialize, Serialize};

use crate::atomic::write_atomic;

/// Three-level lookup: library → component → suppressed rule identifiers.
///
/// Built once per run and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuppressionTable {
    entries: BTreeMap<String, BTreeMap<String, BTreeSet<String>>>,
}

impl SuppressionTable {
    /// A table that suppresses nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True only if the library, the component, and the rule are all listed.
    pub fn is_suppressed(&self, library_id: &str, component: &str, rule_id: &str) -> bool {
        self.entries
            .get(library_id)
            .and_then(|components| components.get(component))
            .is_some_and(|rules| rules.contains(rule_id))
    }

    /// Parse an ignore-list document. `source` names it in errors.
    pub fn from_json(json: &str, source: &str) -> Result<Self, ReportError> {
        serde_json::from_str(json).map_err(|e| ReportError::Parse {
            path: source.to_string(),
            message: e.to_string(),
        })
    }

    /// Read an ignore-list file.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let content = std::fs::read_to_string(path).map_err(|e| ReportError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let table = Self::from_json(&content, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), entries = table.len(), "loaded ignore list");
        Ok(table)
    }

    /// Write the table as an ignore-list document in one atomic replacement.
    pub fn write(&self, path: &Path) -> Result<(), ReportError> {
        let mut json =
            serde_json::to_string_pretty(self).map_err(|e| ReportError::Serialize(e.to_string()))?;
        json.push('\n');
        write_atomic(path, json.as_bytes()).map_err(|e| ReportError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Number of (library, component, rule) triples.
    pub fn len(&self) -> usize {
        self.entries
            .values()
            .flat_map(|components| components.values())
            .map(BTreeSet::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<L, C, R> FromIterator<(L, C, R)> for SuppressionTable
where
    L: Into<String>,
    C: Into<String>,
    R: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, C, R)>>(iter: I) -> Self {
        let mut entries: BTreeMap<String, BTreeMap<String, BTreeSet<String>>> = BTreeMap::new();
        for (library, component, rule) in iter {
            entries
                .entry(library.into())
                .or_default()
                .entry(component.into())
                .or_default()
                .insert(rule.into());
        }
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_suppresses_nothing() {
        let table = SuppressionTable::empty();
        assert!(!table.is_suppressed("lib", "X", "Rule 1"));
        assert!(table.is_empty());
    }

    #[test]
    fn requires_all_three_levels() {
        let table: SuppressionTable = [("lib", "X", "Rule 1")].into_iter().collect();
        assert!(table.is_suppressed("lib", "X", "Rule 1"));
        assert!(!table.is_suppressed("lib", "X", "Rule 2"));
        assert!(!table.is_suppressed("lib", "Y", "Rule 1"));
        assert!(!table.is_suppressed("other", "X", "Rule 1"));
    }

    #[test]
    fn parses_ignore_list_document() {
        let table = SuppressionTable::from_json(
            r#"{"power.json": {"GND": ["Rule 3.1", "EC01"], "VCC": []}, "empty.json": {}}"#,
            "ignore.json",
        )
        .unwrap();
        assert!(table.is_suppressed("power.json", "GND", "EC01"));
        assert!(!table.is_suppressed("power.json", "VCC", "EC01"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn rejects_wrong_shape() {
        let err = SuppressionTable::from_json(r#"{"lib": ["Rule 1"]}"#, "ignore.json").unwrap_err();
        assert!(matches!(err, ReportError::Parse { ref path, .. } if path == "ignore.json"));
    }

    #[test]
    fn written_table_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ignore.json");
        let table: SuppressionTable = [("a.json", "R", "EC01"), ("a.json", "R", "Rule 3.1")]
            .into_iter()
            .collect();
        table.write(&path).unwrap();
        assert_eq!(SuppressionTable::load(&path).unwrap(), table);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = SuppressionTable::load(Path::new("/nonexistent/ignore.json")).unwrap_err();
        assert!(matches!(err, ReportError::Read { .. }));
    }
}
