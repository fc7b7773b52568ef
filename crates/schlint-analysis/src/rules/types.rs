//! Core types for the rules engine.

use schlint_core::errors::RuleError;
use serde::{Deserialize, Serialize};

use crate::diagnostics::DiagnosticBuffer;
use crate::library::Component;

/// A rule instance bound to exactly one component for its lifetime.
///
/// `check` must be idempotent: calling it twice without a `fix` in between
/// returns the same answer. `fix` may be called whether or not `check` ran
/// or reported a violation; when there is nothing to fix it must leave the
/// component untouched.
pub trait Rule {
    /// Evaluate the bound component. Returns `true` when it violates the rule.
    fn check(&mut self) -> Result<bool, RuleError>;

    /// Mutate the bound component so it satisfies the rule. Never persists.
    fn fix(&mut self) -> Result<(), RuleError> {
        Ok(())
    }

    /// Messages gathered by the last `check` / `fix`.
    fn diagnostics(&self) -> &DiagnosticBuffer;

    /// Offending sub-records found by the last `check`, if the rule has any.
    fn detail(&self) -> Option<&RuleDetail> {
        None
    }
}

/// Stateless rule descriptor: identity plus a constructor binding a fresh
/// instance to a component.
pub trait RuleFactory: Send + Sync {
    /// Stable identifier, e.g. "Rule 3.1". Used in reports and ignore lists.
    fn id(&self) -> &str;

    fn description(&self) -> &str;

    fn bind<'c>(&self, component: &'c mut Component) -> Box<dyn Rule + 'c>;
}

/// One offending sub-record of a component (a pin, a field, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailItem {
    /// What kind of record this is, e.g. "pin".
    pub kind: String,
    pub name: String,
    /// Secondary identifier, e.g. the pin number.
    pub key: Option<String>,
    /// Attribute name/value pairs relevant to the violation, in display order.
    pub attributes: Vec<(String, String)>,
}

impl DetailItem {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            key: None,
            attributes: Vec::new(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.push((name.into(), value.to_string()));
        self
    }

    /// Single-line rendering: `pin: OUT (1), posx 10, posy 20`.
    pub fn describe(&self) -> String {
        let mut out = format!("{}: {}", self.kind, self.name);
        if let Some(ref key) = self.key {
            out.push_str(&format!(" ({key})"));
        }
        for (name, value) in &self.attributes {
            out.push_str(&format!(", {name} {value}"));
        }
        out
    }
}

/// Typed detail payload a rule exposes next to its verdict.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDetail {
    pub items: Vec<DetailItem>,
}

impl RuleDetail {
    pub fn push(&mut self, item: DetailItem) {
        self.items.push(item);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
