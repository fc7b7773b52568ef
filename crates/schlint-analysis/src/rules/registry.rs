//! Statically declared, ordered rule registries.

use super::pin_grid::PinGridRule;
use super::pin_length::PinLengthRule;
use super::pin_numbers::PinNumbersRule;
use super::reference_field::ReferenceFieldRule;
use super::types::RuleFactory;

/// Ordered collection of rule descriptors. Iteration order is registration
/// order, which is the execution order of a run.
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<Box<dyn RuleFactory>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard rule set.
    pub fn standard() -> Self {
        Self::new().with(PinGridRule).with(PinLengthRule)
    }

    /// The opt-in extra checks.
    pub fn extra() -> Self {
        Self::new().with(ReferenceFieldRule).with(PinNumbersRule)
    }

    pub fn with(mut self, rule: impl RuleFactory + 'static) -> Self {
        self.register(Box::new(rule));
        self
    }

    pub fn register(&mut self, rule: Box<dyn RuleFactory>) {
        self.rules.push(rule);
    }

    /// Remove the rules whose identifiers are in `ids`.
    /// Returns the identifiers that were removed.
    pub fn disable<S: AsRef<str>>(&mut self, ids: &[S]) -> Vec<String> {
        let mut removed = Vec::new();
        self.rules.retain(|rule| {
            let hit = ids.iter().any(|id| id.as_ref() == rule.id());
            if hit {
                removed.push(rule.id().to_string());
            }
            !hit
        });
        removed
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rules.iter().any(|r| r.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(dyn RuleFactory + 'static)> {
        self.rules.iter().map(|r| r.as_ref())
    }

    pub fn ids(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.ids())
            .finish()
    }
}
