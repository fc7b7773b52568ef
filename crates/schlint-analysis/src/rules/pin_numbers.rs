//! EC02: pin numbers are unique within a component.

use std::collections::BTreeMap;

use schlint_core::errors::RuleError;

use super::types::{DetailItem, Rule, RuleDetail, RuleFactory};
use crate::diagnostics::DiagnosticBuffer;
use crate::library::Component;

pub struct PinNumbersRule;

impl RuleFactory for PinNumbersRule {
    fn id(&self) -> &str {
        "EC02"
    }

    fn description(&self) -> &str {
        "Pin numbers must be unique within a component"
    }

    fn bind<'c>(&self, component: &'c mut Component) -> Box<dyn Rule + 'c> {
        Box::new(PinNumbersCheck {
            component,
            diagnostics: DiagnosticBuffer::new(),
            detail: RuleDetail::default(),
        })
    }
}

struct PinNumbersCheck<'c> {
    component: &'c Component,
    diagnostics: DiagnosticBuffer,
    detail: RuleDetail,
}

impl Rule for PinNumbersCheck<'_> {
    fn check(&mut self) -> Result<bool, RuleError> {
        self.diagnostics.clear();
        self.detail.clear();

        let mut by_number: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for pin in &self.component.pins {
            by_number
                .entry(pin.number.as_str())
                .or_default()
                .push(pin.name.as_str());
        }

        for (number, names) in by_number.iter().filter(|(_, names)| names.len() > 1) {
            self.diagnostics.warning(
                1,
                format!("pin number {number} used {} times", names.len()),
            );
            for name in names {
                self.detail.push(DetailItem::new("pin", *name).with_key(*number));
            }
        }
        Ok(!self.detail.is_empty())
    }

    fn diagnostics(&self) -> &DiagnosticBuffer {
        &self.diagnostics
    }

    fn detail(&self) -> Option<&RuleDetail> {
        Some(&self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{Pin, PinOrientation};

    fn pin(name: &str, number: &str) -> Pin {
        Pin {
            name: name.to_string(),
            number: number.to_string(),
            posx: 0,
            posy: 0,
            length: 100,
            orientation: PinOrientation::Up,
            extra: Default::default(),
        }
    }

    #[test]
    fn unique_numbers_pass() {
        let mut component = Component::new("Q")
            .with_pin(pin("B", "1"))
            .with_pin(pin("C", "2"))
            .with_pin(pin("E", "3"));
        assert!(!PinNumbersRule.bind(&mut component).check().unwrap());
    }

    #[test]
    fn duplicates_are_listed() {
        let mut component = Component::new("Q")
            .with_pin(pin("B", "1"))
            .with_pin(pin("C", "2"))
            .with_pin(pin("E", "1"));
        let mut rule = PinNumbersRule.bind(&mut component);
        assert!(rule.check().unwrap());
        let described: Vec<_> = rule.detail().unwrap().items.iter().map(|i| i.describe()).collect();
        assert_eq!(described, vec!["pin: B (1)", "pin: E (1)"]);
        assert_eq!(rule.diagnostics().len(), 1);
    }

    #[test]
    fn default_fix_leaves_component_untouched() {
        let mut component = Component::new("Q")
            .with_pin(pin("B", "1"))
            .with_pin(pin("E", "1"));
        let before = component.clone();
        PinNumbersRule.bind(&mut component).fix().unwrap();
        assert_eq!(component, before);
    }
}
