//! Rule 3.2: pin lengths are multiples of 50 mil between 100 and 300 mil.

use schlint_core::errors::RuleError;

use super::pin_grid::snap;
use super::types::{DetailItem, Rule, RuleDetail, RuleFactory};
use crate::diagnostics::DiagnosticBuffer;
use crate::library::{Component, Pin};

pub const MIN_PIN_LENGTH: i64 = 100;
pub const MAX_PIN_LENGTH: i64 = 300;
pub const PIN_LENGTH_STEP: i64 = 50;

pub struct PinLengthRule;

impl RuleFactory for PinLengthRule {
    fn id(&self) -> &str {
        "Rule 3.2"
    }

    fn description(&self) -> &str {
        "Pin length must be a multiple of 50mil, at least 100mil and at most 300mil"
    }

    fn bind<'c>(&self, component: &'c mut Component) -> Box<dyn Rule + 'c> {
        Box::new(PinLengthCheck {
            component,
            diagnostics: DiagnosticBuffer::new(),
            detail: RuleDetail::default(),
        })
    }
}

struct PinLengthCheck<'c> {
    component: &'c mut Component,
    diagnostics: DiagnosticBuffer,
    detail: RuleDetail,
}

fn bad_length(pin: &Pin) -> bool {
    !(MIN_PIN_LENGTH..=MAX_PIN_LENGTH).contains(&pin.length)
        || pin.length.rem_euclid(PIN_LENGTH_STEP) != 0
}

impl Rule for PinLengthCheck<'_> {
    fn check(&mut self) -> Result<bool, RuleError> {
        self.diagnostics.clear();
        self.detail.clear();

        for pin in self.component.pins.iter().filter(|p| bad_length(p)) {
            self.diagnostics.error(
                3,
                format!("pin {} ({}) has length {}mil", pin.name, pin.number, pin.length),
            );
            self.detail.push(
                DetailItem::new("pin", &pin.name)
                    .with_key(&pin.number)
                    .with_attribute("length", pin.length),
            );
        }
        Ok(!self.detail.is_empty())
    }

    fn fix(&mut self) -> Result<(), RuleError> {
        for pin in self.component.pins.iter_mut().filter(|p| bad_length(p)) {
            let length = snap(pin.length, PIN_LENGTH_STEP).clamp(MIN_PIN_LENGTH, MAX_PIN_LENGTH);
            self.diagnostics.success(
                1,
                format!(
                    "pin {} ({}) length {} -> {}mil",
                    pin.name, pin.number, pin.length, length
                ),
            );
            pin.length = length;
        }
        Ok(())
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
    use crate::library::PinOrientation;

    fn component_with_lengths(lengths: &[i64]) -> Component {
        lengths.iter().enumerate().fold(Component::new("J1"), |c, (i, &length)| {
            c.with_pin(Pin {
                name: "~".to_string(),
                number: (i + 1).to_string(),
                posx: 0,
                posy: i as i64 * 100,
                length,
                orientation: PinOrientation::Left,
                extra: Default::default(),
            })
        })
    }

    #[test]
    fn accepts_standard_lengths() {
        let mut component = component_with_lengths(&[100, 150, 200, 300]);
        assert!(!PinLengthRule.bind(&mut component).check().unwrap());
    }

    #[test]
    fn flags_short_long_and_off_step_lengths() {
        let mut component = component_with_lengths(&[50, 125, 400, 200]);
        let mut rule = PinLengthRule.bind(&mut component);
        assert!(rule.check().unwrap());
        let numbers: Vec<_> = rule
            .detail()
            .unwrap()
            .items
            .iter()
            .map(|i| i.key.clone().unwrap())
            .collect();
        assert_eq!(numbers, vec!["1", "2", "3"]);
        assert!(rule.diagnostics().iter().all(|d| d.level == 3));
        assert_eq!(
            rule.detail().unwrap().items[1].describe(),
            "pin: ~ (2), length 125"
        );
    }

    #[test]
    fn fix_brings_lengths_into_range() {
        let mut component = component_with_lengths(&[50, 130, 400, 200]);
        PinLengthRule.bind(&mut component).fix().unwrap();
        let lengths: Vec<_> = component.pins.iter().map(|p| p.length).collect();
        assert_eq!(lengths, vec![100, 150, 300, 200]);
        assert!(!PinLengthRule.bind(&mut component).check().unwrap());
    }
}
