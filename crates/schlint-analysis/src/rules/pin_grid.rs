//! Rule 3.1: pins sit on the 100 mil grid.

use schlint_core::errors::RuleError;

use super::types::{DetailItem, Rule, RuleDetail, RuleFactory};
use crate::diagnostics::DiagnosticBuffer;
use crate::library::{Component, Pin};

/// Grid pitch in mils.
pub const PIN_GRID: i64 = 100;

pub struct PinGridRule;

impl RuleFactory for PinGridRule {
    fn id(&self) -> &str {
        "Rule 3.1"
    }

    fn description(&self) -> &str {
        "Using a 100mil grid, pin ends and origin must lie on grid nodes (IEC-60617)"
    }

    fn bind<'c>(&self, component: &'c mut Component) -> Box<dyn Rule + 'c> {
        Box::new(PinGridCheck {
            component,
            diagnostics: DiagnosticBuffer::new(),
            detail: RuleDetail::default(),
        })
    }
}

struct PinGridCheck<'c> {
    component: &'c mut Component,
    diagnostics: DiagnosticBuffer,
    detail: RuleDetail,
}

fn off_grid(pin: &Pin) -> bool {
    pin.posx.rem_euclid(PIN_GRID) != 0 || pin.posy.rem_euclid(PIN_GRID) != 0
}

/// Nearest multiple of `step`, halves rounding up.
pub(crate) fn snap(value: i64, step: i64) -> i64 {
    let rem = value.rem_euclid(step);
    if rem * 2 >= step {
        value - rem + step
    } else {
        value - rem
    }
}

impl Rule for PinGridCheck<'_> {
    fn check(&mut self) -> Result<bool, RuleError> {
        self.diagnostics.clear();
        self.detail.clear();

        for pin in self.component.pins.iter().filter(|p| off_grid(p)) {
            self.diagnostics.error(
                3,
                format!(
                    "pin {} ({}) at ({}, {}) is off the {PIN_GRID}mil grid",
                    pin.name, pin.number, pin.posx, pin.posy
                ),
            );
            self.detail.push(
                DetailItem::new("pin", &pin.name)
                    .with_key(&pin.number)
                    .with_attribute("posx", pin.posx)
                    .with_attribute("posy", pin.posy),
            );
        }

        if !self.detail.is_empty() {
            self.diagnostics
                .warning(1, format!("{} pin(s) off grid", self.detail.len()));
        }
        Ok(!self.detail.is_empty())
    }

    fn fix(&mut self) -> Result<(), RuleError> {
        for pin in self.component.pins.iter_mut().filter(|p| off_grid(p)) {
            pin.posx = snap(pin.posx, PIN_GRID);
            pin.posy = snap(pin.posy, PIN_GRID);
            self.diagnostics.success(
                1,
                format!("pin {} ({}) moved to ({}, {})", pin.name, pin.number, pin.posx, pin.posy),
            );
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

    fn pin(number: &str, posx: i64, posy: i64) -> Pin {
        Pin {
            name: format!("P{number}"),
            number: number.to_string(),
            posx,
            posy,
            length: 100,
            orientation: PinOrientation::Right,
            extra: Default::default(),
        }
    }

    #[test]
    fn snap_rounds_to_nearest_node() {
        assert_eq!(snap(149, 100), 100);
        assert_eq!(snap(150, 100), 200);
        assert_eq!(snap(-150, 100), -100);
        assert_eq!(snap(-151, 100), -200);
        assert_eq!(snap(300, 100), 300);
    }

    #[test]
    fn flags_off_grid_pins_with_detail() {
        let mut component = Component::new("U1")
            .with_pin(pin("1", 0, 100))
            .with_pin(pin("2", 50, 100))
            .with_pin(pin("3", -200, 25));
        let mut rule = PinGridRule.bind(&mut component);

        assert!(rule.check().unwrap());
        let detail = rule.detail().unwrap();
        assert_eq!(detail.len(), 2);
        assert_eq!(detail.items[0].describe(), "pin: P2 (2), posx 50, posy 100");
        assert_eq!(detail.items[1].key.as_deref(), Some("3"));
    }

    #[test]
    fn per_pin_errors_sit_above_detail_verbosity() {
        let mut component = Component::new("U1").with_pin(pin("1", 50, 100));
        let mut rule = PinGridRule.bind(&mut component);
        rule.check().unwrap();
        let levels: Vec<_> = rule
            .diagnostics()
            .iter()
            .filter(|d| d.severity == crate::diagnostics::Severity::Error)
            .map(|d| d.level)
            .collect();
        assert_eq!(levels, vec![3]);
    }

    #[test]
    fn check_is_idempotent() {
        let mut component = Component::new("U1").with_pin(pin("1", 10, 10));
        let mut rule = PinGridRule.bind(&mut component);
        let first = rule.check().unwrap();
        let first_messages = rule.diagnostics().clone();
        assert_eq!(rule.check().unwrap(), first);
        assert_eq!(rule.diagnostics(), &first_messages);
    }

    #[test]
    fn fix_snaps_pins_and_fresh_check_passes() {
        let mut component = Component::new("U1")
            .with_pin(pin("1", 50, 120))
            .with_pin(pin("2", 0, 0));
        {
            let mut rule = PinGridRule.bind(&mut component);
            assert!(rule.check().unwrap());
            rule.fix().unwrap();
        }
        assert_eq!((component.pins[0].posx, component.pins[0].posy), (100, 100));
        assert_eq!((component.pins[1].posx, component.pins[1].posy), (0, 0));

        let mut fresh = PinGridRule.bind(&mut component);
        assert!(!fresh.check().unwrap());
    }

    #[test]
    fn fix_on_compliant_component_is_a_no_op() {
        let mut component = Component::new("U1").with_pin(pin("1", 100, -300));
        let before = component.clone();
        PinGridRule.bind(&mut component).fix().unwrap();
        assert_eq!(component, before);
    }
}
