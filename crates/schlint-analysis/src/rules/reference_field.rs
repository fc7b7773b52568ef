//! EC01: the reference designator is set and starts with a letter.

use schlint_core::errors::RuleError;

use super::types::{DetailItem, Rule, RuleDetail, RuleFactory};
use crate::diagnostics::DiagnosticBuffer;
use crate::library::Component;

pub struct ReferenceFieldRule;

impl RuleFactory for ReferenceFieldRule {
    fn id(&self) -> &str {
        "EC01"
    }

    fn description(&self) -> &str {
        "Reference designator must be set and start with a letter"
    }

    fn bind<'c>(&self, component: &'c mut Component) -> Box<dyn Rule + 'c> {
        Box::new(ReferenceFieldCheck {
            component,
            diagnostics: DiagnosticBuffer::new(),
            detail: RuleDetail::default(),
        })
    }
}

struct ReferenceFieldCheck<'c> {
    component: &'c mut Component,
    diagnostics: DiagnosticBuffer,
    detail: RuleDetail,
}

fn valid_reference(reference: &str) -> bool {
    reference
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && !reference.chars().any(char::is_whitespace)
}

impl Rule for ReferenceFieldCheck<'_> {
    fn check(&mut self) -> Result<bool, RuleError> {
        self.diagnostics.clear();
        self.detail.clear();

        let reference = &self.component.reference;
        if valid_reference(reference) {
            return Ok(false);
        }
        if reference.is_empty() {
            self.diagnostics.error(1, "reference designator is empty");
        } else {
            self.diagnostics
                .error(1, format!("reference designator '{reference}' is malformed"));
        }
        self.detail.push(
            DetailItem::new("field", "Reference").with_attribute("value", format!("'{reference}'")),
        );
        Ok(true)
    }

    /// Strips surrounding whitespace. An empty or non-alphabetic reference
    /// cannot be derived and is left for manual repair.
    fn fix(&mut self) -> Result<(), RuleError> {
        let trimmed = self.component.reference.trim();
        if trimmed.len() != self.component.reference.len() {
            self.component.reference = trimmed.to_string();
            self.diagnostics.success(1, "reference designator trimmed");
        }
        if !valid_reference(&self.component.reference) {
            self.diagnostics
                .warning(0, "reference designator needs a manual fix");
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
