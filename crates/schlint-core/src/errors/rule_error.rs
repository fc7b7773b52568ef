//! Rule defects.

use super::error_code::{self, SchlintErrorCode};

/// A rule failed while checking or fixing a component.
///
/// Rules are trusted contracts: the runner never recovers from these.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("{rule} failed to check '{component}': {message}")]
    Check {
        rule: String,
        component: String,
        message: String,
    },

    #[error("{rule} failed to fix '{component}': {message}")]
    Fix {
        rule: String,
        component: String,
        message: String,
    },
}

impl SchlintErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        error_code::RULE_DEFECT
    }
}
