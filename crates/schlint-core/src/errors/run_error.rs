//! Fatal run errors.

use super::error_code::{self, SchlintErrorCode};
use super::{PersistenceError, RuleError};

/// Errors that abort a check run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Rule defect: {0}")]
    Rule(#[from] RuleError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl SchlintErrorCode for RunError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Persistence(e) => e.error_code(),
            Self::Rule(e) => e.error_code(),
            Self::Output(_) => error_code::OUTPUT_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_error_delegates_error_code() {
        let err: RunError = PersistenceError::Write {
            library: "power.json".to_string(),
            message: "read-only".to_string(),
        }
        .into();
        assert_eq!(err.error_code(), "PERSISTENCE_ERROR");

        let err: RunError = RuleError::Check {
            rule: "Rule 3.1".to_string(),
            component: "R".to_string(),
            message: "boom".to_string(),
        }
        .into();
        assert_eq!(err.error_code(), "RULE_DEFECT");

        let err: RunError = std::io::Error::from(std::io::ErrorKind::BrokenPipe).into();
        assert_eq!(err.error_code(), "OUTPUT_ERROR");
    }
}
