//! Error handling for schlint.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod decode_error;
pub mod error_code;
pub mod persistence_error;
pub mod presentation_error;
pub mod report_error;
pub mod rule_error;
pub mod run_error;

pub use config_error::ConfigError;
pub use decode_error::DecodeError;
pub use error_code::SchlintErrorCode;
pub use persistence_error::PersistenceError;
pub use presentation_error::PresentationError;
pub use report_error::ReportError;
pub use rule_error::RuleError;
pub use run_error::RunError;
