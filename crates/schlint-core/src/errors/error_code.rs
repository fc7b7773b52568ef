//! SchlintErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a stable code string
/// alongside its human message.
pub trait SchlintErrorCode {
    /// Returns the error code string (e.g., "DECODE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const DECODE_ERROR: &str = "DECODE_ERROR";
pub const PERSISTENCE_ERROR: &str = "PERSISTENCE_ERROR";
pub const RULE_DEFECT: &str = "RULE_DEFECT";
pub const PRESENTATION_ERROR: &str = "PRESENTATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
