//! Core types shared by the schlint crates: errors, configuration, tracing.

pub mod config;
pub mod errors;
pub mod tracing;

pub use config::{CheckConfig, CliOverrides};
pub use errors::SchlintErrorCode;
