//! Configuration system for schlint.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod check_config;
pub mod output_config;
pub mod suppression_config;

pub use check_config::{CheckConfig, CliOverrides, RulesConfig};
pub use output_config::OutputConfig;
pub use suppression_config::SuppressionConfig;
