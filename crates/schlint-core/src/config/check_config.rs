//! Top-level schlint configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::output_config::MAX_VERBOSITY;
use super::{OutputConfig, SuppressionConfig};
use crate::errors::ConfigError;

/// Name of the project config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "schlint.toml";

/// Rule selection and fix behavior, the `[check]` table.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    /// Run the extra-check registry after the standard rules. Default: false.
    pub extra: Option<bool>,
    /// Invoke `fix()` on every executed rule and save libraries. Default: false.
    pub fix: Option<bool>,
    /// Rule identifiers removed from both registries before a run.
    #[serde(default)]
    pub disabled_rules: Vec<String>,
}

impl RulesConfig {
    pub fn effective_extra(&self) -> bool {
        self.extra.unwrap_or(false)
    }

    pub fn effective_fix(&self) -> bool {
        self.fix.unwrap_or(false)
    }
}

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SCHLINT_*`)
/// 3. Project config (`schlint.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CheckConfig {
    pub check: RulesConfig,
    pub output: OutputConfig,
    pub suppression: SuppressionConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub verbosity: Option<u8>,
    pub silent: Option<bool>,
    pub color: Option<bool>,
    pub extra: Option<bool>,
    pub fix: Option<bool>,
    pub ignore_file: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub write_ignore: Option<PathBuf>,
}

impl CheckConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok());

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CheckConfig) -> Result<(), ConfigError> {
        if let Some(verbosity) = config.output.verbosity {
            if verbosity > MAX_VERBOSITY {
                return Err(ConfigError::ValidationFailed {
                    field: "output.verbosity".to_string(),
                    message: format!("must be between 0 and {MAX_VERBOSITY}"),
                });
            }
        }
        for (field, path) in [
            ("output.report", &config.output.report),
            ("output.write_ignore", &config.output.write_ignore),
        ] {
            if let Some(path) = path {
                if path.is_dir() {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: format!("{} is a directory", path.display()),
                    });
                }
            }
        }
        if config.check.disabled_rules.iter().any(|r| r.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "check.disabled_rules".to_string(),
                message: "rule identifiers must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut CheckConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CheckConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut CheckConfig, other: &CheckConfig) {
        if other.check.extra.is_some() {
            base.check.extra = other.check.extra;
        }
        if other.check.fix.is_some() {
            base.check.fix = other.check.fix;
        }
        if !other.check.disabled_rules.is_empty() {
            base.check.disabled_rules = other.check.disabled_rules.clone();
        }

        if other.output.verbosity.is_some() {
            base.output.verbosity = other.output.verbosity;
        }
        if other.output.silent.is_some() {
            base.output.silent = other.output.silent;
        }
        if other.output.color.is_some() {
            base.output.color = other.output.color;
        }
        if other.output.report.is_some() {
            base.output.report = other.output.report.clone();
        }
        if other.output.write_ignore.is_some() {
            base.output.write_ignore = other.output.write_ignore.clone();
        }

        if other.suppression.ignore_file.is_some() {
            base.suppression.ignore_file = other.suppression.ignore_file.clone();
        }
    }

    /// Apply environment variable overrides read through `lookup`.
    /// Pattern: `SCHLINT_VERBOSITY`, `SCHLINT_FIX`, etc. Unparsable values are ignored.
    fn apply_env_overrides(config: &mut CheckConfig, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("SCHLINT_VERBOSITY").and_then(|v| v.parse::<u8>().ok()) {
            config.output.verbosity = Some(v);
        }
        if let Some(v) = lookup("SCHLINT_SILENT").and_then(|v| v.parse::<bool>().ok()) {
            config.output.silent = Some(v);
        }
        if let Some(v) = lookup("SCHLINT_COLOR").and_then(|v| v.parse::<bool>().ok()) {
            config.output.color = Some(v);
        }
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.output.color = Some(false);
        }
        if let Some(v) = lookup("SCHLINT_EXTRA").and_then(|v| v.parse::<bool>().ok()) {
            config.check.extra = Some(v);
        }
        if let Some(v) = lookup("SCHLINT_FIX").and_then(|v| v.parse::<bool>().ok()) {
            config.check.fix = Some(v);
        }
        if let Some(v) = lookup("SCHLINT_IGNORE_FILE") {
            config.suppression.ignore_file = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("SCHLINT_REPORT") {
            config.output.report = Some(PathBuf::from(v));
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut CheckConfig, cli: &CliOverrides) {
        if let Some(v) = cli.verbosity {
            config.output.verbosity = Some(v);
        }
        if let Some(v) = cli.silent {
            config.output.silent = Some(v);
        }
        if let Some(v) = cli.color {
            config.output.color = Some(v);
        }
        if let Some(v) = cli.extra {
            config.check.extra = Some(v);
        }
        if let Some(v) = cli.fix {
            config.check.fix = Some(v);
        }
        if let Some(ref v) = cli.ignore_file {
            config.suppression.ignore_file = Some(v.clone());
        }
        if let Some(ref v) = cli.report {
            config.output.report = Some(v.clone());
        }
        if let Some(ref v) = cli.write_ignore {
            config.output.write_ignore = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
