//! Diagnostic messages accumulated by rule checks.

use std::fmt;
use std::str::FromStr;

use schlint_core::errors::PresentationError;
use serde::{Deserialize, Serialize};

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Success,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Success => write!(f, "success"),
        }
    }
}

impl FromStr for Severity {
    type Err = PresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "success" => Ok(Self::Success),
            _ => Err(PresentationError::UnknownSeverity(s.to_string())),
        }
    }
}

/// A single message produced while evaluating a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub text: String,
    /// Minimum verbosity level at which the message is displayed.
    pub level: u8,
    pub severity: Severity,
}

/// Insertion-ordered diagnostic messages of one rule instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticBuffer {
    messages: Vec<Diagnostic>,
}

impl DiagnosticBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, severity: Severity, level: u8, text: impl Into<String>) {
        self.messages.push(Diagnostic {
            text: text.into(),
            level,
            severity,
        });
    }

    pub fn info(&mut self, level: u8, text: impl Into<String>) {
        self.push(Severity::Info, level, text);
    }

    pub fn warning(&mut self, level: u8, text: impl Into<String>) {
        self.push(Severity::Warning, level, text);
    }

    pub fn error(&mut self, level: u8, text: impl Into<String>) {
        self.push(Severity::Error, level, text);
    }

    pub fn success(&mut self, level: u8, text: impl Into<String>) {
        self.push(Severity::Success, level, text);
    }

    /// Push a message whose severity arrives as a string tag.
    ///
    /// An unknown tag is logged as a presentation error and the message is
    /// kept on the error channel with the problem spelled out, so it is never
    /// lost. The error is returned for callers that want to count it.
    pub fn push_tagged(
        &mut self,
        tag: &str,
        level: u8,
        text: impl Into<String>,
    ) -> Result<(), PresentationError> {
        let text = text.into();
        match tag.parse::<Severity>() {
            Ok(severity) => {
                self.push(severity, level, text);
                Ok(())
            }
            Err(err) => {
                tracing::error!(tag, message = %text, "{err}");
                self.push(Severity::Error, level, format!("{err}: {text}"));
                Err(err)
            }
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
