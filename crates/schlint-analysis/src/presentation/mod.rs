//! Presentation layer: live progress while checking, then a per-component
//! violation summary.
//!
//! Phase one (progress) prints headers, violation lines, descriptions,
//! details, and diagnostics as rules run; silent mode drops all of it.
//! Phase two (summary) runs at the end of each component: a short
//! "no violations" note (silenced like progress), or the component header
//! again followed by every violated rule, which is never silenced.

pub mod console;

use std::fmt::Display;
use std::io::{self, Write};

use console::{styled, wrap, Channel, DESCRIPTION_WIDTH};

use crate::diagnostics::Diagnostic;
use crate::rules::RuleDetail;

/// Verbosity at which rule descriptions are shown.
pub const DESCRIPTION_VERBOSITY: u8 = 1;
/// Verbosity at which rule detail payloads are shown.
pub const DETAIL_VERBOSITY: u8 = 2;

/// Output settings for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentationConfig {
    pub verbosity: u8,
    pub silent: bool,
    /// Whether the run is restricted to a single component.
    pub component_filter: bool,
    pub color: bool,
}

impl PresentationConfig {
    /// Filtering to one component implies at least verbosity 1.
    pub fn effective_verbosity(&self) -> u8 {
        if self.component_filter {
            self.verbosity.max(1)
        } else {
            self.verbosity
        }
    }

    /// Render a diagnostic, or `None` when it must not be shown.
    pub fn render_diagnostic(&self, diagnostic: &Diagnostic) -> Option<String> {
        if self.silent || diagnostic.level > self.effective_verbosity() {
            return None;
        }
        Some(styled(
            Channel::for_severity(diagnostic.severity),
            4,
            &diagnostic.text,
            self.color,
        ))
    }
}

/// Writes progress and summaries to an output stream.
pub struct Presenter<W: Write> {
    config: PresentationConfig,
    out: W,
}

impl<W: Write> Presenter<W> {
    pub fn new(config: PresentationConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, channel: Channel, indent: usize, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", styled(channel, indent, text, self.config.color))
    }

    fn progress(&mut self, channel: Channel, indent: usize, text: &str) -> io::Result<()> {
        if self.config.silent {
            return Ok(());
        }
        self.line(channel, indent, text)
    }

    pub fn library_header(&mut self, library_id: &str) -> io::Result<()> {
        self.progress(Channel::Heading, 0, &format!("library: {library_id}"))
    }

    /// A library that could not be decoded. Shown even in silent mode.
    pub fn decode_failure(&mut self, library_id: &str, error: &dyn Display) -> io::Result<()> {
        self.line(
            Channel::Alarming,
            0,
            &format!("library: {library_id} skipped: {error}"),
        )
    }

    pub fn component_header(&mut self, component: &str) -> io::Result<()> {
        self.progress(Channel::Progress, 0, &format!("checking component: {component}"))
    }

    /// Live report of one violated rule.
    pub fn violation(
        &mut self,
        rule_id: &str,
        description: &str,
        detail: Option<&RuleDetail>,
    ) -> io::Result<()> {
        self.progress(Channel::Cautionary, 2, &format!("Violating {rule_id}"))?;

        let verbosity = self.config.effective_verbosity();
        if verbosity >= DESCRIPTION_VERBOSITY {
            for chunk in wrap(description, DESCRIPTION_WIDTH) {
                self.progress(Channel::Neutral, 4, &chunk)?;
            }
        }
        if verbosity >= DETAIL_VERBOSITY {
            if let Some(detail) = detail {
                for item in &detail.items {
                    self.progress(Channel::Alarming, 4, &item.describe())?;
                }
            }
        }
        Ok(())
    }

    pub fn diagnostics<'d>(
        &mut self,
        diagnostics: impl IntoIterator<Item = &'d Diagnostic>,
    ) -> io::Result<()> {
        for diagnostic in diagnostics {
            if let Some(rendered) = self.config.render_diagnostic(diagnostic) {
                writeln!(self.out, "{rendered}")?;
            }
        }
        Ok(())
    }

    /// End-of-component summary.
    pub fn component_summary(
        &mut self,
        library_id: &str,
        component: &str,
        violations: &[String],
    ) -> io::Result<()> {
        if violations.is_empty() {
            return self.progress(Channel::Affirming, 2, "No violations found");
        }
        self.line(
            Channel::Progress,
            0,
            &format!("component: {component} (library: {library_id})"),
        )?;
        for rule_id in violations {
            self.line(Channel::Cautionary, 2, &format!("Violating {rule_id}"))?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
