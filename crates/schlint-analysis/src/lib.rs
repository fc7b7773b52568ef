//! schlint check engine.
//!
//! Subsystems:
//! - `library`: component model and library stores (decode / save)
//! - `diagnostics`: severity-tagged message buffers filled by rule checks
//! - `rules`: rule contract, registries, built-in rules
//! - `suppression`: ignore lists keyed by library, component, rule
//! - `report`: violation report aggregation and JSON export
//! - `presentation`: console rendering of progress and summaries
//! - `runner`: drives every rule over every component

pub mod diagnostics;
pub mod library;
pub mod presentation;
pub mod report;
pub mod rules;
pub mod runner;
pub mod suppression;

mod atomic;

pub use diagnostics::{Diagnostic, DiagnosticBuffer, Severity};
pub use library::{Component, Library, LibraryStore, Pin};
pub use presentation::{PresentationConfig, Presenter};
pub use report::ViolationReport;
pub use rules::{Rule, RuleDetail, RuleFactory, RuleRegistry};
pub use runner::{RuleRunner, RunOptions, RunOutcome, RunStats};
pub use suppression::SuppressionTable;
