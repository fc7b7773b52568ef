//! Rule runner. Drives every applicable rule over every component of every
//! library. Libraries run in the order given and components in decoded
//! order; rules run in registration order, standard before extra.

use std::io::Write;

use schlint_core::errors::{DecodeError, RunError};
use schlint_core::{component_span, library_span, rule_span};

use crate::library::{Component, LibraryStore};
use crate::presentation::Presenter;
use crate::report::ViolationReport;
use crate::rules::{RuleFactory, RuleRegistry};
use crate::suppression::SuppressionTable;

/// Per-run switches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Only check the component with this exact name.
    pub component: Option<String>,
    /// Also run the extra-check registry.
    pub extra: bool,
    /// Invoke `fix()` on every executed rule and save each library.
    pub fix: bool,
}

/// Counters collected during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub libraries_checked: usize,
    pub components_checked: usize,
    pub rules_executed: usize,
    pub rules_suppressed: usize,
    pub fixes_invoked: usize,
    pub libraries_saved: usize,
}

/// Everything a completed run produced.
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub report: ViolationReport,
    /// Libraries that could not be decoded and were skipped.
    pub decode_failures: Vec<DecodeError>,
    pub stats: RunStats,
}

impl RunOutcome {
    /// True when every requested library was decoded.
    pub fn is_complete(&self) -> bool {
        self.decode_failures.is_empty()
    }
}

/// Executes the standard and extra rule registries.
#[derive(Debug)]
pub struct RuleRunner {
    standard: RuleRegistry,
    extra: RuleRegistry,
}

impl Default for RuleRunner {
    fn default() -> Self {
        Self::new(RuleRegistry::standard(), RuleRegistry::extra())
    }
}

/// State threaded through one library's components.
struct LibraryPass<'a, W: Write> {
    library_id: &'a str,
    suppressions: &'a SuppressionTable,
    options: &'a RunOptions,
    presenter: &'a mut Presenter<W>,
    outcome: &'a mut RunOutcome,
}

impl RuleRunner {
    pub fn new(standard: RuleRegistry, extra: RuleRegistry) -> Self {
        Self { standard, extra }
    }

    /// Check `libraries` in order.
    ///
    /// A library that fails to decode is skipped entirely and listed in
    /// `RunOutcome::decode_failures`; the remaining libraries still run.
    /// Rule defects, save failures and output failures abort the run.
    pub fn run<S, W>(
        &self,
        store: &S,
        libraries: &[String],
        suppressions: &SuppressionTable,
        options: &RunOptions,
        presenter: &mut Presenter<W>,
    ) -> Result<RunOutcome, RunError>
    where
        S: LibraryStore + ?Sized,
        W: Write,
    {
        let mut outcome = RunOutcome::default();

        for library_id in libraries {
            let _span = library_span!(library_id).entered();

            let mut library = match store.decode(library_id) {
                Ok(library) => library,
                Err(err) => {
                    tracing::debug!(error = %err, "skipping library");
                    presenter.decode_failure(library_id, &err)?;
                    outcome.decode_failures.push(err);
                    continue;
                }
            };
            outcome.stats.libraries_checked += 1;
            presenter.library_header(library_id)?;
            outcome.report.begin_library(library_id);

            let mut pass = LibraryPass {
                library_id,
                suppressions,
                options,
                presenter: &mut *presenter,
                outcome: &mut outcome,
            };
            for component in library.components.iter_mut() {
                if options
                    .component
                    .as_deref()
                    .is_some_and(|wanted| wanted != component.name)
                {
                    continue;
                }
                self.check_component(&mut pass, component)?;
            }

            if options.fix {
                store.save(&library)?;
                outcome.stats.libraries_saved += 1;
                tracing::info!("library saved");
            }
        }

        presenter.flush()?;
        let stats = &outcome.stats;
        tracing::info!(
            libraries_checked = stats.libraries_checked,
            components_checked = stats.components_checked,
            rules_executed = stats.rules_executed,
            rules_suppressed = stats.rules_suppressed,
            fixes_invoked = stats.fixes_invoked,
            decode_failures = outcome.decode_failures.len(),
            "run finished"
        );
        Ok(outcome)
    }

    fn check_component<W: Write>(
        &self,
        pass: &mut LibraryPass<'_, W>,
        component: &mut Component,
    ) -> Result<(), RunError> {
        let _span = component_span!(component.name).entered();
        let name = component.name.clone();

        pass.outcome.stats.components_checked += 1;
        pass.outcome.report.begin_component(pass.library_id, &name);
        pass.presenter.component_header(&name)?;

        let extra = pass.options.extra.then_some(&self.extra);
        for rule in self.standard.iter().chain(extra.into_iter().flat_map(|r| r.iter())) {
            Self::apply_rule(pass, rule, &name, component)?;
        }

        let violations = pass
            .outcome
            .report
            .violations(pass.library_id, &name)
            .map(<[String]>::to_vec)
            .unwrap_or_default();
        pass.presenter
            .component_summary(pass.library_id, &name, &violations)?;
        Ok(())
    }

    fn apply_rule<W: Write>(
        pass: &mut LibraryPass<'_, W>,
        rule: &dyn RuleFactory,
        name: &str,
        component: &mut Component,
    ) -> Result<(), RunError> {
        let _span = rule_span!(rule.id()).entered();

        if pass.suppressions.is_suppressed(pass.library_id, name, rule.id()) {
            tracing::debug!("suppressed");
            pass.outcome.stats.rules_suppressed += 1;
            return Ok(());
        }

        let mut instance = rule.bind(component);
        let violated = instance.check()?;
        pass.outcome.stats.rules_executed += 1;

        if violated {
            tracing::debug!("violated");
            pass.outcome.report.record(pass.library_id, name, rule.id());
            pass.presenter
                .violation(rule.id(), rule.description(), instance.detail())?;
        }
        pass.presenter.diagnostics(instance.diagnostics().iter())?;

        if pass.options.fix {
            let shown = instance.diagnostics().len();
            instance.fix()?;
            pass.outcome.stats.fixes_invoked += 1;
            pass.presenter
                .diagnostics(instance.diagnostics().iter().skip(shown))?;
        }
        Ok(())
    }
}
