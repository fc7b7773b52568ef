use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use schlint_analysis::library::JsonLibraryStore;
use schlint_analysis::{
    PresentationConfig, Presenter, RuleRegistry, RuleRunner, RunOptions, SuppressionTable,
};
use schlint_core::{CheckConfig, SchlintErrorCode};

mod cli;

use cli::Cli;

fn coded<E: SchlintErrorCode + std::fmt::Display>(err: E) -> anyhow::Error {
    anyhow::anyhow!(err.coded_string())
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    schlint_core::tracing::init_tracing();

    let root = std::env::current_dir()?;
    let config = CheckConfig::load(&root, Some(&cli.overrides())).map_err(coded)?;
    tracing::debug!(?config, "configuration resolved");

    let runner = build_runner(&config.check.disabled_rules);

    let suppressions = match config.suppression.ignore_file {
        Some(ref path) => SuppressionTable::load(path).map_err(coded)?,
        None => SuppressionTable::empty(),
    };

    let stdout = std::io::stdout();
    let presentation = PresentationConfig {
        verbosity: config.output.effective_verbosity(),
        silent: config.output.effective_silent(),
        component_filter: cli.component.is_some(),
        color: config.output.effective_color() && stdout.is_terminal(),
    };
    let mut presenter = Presenter::new(presentation, stdout.lock());

    let options = RunOptions {
        component: cli.component.clone(),
        extra: config.check.effective_extra(),
        fix: config.check.effective_fix(),
    };
    let outcome = runner
        .run(
            &JsonLibraryStore::new(),
            &cli.libraries,
            &suppressions,
            &options,
            &mut presenter,
        )
        .map_err(coded)?;
    drop(presenter);

    if let Some(ref path) = config.output.report {
        outcome.report.write(path).map_err(coded)?;
    }
    if let Some(ref path) = config.output.write_ignore {
        outcome
            .report
            .to_suppression_table()
            .write(path)
            .map_err(coded)?;
        tracing::info!(path = %path.display(), "ignore list written");
    }

    for failure in &outcome.decode_failures {
        eprintln!("{}", failure.coded_string());
    }
    if outcome.is_complete() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Registries minus the disabled rules. Unknown identifiers are warned about.
fn build_runner(disabled: &[String]) -> RuleRunner {
    let mut standard = RuleRegistry::standard();
    let mut extra = RuleRegistry::extra();
    let mut removed = standard.disable(disabled);
    removed.extend(extra.disable(disabled));

    for id in disabled.iter().filter(|id| !removed.contains(id)) {
        tracing::warn!(rule = %id, "disabled rule does not exist");
    }
    RuleRunner::new(standard, extra)
}
