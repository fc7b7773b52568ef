use std::path::PathBuf;

use clap::{ArgAction, Parser};
use schlint_core::config::output_config::MAX_VERBOSITY;
use schlint_core::CliOverrides;

#[derive(Parser, Debug)]
#[command(
    name = "schlint",
    version,
    about = "Check schematic symbol libraries against the library conventions"
)]
pub struct Cli {
    #[arg(required = true, value_name = "LIBRARY", help = "Library files to check")]
    pub libraries: Vec<String>,

    #[arg(short, long, help = "Check only the component with this name")]
    pub component: Option<String>,

    #[arg(long, help = "Fix violations and save the libraries")]
    pub fix: bool,

    #[arg(long, help = "Disable colored output")]
    pub nocolor: bool,

    #[arg(short, long, help = "Also run the extra checks")]
    pub extra: bool,

    #[arg(short, long, help = "Only print components with violations")]
    pub silent: bool,

    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Show rule descriptions (-v), offending records (-vv), all diagnostics (-vvv)"
    )]
    pub verbose: u8,

    #[arg(long, value_name = "IGNORE_FILE", help = "JSON ignore list of rules per component")]
    pub exclude: Option<PathBuf>,

    #[arg(long, value_name = "REPORT", help = "Write the violation report as JSON")]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        value_name = "IGNORE_FILE",
        help = "Write the run's violations as an ignore list"
    )]
    pub write_ignore: Option<PathBuf>,
}

impl Cli {
    /// Flags that were given override config; absent flags leave it alone.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            verbosity: (self.verbose > 0).then(|| self.verbose.min(MAX_VERBOSITY)),
            silent: self.silent.then_some(true),
            color: self.nocolor.then_some(false),
            extra: self.extra.then_some(true),
            fix: self.fix.then_some(true),
            ignore_file: self.exclude.clone(),
            report: self.output.clone(),
            write_ignore: self.write_ignore.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_verbose_counts_and_caps() {
        let cli = Cli::parse_from(["schlint", "-vvvvv", "a.json"]);
        assert_eq!(cli.verbose, 5);
        assert_eq!(cli.overrides().verbosity, Some(MAX_VERBOSITY));
    }

    #[test]
    fn absent_flags_do_not_override() {
        let overrides = Cli::parse_from(["schlint", "a.json", "b.json"]).overrides();
        assert_eq!(overrides.verbosity, None);
        assert_eq!(overrides.fix, None);
        assert_eq!(overrides.color, None);
        assert_eq!(overrides.ignore_file, None);
    }

    #[test]
    fn all_flags_parse() {
        let cli = Cli::parse_from([
            "schlint",
            "-c",
            "LM358",
            "--fix",
            "--nocolor",
            "-e",
            "-s",
            "--exclude",
            "ignore.json",
            "--output",
            "report.json",
            "lib.json",
        ]);
        assert_eq!(cli.component.as_deref(), Some("LM358"));
        assert_eq!(cli.libraries, vec!["lib.json".to_string()]);
        let overrides = cli.overrides();
        assert_eq!(overrides.color, Some(false));
        assert_eq!(overrides.extra, Some(true));
        assert_eq!(overrides.silent, Some(true));
        assert_eq!(overrides.report, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn requires_a_library() {
        assert!(Cli::try_parse_from(["schlint"]).is_err());
    }
}
