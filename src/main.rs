//! Command-line entry point.

use std::io::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use xcloc_lint::analyzer::aggregate;
use xcloc_lint::catalog::{
    CatalogError,
    lint_workspace,
};
use xcloc_lint::config::{
    ConfigError,
    SettingsOverrides,
    load_settings,
};
use xcloc_lint::report::{
    ReportFormat,
    render,
};

/// Finds untranslated entries in exported Xcode localization catalogs.
///
/// Settings are read from `.xcloc-lint.json` in ROOT when present; flags
/// override them.
#[derive(Parser, Debug)]
#[command(name = "xcloc-lint", version, about)]
struct Args {
    /// Directory searched for `.xcloc` bundles and `.xcstrings` files
    #[arg(value_name = "ROOT")]
    root: PathBuf,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Do not report XLIFF values identical to their key
    #[arg(long)]
    no_equal_to_key: bool,

    /// Language to check in string catalogs (repeatable)
    #[arg(long = "language", value_name = "LANG")]
    languages: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Errors that stop the run before or while reporting.
#[derive(Error, Debug)]
enum AppError {
    /// ROOT is missing or not a directory
    #[error("Root directory does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Settings file or flags are invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Catalog patterns are invalid
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// stdout or stderr could not be written
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// How the run ended, mapped to the process exit code.
#[derive(Debug, Clone, Copy)]
enum Outcome {
    /// No findings (exit 0)
    Clean,
    /// At least one finding was reported (exit 1)
    Findings,
    /// Settings, patterns or catalog files could not be used (exit 2)
    InputErrors,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Clean => Self::SUCCESS,
            Outcome::Findings => Self::from(1),
            Outcome::InputErrors => Self::from(2),
        }
    }
}

/// Install the stderr log subscriber.
fn init_tracing(verbose: bool) {
    // --verbose は RUST_LOG より優先
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Load settings, lint ROOT and print the report.
async fn run(args: Args) -> Result<Outcome, AppError> {
    if !args.root.is_dir() {
        return Err(AppError::RootNotFound(args.root));
    }

    let overrides = SettingsOverrides {
        report_format: args.format,
        disable_equal_to_key: args.no_equal_to_key,
        languages: args.languages,
    };
    let settings = load_settings(&args.root, overrides)?;

    let outcome = lint_workspace(&args.root, &settings).await?;
    let has_findings = !outcome.errors.is_empty();
    let groups = aggregate(outcome.errors.clone());

    let mut stdout = std::io::stdout().lock();
    for line in render(settings.report_format, &groups, &outcome.errors) {
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()?;

    if !outcome.failures.is_empty() {
        let mut stderr = std::io::stderr().lock();
        for failure in &outcome.failures {
            writeln!(stderr, "Error: {failure}")?;
        }
        return Ok(Outcome::InputErrors);
    }

    Ok(if has_findings { Outcome::Findings } else { Outcome::Clean })
}

/// Parse flags, run and exit with the outcome code.
#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            let _ = writeln!(std::io::stderr(), "Error: {e}");
            Outcome::InputErrors.into()
        }
    }
}
