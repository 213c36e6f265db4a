//! Session runner: drives the per-name detection pipeline and the tally.

use crate::error::{Result, ToolverError};
use crate::outcome::{classify, Outcome, Tally, STATUS_NOT_UNDERSTOOD};
use crate::probe::{extract, run_probe, ProbeResult};
use crate::resolve::resolve;
use crate::strategy::{lookup, Extraction, DEFAULT_STRATEGY};
use colored::Colorize;
use std::path::Path;
use tracing::debug;

/// Name of the optional list file read from the working directory.
pub const RC_FILE: &str = ".toolverrc";

/// One processed request: the canonical name and its classified outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub canonical: String,
    pub outcome: Outcome,
}

/// Drives detection for one invocation.
///
/// Requests are processed strictly in order, one probe fully awaited before
/// the next begins. The tally is owned here and read once at the end for
/// the exit code.
///
/// # Example
///
/// ```rust,no_run
/// use toolver::Session;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let mut session = Session::new(false);
///     let report = session.check("golang").await;
///     println!("{}: {:?}", report.canonical, report.outcome);
///     std::process::exit(session.tally().exit_code() as i32);
/// }
/// ```
#[derive(Debug, Default)]
pub struct Session {
    allow_unsafe: bool,
    tally: Tally,
}

impl Session {
    /// Create a session. `allow_unsafe` enables best-effort `--version`
    /// probing of commands absent from the strategy table.
    pub fn new(allow_unsafe: bool) -> Self {
        Self { allow_unsafe, tally: Tally::default() }
    }

    /// Process one requested name: resolve, look up, probe, classify.
    ///
    /// Never fails; every failure mode is an [`Outcome`] folded into the
    /// tally. Unlisted names with unsafe mode off become `NotUnderstood`
    /// without spawning anything.
    pub async fn check(&mut self, raw_name: &str) -> Report {
        let canonical = resolve(raw_name);
        debug!(raw = raw_name, %canonical, "checking");

        let (result, extraction) = match lookup(&canonical) {
            Some(strategy) => (run_probe(&canonical, strategy).await, strategy.extraction),
            None if self.allow_unsafe => (
                run_probe(&canonical, &DEFAULT_STRATEGY).await,
                DEFAULT_STRATEGY.extraction,
            ),
            None => (
                ProbeResult { output: String::new(), status: STATUS_NOT_UNDERSTOOD },
                Extraction::default(),
            ),
        };
        let version = extract(&result.output, &extraction);
        let outcome = classify(result.status, &version);
        self.tally.record(&outcome);

        Report { canonical, outcome }
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }
}

/// Format one report as the line printed to stdout.
pub fn render(report: &Report) -> String {
    match &report.outcome {
        Outcome::FoundWithVersion(version) if !version.is_empty() => {
            format!("{} {} {}", "✓".green(), report.canonical.bold(), version.cyan())
        }
        Outcome::FoundWithVersion(_) | Outcome::FoundNoVersion => {
            format!("{} {}", "✓".green(), report.canonical.bold())
        }
        Outcome::NotInstalled => {
            format!("{} {}", "✗".red(), report.canonical.bold())
        }
        Outcome::NotUnderstood => {
            format!(
                "{} {} {}",
                "✗".red(),
                report.canonical.bold(),
                "(not understood)".dimmed()
            )
        }
    }
}

/// Read requested names from the list file in `dir`, if present.
///
/// Blank lines and lines whose first non-whitespace character is `#` are
/// skipped. A missing file yields no names; a file that exists but cannot
/// be read is the one fatal startup condition.
pub fn read_rc_file(dir: &Path) -> Result<Vec<String>> {
    let path = dir.join(RC_FILE);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|source| ToolverError::RcFileRead { path: path.clone(), source })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
