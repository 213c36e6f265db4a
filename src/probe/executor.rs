//! Probe execution: one external process per request, fully awaited.

use crate::outcome::STATUS_NOT_FOUND;
use crate::strategy::ProbeStrategy;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Raw result of one probe: merged output text and the process exit status.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    /// Captured stdout followed by captured stderr. Many tools emit their
    /// version banner to stderr, so both streams matter.
    pub output: String,
    pub status: i32,
}

impl ProbeResult {
    fn not_found() -> Self {
        Self { output: String::new(), status: STATUS_NOT_FOUND }
    }
}

/// Run one version probe for a canonical command.
///
/// Never returns an error: a missing binary and a failed spawn are both
/// meaningful outcomes, reported through the `127` status. A nonzero exit
/// from the probed tool is likewise data, not a failure. One process is
/// spawned per call, with no retries and no timeout.
pub async fn run_probe(command: &str, strategy: &ProbeStrategy) -> ProbeResult {
    let program = strategy.run.unwrap_or(command);

    // Resolve on PATH first so a missing tool never costs a spawn attempt.
    if which::which(program).is_err() {
        debug!(command, program, "not found on PATH");
        return ProbeResult::not_found();
    }

    let mut cmd = Command::new(program);
    cmd.arg(strategy.arg)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for var in strategy.scrub_env {
        cmd.env_remove(var);
    }

    let output = match cmd.output().await {
        Ok(output) => output,
        Err(e) => {
            // Spawn failure is indistinguishable from "not installed" as far
            // as the caller is concerned: the tool cannot be confirmed.
            debug!(command, program, error = %e, "spawn failed");
            return ProbeResult::not_found();
        }
    };

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    // A signal-killed child has no exit code; presence alone still counts,
    // so any generic nonzero status does.
    let raw = output.status.code().unwrap_or(1);
    let status = match strategy.remap_status {
        Some(remap) => remap(raw),
        None => raw,
    };

    debug!(command, program, arg = strategy.arg, raw, status, "probe complete");
    ProbeResult { output: text, status }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::DEFAULT_STRATEGY;

    #[tokio::test]
    async fn test_missing_binary_reports_not_found() {
        let result = run_probe("definitely-not-a-real-binary-xyz123", &DEFAULT_STRATEGY).await;
        assert_eq!(result.status, STATUS_NOT_FOUND);
        assert!(result.output.is_empty());
    }

    #[tokio::test]
    async fn test_probe_captures_merged_output() {
        // sh is present on any unix system; `sh --version` either prints a
        // banner (status 0) or complains on stderr (nonzero status). Both
        // paths must surface text or a meaningful status, never an error.
        let result = run_probe("sh", &DEFAULT_STRATEGY).await;
        assert_ne!(result.status, STATUS_NOT_FOUND);
        assert!(result.status == 0 || !result.output.is_empty());
    }

    #[tokio::test]
    async fn test_run_override_probes_alternate_binary() {
        let strategy = ProbeStrategy {
            run: Some("definitely-not-a-real-binary-xyz123"),
            ..DEFAULT_STRATEGY
        };
        // The canonical name exists but the override does not; the override
        // is what gets probed.
        let result = run_probe("sh", &strategy).await;
        assert_eq!(result.status, STATUS_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_status_remap_applies() {
        fn always_zero(_: i32) -> i32 {
            0
        }
        let strategy = ProbeStrategy { remap_status: Some(always_zero), ..DEFAULT_STRATEGY };
        let result = run_probe("sh", &strategy).await;
        assert_eq!(result.status, 0);
    }
}
