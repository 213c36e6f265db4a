//! Probe outcome classification and the session tally.

/// Sentinel status for a request with no strategy and unsafe mode off.
/// No process is spawned for such a request.
pub const STATUS_NOT_UNDERSTOOD: i32 = -1;

/// Shell convention for "command not found". The executor also folds spawn
/// failures into this status, since both mean the tool cannot be confirmed.
pub const STATUS_NOT_FOUND: i32 = 127;

/// SIGPIPE-derived exit status. Kept in the success arm as a compatibility
/// shim; our capture pipeline never truncates, so it should not occur.
const STATUS_SIGPIPE: i32 = 141;

/// Result of probing one requested name.
///
/// The four outcomes are terminal; there is no retry state. `FoundNoVersion`
/// still counts as success: presence is the signal of value, the version is
/// best-effort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No strategy registered and unsafe mode disabled.
    NotUnderstood,

    /// The binary does not exist on the search path.
    NotInstalled,

    /// The probe exited cleanly; carries the extracted version, which may
    /// be empty when the output held no recognizable version.
    FoundWithVersion(String),

    /// The command exists but the probe exited with an unexpected status.
    FoundNoVersion,
}

impl Outcome {
    /// Whether this outcome counts toward the OK side of the tally.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::FoundWithVersion(_) | Self::FoundNoVersion)
    }
}

/// Map a raw probe status and extracted version onto an [`Outcome`].
///
/// Bespoke strategies that invert their tool's exit convention remap the
/// raw status before it reaches this function, so the state space here is
/// uniform across all commands.
pub fn classify(status: i32, version: &str) -> Outcome {
    match status {
        STATUS_NOT_UNDERSTOOD => Outcome::NotUnderstood,
        STATUS_NOT_FOUND => Outcome::NotInstalled,
        0 | STATUS_SIGPIPE => Outcome::FoundWithVersion(version.to_string()),
        _ => Outcome::FoundNoVersion,
    }
}

/// Running success/failure counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub ok: u32,
    pub ko: u32,
}

impl Tally {
    /// Fold one classified outcome into the counters.
    pub fn record(&mut self, outcome: &Outcome) {
        if outcome.is_ok() {
            self.ok += 1;
        } else {
            self.ko += 1;
        }
    }

    /// Final process exit code: the failure count, clamped to 126 so it
    /// never collides with the shell's reserved codes.
    pub fn exit_code(&self) -> u8 {
        self.ko.min(126) as u8
    }
}
