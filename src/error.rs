//! Fatal error types.
//!
//! Per-name probe failures are never errors; they classify into outcomes
//! and fold into the tally. The only condition that aborts a session is a
//! list file that exists but cannot be read.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolverError {
    #[error("failed to read {path}: {source}")]
    RcFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ToolverError>;
