//! # toolver
//!
//! Answers, for a list of tool names, whether each tool is installed and
//! what version it reports. Used interactively and in scripts (CI gates on
//! the exit code: `0` when everything is present, otherwise the failure
//! count clamped to 126).
//!
//! The detection pipeline per requested name:
//!
//! 1. resolve user-facing aliases to the canonical command (`golang` -> `go`)
//! 2. look up the command's probing strategy (which flag to pass, plus any
//!    bespoke extraction or status recipe)
//! 3. run the probe, capturing stdout and stderr merged
//! 4. extract the first version-looking substring from the output
//! 5. classify the result into one of four outcomes and update the tally
//!
//! Probes run strictly one at a time, in input order.
//!
//! ## Example
//!
//! ```rust,no_run
//! use toolver::{render, Session};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let mut session = Session::new(false);
//!     for name in ["git", "golang", "nodejs"] {
//!         let report = session.check(name).await;
//!         println!("{}", render(&report));
//!     }
//!     std::process::exit(session.tally().exit_code() as i32);
//! }
//! ```

mod error;
mod outcome;
mod probe;
mod resolve;
mod session;
mod strategy;

pub use error::{Result, ToolverError};
pub use outcome::{classify, Outcome, Tally};
pub use probe::{extract, run_probe, ProbeResult};
pub use resolve::resolve;
pub use session::{read_rc_file, render, Report, Session, RC_FILE};
pub use strategy::{lookup, Extraction, ProbeStrategy};
