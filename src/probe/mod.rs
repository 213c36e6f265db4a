//! Probe internals: process execution and version extraction.
//!
//! - `run_probe`: spawns one external process and captures its merged output
//! - `extract`: pulls the first version-looking substring out of that output

mod executor;
mod extract;

pub use executor::{run_probe, ProbeResult};
pub use extract::extract;
