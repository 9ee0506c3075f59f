//! Control script for a token-sorting robot in a simulated arena.
//!
//! The robot drives to the nearest free token of one colour, grabs it, carries
//! it to a free token of the other colour and lets go, until it goes a whole
//! time budget without finding anything left to carry. A final sweep checks
//! that every carried token really ended up next to a partner.
//!
//! The simulator is reached only through the `Robot` and `Clock` traits from
//! `tokenbots_support`; see `script::run_and_report` for the entry point a
//! harness calls.

pub mod approach;
pub mod cycle;
pub mod error;
pub mod failure;
pub mod perception;
pub mod report;
pub mod script;
pub mod session;
pub mod task;

#[cfg(test)]
mod testing;

pub use error::Error;
pub use report::{Destination, RunResult};
pub use script::{run, run_and_report};
pub use session::Session;
