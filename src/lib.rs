//! Pocket calculator (pocketcalc)
//!
//! Immediate-evaluation calculator engine with a keyboard-driven front end.
//!
//! Pure core (`model`, `format`, `state`, `integration`) is synchronous and
//! free of I/O. The impure shell (`config`, `logging`, `source`, the binary)
//! talks to files, the environment and the terminal.

pub mod config;
pub mod format;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;

// Re-export main loop integration
pub mod integration;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
