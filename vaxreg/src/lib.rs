//! Command-driven record manager for a vaccination program.
//!
//! Registers vaccine batches, records inoculations against them, and answers
//! queries about stock, history, and the current date. The architecture
//! enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (dates, validation, batch and
//!   inoculation stores, dose allocation). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config file, line session).
//!
//! Orchestration modules ([`system`], [`command`], [`dispatch`], [`messages`])
//! turn input lines into core operations and core results into output lines.

pub mod command;
pub mod core;
pub mod dispatch;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod messages;
pub mod system;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
