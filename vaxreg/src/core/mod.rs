//! Deterministic, pure logic for the vaccination registry.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod allocation;
pub mod batches;
pub mod date;
pub mod error;
pub mod growth;
pub mod ledger;
pub mod types;
pub mod validation;
