//! I/O helpers for the registry binary.

pub mod config;
pub mod session;
