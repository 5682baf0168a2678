//! Shared types for the registry core.
//!
//! These types carry no I/O and are shared between validation, the stores,
//! and configuration.

use serde::{Deserialize, Serialize};

use crate::core::date::Date;

/// Size limits enforced when registering batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of batches held at once (live or disabled).
    pub max_batches: usize,
    /// Maximum length of a batch identifier.
    pub max_batch_id_len: usize,
    /// Maximum length of a vaccine name.
    pub max_vaccine_name_len: usize,
    /// Slots allocated the first time a collection grows.
    pub initial_capacity: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_batches: 1000,
            max_batch_id_len: 20,
            max_vaccine_name_len: 50,
            initial_capacity: 10,
        }
    }
}

/// Unvalidated input for the add-batch command.
///
/// `expiry` and `doses` are `None` when the token was missing or malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBatch {
    pub batch_id: String,
    pub expiry: Option<Date>,
    pub doses: Option<i64>,
    pub vaccine: String,
}
