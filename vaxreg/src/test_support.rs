//! Test-only helpers for constructing registry records.

use crate::core::batches::{Batch, BatchStore};
use crate::core::date::Date;
use crate::core::ledger::Inoculation;
use crate::core::types::NewBatch;

pub fn date(day: i32, month: i32, year: i32) -> Date {
    Date::new(day, month, year)
}

/// Create an unused batch with deterministic defaults.
pub fn batch(id: &str, vaccine: &str, expiry: Date, doses: u32) -> Batch {
    Batch::new(id, vaccine, expiry, doses)
}

/// Create a store holding `batches` in the given order (no validation).
pub fn store_with(batches: Vec<Batch>) -> BatchStore {
    let mut store = BatchStore::new(2);
    for batch in batches {
        store.insert(batch).expect("insert batch");
    }
    store
}

pub fn inoculation(user: &str, vaccine: &str, batch_id: &str, date: Date) -> Inoculation {
    Inoculation {
        user: user.to_string(),
        vaccine: vaccine.to_string(),
        batch_id: batch_id.to_string(),
        date,
    }
}

/// Create an add-batch request as the parser would produce it.
pub fn new_batch(id: &str, expiry: Option<Date>, doses: Option<i64>, vaccine: &str) -> NewBatch {
    NewBatch {
        batch_id: id.to_string(),
        expiry,
        doses,
        vaccine: vaccine.to_string(),
    }
}
