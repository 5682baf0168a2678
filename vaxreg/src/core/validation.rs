//! Precondition checks run before any store is mutated.
//!
//! Each check returns the first violated rule. Rule order decides which
//! single error is reported when several apply.

use crate::core::batches::{Batch, BatchStore};
use crate::core::date::{Date, ParseDateError};
use crate::core::error::{RegistryError, RegistryResult};
use crate::core::ledger::{DeletionFilter, Ledger};
use crate::core::types::{Limits, NewBatch};

/// Validate an add-batch request and build the batch to insert.
///
/// Rules, in order:
/// 1. store not full
/// 2. expiry calendar-valid and not before `today`
/// 3. batch id not already registered
/// 4. vaccine name non-empty, no whitespace, within length
/// 5. batch id non-empty, uppercase hex, within length
/// 6. at least one dose
pub fn validate_new_batch(
    request: &NewBatch,
    store: &BatchStore,
    today: &Date,
    limits: &Limits,
) -> RegistryResult<Batch> {
    if store.len() >= limits.max_batches {
        return Err(RegistryError::TooManyBatches);
    }

    let expiry = match request.expiry {
        Some(expiry) if expiry.is_valid_calendar_date() && expiry >= *today => expiry,
        _ => return Err(RegistryError::InvalidDate),
    };

    if store.contains(&request.batch_id) {
        return Err(RegistryError::DuplicateBatch);
    }

    if !is_valid_vaccine_name(&request.vaccine, limits.max_vaccine_name_len) {
        return Err(RegistryError::InvalidName);
    }

    if !is_valid_batch_id(&request.batch_id, limits.max_batch_id_len) {
        return Err(RegistryError::InvalidBatch);
    }

    let doses = request
        .doses
        .filter(|doses| *doses >= 1)
        .and_then(|doses| u32::try_from(doses).ok())
        .ok_or(RegistryError::InvalidQuantity)?;

    Ok(Batch::new(
        request.batch_id.clone(),
        request.vaccine.clone(),
        expiry,
        doses,
    ))
}

/// Validate a delete-inoculations request and build its filter.
///
/// Rules, in order: the user has records; the date filter (if any) parsed and
/// is not after `today`; the batch filter (if any) names a stored batch.
pub fn validate_deletion(
    user: &str,
    date: Option<&Result<Date, ParseDateError>>,
    batch_id: Option<&str>,
    store: &BatchStore,
    ledger: &Ledger,
    today: &Date,
) -> RegistryResult<DeletionFilter> {
    if !ledger.knows_user(user) {
        return Err(RegistryError::NoSuchUser(user.to_string()));
    }

    let date = match date {
        None => None,
        Some(Ok(date)) if !date.is_future(today) => Some(*date),
        Some(_) => return Err(RegistryError::InvalidDate),
    };

    if let Some(batch_id) = batch_id {
        if !store.contains(batch_id) {
            return Err(RegistryError::NoSuchBatch(batch_id.to_string()));
        }
    }

    Ok(DeletionFilter {
        user: user.to_string(),
        date,
        batch_id: batch_id.map(str::to_string),
    })
}

fn is_valid_vaccine_name(name: &str, max_len: usize) -> bool {
    !name.is_empty() && !name.chars().any(char::is_whitespace) && name.chars().count() <= max_len
}

/// Length and charset failures are one rule.
fn is_valid_batch_id(id: &str, max_len: usize) -> bool {
    !id.is_empty()
        && id.len() <= max_len
        && id.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F'))
}
