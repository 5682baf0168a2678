//! Dose allocation for the vaccination command.

use crate::core::batches::BatchStore;
use crate::core::date::Date;
use crate::core::error::{RegistryError, RegistryResult};
use crate::core::ledger::{Inoculation, Ledger};

/// Give `user` one dose of `vaccine` on `today`.
///
/// Returns the id of the batch the dose came from. Rejections leave both
/// stores unchanged: ledger space is reserved before the batch is touched, so
/// the dose decrement and the ledger entry happen together or not at all.
pub fn vaccinate(
    batches: &mut BatchStore,
    ledger: &mut Ledger,
    user: &str,
    vaccine: &str,
    today: &Date,
) -> RegistryResult<String> {
    if ledger.has_vaccinated_on(user, vaccine, today) {
        return Err(RegistryError::AlreadyVaccinated);
    }

    let batch_id = batches
        .find_dispensable(vaccine)
        .map(|batch| batch.id.clone())
        .ok_or(RegistryError::NoStock)?;

    ledger.reserve()?;
    batches.dispense(&batch_id)?;
    ledger.record(Inoculation {
        user: user.to_string(),
        vaccine: vaccine.to_string(),
        batch_id: batch_id.clone(),
        date: *today,
    })?;
    Ok(batch_id)
}
