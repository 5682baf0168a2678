//! The registry context: current date plus both record collections.

use tracing::debug;

use crate::core::allocation;
use crate::core::batches::{Batch, BatchStore};
use crate::core::date::{Date, ParseDateError};
use crate::core::error::{RegistryError, RegistryResult};
use crate::core::ledger::{Inoculation, Ledger};
use crate::core::types::{Limits, NewBatch};
use crate::core::validation::{validate_deletion, validate_new_batch};

/// Date the registry starts on when nothing else is configured.
pub const DEFAULT_START_DATE: Date = Date::new(1, 1, 2025);

/// All registry state for one session.
#[derive(Debug, Clone)]
pub struct System {
    today: Date,
    limits: Limits,
    batches: BatchStore,
    ledger: Ledger,
}

impl Default for System {
    fn default() -> Self {
        Self::new(DEFAULT_START_DATE, Limits::default())
    }
}

impl System {
    pub fn new(today: Date, limits: Limits) -> Self {
        Self {
            today,
            limits,
            batches: BatchStore::new(limits.initial_capacity),
            ledger: Ledger::new(limits.initial_capacity),
        }
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn batches(&self) -> &BatchStore {
        &self.batches
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Register a new batch; returns its id.
    pub fn add_batch(&mut self, request: &NewBatch) -> RegistryResult<String> {
        let batch = validate_new_batch(request, &self.batches, &self.today, &self.limits)?;
        let added = self.batches.insert(batch)?;
        debug!(batch = %added.id, vaccine = %added.vaccine, doses = added.doses, "batch added");
        Ok(added.id.clone())
    }

    /// Batches in listing order, or per requested vaccine in query order.
    ///
    /// A requested vaccine with no batches yields one `NoSuchVaccine` item at
    /// its position.
    pub fn list_batches(&self, vaccines: &[String]) -> Vec<RegistryResult<&Batch>> {
        if vaccines.is_empty() {
            return self.batches.sorted().into_iter().map(Ok).collect();
        }

        let mut out = Vec::new();
        for vaccine in vaccines {
            let found = self.batches.sorted_by_vaccine(vaccine);
            if found.is_empty() {
                out.push(Err(RegistryError::NoSuchVaccine(vaccine.clone())));
            } else {
                out.extend(found.into_iter().map(Ok));
            }
        }
        out
    }

    /// Administer one dose; returns the batch it came from.
    pub fn vaccinate(&mut self, user: &str, vaccine: &str) -> RegistryResult<String> {
        let batch_id =
            allocation::vaccinate(&mut self.batches, &mut self.ledger, user, vaccine, &self.today)?;
        debug!(user, vaccine, batch = %batch_id, "dose administered");
        Ok(batch_id)
    }

    /// Remove or disable a batch; returns its application count.
    pub fn remove_batch(&mut self, batch_id: &str) -> RegistryResult<u32> {
        let removal = self.batches.remove(batch_id)?;
        debug!(batch = batch_id, ?removal, "batch removed");
        Ok(removal.applications())
    }

    /// Inoculations by date, optionally for one user.
    pub fn list_inoculations(&self, user: Option<&str>) -> RegistryResult<Vec<&Inoculation>> {
        match user {
            None => Ok(self.ledger.sorted()),
            Some(user) => self.ledger.sorted_for_user(user),
        }
    }

    /// Replace the current date. Only calendar validity is checked.
    pub fn set_today(&mut self, date: Date) -> RegistryResult<Date> {
        if !date.is_valid_calendar_date() {
            return Err(RegistryError::InvalidDate);
        }
        debug!(from = %self.today, to = %date, "date changed");
        self.today = date;
        Ok(date)
    }

    /// Delete a user's inoculations, optionally narrowed by date and batch.
    pub fn delete_inoculations(
        &mut self,
        user: &str,
        date: Option<&Result<Date, ParseDateError>>,
        batch_id: Option<&str>,
    ) -> RegistryResult<usize> {
        let filter = validate_deletion(
            user,
            date,
            batch_id,
            &self.batches,
            &self.ledger,
            &self.today,
        )?;
        let removed = self.ledger.delete_matching(&filter);
        debug!(user, removed, "inoculations deleted");
        Ok(removed)
    }
}
