//! Administered-dose records.

use crate::core::date::Date;
use crate::core::error::{RegistryError, RegistryResult};
use crate::core::growth::reserve_slot;

/// One administered dose.
///
/// Holds the batch id by value; later changes to the batch do not touch it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inoculation {
    pub user: String,
    /// Vaccine name as given in the vaccination command.
    pub vaccine: String,
    pub batch_id: String,
    pub date: Date,
}

/// Selection for [`Ledger::delete_matching`].
///
/// `user` always applies; `date` and `batch_id` narrow it further when set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionFilter {
    pub user: String,
    pub date: Option<Date>,
    pub batch_id: Option<String>,
}

impl DeletionFilter {
    fn matches(&self, entry: &Inoculation) -> bool {
        entry.user == self.user
            && self.date.is_none_or(|date| entry.date == date)
            && self
                .batch_id
                .as_deref()
                .is_none_or(|batch_id| entry.batch_id == batch_id)
    }
}

/// Insertion-ordered inoculation records.
#[derive(Debug, Clone)]
pub struct Ledger {
    entries: Vec<Inoculation>,
    initial_capacity: usize,
}

impl Ledger {
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            initial_capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Ensure the next [`Ledger::record`] cannot fail for lack of space.
    pub fn reserve(&mut self) -> RegistryResult<()> {
        reserve_slot(&mut self.entries, self.initial_capacity)
    }

    pub fn record(&mut self, entry: Inoculation) -> RegistryResult<()> {
        self.reserve()?;
        self.entries.push(entry);
        Ok(())
    }

    /// True if `user` already got `vaccine` on `date` (exact names).
    pub fn has_vaccinated_on(&self, user: &str, vaccine: &str, date: &Date) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.user == user && entry.vaccine == vaccine && entry.date == *date)
    }

    /// A user is known once they have at least one record.
    pub fn knows_user(&self, user: &str) -> bool {
        self.entries.iter().any(|entry| entry.user == user)
    }

    /// All records by date, insertion order kept within a date.
    pub fn sorted(&self) -> Vec<&Inoculation> {
        let mut out: Vec<&Inoculation> = self.entries.iter().collect();
        out.sort_by_key(|entry| entry.date);
        out
    }

    /// Records of `user` by date.
    pub fn sorted_for_user(&self, user: &str) -> RegistryResult<Vec<&Inoculation>> {
        let out: Vec<&Inoculation> = self
            .sorted()
            .into_iter()
            .filter(|entry| entry.user == user)
            .collect();
        if out.is_empty() {
            return Err(RegistryError::NoSuchUser(user.to_string()));
        }
        Ok(out)
    }

    /// Remove every record selected by `filter`; returns how many went.
    pub fn delete_matching(&mut self, filter: &DeletionFilter) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !filter.matches(entry));
        before - self.entries.len()
    }
}
