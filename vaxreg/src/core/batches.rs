//! Vaccine batch storage and dose accounting.

use std::cmp::Ordering;

use crate::core::date::Date;
use crate::core::error::{RegistryError, RegistryResult};
use crate::core::growth::reserve_slot;

/// A registered lot of a vaccine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub vaccine: String,
    pub id: String,
    pub expiry: Date,
    /// Doses still available. Zeroed when a used batch is removed.
    pub doses: u32,
    /// Doses administered from this batch.
    pub applications: u32,
}

impl Batch {
    pub fn new(id: impl Into<String>, vaccine: impl Into<String>, expiry: Date, doses: u32) -> Self {
        Self {
            vaccine: vaccine.into(),
            id: id.into(),
            expiry,
            doses,
            applications: 0,
        }
    }
}

/// Listing and allocation order: expiry ascending, then id ascending.
pub fn batch_order(a: &Batch, b: &Batch) -> Ordering {
    a.expiry.cmp(&b.expiry).then_with(|| a.id.cmp(&b.id))
}

/// Outcome of a removal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// Batch had never been used and was deleted.
    Deleted,
    /// Batch had applications; its doses were zeroed and it stays listed.
    Disabled { applications: u32 },
}

impl Removal {
    /// Count reported back to the operator.
    pub fn applications(&self) -> u32 {
        match self {
            Removal::Deleted => 0,
            Removal::Disabled { applications } => *applications,
        }
    }
}

/// Insertion-ordered batch collection.
#[derive(Debug, Clone)]
pub struct BatchStore {
    batches: Vec<Batch>,
    initial_capacity: usize,
}

impl BatchStore {
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            batches: Vec::new(),
            initial_capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.batches.capacity()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&Batch> {
        self.batches.iter().find(|batch| batch.id == id)
    }

    /// Append an already validated batch.
    pub fn insert(&mut self, batch: Batch) -> RegistryResult<&Batch> {
        reserve_slot(&mut self.batches, self.initial_capacity)?;
        self.batches.push(batch);
        let last = self.batches.len() - 1;
        Ok(&self.batches[last])
    }

    /// All batches in listing order.
    pub fn sorted(&self) -> Vec<&Batch> {
        let mut out: Vec<&Batch> = self.batches.iter().collect();
        out.sort_by(|a, b| batch_order(a, b));
        out
    }

    /// Batches of exactly `vaccine` (case-sensitive), in listing order.
    pub fn sorted_by_vaccine(&self, vaccine: &str) -> Vec<&Batch> {
        let mut out: Vec<&Batch> = self
            .batches
            .iter()
            .filter(|batch| batch.vaccine == vaccine)
            .collect();
        out.sort_by(|a, b| batch_order(a, b));
        out
    }

    /// Delete an unused batch, or zero the doses of a used one.
    pub fn remove(&mut self, id: &str) -> RegistryResult<Removal> {
        let idx = self
            .batches
            .iter()
            .position(|batch| batch.id == id)
            .ok_or_else(|| RegistryError::NoSuchBatch(id.to_string()))?;

        if self.batches[idx].applications == 0 {
            self.batches.remove(idx);
            return Ok(Removal::Deleted);
        }
        let batch = &mut self.batches[idx];
        batch.doses = 0;
        Ok(Removal::Disabled {
            applications: batch.applications,
        })
    }

    /// Batch that the next dose of `vaccine` should come from.
    ///
    /// Matches the vaccine name ignoring ASCII case, requires at least one
    /// dose, and prefers the earliest expiry (then smallest id). Expiry is
    /// not compared against the current date.
    pub fn find_dispensable(&self, vaccine: &str) -> Option<&Batch> {
        self.batches
            .iter()
            .filter(|batch| batch.doses > 0 && batch.vaccine.eq_ignore_ascii_case(vaccine))
            .min_by(|a, b| batch_order(a, b))
    }

    /// Take one dose from batch `id`.
    pub fn dispense(&mut self, id: &str) -> RegistryResult<&Batch> {
        let batch = self
            .batches
            .iter_mut()
            .find(|batch| batch.id == id)
            .ok_or_else(|| RegistryError::NoSuchBatch(id.to_string()))?;
        if batch.doses == 0 {
            return Err(RegistryError::NoStock);
        }
        batch.doses -= 1;
        batch.applications += 1;
        Ok(&*batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{batch, date, store_with};

    fn ids(batches: &[&Batch]) -> Vec<String> {
        batches.iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn sorted_orders_by_expiry_then_id() {
        let store = store_with(vec![
            batch("B2", "VacX", date(1, 6, 2025), 3),
            batch("A1", "VacY", date(1, 3, 2025), 3),
            batch("B1", "VacX", date(1, 6, 2025), 3),
        ]);
        assert_eq!(ids(&store.sorted()), vec!["A1", "B1", "B2"]);
    }

    #[test]
    fn sorted_by_vaccine_is_exact_match() {
        let store = store_with(vec![
            batch("A1", "VacX", date(1, 3, 2025), 3),
            batch("A2", "vacx", date(1, 2, 2025), 3),
        ]);
        assert_eq!(ids(&store.sorted_by_vaccine("VacX")), vec!["A1"]);
        assert!(store.sorted_by_vaccine("Other").is_empty());
    }

    #[test]
    fn remove_unused_batch_deletes_it() {
        let mut store = store_with(vec![
            batch("A1", "VacX", date(1, 3, 2025), 3),
            batch("A2", "VacX", date(1, 4, 2025), 3),
        ]);
        assert_eq!(store.remove("A1"), Ok(Removal::Deleted));
        assert!(!store.contains("A1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_used_batch_zeroes_doses() {
        let mut store = store_with(vec![batch("A1", "VacX", date(1, 3, 2025), 3)]);
        store.dispense("A1").expect("dispense");
        let removal = store.remove("A1").expect("remove");
        assert_eq!(removal, Removal::Disabled { applications: 1 });
        assert_eq!(removal.applications(), 1);
        let kept = store.get("A1").expect("kept");
        assert_eq!((kept.doses, kept.applications), (0, 1));
    }

    #[test]
    fn remove_unknown_batch_reports_name() {
        let mut store = store_with(Vec::new());
        assert_eq!(
            store.remove("FF"),
            Err(RegistryError::NoSuchBatch("FF".to_string()))
        );
    }

    #[test]
    fn find_dispensable_prefers_earliest_expiry() {
        let store = store_with(vec![
            batch("A1", "VacX", date(1, 6, 2025), 3),
            batch("A2", "VacX", date(1, 3, 2025), 3),
        ]);
        assert_eq!(store.find_dispensable("VacX").map(|b| b.id.as_str()), Some("A2"));
    }

    #[test]
    fn find_dispensable_breaks_ties_by_smaller_id() {
        let store = store_with(vec![
            batch("B0", "VacX", date(1, 6, 2025), 3),
            batch("A9", "VacX", date(1, 6, 2025), 3),
        ]);
        assert_eq!(store.find_dispensable("VacX").map(|b| b.id.as_str()), Some("A9"));
    }

    #[test]
    fn find_dispensable_ignores_case_and_skips_empty_batches() {
        let mut store = store_with(vec![
            batch("A1", "VacX", date(1, 3, 2025), 1),
            batch("A2", "VacX", date(1, 6, 2025), 1),
        ]);
        store.dispense("A1").expect("dispense");
        assert_eq!(store.find_dispensable("VACX").map(|b| b.id.as_str()), Some("A2"));
        store.dispense("A2").expect("dispense");
        assert!(store.find_dispensable("vacx").is_none());
    }

    #[test]
    fn dispense_never_goes_below_zero() {
        let mut store = store_with(vec![batch("A1", "VacX", date(1, 3, 2025), 2)]);
        store.dispense("A1").expect("first");
        store.dispense("A1").expect("second");
        assert_eq!(store.dispense("A1"), Err(RegistryError::NoStock));
        let batch = store.get("A1").expect("batch");
        assert_eq!((batch.doses, batch.applications), (0, 2));
    }

    #[test]
    fn insert_grows_past_initial_capacity() {
        let mut store = BatchStore::new(2);
        for n in 0..5u32 {
            store
                .insert(batch(&format!("{n:X}"), "VacX", date(1, 1, 2026), 1))
                .expect("insert");
        }
        assert_eq!(store.len(), 5);
        assert!(store.capacity() >= 5);
        assert_eq!(ids(&store.sorted()), vec!["0", "1", "2", "3", "4"]);
    }
}
