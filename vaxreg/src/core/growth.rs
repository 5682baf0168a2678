//! Geometric growth for the record collections.

use crate::core::error::{RegistryError, RegistryResult};

/// Make room for one more element.
///
/// Capacity starts at `initial_capacity` and doubles whenever it would be
/// exceeded. Existing elements keep their order. Allocation failure maps to
/// [`RegistryError::OutOfMemory`] and leaves `items` untouched.
pub fn reserve_slot<T>(items: &mut Vec<T>, initial_capacity: usize) -> RegistryResult<()> {
    if items.len() < items.capacity() {
        return Ok(());
    }
    let target = if items.capacity() == 0 {
        initial_capacity.max(1)
    } else {
        items
            .capacity()
            .checked_mul(2)
            .ok_or(RegistryError::OutOfMemory)?
    };
    items
        .try_reserve_exact(target - items.len())
        .map_err(|_| RegistryError::OutOfMemory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_growth_uses_initial_capacity() {
        let mut items: Vec<u8> = Vec::new();
        reserve_slot(&mut items, 10).expect("reserve");
        assert!(items.capacity() >= 10);
    }

    #[test]
    fn full_collection_at_least_doubles() {
        let mut items: Vec<u8> = Vec::with_capacity(4);
        while items.len() < items.capacity() {
            items.push(items.len() as u8);
        }
        let before = items.clone();
        reserve_slot(&mut items, 10).expect("reserve");
        assert!(items.capacity() >= before.len() * 2);
        assert_eq!(items, before);
    }

    #[test]
    fn spare_capacity_is_left_alone() {
        let mut items: Vec<u8> = Vec::with_capacity(8);
        items.push(1);
        let before = items.capacity();
        reserve_slot(&mut items, 10).expect("reserve");
        assert_eq!(items.capacity(), before);
    }
}
