//! Raw write-then-sort loading.

use super::{Positions, MAX_SIZE};
use crate::error::PositionsError;

/// Mutable access to a set's backing storage for loading values in
/// arbitrary order.
///
/// Values written here are not checked for order or uniqueness until
/// [`finish`](Self::finish) sorts them. Dropping the guard without calling
/// `finish` leaves whatever was written, unsorted.
#[derive(Debug)]
pub struct BulkLoad<'a> {
    set: &'a mut Positions,
}

impl<'a> BulkLoad<'a> {
    pub(super) fn new(set: &'a mut Positions) -> Self {
        Self { set }
    }

    /// The whole fixed-capacity backing array.
    pub fn slots_mut(&mut self) -> &mut [i32; MAX_SIZE] {
        &mut self.set.positions
    }

    /// Declare how many leading slots hold values.
    ///
    /// # Panics
    ///
    /// Panics if `size > MAX_SIZE`.
    pub fn set_size(&mut self, size: usize) {
        self.set.set_size(size);
    }

    /// Number of values declared so far.
    pub fn len(&self) -> usize {
        self.set.size
    }

    /// Whether nothing has been loaded.
    pub fn is_empty(&self) -> bool {
        self.set.size == 0
    }

    /// Append a value after those already loaded.
    pub fn push(&mut self, pos: i32) -> Result<(), PositionsError> {
        if self.set.size == MAX_SIZE {
            return Err(PositionsError::CapacityExceeded);
        }
        self.set.positions[self.set.size] = pos;
        self.set.size += 1;
        Ok(())
    }

    /// Sort the loaded values; `false` if any duplicates were loaded.
    pub fn finish(self) -> bool {
        self.set.sort()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_then_finish_sorts() {
        let mut set = Positions::new();
        let mut load = set.bulk_load();
        assert!(load.is_empty());
        for pos in [2, 7, 0] {
            load.push(pos).unwrap();
        }
        assert_eq!(load.len(), 3);
        assert!(load.finish());
        assert_eq!(set.as_slice(), &[7, 2, 0]);
    }

    #[test]
    fn push_past_capacity_fails() {
        let mut set = Positions::new();
        let mut load = set.bulk_load();
        load.set_size(MAX_SIZE);
        assert_eq!(load.push(0), Err(PositionsError::CapacityExceeded));
    }

    #[test]
    #[should_panic(expected = "exceeds capacity")]
    fn oversize_declaration_panics() {
        let mut set = Positions::new();
        set.bulk_load().set_size(MAX_SIZE + 1);
    }
}
