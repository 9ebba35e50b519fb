//! Key positions
//!
//! An ordered, bounded set of character positions deciding which characters
//! of a keyword take part in its hash value. Values are kept strictly
//! descending in fixed inline storage; the "all positions" wildcard is a
//! separate layout backed by a shared static table, so it costs nothing
//! until an explicit mutation forces it into storage.

mod bulk;
mod iter;
mod select;
mod syntax;

pub use bulk::BulkLoad;
pub use iter::{PositionIterator, PositionReverseIterator};
pub use select::SelectedChars;

use std::fmt;
use std::ops::Index;

use crate::error::PositionsError;

/// Exclusive upper bound on an explicit position, and the size of the
/// wildcard range.
pub const MAX_KEY_POS: i32 = 255;

/// Maximum number of positions a set may hold (every real position plus
/// [`LASTCHAR`]).
pub const MAX_SIZE: usize = MAX_KEY_POS as usize + 1;

/// Pseudo-position meaning "the last character of the key".
pub const LASTCHAR: i32 = -1;

/// Returned by [`PositionIterator::next_or_eos`] once a cursor is exhausted.
pub const EOS: i32 = -2;

const WILDCARD_LEN: usize = MAX_KEY_POS as usize;

/// `MAX_KEY_POS-1, ..., 1, 0`: the contents of a wildcard set.
static WILDCARD: [i32; WILDCARD_LEN] = {
    let mut table = [0i32; WILDCARD_LEN];
    let mut i = 0;
    while i < WILDCARD_LEN {
        table[i] = MAX_KEY_POS - 1 - i as i32;
        i += 1;
    }
    table
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// Values live in `positions[..size]`
    Explicit,
    /// Values are `WILDCARD`; inline storage is stale
    All,
}

/// Set of key positions, stored in strictly descending order.
///
/// Mutation keeps the order invariant. The only way to get unsorted values
/// in is a [`BulkLoad`], which sorts on [`finish`](BulkLoad::finish).
#[derive(Clone)]
pub struct Positions {
    layout: Layout,
    size: usize,
    positions: [i32; MAX_SIZE],
}

impl Positions {
    /// Empty set.
    pub const fn new() -> Self {
        Self {
            layout: Layout::Explicit,
            size: 0,
            positions: [0; MAX_SIZE],
        }
    }

    /// Set holding a single position.
    pub const fn from_one(pos1: i32) -> Self {
        let mut set = Self::new();
        set.positions[0] = pos1;
        set.size = 1;
        set
    }

    /// Set holding two positions, stored in the order given.
    ///
    /// Callers pass them descending (`pos1 > pos2`) for the set to be usable
    /// with `add`, `remove` and the iterators.
    pub const fn from_two(pos1: i32, pos2: i32) -> Self {
        let mut set = Self::new();
        set.positions[0] = pos1;
        set.positions[1] = pos2;
        set.size = 2;
        set
    }

    /// Whether the set is the "all positions" wildcard.
    pub fn is_useall(&self) -> bool {
        self.layout == Layout::All
    }

    /// Number of stored positions; `MAX_KEY_POS` for the wildcard.
    pub fn size(&self) -> usize {
        match self.layout {
            Layout::Explicit => self.size,
            Layout::All => WILDCARD_LEN,
        }
    }

    /// Whether no positions are stored.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The `index`-th stored position, largest first.
    pub fn get(&self, index: usize) -> Option<i32> {
        self.as_slice().get(index).copied()
    }

    /// Stored positions, largest first.
    pub fn as_slice(&self) -> &[i32] {
        match self.layout {
            Layout::Explicit => &self.positions[..self.size],
            Layout::All => &WILDCARD,
        }
    }

    /// Switch to or from the wildcard.
    ///
    /// Leaving the wildcard writes the full range into storage, so the set
    /// still holds `MAX_KEY_POS-1, ..., 0` afterwards.
    pub fn set_useall(&mut self, useall: bool) {
        match (self.layout, useall) {
            (Layout::Explicit, true) => self.layout = Layout::All,
            (Layout::All, false) => {
                self.positions[..WILDCARD_LEN].copy_from_slice(&WILDCARD);
                self.size = WILDCARD_LEN;
                self.layout = Layout::Explicit;
            }
            _ => {}
        }
    }

    /// Override the logical length after raw writes through a [`BulkLoad`].
    ///
    /// # Panics
    ///
    /// Panics if `size > MAX_SIZE`.
    pub fn set_size(&mut self, size: usize) {
        assert!(size <= MAX_SIZE, "size {size} exceeds capacity {MAX_SIZE}");
        self.set_useall(false);
        self.size = size;
    }

    /// Start writing raw, possibly unsorted values.
    pub fn bulk_load(&mut self) -> BulkLoad<'_> {
        self.set_useall(false);
        BulkLoad::new(self)
    }

    /// Sort stored values into descending order.
    ///
    /// Returns `false` if a duplicate was found; duplicates stay in place.
    /// The wildcard is already canonical and always returns `true`.
    pub fn sort(&mut self) -> bool {
        if self.is_useall() {
            return true;
        }

        // Insertion sort; size is bounded by MAX_SIZE.
        let base = &mut self.positions[..self.size];
        let mut duplicate_free = true;
        for i in 1..base.len() {
            let tmp = base[i];
            let mut j = i;
            while j > 0 && tmp >= base[j - 1] {
                base[j] = base[j - 1];
                if base[j] == tmp {
                    duplicate_free = false;
                }
                j -= 1;
            }
            base[j] = tmp;
        }
        duplicate_free
    }

    /// Whether `pos` is in the set.
    pub fn contains(&self, pos: i32) -> bool {
        for &value in self.as_slice().iter().rev() {
            if value == pos {
                return true;
            }
            if value > pos {
                break;
            }
        }
        false
    }

    /// Insert `pos`, keeping descending order.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is already present or the set is full. Both are
    /// caller bugs; use [`try_add`](Self::try_add) to inspect them instead.
    #[track_caller]
    pub fn add(&mut self, pos: i32) {
        if let Err(err) = self.try_add(pos) {
            contract_violation("add", err);
        }
    }

    /// Insert `pos`, reporting a contract violation instead of panicking.
    ///
    /// Always leaves the wildcard layout, even on error.
    pub fn try_add(&mut self, pos: i32) -> Result<(), PositionsError> {
        self.set_useall(false);

        if self.size == MAX_SIZE {
            return Err(PositionsError::CapacityExceeded);
        }

        let slot = self.slot_for(pos);
        if slot < self.size && self.positions[slot] == pos {
            return Err(PositionsError::DuplicateInsertion(pos));
        }

        self.positions.copy_within(slot..self.size, slot + 1);
        self.positions[slot] = pos;
        self.size += 1;
        Ok(())
    }

    /// Remove `pos`, keeping descending order.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not present, including on an empty set.
    #[track_caller]
    pub fn remove(&mut self, pos: i32) {
        if let Err(err) = self.try_remove(pos) {
            contract_violation("remove", err);
        }
    }

    /// Remove `pos`, reporting a contract violation instead of panicking.
    ///
    /// Always leaves the wildcard layout, even on error.
    pub fn try_remove(&mut self, pos: i32) -> Result<(), PositionsError> {
        self.set_useall(false);

        let slot = self.slot_for(pos);
        if slot == self.size || self.positions[slot] != pos {
            return Err(PositionsError::NotFound(pos));
        }

        self.positions.copy_within(slot + 1..self.size, slot);
        self.size -= 1;
        Ok(())
    }

    /// Positions largest first.
    pub fn iterator(&self) -> PositionIterator<'_> {
        PositionIterator::new(self.as_slice())
    }

    /// Positions largest first, skipping any `>= maxlen`.
    pub fn iterator_bounded(&self, maxlen: i32) -> PositionIterator<'_> {
        PositionIterator::new(self.bounded_slice(maxlen))
    }

    /// Positions smallest first.
    pub fn reviterator(&self) -> PositionReverseIterator<'_> {
        PositionReverseIterator::new(self.as_slice())
    }

    /// Positions smallest first, skipping any `>= maxlen`.
    pub fn reviterator_bounded(&self, maxlen: i32) -> PositionReverseIterator<'_> {
        PositionReverseIterator::new(self.bounded_slice(maxlen))
    }

    /// Write the external syntax to standard output.
    pub fn print(&self) {
        print!("{self}");
    }

    /// Index of the first explicit value `<= pos`.
    fn slot_for(&self, pos: i32) -> usize {
        self.positions[..self.size].partition_point(|&value| value > pos)
    }

    /// Stored values below `maxlen`. Values are descending, so the excluded
    /// ones form a prefix.
    fn bounded_slice(&self, maxlen: i32) -> &[i32] {
        let values = self.as_slice();
        let start = values.partition_point(|&value| value >= maxlen);
        &values[start..]
    }
}

#[cold]
#[track_caller]
fn contract_violation(op: &str, err: PositionsError) -> ! {
    tracing::error!(op, %err, "positions contract violated");
    panic!("Positions::{op} internal error: {err}");
}

impl Default for Positions {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Positions {
    fn eq(&self, other: &Self) -> bool {
        self.layout == other.layout && self.as_slice() == other.as_slice()
    }
}

impl Eq for Positions {}

impl fmt::Debug for Positions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Positions")
            .field("useall", &self.is_useall())
            .field("positions", &self.as_slice())
            .finish()
    }
}

impl Index<usize> for Positions {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a Positions {
    type Item = i32;
    type IntoIter = PositionIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iterator()
    }
}
