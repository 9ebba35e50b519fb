//! Forward and reverse cursors over a [`Positions`](super::Positions).
//!
//! Both cursors walk a window of the stored values fixed when they are
//! created; a `maxlen` bound just trims the window once up front.

use std::iter::FusedIterator;
use std::slice;

use super::EOS;

/// Yields positions in descending order.
#[derive(Debug, Clone)]
pub struct PositionIterator<'a> {
    values: slice::Iter<'a, i32>,
}

impl<'a> PositionIterator<'a> {
    pub(super) fn new(values: &'a [i32]) -> Self {
        Self {
            values: values.iter(),
        }
    }

    /// Next position, or [`EOS`] once exhausted.
    pub fn next_or_eos(&mut self) -> i32 {
        self.next().unwrap_or(EOS)
    }

    /// How many more positions `next` will return.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl Iterator for PositionIterator<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        self.values.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl DoubleEndedIterator for PositionIterator<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<i32> {
        self.values.next_back().copied()
    }
}

impl ExactSizeIterator for PositionIterator<'_> {}

impl FusedIterator for PositionIterator<'_> {}

/// Yields positions in ascending order.
#[derive(Debug, Clone)]
pub struct PositionReverseIterator<'a> {
    values: slice::Iter<'a, i32>,
}

impl<'a> PositionReverseIterator<'a> {
    pub(super) fn new(values: &'a [i32]) -> Self {
        Self {
            values: values.iter(),
        }
    }

    /// Next position, or [`EOS`] once exhausted.
    pub fn next_or_eos(&mut self) -> i32 {
        self.next().unwrap_or(EOS)
    }

    /// How many more positions `next` will return.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl Iterator for PositionReverseIterator<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        self.values.next_back().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl DoubleEndedIterator for PositionReverseIterator<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<i32> {
        self.values.next().copied()
    }
}

impl ExactSizeIterator for PositionReverseIterator<'_> {}

impl FusedIterator for PositionReverseIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::super::{Positions, LASTCHAR, MAX_KEY_POS};
    use super::*;

    fn sample() -> Positions {
        let mut set = Positions::new();
        for pos in [LASTCHAR, 0, 2, 5, 9] {
            set.add(pos);
        }
        set
    }

    #[test]
    fn forward_is_descending() {
        let values: Vec<i32> = sample().iterator().collect();
        assert_eq!(values, vec![9, 5, 2, 0, LASTCHAR]);
    }

    #[test]
    fn reverse_is_ascending() {
        let values: Vec<i32> = sample().reviterator().collect();
        assert_eq!(values, vec![LASTCHAR, 0, 2, 5, 9]);
    }

    #[test]
    fn bounded_cursors_skip_large_positions() {
        let set = sample();
        let forward: Vec<i32> = set.iterator_bounded(5).collect();
        assert_eq!(forward, vec![2, 0, LASTCHAR]);
        let reverse: Vec<i32> = set.reviterator_bounded(5).collect();
        assert_eq!(reverse, vec![LASTCHAR, 0, 2]);
    }

    #[test]
    fn eos_after_exhaustion() {
        let set = Positions::from_one(3);
        let mut it = set.iterator();
        assert_eq!(it.remaining(), 1);
        assert_eq!(it.next_or_eos(), 3);
        assert_eq!(it.remaining(), 0);
        assert_eq!(it.next_or_eos(), EOS);
        assert_eq!(it.next_or_eos(), EOS);

        let mut rev = set.reviterator_bounded(3);
        assert_eq!(rev.remaining(), 0);
        assert_eq!(rev.next_or_eos(), EOS);
    }

    #[test]
    fn wildcard_bounded_by_key_length() {
        let mut set = Positions::new();
        set.set_useall(true);
        let forward: Vec<i32> = set.iterator_bounded(3).collect();
        assert_eq!(forward, vec![2, 1, 0]);
        let reverse: Vec<i32> = set.reviterator_bounded(3).collect();
        assert_eq!(reverse, vec![0, 1, 2]);
        assert_eq!(set.iterator_bounded(MAX_KEY_POS + 10).len(), MAX_KEY_POS as usize);
        assert_eq!(set.iterator_bounded(-4).len(), 0);
    }

    #[test]
    fn cursors_are_independent_copies() {
        let set = sample();
        let mut a = set.iterator();
        a.next();
        let mut b = a.clone();
        assert_eq!(a.next(), Some(5));
        assert_eq!(b.next(), Some(5));
    }
}
