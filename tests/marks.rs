//! Mark array tests
//!
//! Verifies per-trial duplicate detection and clearing

use keypos::{MarkArray, Options};
use proptest::prelude::*;
use test_case::test_case;

#[test_case(1, 0)]
#[test_case(16, 7)]
#[test_case(1024, 1023)]
fn mark_is_seen_until_clear(size: usize, index: usize) {
    let mut marks = MarkArray::new(size);
    assert!(!marks.set_bit(index), "first mark is fresh");
    assert!(marks.set_bit(index), "second mark without clear is seen");

    marks.clear();
    assert!(!marks.set_bit(index), "mark is fresh again after clear");
}

#[test]
fn many_trials_stay_independent() {
    let mut marks = MarkArray::with_config(32, &Options::with_debug(true));
    for trial in 0..10_000usize {
        let index = trial % 32;
        assert!(!marks.set_bit(index));
        assert!(marks.set_bit(index));
        marks.clear();
    }
    assert_eq!(marks.generation(), 10_001);
}

#[test]
#[should_panic]
fn out_of_range_index_panics() {
    let mut marks = MarkArray::new(4);
    marks.set_bit(4);
}

proptest! {
    #[test]
    fn marks_are_independent(
        size in 1usize..256,
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..64),
    ) {
        let mut marks = MarkArray::new(size);
        let mut model = vec![false; size];

        for pick in picks {
            let index = pick.index(size);
            prop_assert_eq!(marks.set_bit(index), model[index]);
            model[index] = true;

            for (other, &expected) in model.iter().enumerate() {
                prop_assert_eq!(marks.is_marked(other), expected);
            }
        }

        marks.clear();
        prop_assert!((0..size).all(|i| !marks.is_marked(i)));
    }
}
