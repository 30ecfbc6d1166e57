#![warn(rust_2018_idioms)]

use atombytes::nospec_index;

const HALF: usize = usize::MAX >> 1;

#[test]
fn identity_within_bounds() {
    for bound in 1..=32usize {
        for index in 0..bound {
            assert_eq!(nospec_index(index, bound), index);
        }
    }
}

#[test]
fn zero_at_or_past_bound() {
    for bound in 0..=32usize {
        for index in bound..bound + 33 {
            assert_eq!(nospec_index(index, bound), 0);
        }
    }
}

#[test]
fn boundary_is_exclusive() {
    // index == bound is out of range, not clamped to bound - 1.
    assert_eq!(nospec_index(10, 10), 0);
    assert_eq!(nospec_index(9, 10), 9);
}

#[test]
fn half_range_edges() {
    assert_eq!(nospec_index(1, HALF), 1);
    assert_eq!(nospec_index(HALF - 1, HALF), HALF - 1);
    assert_eq!(nospec_index(HALF, HALF), 0);
}

#[test]
fn rejects_above_half_range() {
    // An in-range-looking index is still rejected once either value has
    // the top bit set.
    assert_eq!(nospec_index(1, HALF + 1), 0);
    assert_eq!(nospec_index(1, usize::MAX), 0);
    assert_eq!(nospec_index(HALF + 1, usize::MAX), 0);
    assert_eq!(nospec_index(usize::MAX, usize::MAX), 0);
    assert_eq!(nospec_index(usize::MAX, 10), 0);
}

#[test]
fn zero_bound_rejects_everything() {
    assert_eq!(nospec_index(0, 0), 0);
    assert_eq!(nospec_index(1, 0), 0);
}
