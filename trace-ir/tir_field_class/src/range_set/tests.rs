use super::*;
use crate::StatusCode;
use proptest::prelude::*;

fn unsigned(ranges: &[(u64, u64)]) -> UnsignedRangeSet {
    let mut set = UnsignedRangeSet::new();
    for &(lo, hi) in ranges {
        set.add_range(lo, hi).expect("valid range");
    }
    set
}

fn signed(ranges: &[(i64, i64)]) -> SignedRangeSet {
    let mut set = SignedRangeSet::new();
    for &(lo, hi) in ranges {
        set.add_range(lo, hi).expect("valid range");
    }
    set
}

#[test]
fn add_range_keeps_insertion_order() {
    let set = unsigned(&[(20, 30), (0, 10)]);
    assert_eq!(set.len(), 2);
    assert_eq!(set.range(0).lower(), 20);
    assert_eq!(set.range(1).upper(), 10);
}

#[test]
fn add_range_rejects_inverted_bounds() {
    let mut set = SignedRangeSet::new();
    let err = set.add_range(5, -5).expect_err("inverted");
    assert_eq!(err, Error::InvalidRange { lower: 5, upper: -5 });
    assert_eq!(err.code(), StatusCode::InvalidArgument);
    assert!(set.is_empty());
}

#[test]
fn single_value_range_is_valid() {
    let set = unsigned(&[(7, 7)]);
    assert!(set.contains(7));
    assert!(!set.contains(6));
    assert!(!set.contains(8));
}

#[test]
fn frozen_set_rejects_ranges() {
    let mut set = unsigned(&[(0, 1)]);
    set.freeze();
    set.freeze();
    let err = set.add_range(2, 3).expect_err("frozen");
    assert_eq!(err.code(), StatusCode::InvalidState);
    assert_eq!(set.len(), 1);
}

#[test]
fn overlap_is_boundary_inclusive() {
    assert!(unsigned(&[(1, 5), (5, 9)]).has_overlaps());
    assert!(!unsigned(&[(1, 5), (6, 9)]).has_overlaps());
}

#[test]
fn overlap_detects_unsorted_and_nested() {
    assert!(unsigned(&[(50, 60), (0, 100)]).has_overlaps());
    assert!(signed(&[(-10, -1), (10, 20), (-5, -5)]).has_overlaps());
    assert!(!signed(&[(10, 20), (-10, -1), (0, 9)]).has_overlaps());
}

#[test]
fn overlap_with_adjacent_but_disjoint_ranges() {
    assert!(!unsigned(&[(0, 9), (10, 19), (20, 29)]).has_overlaps());
    assert!(unsigned(&[(0, 9), (10, 19), (19, 29)]).has_overlaps());
}

#[test]
fn duplicate_ranges_overlap() {
    assert!(unsigned(&[(3, 4), (3, 4)]).has_overlaps());
}

#[test]
fn empty_and_singleton_sets_have_no_overlaps() {
    assert!(!UnsignedRangeSet::new().has_overlaps());
    assert!(!unsigned(&[(0, u64::MAX)]).has_overlaps());
}

#[test]
fn extreme_bounds() {
    let set = signed(&[(i64::MIN, -1), (0, i64::MAX)]);
    assert!(!set.has_overlaps());
    assert!(set.contains(i64::MIN));
    assert!(set.contains(i64::MAX));
}

#[test]
fn fits_in_bits_unsigned() {
    let set = unsigned(&[(0, 255)]);
    assert!(set.fits_in_bits(8));
    assert!(!set.fits_in_bits(7));
    assert!(unsigned(&[(0, u64::MAX)]).fits_in_bits(64));
}

#[test]
fn fits_in_bits_signed() {
    let set = signed(&[(-128, 127)]);
    assert!(set.fits_in_bits(8));
    assert!(!set.fits_in_bits(7));
    assert!(!signed(&[(0, 128)]).fits_in_bits(8));
    assert!(signed(&[(i64::MIN, i64::MAX)]).fits_in_bits(64));
}

#[test]
fn equality_ignores_frozen_state() {
    let a = unsigned(&[(1, 2)]);
    let mut b = unsigned(&[(1, 2)]);
    b.freeze();
    assert_eq!(a, b);
    assert_ne!(a, unsigned(&[(1, 3)]));
}

#[test]
fn display() {
    assert_eq!(unsigned(&[(0, 10), (20, 30)]).to_string(), "{[0, 10], [20, 30]}");
    assert_eq!(SignedRangeSet::new().to_string(), "{}");
}

#[test]
fn any_range_set_typed_access() {
    let any = u64::erase(unsigned(&[(1, 1)]));
    assert!(!any.is_signed());
    assert_eq!(any.typed::<u64>().len(), 1);
    assert!(i64::typed(&any).is_none());
}

#[test]
#[should_panic(expected = "expected signed range set, found unsigned range set")]
fn any_range_set_wrong_signedness_panics() {
    let any = u64::erase(UnsignedRangeSet::new());
    let _ = any.typed::<i64>();
}

#[test]
#[should_panic(expected = "out of bounds")]
fn range_index_out_of_bounds_panics() {
    let _ = unsigned(&[(0, 1)]).range(1);
}

/// Brute-force reference: compare every pair.
fn pairwise_overlap(ranges: &[(i64, i64)]) -> bool {
    for (i, a) in ranges.iter().enumerate() {
        for b in &ranges[i + 1..] {
            if a.0 <= b.1 && b.0 <= a.1 {
                return true;
            }
        }
    }
    false
}

fn range_strategy() -> impl Strategy<Value = (i64, i64)> {
    (-50i64..50, 0i64..10).prop_map(|(lo, width)| (lo, lo + width))
}

proptest! {
    #[test]
    fn has_overlaps_matches_pairwise(ranges in prop::collection::vec(range_strategy(), 0..12)) {
        let set = signed(&ranges);
        prop_assert_eq!(set.has_overlaps(), pairwise_overlap(&ranges));
    }

    #[test]
    fn contains_matches_any_range(
        ranges in prop::collection::vec(range_strategy(), 0..6),
        value in -60i64..60,
    ) {
        let set = signed(&ranges);
        let expected = ranges.iter().any(|&(lo, hi)| lo <= value && value <= hi);
        prop_assert_eq!(set.contains(value), expected);
    }
}
