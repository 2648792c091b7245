//! Integer range sets.
//!
//! A range set is an ordered sequence of inclusive `[lower, upper]`
//! intervals, all unsigned (`u64`) or all signed (`i64`). Enumeration
//! mappings use them to label values; selector variant options use them to
//! claim a slice of the selector's value space.
//!
//! Range sets live in the [`Pool`](crate::Pool) next to field classes and are
//! shared, not copied: attaching one to a mapping or option takes a reference
//! and freezes it.

use std::fmt;

use smallvec::SmallVec;

use crate::{Error, Result};

mod sealed {
    pub trait Sealed {}
    impl Sealed for u64 {}
    impl Sealed for i64 {}
}

/// Integer type a range set can hold (`u64` or `i64`).
pub trait RangeBound:
    sealed::Sealed + Copy + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Whether this bound type is signed.
    const SIGNED: bool;

    /// Widen to `i128` so bounds of either signedness compare and print alike.
    fn widen(self) -> i128;

    /// Whether the value is representable in an integer of `bits` bits.
    fn fits_in_bits(self, bits: u64) -> bool;

    /// Borrow the typed set out of an [`AnyRangeSet`] of matching signedness.
    fn typed(set: &AnyRangeSet) -> Option<&RangeSet<Self>>;

    /// Mutably borrow the typed set out of an [`AnyRangeSet`].
    fn typed_mut(set: &mut AnyRangeSet) -> Option<&mut RangeSet<Self>>;

    /// Wrap a typed set.
    fn erase(set: RangeSet<Self>) -> AnyRangeSet;
}

impl RangeBound for u64 {
    const SIGNED: bool = false;

    #[inline]
    fn widen(self) -> i128 {
        i128::from(self)
    }

    fn fits_in_bits(self, bits: u64) -> bool {
        bits >= 64 || self >> bits == 0
    }

    fn typed(set: &AnyRangeSet) -> Option<&RangeSet<Self>> {
        match set {
            AnyRangeSet::Unsigned(s) => Some(s),
            AnyRangeSet::Signed(_) => None,
        }
    }

    fn typed_mut(set: &mut AnyRangeSet) -> Option<&mut RangeSet<Self>> {
        match set {
            AnyRangeSet::Unsigned(s) => Some(s),
            AnyRangeSet::Signed(_) => None,
        }
    }

    fn erase(set: RangeSet<Self>) -> AnyRangeSet {
        AnyRangeSet::Unsigned(set)
    }
}

impl RangeBound for i64 {
    const SIGNED: bool = true;

    #[inline]
    fn widen(self) -> i128 {
        i128::from(self)
    }

    fn fits_in_bits(self, bits: u64) -> bool {
        if bits >= 64 {
            return true;
        }
        if bits == 0 {
            return false;
        }
        let half = 1i128 << (bits - 1);
        let v = i128::from(self);
        (-half..half).contains(&v)
    }

    fn typed(set: &AnyRangeSet) -> Option<&RangeSet<Self>> {
        match set {
            AnyRangeSet::Signed(s) => Some(s),
            AnyRangeSet::Unsigned(_) => None,
        }
    }

    fn typed_mut(set: &mut AnyRangeSet) -> Option<&mut RangeSet<Self>> {
        match set {
            AnyRangeSet::Signed(s) => Some(s),
            AnyRangeSet::Unsigned(_) => None,
        }
    }

    fn erase(set: RangeSet<Self>) -> AnyRangeSet {
        AnyRangeSet::Signed(set)
    }
}

/// Inclusive integer interval `[lower, upper]` with `lower <= upper`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IntegerRange<T> {
    lower: T,
    upper: T,
}

impl<T: RangeBound> IntegerRange<T> {
    #[inline]
    pub fn lower(&self) -> T {
        self.lower
    }

    #[inline]
    pub fn upper(&self) -> T {
        self.upper
    }

    /// Whether `value` lies within the bounds, inclusive.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.lower <= value && value <= self.upper
    }
}

impl<T: fmt::Display> fmt::Display for IntegerRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

/// Ordered set of inclusive integer ranges of one signedness.
#[derive(Clone, Debug)]
pub struct RangeSet<T> {
    ranges: SmallVec<[IntegerRange<T>; 2]>,
    frozen: bool,
}

pub type UnsignedRangeSet = RangeSet<u64>;
pub type SignedRangeSet = RangeSet<i64>;

impl<T: RangeBound> Default for RangeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RangeBound> RangeSet<T> {
    /// Create an empty, mutable range set.
    pub fn new() -> Self {
        Self {
            ranges: SmallVec::new(),
            frozen: false,
        }
    }

    /// Append `[lower, upper]`.
    ///
    /// Ranges are kept in insertion order; duplicates and overlaps are
    /// accepted here and only rejected by the consumers that care.
    pub fn add_range(&mut self, lower: T, upper: T) -> Result<()> {
        if self.frozen {
            return Err(Error::Frozen {
                object: "range set".to_owned(),
            });
        }
        if lower > upper {
            return Err(Error::InvalidRange {
                lower: lower.widen(),
                upper: upper.widen(),
            });
        }
        self.ranges.push(IntegerRange { lower, upper });
        Ok(())
    }

    /// Whether any two ranges of the set share at least one value.
    pub fn has_overlaps(&self) -> bool {
        ranges_overlap(&self.ranges)
    }

    /// Whether any range contains `value`.
    pub fn contains(&self, value: T) -> bool {
        self.ranges.iter().any(|r| r.contains(value))
    }

    /// Whether every bound is representable in `bits` bits.
    pub fn fits_in_bits(&self, bits: u64) -> bool {
        self.ranges
            .iter()
            .all(|r| r.lower.fits_in_bits(bits) && r.upper.fits_in_bits(bits))
    }

    /// Range at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn range(&self, index: usize) -> IntegerRange<T> {
        assert!(
            index < self.ranges.len(),
            "range index {index} out of bounds for range set of {} ranges",
            self.ranges.len()
        );
        self.ranges[index]
    }

    #[inline]
    pub fn ranges(&self) -> &[IntegerRange<T>] {
        &self.ranges
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, IntegerRange<T>> {
        self.ranges.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Make the set permanently immutable. Idempotent.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

/// Same ranges in the same order; the frozen state is not compared.
impl<T: PartialEq> PartialEq for RangeSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ranges == other.ranges
    }
}

impl<T: Eq> Eq for RangeSet<T> {}

impl<'a, T: RangeBound> IntoIterator for &'a RangeSet<T> {
    type Item = &'a IntegerRange<T>;
    type IntoIter = std::slice::Iter<'a, IntegerRange<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for RangeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, r) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{r}")?;
        }
        f.write_str("}")
    }
}

/// Whether any two of `ranges` intersect, inclusive bounds.
///
/// Sorts a working copy by lower bound, then looks for a range starting at
/// or before the furthest upper bound seen so far.
pub fn ranges_overlap<T: RangeBound>(ranges: &[IntegerRange<T>]) -> bool {
    if ranges.len() < 2 {
        return false;
    }

    let mut sorted: SmallVec<[IntegerRange<T>; 8]> = ranges.iter().copied().collect();
    sorted.sort_unstable_by_key(|r| r.lower);

    let mut reach = sorted[0].upper;
    for r in &sorted[1..] {
        if r.lower <= reach {
            return true;
        }
        reach = reach.max(r.upper);
    }
    false
}

/// A range set of either signedness, as stored in the pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyRangeSet {
    Unsigned(UnsignedRangeSet),
    Signed(SignedRangeSet),
}

impl AnyRangeSet {
    #[inline]
    pub fn is_signed(&self) -> bool {
        matches!(self, AnyRangeSet::Signed(_))
    }

    pub fn len(&self) -> usize {
        match self {
            AnyRangeSet::Unsigned(s) => s.len(),
            AnyRangeSet::Signed(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_frozen(&self) -> bool {
        match self {
            AnyRangeSet::Unsigned(s) => s.is_frozen(),
            AnyRangeSet::Signed(s) => s.is_frozen(),
        }
    }

    pub fn freeze(&mut self) {
        match self {
            AnyRangeSet::Unsigned(s) => s.freeze(),
            AnyRangeSet::Signed(s) => s.freeze(),
        }
    }

    pub fn fits_in_bits(&self, bits: u64) -> bool {
        match self {
            AnyRangeSet::Unsigned(s) => s.fits_in_bits(bits),
            AnyRangeSet::Signed(s) => s.fits_in_bits(bits),
        }
    }

    /// Borrow as a typed set.
    ///
    /// # Panics
    /// Panics if the signedness does not match `T`.
    pub fn typed<T: RangeBound>(&self) -> &RangeSet<T> {
        match T::typed(self) {
            Some(s) => s,
            None => panic!(
                "expected {} range set, found {} range set",
                signedness_name(T::SIGNED),
                signedness_name(self.is_signed())
            ),
        }
    }
}

impl fmt::Display for AnyRangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyRangeSet::Unsigned(s) => write!(f, "{s}"),
            AnyRangeSet::Signed(s) => write!(f, "{s}"),
        }
    }
}

pub(crate) const fn signedness_name(signed: bool) -> &'static str {
    if signed {
        "signed"
    } else {
        "unsigned"
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Tests use expect for clarity")]
mod tests;
