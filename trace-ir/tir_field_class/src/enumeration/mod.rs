//! Enumeration mapping table.
//!
//! Mappings label ranges of integer values. Labels are unique within one
//! enumeration but ranges of different mappings may overlap, so a value can
//! carry several labels at once.

use smallvec::SmallVec;

use crate::range_set::{AnyRangeSet, RangeBound};
use crate::{Error, RangeSetId, Result};

/// Labels matching one value, in mapping insertion order.
pub type Labels<'a> = SmallVec<[&'a str; 4]>;

/// A `(label, ranges)` mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumerationMapping {
    label: String,
    ranges: RangeSetId,
}

impl EnumerationMapping {
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn ranges(&self) -> RangeSetId {
        self.ranges
    }
}

/// Ordered enumeration mappings with unique labels.
#[derive(Clone, Debug, Default)]
pub struct MappingTable {
    mappings: Vec<EnumerationMapping>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that `label` is free.
    pub(crate) fn ensure_label_available(&self, label: &str) -> Result<()> {
        if self.mappings.iter().any(|m| m.label == label) {
            return Err(Error::DuplicateLabel {
                label: label.to_owned(),
            });
        }
        Ok(())
    }

    /// Append a mapping. No overlap check against other mappings.
    pub(crate) fn add(&mut self, label: impl Into<String>, ranges: RangeSetId) -> Result<()> {
        let label = label.into();
        self.ensure_label_available(&label)?;
        self.mappings.push(EnumerationMapping { label, ranges });
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Mapping at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn get_by_index(&self, index: usize) -> &EnumerationMapping {
        match self.mappings.get(index) {
            Some(m) => m,
            None => panic!(
                "mapping index {index} out of bounds for enumeration of {} mappings",
                self.mappings.len()
            ),
        }
    }

    pub fn get_by_label(&self, label: &str) -> Option<&EnumerationMapping> {
        self.mappings.iter().find(|m| m.label == label)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnumerationMapping> {
        self.mappings.iter()
    }

    /// Labels of every mapping whose ranges contain `value`.
    ///
    /// `range_set` resolves a mapping's handle to its ranges. A fresh
    /// sequence is returned per call; it borrows labels from the table.
    pub fn labels_for_value<'a, T, F>(&'a self, value: T, range_set: F) -> Labels<'a>
    where
        T: RangeBound,
        F: Fn(RangeSetId) -> &'a AnyRangeSet,
    {
        self.mappings
            .iter()
            .filter(|m| range_set(m.ranges).typed::<T>().contains(value))
            .map(|m| m.label.as_str())
            .collect()
    }
}

impl<'a> IntoIterator for &'a MappingTable {
    type Item = &'a EnumerationMapping;
    type IntoIter = std::slice::Iter<'a, EnumerationMapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
