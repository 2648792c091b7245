//! Named field class container.
//!
//! Shared backing store of structures and variants: entries in insertion
//! order (by-index access) plus a name index (O(1) by-name access).
//!
//! The container only guards name uniqueness. Taking references on children,
//! freezing them and checking the owner's frozen state is done by the pool,
//! which owns all the objects involved.

use rustc_hash::FxHashMap;

use crate::{Error, FieldClassId, FieldClassType, RangeSetId, Result};

/// A `(name, field class)` pair, with the option's ranges for selector
/// variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedFieldClass {
    name: String,
    field_class: FieldClassId,
    ranges: Option<RangeSetId>,
}

impl NamedFieldClass {
    pub(crate) fn new(
        name: impl Into<String>,
        field_class: FieldClassId,
        ranges: Option<RangeSetId>,
    ) -> Self {
        Self {
            name: name.into(),
            field_class,
            ranges,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn field_class(&self) -> FieldClassId {
        self.field_class
    }

    /// Ranges of a selector variant option; `None` for structure members and
    /// options of a variant without selector.
    #[inline]
    pub fn ranges(&self) -> Option<RangeSetId> {
        self.ranges
    }
}

/// Ordered, uniquely named entries.
#[derive(Clone, Debug, Default)]
pub struct NamedFieldClassContainer {
    entries: Vec<NamedFieldClass>,
    /// Name -> position in `entries`.
    by_name: FxHashMap<String, usize>,
}

impl NamedFieldClassContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that `name` is free. `owner` only feeds the error message.
    pub(crate) fn ensure_name_available(&self, name: &str, owner: FieldClassType) -> Result<()> {
        if self.by_name.contains_key(name) {
            return Err(Error::DuplicateName {
                name: name.to_owned(),
                ty: owner,
            });
        }
        Ok(())
    }

    /// Append an entry and return its index.
    ///
    /// Fails with `DuplicateName` and leaves the container untouched if the
    /// name is taken.
    pub(crate) fn append(&mut self, entry: NamedFieldClass, owner: FieldClassType) -> Result<usize> {
        self.ensure_name_available(&entry.name, owner)?;
        let index = self.entries.len();
        self.by_name.insert(entry.name.clone(), index);
        self.entries.push(entry);
        Ok(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn get_by_index(&self, index: usize) -> &NamedFieldClass {
        match self.entries.get(index) {
            Some(entry) => entry,
            None => panic!(
                "entry index {index} out of bounds for container of {} entries",
                self.entries.len()
            ),
        }
    }

    /// Entry named `name`, if any.
    pub fn get_by_name(&self, name: &str) -> Option<&NamedFieldClass> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// Position of the entry named `name`, if any.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedFieldClass> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a NamedFieldClassContainer {
    type Item = &'a NamedFieldClass;
    type IntoIter = std::slice::Iter<'a, NamedFieldClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
