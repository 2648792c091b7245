//! Field class pool.
//!
//! The pool owns every field class and range set and hands out generational
//! handles to them. Reference counts live next to the objects; a composite
//! holds one reference on each child and on each range set it uses, and
//! dropping the last reference to a node releases its children in turn.
//!
//! Operations are spread across submodules:
//! - `construct`: `create_*` constructors
//! - `mutate`: attribute setters, member/option/mapping insertion
//! - `seal`: freezing and trace class publication
//! - `format`: one-line rendering for logs and diagnostics

mod arena;
mod construct;
mod format;
mod mutate;
mod seal;

use smallvec::SmallVec;

use self::arena::{Arena, Release};
use crate::range_set::{AnyRangeSet, RangeBound, RangeSet};
use crate::{Error, FieldClass, FieldClassId, FieldClassType, RangeSetId, Result};

/// Arena of field classes and range sets.
pub struct Pool {
    field_classes: Arena<FieldClass>,
    range_sets: Arena<AnyRangeSet>,
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl Pool {
    pub fn new() -> Self {
        Self {
            field_classes: Arena::new(),
            range_sets: Arena::new(),
        }
    }

    /// Number of live field classes.
    #[inline]
    pub fn len(&self) -> usize {
        self.field_classes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.field_classes.len() == 0
    }

    /// Number of live range sets.
    #[inline]
    pub fn range_set_count(&self) -> usize {
        self.range_sets.len()
    }

    // === Field classes ===

    /// Whether `id` still refers to a live field class.
    pub fn contains(&self, id: FieldClassId) -> bool {
        self.field_classes.get(id.index(), id.generation()).is_some()
    }

    /// Resolve a handle.
    ///
    /// # Panics
    /// Panics if `id` is stale.
    #[track_caller]
    pub fn get(&self, id: FieldClassId) -> &FieldClass {
        match self.field_classes.get(id.index(), id.generation()) {
            Some(fc) => fc,
            None => stale_field_class(id),
        }
    }

    #[track_caller]
    pub(crate) fn get_mut(&mut self, id: FieldClassId) -> &mut FieldClass {
        match self.field_classes.get_mut(id.index(), id.generation()) {
            Some(fc) => fc,
            None => stale_field_class(id),
        }
    }

    #[inline]
    #[track_caller]
    pub fn field_class_type(&self, id: FieldClassId) -> FieldClassType {
        self.get(id).field_class_type()
    }

    #[track_caller]
    pub fn ref_count(&self, id: FieldClassId) -> u32 {
        match self.field_classes.refs(id.index(), id.generation()) {
            Some(refs) => refs,
            None => stale_field_class(id),
        }
    }

    /// Take a new reference on `id`.
    #[track_caller]
    pub fn get_ref(&mut self, id: FieldClassId) {
        if !self.field_classes.acquire(id.index(), id.generation()) {
            stale_field_class(id);
        }
    }

    /// Drop a reference on `id`.
    ///
    /// When the last reference goes, the field class is destroyed and its
    /// own references on children and range sets are dropped. Release runs
    /// off a worklist so deep schemas do not recurse.
    #[track_caller]
    pub fn put_ref(&mut self, id: FieldClassId) {
        let mut pending: SmallVec<[FieldClassId; 8]> = SmallVec::new();
        let mut range_sets: SmallVec<[RangeSetId; 8]> = SmallVec::new();

        match self.field_classes.release(id.index(), id.generation()) {
            None => stale_field_class(id),
            Some(Release::Shared) => return,
            Some(Release::Destroyed(fc)) => {
                self.on_destroyed(id, &fc, &mut pending, &mut range_sets);
            }
        }

        while let Some(child) = pending.pop() {
            match self.field_classes.release(child.index(), child.generation()) {
                None => stale_field_class(child),
                Some(Release::Shared) => {}
                Some(Release::Destroyed(fc)) => {
                    self.on_destroyed(child, &fc, &mut pending, &mut range_sets);
                }
            }
        }

        for rs in range_sets {
            self.put_range_set_ref(rs);
        }
    }

    fn on_destroyed(
        &self,
        id: FieldClassId,
        fc: &FieldClass,
        pending: &mut SmallVec<[FieldClassId; 8]>,
        range_sets: &mut SmallVec<[RangeSetId; 8]>,
    ) {
        tracing::debug!(%id, ty = %fc.field_class_type(), "destroying field class");
        let children = fc.children();
        pending.extend(children.field_classes);
        range_sets.extend(children.range_sets);
    }

    pub(crate) fn insert(&mut self, fc: FieldClass) -> Result<FieldClassId> {
        let ty = fc.field_class_type();
        let (index, generation) = self.field_classes.insert(fc)?;
        let id = FieldClassId::new(index, generation);
        tracing::debug!(%id, %ty, "created field class");
        Ok(id)
    }

    /// Fail with `Frozen` if `id` is frozen.
    pub(crate) fn ensure_hot(&self, id: FieldClassId) -> Result<()> {
        let fc = self.get(id);
        if fc.is_frozen() {
            return Err(Error::frozen_field_class(id, fc.field_class_type()));
        }
        Ok(())
    }

    // === Range sets ===

    /// Create an empty range set of `T` bounds.
    pub fn create_range_set<T: RangeBound>(&mut self) -> Result<RangeSetId> {
        self.insert_range_set(T::erase(RangeSet::new()))
    }

    pub fn create_unsigned_range_set(&mut self) -> Result<RangeSetId> {
        self.create_range_set::<u64>()
    }

    pub fn create_signed_range_set(&mut self) -> Result<RangeSetId> {
        self.create_range_set::<i64>()
    }

    /// Insert an existing range set with one reference.
    pub fn insert_range_set(&mut self, set: AnyRangeSet) -> Result<RangeSetId> {
        let signed = set.is_signed();
        let (index, generation) = self.range_sets.insert(set)?;
        let id = RangeSetId::new(index, generation);
        tracing::debug!(%id, signed, "created range set");
        Ok(id)
    }

    /// Append `[lower, upper]` to a range set.
    ///
    /// # Panics
    /// Panics if `id` is stale or its signedness does not match `T`.
    #[track_caller]
    pub fn add_range<T: RangeBound>(&mut self, id: RangeSetId, lower: T, upper: T) -> Result<()> {
        let set = match self.range_sets.get_mut(id.index(), id.generation()) {
            Some(set) => set,
            None => stale_range_set(id),
        };
        let signed = set.is_signed();
        match T::typed_mut(set) {
            Some(typed) => typed.add_range(lower, upper),
            None => wrong_signedness::<T>(signed),
        }
    }

    /// Resolve a range set handle.
    ///
    /// # Panics
    /// Panics if `id` is stale.
    #[track_caller]
    pub fn any_range_set(&self, id: RangeSetId) -> &AnyRangeSet {
        match self.range_sets.get(id.index(), id.generation()) {
            Some(set) => set,
            None => stale_range_set(id),
        }
    }

    /// Resolve a range set handle with its signedness.
    ///
    /// # Panics
    /// Panics if `id` is stale or its signedness does not match `T`.
    #[track_caller]
    pub fn range_set<T: RangeBound>(&self, id: RangeSetId) -> &RangeSet<T> {
        self.any_range_set(id).typed::<T>()
    }

    #[track_caller]
    pub(crate) fn any_range_set_mut(&mut self, id: RangeSetId) -> &mut AnyRangeSet {
        match self.range_sets.get_mut(id.index(), id.generation()) {
            Some(set) => set,
            None => stale_range_set(id),
        }
    }

    pub fn contains_range_set(&self, id: RangeSetId) -> bool {
        self.range_sets.get(id.index(), id.generation()).is_some()
    }

    #[track_caller]
    pub fn range_set_ref_count(&self, id: RangeSetId) -> u32 {
        match self.range_sets.refs(id.index(), id.generation()) {
            Some(refs) => refs,
            None => stale_range_set(id),
        }
    }

    #[track_caller]
    pub fn get_range_set_ref(&mut self, id: RangeSetId) {
        if !self.range_sets.acquire(id.index(), id.generation()) {
            stale_range_set(id);
        }
    }

    #[track_caller]
    pub fn put_range_set_ref(&mut self, id: RangeSetId) {
        match self.range_sets.release(id.index(), id.generation()) {
            None => stale_range_set(id),
            Some(Release::Shared) => {}
            Some(Release::Destroyed(_)) => tracing::debug!(%id, "destroying range set"),
        }
    }
}

#[cold]
#[track_caller]
fn stale_field_class(id: FieldClassId) -> ! {
    panic!("stale field class handle {id:?}")
}

#[cold]
#[track_caller]
fn stale_range_set(id: RangeSetId) -> ! {
    panic!("stale range set handle {id:?}")
}

#[cold]
#[track_caller]
pub(crate) fn wrong_signedness<T: RangeBound>(found_signed: bool) -> ! {
    panic!(
        "expected {} range set, found {} range set",
        crate::range_set::signedness_name(T::SIGNED),
        crate::range_set::signedness_name(found_signed)
    )
}

/// Grow the stack when less than this remains.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment.
#[cfg(not(target_arch = "wasm32"))]
const STACK_SEGMENT: usize = 1024 * 1024;

/// Run `f`, growing the stack first if it is nearly exhausted. Wraps every
/// recursive walk over the field class graph.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Tests use expect for clarity")]
mod tests;
