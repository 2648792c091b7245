//! Freezing and trace class publication.
//!
//! Both walk the field class graph and set a flag on every node they visit;
//! they share one traversal. Freezing follows every reference a node holds
//! (children, selectors, lengths, range sets). Publication follows the
//! subtree only (members, options, elements) and implies freezing.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::ensure_sufficient_stack;
use crate::{Error, FieldClassFlags, FieldClassId, Pool, Result};

impl Pool {
    /// Make `id` and everything it references immutable.
    ///
    /// Idempotent. A frozen field class can still be released.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn freeze(&mut self, id: FieldClassId) {
        self.seal(id, FieldClassFlags::FROZEN);
        tracing::debug!(%id, "froze field class");
    }

    /// Publish `id` and its subtree into a trace class.
    ///
    /// Fails with `AlreadyPartOfTraceClass`, leaving every flag untouched,
    /// if any node of the subtree is already published or if the subtree
    /// reaches the same node twice.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn mark_part_of_trace_class(&mut self, id: FieldClassId) -> Result<()> {
        let mut seen = FxHashSet::default();
        self.check_unpublished(id, &mut seen)?;
        self.seal(id, FieldClassFlags::PART_OF_TRACE_CLASS);
        tracing::debug!(%id, nodes = seen.len(), "marked part of trace class");
        Ok(())
    }

    fn check_unpublished(&self, id: FieldClassId, seen: &mut FxHashSet<FieldClassId>) -> Result<()> {
        ensure_sufficient_stack(|| {
            let fc = self.get(id);
            if fc.is_part_of_trace_class() || !seen.insert(id) {
                return Err(Error::AlreadyPartOfTraceClass { fc: id });
            }
            for child in fc.subtree_children() {
                self.check_unpublished(child, seen)?;
            }
            Ok(())
        })
    }

    fn seal(&mut self, id: FieldClassId, target: FieldClassFlags) {
        ensure_sufficient_stack(|| {
            let flags = FieldClassFlags::sealing(target);
            let fc = self.get_mut(id);
            // Children of a sealed node were sealed with it.
            if fc.flags.contains(flags) {
                return;
            }
            fc.flags.insert(flags);

            let (children, range_sets) = if target.is_part_of_trace_class() {
                (fc.subtree_children(), SmallVec::new())
            } else {
                let children = fc.children();
                (children.field_classes, children.range_sets)
            };
            tracing::trace!(%id, ?flags, "sealed field class");

            for rs in range_sets {
                self.any_range_set_mut(rs).freeze();
            }
            for child in children {
                self.seal(child, target);
            }
        });
    }
}
