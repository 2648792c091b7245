//! Field class life-cycle flags.
//!
//! A field class moves through two one-way states: it becomes `FROZEN` when
//! composed into a parent (or frozen explicitly), and `PART_OF_TRACE_CLASS`
//! when its root is published in a trace class. Neither flag is ever cleared.

use bitflags::bitflags;

bitflags! {
    /// Life-cycle state of a field class.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct FieldClassFlags: u8 {
        /// No attribute or child list may change anymore.
        const FROZEN = 1 << 0;
        /// Published in a trace class. Implies `FROZEN`.
        const PART_OF_TRACE_CLASS = 1 << 1;
    }
}

impl FieldClassFlags {
    /// Flags that a seal traversal sets for the given target state.
    ///
    /// Publishing always freezes too, which keeps
    /// `PART_OF_TRACE_CLASS ⇒ FROZEN` true by construction.
    #[inline]
    pub const fn sealing(target: Self) -> Self {
        if target.contains(Self::PART_OF_TRACE_CLASS) {
            target.union(Self::FROZEN)
        } else {
            target
        }
    }

    #[inline]
    pub const fn is_frozen(self) -> bool {
        self.contains(Self::FROZEN)
    }

    #[inline]
    pub const fn is_part_of_trace_class(self) -> bool {
        self.contains(Self::PART_OF_TRACE_CLASS)
    }
}

#[cfg(test)]
mod tests;
