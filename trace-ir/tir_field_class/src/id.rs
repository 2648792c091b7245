//! Pool handles for field classes and range sets.
//!
//! A handle is a 32-bit slot index plus a 32-bit generation. Slots are
//! recycled once their last reference is released; the generation is bumped
//! on every recycle so a handle that outlived its object is detected instead
//! of silently aliasing the slot's next occupant.

use std::fmt;

/// Handle to a field class stored in a [`Pool`](crate::Pool).
///
/// Copy and cheap to compare. Holding a handle does not hold a reference:
/// ownership is tracked by the pool's reference counts.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct FieldClassId {
    index: u32,
    generation: u32,
}

/// Handle to an integer range set stored in a [`Pool`](crate::Pool).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct RangeSetId {
    index: u32,
    generation: u32,
}

macro_rules! impl_handle {
    ($ty:ident, $prefix:literal) => {
        impl $ty {
            #[inline]
            pub(crate) const fn new(index: u32, generation: u32) -> Self {
                Self { index, generation }
            }

            /// Slot index inside the pool.
            #[inline]
            pub const fn index(self) -> u32 {
                self.index
            }

            /// Generation of the slot when this handle was issued.
            #[inline]
            pub const fn generation(self) -> u32 {
                self.generation
            }
        }

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({}v{})", $prefix, self.index, self.generation)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $prefix, self.index)
            }
        }
    };
}

impl_handle!(FieldClassId, "fc");
impl_handle!(RangeSetId, "rs");

#[cfg(test)]
mod tests;
