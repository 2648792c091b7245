//! Recoverable field class errors.
//!
//! Caller bugs (stale handles, out-of-bounds indices, wrong-kind access) are
//! not represented here: they panic. Everything in [`Error`] is a property of
//! the data being built and is deterministic, so retrying the same call with
//! the same input fails the same way.

use crate::{FieldClassId, FieldClassType};

/// Status taxonomy shared with the rest of the trace IR.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// An argument is out of its domain.
    InvalidArgument,
    /// The target object is in a state that forbids the operation.
    InvalidState,
    /// A container already has an entry with that name.
    DuplicateName,
    /// An enumeration already has a mapping with that label.
    DuplicateLabel,
    /// Selector variant option ranges would overlap.
    OverlappingRanges,
    /// Storage could not be allocated.
    MemoryError,
}

/// Field class layer error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The field class or range set is frozen.
    #[error("{object} is frozen")]
    Frozen { object: String },

    /// The field class is already part of a trace class.
    #[error("field class {fc} is already part of a trace class")]
    AlreadyPartOfTraceClass { fc: FieldClassId },

    /// A member or option with this name already exists.
    #[error("duplicate name `{name}` in {ty} field class")]
    DuplicateName { name: String, ty: FieldClassType },

    /// A mapping with this label already exists.
    #[error("duplicate mapping label `{label}` in enumeration field class")]
    DuplicateLabel { label: String },

    /// The new option's ranges intersect ranges of existing options.
    #[error("ranges of option `{name}` overlap ranges of existing options")]
    OverlappingRanges { name: String },

    /// A selector variant option needs at least one range.
    #[error("range set of option `{name}` is empty")]
    EmptyRangeSet { name: String },

    /// Range lower bound is greater than its upper bound.
    #[error("invalid range: lower bound {lower} is greater than upper bound {upper}")]
    InvalidRange { lower: i128, upper: i128 },

    /// Integer field value range outside [1, 64].
    #[error("unsupported field value range {bits} (expected 1 to 64 bits)")]
    InvalidBitWidth { bits: u64 },

    /// An enumeration mapping has values outside the requested range.
    #[error("mapping `{label}` has values outside a {bits}-bit field value range")]
    MappingOutOfRange { label: String, bits: u64 },

    /// Variant selector is not an integer field class.
    #[error("selector field class must be an integer, found {found}")]
    InvalidSelectorFieldClass { found: FieldClassType },

    /// Dynamic array length is not an unsigned integer field class.
    #[error("length field class must be an unsigned integer, found {found}")]
    InvalidLengthFieldClass { found: FieldClassType },

    /// A length field path was given to a dynamic array without length.
    #[error("dynamic array field class {fc} has no length field class")]
    NoLengthFieldClass { fc: FieldClassId },

    /// No more slots can be allocated in the pool.
    #[error("field class pool exhausted: {count} live slots")]
    PoolExhausted { count: usize },
}

impl Error {
    /// Map the error onto the status taxonomy.
    pub const fn code(&self) -> StatusCode {
        match self {
            Error::Frozen { .. } | Error::AlreadyPartOfTraceClass { .. } => {
                StatusCode::InvalidState
            }
            Error::DuplicateName { .. } => StatusCode::DuplicateName,
            Error::DuplicateLabel { .. } => StatusCode::DuplicateLabel,
            Error::OverlappingRanges { .. } => StatusCode::OverlappingRanges,
            Error::EmptyRangeSet { .. }
            | Error::InvalidRange { .. }
            | Error::InvalidBitWidth { .. }
            | Error::MappingOutOfRange { .. }
            | Error::InvalidSelectorFieldClass { .. }
            | Error::InvalidLengthFieldClass { .. }
            | Error::NoLengthFieldClass { .. } => StatusCode::InvalidArgument,
            Error::PoolExhausted { .. } => StatusCode::MemoryError,
        }
    }

    pub(crate) fn frozen_field_class(fc: FieldClassId, ty: FieldClassType) -> Self {
        Error::Frozen {
            object: format!("{ty} field class {fc}"),
        }
    }
}

/// Result alias for field class operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
