//! Field class schema layer of the trace IR.
//!
//! Field classes are type descriptors for the fields of trace data: integers,
//! enumerations, reals, strings, structures, variants and arrays. They are
//! built incrementally, frozen as they are composed into parents and finally
//! published into a trace class, after which the codec reads them without
//! further mutation.
//!
//! # Storage
//!
//! Every field class and integer range set lives in a [`Pool`] and is
//! addressed through a generational handle ([`FieldClassId`],
//! [`RangeSetId`]). The pool keeps a reference count per object: creation
//! hands one reference to the caller, composition gives the parent one, and
//! [`Pool::put_ref`] releases it. Dropping the last reference destroys the
//! object and releases its children.
//!
//! # Errors
//!
//! Data-dependent failures (duplicate names, overlapping selector ranges,
//! mutation of a frozen field class, ...) are returned as [`Error`] and leave
//! the pool unchanged. Caller bugs such as stale handles or kind mismatches
//! panic.
//!
//! ```
//! use tir_field_class::{Pool, StatusCode};
//!
//! let mut pool = Pool::new();
//! let selector = pool.create_unsigned_integer()?;
//! let variant = pool.create_variant(Some(selector))?;
//!
//! let low = pool.create_unsigned_range_set()?;
//! pool.add_range(low, 0u64, 10)?;
//! let high = pool.create_unsigned_range_set()?;
//! pool.add_range(high, 10u64, 20)?;
//!
//! let a = pool.create_string()?;
//! let b = pool.create_real()?;
//! pool.append_option_with_ranges(variant, "a", a, low)?;
//! let err = pool.append_option_with_ranges(variant, "b", b, high).unwrap_err();
//! assert_eq!(err.code(), StatusCode::OverlappingRanges);
//! # Ok::<(), tir_field_class::Error>(())
//! ```

mod container;
mod enumeration;
mod error;
mod field_class;
mod field_path;
mod flags;
mod id;
mod pool;
pub mod range_set;
mod tag;
#[cfg(feature = "tracing-setup")]
pub mod tracing_setup;

pub use container::{NamedFieldClass, NamedFieldClassContainer};
pub use enumeration::{EnumerationMapping, Labels, MappingTable};
pub use error::{Error, Result, StatusCode};
pub use field_class::{
    DisplayBase, Enumeration, FieldClass, FieldClassKind, IntegerAttrs, SelectorVariant,
    DEFAULT_FIELD_VALUE_RANGE,
};
pub use field_path::{FieldPath, FieldPathItem, Scope};
pub use flags::FieldClassFlags;
pub use id::{FieldClassId, RangeSetId};
pub use pool::Pool;
pub use range_set::{AnyRangeSet, IntegerRange, RangeBound, RangeSet, SignedRangeSet, UnsignedRangeSet};
pub use tag::FieldClassType;

// Handles are passed around by value everywhere; keep them at 8 bytes.
const _: () = assert!(std::mem::size_of::<FieldClassId>() == 8);
const _: () = assert!(std::mem::size_of::<RangeSetId>() == 8);
const _: () = assert!(std::mem::size_of::<FieldClassFlags>() == 1);

// A frozen schema is read from codec threads through `&Pool`.
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Pool>();
};
