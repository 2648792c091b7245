//! Resolved field paths.
//!
//! A field path locates a selector or dynamic-array length field relative to
//! one of the root scopes of an event record. Paths are computed by the trace
//! class resolver and handed to the pool; this crate stores and exposes them
//! without interpreting them.

use std::fmt;

/// Root scope a field path starts from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scope {
    PacketContext,
    EventCommonContext,
    EventSpecificContext,
    EventPayload,
}

impl Scope {
    pub const fn name(self) -> &'static str {
        match self {
            Scope::PacketContext => "packet-context",
            Scope::EventCommonContext => "event-common-context",
            Scope::EventSpecificContext => "event-specific-context",
            Scope::EventPayload => "event-payload",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One step of a field path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldPathItem {
    /// Member or option at this index of a structure or variant.
    Index(u64),
    /// The element currently being decoded in an enclosing array.
    CurrentArrayElement,
}

impl fmt::Display for FieldPathItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPathItem::Index(i) => write!(f, "{i}"),
            FieldPathItem::CurrentArrayElement => f.write_str("<elem>"),
        }
    }
}

/// Opaque, externally resolved location of a field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldPath {
    root: Scope,
    items: Vec<FieldPathItem>,
}

impl FieldPath {
    pub fn new(root: Scope, items: impl IntoIterator<Item = FieldPathItem>) -> Self {
        Self {
            root,
            items: items.into_iter().collect(),
        }
    }

    #[inline]
    pub fn root(&self) -> Scope {
        self.root
    }

    #[inline]
    pub fn items(&self) -> &[FieldPathItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.root)?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}
