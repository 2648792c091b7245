//! The field class node.
//!
//! A `FieldClass` is one node of the schema graph: a closed sum over the
//! supported kinds plus the life-cycle flags. Nodes refer to each other by
//! [`FieldClassId`] and to range sets by [`RangeSetId`]; the [`Pool`]
//! resolves those handles and owns the reference counts.
//!
//! Read access lives here. Kind-specific accessors panic when called on the
//! wrong kind: that is a caller bug, not a runtime condition.
//!
//! [`Pool`]: crate::Pool

use std::fmt;

use smallvec::SmallVec;

use crate::container::NamedFieldClassContainer;
use crate::enumeration::MappingTable;
use crate::{FieldClassFlags, FieldClassId, FieldClassType, FieldPath, RangeSetId};

/// Default integer field value range, in bits.
pub const DEFAULT_FIELD_VALUE_RANGE: u64 = 64;

/// Preferred base to display integer field values in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayBase {
    Binary,
    Octal,
    #[default]
    Decimal,
    Hexadecimal,
}

impl DisplayBase {
    /// Numeric radix.
    pub const fn radix(self) -> u32 {
        match self {
            DisplayBase::Binary => 2,
            DisplayBase::Octal => 8,
            DisplayBase::Decimal => 10,
            DisplayBase::Hexadecimal => 16,
        }
    }
}

/// Attributes shared by integers and enumerations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IntegerAttrs {
    pub(crate) field_value_range: u64,
    pub(crate) display_base: DisplayBase,
}

impl Default for IntegerAttrs {
    fn default() -> Self {
        Self {
            field_value_range: DEFAULT_FIELD_VALUE_RANGE,
            display_base: DisplayBase::default(),
        }
    }
}

/// Enumeration: integer attributes plus labelled ranges.
#[derive(Clone, Debug, Default)]
pub struct Enumeration {
    pub(crate) int: IntegerAttrs,
    pub(crate) mappings: MappingTable,
}

/// Variant selected by an integer field.
#[derive(Clone, Debug)]
pub struct SelectorVariant {
    pub(crate) options: NamedFieldClassContainer,
    pub(crate) selector: FieldClassId,
    pub(crate) selector_path: Option<FieldPath>,
}

/// Kind-specific payload of a field class.
#[derive(Clone, Debug)]
pub enum FieldClassKind {
    UnsignedInteger(IntegerAttrs),
    SignedInteger(IntegerAttrs),
    UnsignedEnumeration(Enumeration),
    SignedEnumeration(Enumeration),
    Real {
        single_precision: bool,
    },
    String,
    Structure(NamedFieldClassContainer),
    VariantWithoutSelector(NamedFieldClassContainer),
    VariantWithUnsignedSelector(SelectorVariant),
    VariantWithSignedSelector(SelectorVariant),
    StaticArray {
        element: FieldClassId,
        length: u64,
    },
    DynamicArray {
        element: FieldClassId,
        length: Option<FieldClassId>,
        length_path: Option<FieldPath>,
    },
}

impl FieldClassKind {
    pub const fn field_class_type(&self) -> FieldClassType {
        match self {
            FieldClassKind::UnsignedInteger(_) => FieldClassType::UnsignedInteger,
            FieldClassKind::SignedInteger(_) => FieldClassType::SignedInteger,
            FieldClassKind::UnsignedEnumeration(_) => FieldClassType::UnsignedEnumeration,
            FieldClassKind::SignedEnumeration(_) => FieldClassType::SignedEnumeration,
            FieldClassKind::Real { .. } => FieldClassType::Real,
            FieldClassKind::String => FieldClassType::String,
            FieldClassKind::Structure(_) => FieldClassType::Structure,
            FieldClassKind::VariantWithoutSelector(_) => FieldClassType::VariantWithoutSelector,
            FieldClassKind::VariantWithUnsignedSelector(_) => {
                FieldClassType::VariantWithUnsignedSelector
            }
            FieldClassKind::VariantWithSignedSelector(_) => {
                FieldClassType::VariantWithSignedSelector
            }
            FieldClassKind::StaticArray { .. } => FieldClassType::StaticArray,
            FieldClassKind::DynamicArray { .. } => FieldClassType::DynamicArray,
        }
    }
}

/// Handles a field class holds references on.
#[derive(Default)]
pub(crate) struct Children {
    pub(crate) field_classes: SmallVec<[FieldClassId; 4]>,
    pub(crate) range_sets: SmallVec<[RangeSetId; 4]>,
}

impl Children {
    fn push_entries(&mut self, container: &NamedFieldClassContainer) {
        for entry in container {
            self.field_classes.push(entry.field_class());
            if let Some(ranges) = entry.ranges() {
                self.range_sets.push(ranges);
            }
        }
    }
}

/// A type descriptor node.
#[derive(Clone, Debug)]
pub struct FieldClass {
    pub(crate) kind: FieldClassKind,
    pub(crate) flags: FieldClassFlags,
}

impl FieldClass {
    pub(crate) fn new(kind: FieldClassKind) -> Self {
        Self {
            kind,
            flags: FieldClassFlags::empty(),
        }
    }

    #[inline]
    pub fn kind(&self) -> &FieldClassKind {
        &self.kind
    }

    #[inline]
    pub fn field_class_type(&self) -> FieldClassType {
        self.kind.field_class_type()
    }

    #[inline]
    pub fn flags(&self) -> FieldClassFlags {
        self.flags
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.flags.is_frozen()
    }

    #[inline]
    pub fn is_part_of_trace_class(&self) -> bool {
        self.flags.is_part_of_trace_class()
    }

    // === Integers ===

    fn integer_attrs(&self) -> &IntegerAttrs {
        match &self.kind {
            FieldClassKind::UnsignedInteger(a) | FieldClassKind::SignedInteger(a) => a,
            FieldClassKind::UnsignedEnumeration(e) | FieldClassKind::SignedEnumeration(e) => {
                &e.int
            }
            _ => self.wrong_kind("an integer"),
        }
    }

    /// Number of bits of the integer's value range.
    pub fn field_value_range(&self) -> u64 {
        self.integer_attrs().field_value_range
    }

    pub fn preferred_display_base(&self) -> DisplayBase {
        self.integer_attrs().display_base
    }

    // === Enumerations ===

    /// Mapping table of an enumeration.
    pub fn mappings(&self) -> &MappingTable {
        match &self.kind {
            FieldClassKind::UnsignedEnumeration(e) | FieldClassKind::SignedEnumeration(e) => {
                &e.mappings
            }
            _ => self.wrong_kind("an enumeration"),
        }
    }

    // === Reals ===

    pub fn is_single_precision(&self) -> bool {
        match self.kind {
            FieldClassKind::Real { single_precision } => single_precision,
            _ => self.wrong_kind("a real"),
        }
    }

    // === Structures and variants ===

    /// Members of a structure or options of a variant.
    pub fn entries(&self) -> &NamedFieldClassContainer {
        match &self.kind {
            FieldClassKind::Structure(c) | FieldClassKind::VariantWithoutSelector(c) => c,
            FieldClassKind::VariantWithUnsignedSelector(v)
            | FieldClassKind::VariantWithSignedSelector(v) => &v.options,
            _ => self.wrong_kind("a structure or variant"),
        }
    }

    /// Members of a structure.
    pub fn members(&self) -> &NamedFieldClassContainer {
        match &self.kind {
            FieldClassKind::Structure(c) => c,
            _ => self.wrong_kind("a structure"),
        }
    }

    /// Options of a variant.
    pub fn options(&self) -> &NamedFieldClassContainer {
        match &self.kind {
            FieldClassKind::VariantWithoutSelector(c) => c,
            FieldClassKind::VariantWithUnsignedSelector(v)
            | FieldClassKind::VariantWithSignedSelector(v) => &v.options,
            _ => self.wrong_kind("a variant"),
        }
    }

    fn selector_variant(&self) -> &SelectorVariant {
        match &self.kind {
            FieldClassKind::VariantWithUnsignedSelector(v)
            | FieldClassKind::VariantWithSignedSelector(v) => v,
            _ => self.wrong_kind("a variant with selector"),
        }
    }

    pub fn selector_field_class(&self) -> FieldClassId {
        self.selector_variant().selector
    }

    /// Resolved selector location; `None` until the resolver injects it.
    pub fn selector_field_path(&self) -> Option<&FieldPath> {
        self.selector_variant().selector_path.as_ref()
    }

    // === Arrays ===

    pub fn element_field_class(&self) -> FieldClassId {
        match self.kind {
            FieldClassKind::StaticArray { element, .. }
            | FieldClassKind::DynamicArray { element, .. } => element,
            _ => self.wrong_kind("an array"),
        }
    }

    pub fn static_length(&self) -> u64 {
        match self.kind {
            FieldClassKind::StaticArray { length, .. } => length,
            _ => self.wrong_kind("a static array"),
        }
    }

    pub fn length_field_class(&self) -> Option<FieldClassId> {
        match self.kind {
            FieldClassKind::DynamicArray { length, .. } => length,
            _ => self.wrong_kind("a dynamic array"),
        }
    }

    /// Resolved length location; `None` until the resolver injects it.
    pub fn length_field_path(&self) -> Option<&FieldPath> {
        match &self.kind {
            FieldClassKind::DynamicArray { length_path, .. } => length_path.as_ref(),
            _ => self.wrong_kind("a dynamic array"),
        }
    }

    // === Graph edges ===

    /// Field classes this node holds a reference on.
    ///
    /// Covers members, options, elements, selectors and lengths.
    pub(crate) fn children(&self) -> Children {
        let mut out = Children::default();
        match &self.kind {
            FieldClassKind::UnsignedInteger(_)
            | FieldClassKind::SignedInteger(_)
            | FieldClassKind::Real { .. }
            | FieldClassKind::String => {}
            FieldClassKind::UnsignedEnumeration(e) | FieldClassKind::SignedEnumeration(e) => {
                out.range_sets.extend(e.mappings.iter().map(|m| m.ranges()));
            }
            FieldClassKind::Structure(c) | FieldClassKind::VariantWithoutSelector(c) => {
                out.push_entries(c);
            }
            FieldClassKind::VariantWithUnsignedSelector(v)
            | FieldClassKind::VariantWithSignedSelector(v) => {
                out.push_entries(&v.options);
                out.field_classes.push(v.selector);
            }
            FieldClassKind::StaticArray { element, .. } => out.field_classes.push(*element),
            FieldClassKind::DynamicArray {
                element, length, ..
            } => {
                out.field_classes.push(*element);
                out.field_classes.extend(*length);
            }
        }
        out
    }

    /// Field classes that belong to this node's published subtree.
    ///
    /// Selector and length field classes are not included: they belong to
    /// the scope the field path points into and are published from there.
    pub(crate) fn subtree_children(&self) -> SmallVec<[FieldClassId; 4]> {
        match &self.kind {
            FieldClassKind::Structure(c) | FieldClassKind::VariantWithoutSelector(c) => {
                c.iter().map(|e| e.field_class()).collect()
            }
            FieldClassKind::VariantWithUnsignedSelector(v)
            | FieldClassKind::VariantWithSignedSelector(v) => {
                v.options.iter().map(|e| e.field_class()).collect()
            }
            FieldClassKind::StaticArray { element, .. }
            | FieldClassKind::DynamicArray { element, .. } => SmallVec::from_elem(*element, 1),
            _ => SmallVec::new(),
        }
    }

    // === Mutable access (pool only) ===

    pub(crate) fn integer_attrs_mut(&mut self) -> &mut IntegerAttrs {
        let ty = self.field_class_type();
        match &mut self.kind {
            FieldClassKind::UnsignedInteger(a) | FieldClassKind::SignedInteger(a) => a,
            FieldClassKind::UnsignedEnumeration(e) | FieldClassKind::SignedEnumeration(e) => {
                &mut e.int
            }
            _ => wrong_kind(ty, "an integer"),
        }
    }

    pub(crate) fn mappings_mut(&mut self) -> &mut MappingTable {
        let ty = self.field_class_type();
        match &mut self.kind {
            FieldClassKind::UnsignedEnumeration(e) | FieldClassKind::SignedEnumeration(e) => {
                &mut e.mappings
            }
            _ => wrong_kind(ty, "an enumeration"),
        }
    }

    pub(crate) fn single_precision_mut(&mut self) -> &mut bool {
        let ty = self.field_class_type();
        match &mut self.kind {
            FieldClassKind::Real { single_precision } => single_precision,
            _ => wrong_kind(ty, "a real"),
        }
    }

    pub(crate) fn entries_mut(&mut self) -> &mut NamedFieldClassContainer {
        let ty = self.field_class_type();
        match &mut self.kind {
            FieldClassKind::Structure(c) | FieldClassKind::VariantWithoutSelector(c) => c,
            FieldClassKind::VariantWithUnsignedSelector(v)
            | FieldClassKind::VariantWithSignedSelector(v) => &mut v.options,
            _ => wrong_kind(ty, "a structure or variant"),
        }
    }

    pub(crate) fn selector_path_mut(&mut self) -> &mut Option<FieldPath> {
        let ty = self.field_class_type();
        match &mut self.kind {
            FieldClassKind::VariantWithUnsignedSelector(v)
            | FieldClassKind::VariantWithSignedSelector(v) => &mut v.selector_path,
            _ => wrong_kind(ty, "a variant with selector"),
        }
    }

    pub(crate) fn length_path_mut(&mut self) -> &mut Option<FieldPath> {
        let ty = self.field_class_type();
        match &mut self.kind {
            FieldClassKind::DynamicArray { length_path, .. } => length_path,
            _ => wrong_kind(ty, "a dynamic array"),
        }
    }

    #[track_caller]
    pub(crate) fn wrong_kind(&self, expected: &str) -> ! {
        wrong_kind(self.field_class_type(), expected)
    }
}

#[cold]
#[track_caller]
fn wrong_kind(found: FieldClassType, expected: &str) -> ! {
    panic!("expected {expected} field class, found {found} field class")
}

impl fmt::Display for DisplayBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DisplayBase::Binary => "bin",
            DisplayBase::Octal => "oct",
            DisplayBase::Decimal => "dec",
            DisplayBase::Hexadecimal => "hex",
        })
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Tests use expect for clarity")]
mod tests;
