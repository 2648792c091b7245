//! Field class type tag.
//!
//! Every field class carries a `FieldClassType` fixed at creation. The tag
//! drives dispatch in the pool: setters and accessors match on it instead of
//! reinterpreting storage.
//!
//! # Tag Categories
//!
//! Discriminants are grouped so family checks are range comparisons:
//! - 0-3: Integers and enumerations (bit 0 set = signed)
//! - 8-9: Scalars without an integer layout
//! - 16-19: Named field class containers
//! - 32-33: Arrays

use std::fmt;

/// Field class kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FieldClassType {
    // === Integer family (0-7) ===
    /// Unsigned integer.
    UnsignedInteger = 0,
    /// Signed integer.
    SignedInteger = 1,
    /// Unsigned enumeration (unsigned integer with labelled ranges).
    UnsignedEnumeration = 2,
    /// Signed enumeration (signed integer with labelled ranges).
    SignedEnumeration = 3,

    // === Other scalars (8-15) ===
    /// IEEE 754 real number.
    Real = 8,
    /// Null-terminated string.
    String = 9,

    // === Named containers (16-31) ===
    /// Structure with ordered, uniquely named members.
    Structure = 16,
    /// Variant whose active option is chosen out of band.
    VariantWithoutSelector = 17,
    /// Variant selected by an unsigned integer field.
    VariantWithUnsignedSelector = 18,
    /// Variant selected by a signed integer field.
    VariantWithSignedSelector = 19,

    // === Arrays (32-47) ===
    /// Array with a length fixed in the field class.
    StaticArray = 32,
    /// Array whose length is read from another field.
    DynamicArray = 33,
}

impl FieldClassType {
    /// Integer or enumeration field class.
    #[inline]
    pub const fn is_integer(self) -> bool {
        (self as u8) < 8
    }

    /// Unsigned integer or unsigned enumeration field class.
    #[inline]
    pub const fn is_unsigned_integer(self) -> bool {
        self.is_integer() && (self as u8) & 1 == 0
    }

    /// Signed integer or signed enumeration field class.
    #[inline]
    pub const fn is_signed_integer(self) -> bool {
        self.is_integer() && (self as u8) & 1 == 1
    }

    /// Enumeration field class of either signedness.
    #[inline]
    pub const fn is_enumeration(self) -> bool {
        matches!(self, Self::UnsignedEnumeration | Self::SignedEnumeration)
    }

    /// Structure or any variant: backed by a named field class container.
    #[inline]
    pub const fn is_container(self) -> bool {
        let v = self as u8;
        v >= 16 && v < 32
    }

    /// Variant of any selector flavor.
    #[inline]
    pub const fn is_variant(self) -> bool {
        matches!(
            self,
            Self::VariantWithoutSelector
                | Self::VariantWithUnsignedSelector
                | Self::VariantWithSignedSelector
        )
    }

    /// Variant with an integer selector.
    #[inline]
    pub const fn is_variant_with_selector(self) -> bool {
        matches!(
            self,
            Self::VariantWithUnsignedSelector | Self::VariantWithSignedSelector
        )
    }

    /// Static or dynamic array.
    #[inline]
    pub const fn is_array(self) -> bool {
        matches!(self, Self::StaticArray | Self::DynamicArray)
    }

    /// Get the name of this tag as a static string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UnsignedInteger => "unsigned-integer",
            Self::SignedInteger => "signed-integer",
            Self::UnsignedEnumeration => "unsigned-enumeration",
            Self::SignedEnumeration => "signed-enumeration",
            Self::Real => "real",
            Self::String => "string",
            Self::Structure => "structure",
            Self::VariantWithoutSelector => "variant-without-selector",
            Self::VariantWithUnsignedSelector => "variant-with-unsigned-selector",
            Self::VariantWithSignedSelector => "variant-with-signed-selector",
            Self::StaticArray => "static-array",
            Self::DynamicArray => "dynamic-array",
        }
    }
}

impl fmt::Debug for FieldClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldClassType::{}", self.name())
    }
}

impl fmt::Display for FieldClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const _: () = assert!(std::mem::size_of::<FieldClassType>() == 1);

#[cfg(test)]
mod tests;
