//! Field class constructors.
//!
//! Every constructor returns a hot field class holding one reference owned
//! by the caller. Constructors that take child field classes (array
//! elements, variant selectors, dynamic array lengths) take a reference on
//! each child and freeze it.

use crate::container::NamedFieldClassContainer;
use crate::field_class::{Enumeration, IntegerAttrs, SelectorVariant};
use crate::{Error, FieldClass, FieldClassId, FieldClassKind, Pool, Result};

impl Pool {
    // === Scalars ===

    /// Create a 64-bit unsigned integer field class, displayed in decimal.
    pub fn create_unsigned_integer(&mut self) -> Result<FieldClassId> {
        self.insert(FieldClass::new(FieldClassKind::UnsignedInteger(
            IntegerAttrs::default(),
        )))
    }

    /// Create a 64-bit signed integer field class, displayed in decimal.
    pub fn create_signed_integer(&mut self) -> Result<FieldClassId> {
        self.insert(FieldClass::new(FieldClassKind::SignedInteger(
            IntegerAttrs::default(),
        )))
    }

    /// Create an unsigned enumeration field class with no mappings.
    pub fn create_unsigned_enumeration(&mut self) -> Result<FieldClassId> {
        self.insert(FieldClass::new(FieldClassKind::UnsignedEnumeration(
            Enumeration::default(),
        )))
    }

    /// Create a signed enumeration field class with no mappings.
    pub fn create_signed_enumeration(&mut self) -> Result<FieldClassId> {
        self.insert(FieldClass::new(FieldClassKind::SignedEnumeration(
            Enumeration::default(),
        )))
    }

    /// Create a double precision real field class.
    pub fn create_real(&mut self) -> Result<FieldClassId> {
        self.insert(FieldClass::new(FieldClassKind::Real {
            single_precision: false,
        }))
    }

    pub fn create_string(&mut self) -> Result<FieldClassId> {
        self.insert(FieldClass::new(FieldClassKind::String))
    }

    // === Containers ===

    /// Create an empty structure field class.
    pub fn create_structure(&mut self) -> Result<FieldClassId> {
        self.insert(FieldClass::new(FieldClassKind::Structure(
            NamedFieldClassContainer::new(),
        )))
    }

    /// Create an empty variant field class.
    ///
    /// Without a selector the result is a variant without selector. With
    /// one, the selector's signedness picks between the unsigned and signed
    /// selector kinds; the selector must be an integer or enumeration.
    pub fn create_variant(&mut self, selector: Option<FieldClassId>) -> Result<FieldClassId> {
        let Some(selector) = selector else {
            return self.insert(FieldClass::new(FieldClassKind::VariantWithoutSelector(
                NamedFieldClassContainer::new(),
            )));
        };

        let selector_ty = self.field_class_type(selector);
        if !selector_ty.is_integer() {
            return Err(Error::InvalidSelectorFieldClass { found: selector_ty });
        }

        let variant = SelectorVariant {
            options: NamedFieldClassContainer::new(),
            selector,
            selector_path: None,
        };
        let kind = if selector_ty.is_unsigned_integer() {
            FieldClassKind::VariantWithUnsignedSelector(variant)
        } else {
            FieldClassKind::VariantWithSignedSelector(variant)
        };

        let id = self.insert(FieldClass::new(kind))?;
        self.adopt(selector);
        Ok(id)
    }

    // === Arrays ===

    /// Create a static array of `length` elements of `element`.
    pub fn create_static_array(
        &mut self,
        element: FieldClassId,
        length: u64,
    ) -> Result<FieldClassId> {
        // Resolve before inserting so a stale element panics with nothing
        // allocated.
        let _ = self.get(element);
        let id = self.insert(FieldClass::new(FieldClassKind::StaticArray { element, length }))?;
        self.adopt(element);
        Ok(id)
    }

    /// Create a dynamic array of `element`.
    ///
    /// `length`, when given, is the unsigned integer field class holding the
    /// array's length in the data stream.
    pub fn create_dynamic_array(
        &mut self,
        element: FieldClassId,
        length: Option<FieldClassId>,
    ) -> Result<FieldClassId> {
        let _ = self.get(element);
        if let Some(length) = length {
            let found = self.field_class_type(length);
            if !found.is_unsigned_integer() {
                return Err(Error::InvalidLengthFieldClass { found });
            }
        }

        let id = self.insert(FieldClass::new(FieldClassKind::DynamicArray {
            element,
            length,
            length_path: None,
        }))?;
        self.adopt(element);
        if let Some(length) = length {
            self.adopt(length);
        }
        Ok(id)
    }

    /// Take the owning reference on a new child and freeze it.
    pub(crate) fn adopt(&mut self, child: FieldClassId) {
        self.get_ref(child);
        self.freeze(child);
    }
}
