//! Field class mutation.
//!
//! Every fallible operation validates first and mutates last, so an `Err`
//! leaves the pool exactly as it was.

use crate::container::{NamedFieldClass, NamedFieldClassContainer};
use crate::enumeration::{EnumerationMapping, Labels};
use crate::range_set::{ranges_overlap, signedness_name, IntegerRange, RangeBound};
use crate::{DisplayBase, Error, FieldClassId, FieldClassType, FieldPath, Pool, RangeSetId, Result};

impl Pool {
    // === Attribute setters ===

    /// Set the width, in bits, of an integer or enumeration's values.
    ///
    /// For enumerations, every existing mapping must be representable in the
    /// new width.
    pub fn set_field_value_range(&mut self, id: FieldClassId, bits: u64) -> Result<()> {
        let fc = self.get(id);
        let ty = fc.field_class_type();
        if !ty.is_integer() {
            fc.wrong_kind("an integer");
        }
        self.ensure_hot(id)?;
        if !(1..=64).contains(&bits) {
            return Err(Error::InvalidBitWidth { bits });
        }
        if ty.is_enumeration() {
            for mapping in fc.mappings() {
                if !self.any_range_set(mapping.ranges()).fits_in_bits(bits) {
                    return Err(Error::MappingOutOfRange {
                        label: mapping.label().to_owned(),
                        bits,
                    });
                }
            }
        }

        self.get_mut(id).integer_attrs_mut().field_value_range = bits;
        tracing::debug!(%id, bits, "set field value range");
        Ok(())
    }

    pub fn set_preferred_display_base(
        &mut self,
        id: FieldClassId,
        base: DisplayBase,
    ) -> Result<()> {
        let fc = self.get_mut(id);
        let frozen = fc.is_frozen();
        let ty = fc.field_class_type();
        let attrs = fc.integer_attrs_mut();
        if frozen {
            return Err(Error::frozen_field_class(id, ty));
        }
        attrs.display_base = base;
        Ok(())
    }

    pub fn set_is_single_precision(&mut self, id: FieldClassId, single: bool) -> Result<()> {
        let fc = self.get_mut(id);
        let frozen = fc.is_frozen();
        let ty = fc.field_class_type();
        let slot = fc.single_precision_mut();
        if frozen {
            return Err(Error::frozen_field_class(id, ty));
        }
        *slot = single;
        Ok(())
    }

    // === Structures and variants ===

    /// Append a member to a structure.
    ///
    /// The structure takes a reference on `member` and freezes it.
    pub fn append_member(
        &mut self,
        structure: FieldClassId,
        name: &str,
        member: FieldClassId,
    ) -> Result<()> {
        let fc = self.get(structure);
        if fc.field_class_type() != FieldClassType::Structure {
            fc.wrong_kind("a structure");
        }
        self.append_entry(structure, NamedFieldClass::new(name, member, None))
    }

    /// Append an option to a variant without selector.
    pub fn append_option(
        &mut self,
        variant: FieldClassId,
        name: &str,
        option: FieldClassId,
    ) -> Result<()> {
        let fc = self.get(variant);
        if fc.field_class_type() != FieldClassType::VariantWithoutSelector {
            fc.wrong_kind("a variant without selector");
        }
        self.append_entry(variant, NamedFieldClass::new(name, option, None))
    }

    /// Append an option selected by `ranges` to a variant with selector.
    ///
    /// `ranges` must be non-empty and must not intersect the ranges of any
    /// existing option. On success the variant references and freezes both
    /// the option and the range set.
    ///
    /// # Panics
    /// Panics if the signedness of `ranges` differs from the selector's.
    pub fn append_option_with_ranges(
        &mut self,
        variant: FieldClassId,
        name: &str,
        option: FieldClassId,
        ranges: RangeSetId,
    ) -> Result<()> {
        let fc = self.get(variant);
        let ty = fc.field_class_type();
        if !ty.is_variant_with_selector() {
            fc.wrong_kind("a variant with selector");
        }

        let selector_signed = ty == FieldClassType::VariantWithSignedSelector;
        let set = self.any_range_set(ranges);
        assert!(
            set.is_signed() == selector_signed,
            "cannot select an option of a variant with {} selector with a {} range set",
            signedness_name(selector_signed),
            signedness_name(set.is_signed())
        );
        if set.is_empty() {
            return Err(Error::EmptyRangeSet {
                name: name.to_owned(),
            });
        }

        let overlaps = if selector_signed {
            self.options_overlap::<i64>(fc.options(), ranges)
        } else {
            self.options_overlap::<u64>(fc.options(), ranges)
        };
        if overlaps {
            return Err(Error::OverlappingRanges {
                name: name.to_owned(),
            });
        }

        self.append_entry(variant, NamedFieldClass::new(name, option, Some(ranges)))
    }

    /// Whether the ranges of `options` and `new` together overlap.
    fn options_overlap<T: RangeBound>(
        &self,
        options: &NamedFieldClassContainer,
        new: RangeSetId,
    ) -> bool {
        let mut union: Vec<IntegerRange<T>> = options
            .iter()
            .filter_map(NamedFieldClass::ranges)
            .flat_map(|rs| self.range_set::<T>(rs).iter().copied())
            .collect();
        union.extend(self.range_set::<T>(new).iter().copied());
        ranges_overlap(&union)
    }

    fn append_entry(&mut self, owner: FieldClassId, entry: NamedFieldClass) -> Result<()> {
        let child = entry.field_class();
        assert!(child != owner, "cannot append field class {owner} to itself");
        let _ = self.get(child);

        let fc = self.get(owner);
        let ty = fc.field_class_type();
        fc.entries().ensure_name_available(entry.name(), ty)?;
        self.ensure_hot(owner)?;

        let ranges = entry.ranges();
        tracing::debug!(%owner, name = entry.name(), %child, "appending entry");
        self.get_mut(owner).entries_mut().append(entry, ty)?;
        self.adopt(child);
        if let Some(ranges) = ranges {
            self.get_range_set_ref(ranges);
            self.any_range_set_mut(ranges).freeze();
        }
        Ok(())
    }

    // === Enumerations ===

    /// Add a `label` mapping to `ranges`.
    ///
    /// Ranges of different mappings may overlap. The enumeration references
    /// and freezes the range set.
    ///
    /// # Panics
    /// Panics if the signedness of `ranges` differs from the enumeration's.
    pub fn add_mapping(
        &mut self,
        enumeration: FieldClassId,
        label: &str,
        ranges: RangeSetId,
    ) -> Result<()> {
        let fc = self.get(enumeration);
        let ty = fc.field_class_type();
        if !ty.is_enumeration() {
            fc.wrong_kind("an enumeration");
        }

        let set_signed = self.any_range_set(ranges).is_signed();
        assert!(
            set_signed == ty.is_signed_integer(),
            "cannot map a {} range set in a {ty} field class",
            signedness_name(set_signed)
        );
        fc.mappings().ensure_label_available(label)?;
        self.ensure_hot(enumeration)?;

        tracing::debug!(%enumeration, label, %ranges, "adding mapping");
        self.get_mut(enumeration).mappings_mut().add(label, ranges)?;
        self.get_range_set_ref(ranges);
        self.any_range_set_mut(ranges).freeze();
        Ok(())
    }

    /// Labels of every mapping whose ranges contain `value`, in mapping order.
    ///
    /// # Panics
    /// Panics if `T`'s signedness differs from the enumeration's.
    pub fn labels_for_value<T: RangeBound>(&self, enumeration: FieldClassId, value: T) -> Labels<'_> {
        let fc = self.get(enumeration);
        let ty = fc.field_class_type();
        if !ty.is_enumeration() {
            fc.wrong_kind("an enumeration");
        }
        assert!(
            ty.is_signed_integer() == T::SIGNED,
            "cannot look up a {} value in a {ty} field class",
            signedness_name(T::SIGNED)
        );
        fc.mappings()
            .labels_for_value(value, move |rs| self.any_range_set(rs))
    }

    pub fn mapping_count(&self, enumeration: FieldClassId) -> usize {
        self.get(enumeration).mappings().len()
    }

    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn mapping_by_index(&self, enumeration: FieldClassId, index: usize) -> &EnumerationMapping {
        self.get(enumeration).mappings().get_by_index(index)
    }

    pub fn mapping_by_label(
        &self,
        enumeration: FieldClassId,
        label: &str,
    ) -> Option<&EnumerationMapping> {
        self.get(enumeration).mappings().get_by_label(label)
    }

    // === Field paths ===

    /// Record where the selector of `variant` lives.
    ///
    /// Set by the trace class resolver before publication.
    pub fn set_selector_field_path(&mut self, variant: FieldClassId, path: FieldPath) -> Result<()> {
        let fc = self.get_mut(variant);
        let published = fc.is_part_of_trace_class();
        let slot = fc.selector_path_mut();
        if published {
            return Err(Error::AlreadyPartOfTraceClass { fc: variant });
        }
        tracing::debug!(%variant, %path, "set selector field path");
        *slot = Some(path);
        Ok(())
    }

    /// Record where the length of dynamic array `array` lives.
    pub fn set_length_field_path(&mut self, array: FieldClassId, path: FieldPath) -> Result<()> {
        let fc = self.get_mut(array);
        let published = fc.is_part_of_trace_class();
        let has_length = fc.length_field_class().is_some();
        let slot = fc.length_path_mut();
        if published {
            return Err(Error::AlreadyPartOfTraceClass { fc: array });
        }
        if !has_length {
            return Err(Error::NoLengthFieldClass { fc: array });
        }
        tracing::debug!(%array, %path, "set length field path");
        *slot = Some(path);
        Ok(())
    }
}
