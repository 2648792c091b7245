use super::*;
use crate::container::NamedFieldClass;

fn fc(index: u32) -> FieldClassId {
    FieldClassId::new(index, 0)
}

#[test]
fn integer_defaults() {
    let int = FieldClass::new(FieldClassKind::UnsignedInteger(IntegerAttrs::default()));
    assert_eq!(int.field_class_type(), FieldClassType::UnsignedInteger);
    assert_eq!(int.field_value_range(), 64);
    assert_eq!(int.preferred_display_base(), DisplayBase::Decimal);
    assert!(!int.is_frozen());
    assert!(!int.is_part_of_trace_class());
}

#[test]
fn enumeration_exposes_integer_attrs() {
    let e = FieldClass::new(FieldClassKind::SignedEnumeration(Enumeration::default()));
    assert_eq!(e.field_value_range(), DEFAULT_FIELD_VALUE_RANGE);
    assert!(e.mappings().is_empty());
}

#[test]
fn display_base_radix_and_display() {
    assert_eq!(DisplayBase::Binary.radix(), 2);
    assert_eq!(DisplayBase::Octal.radix(), 8);
    assert_eq!(DisplayBase::Hexadecimal.radix(), 16);
    assert_eq!(DisplayBase::Hexadecimal.to_string(), "hex");
}

#[test]
fn array_accessors() {
    let sa = FieldClass::new(FieldClassKind::StaticArray {
        element: fc(1),
        length: 4,
    });
    assert_eq!(sa.element_field_class(), fc(1));
    assert_eq!(sa.static_length(), 4);

    let da = FieldClass::new(FieldClassKind::DynamicArray {
        element: fc(2),
        length: Some(fc(3)),
        length_path: None,
    });
    assert_eq!(da.element_field_class(), fc(2));
    assert_eq!(da.length_field_class(), Some(fc(3)));
    assert!(da.length_field_path().is_none());
}

#[test]
fn children_of_selector_variant_include_selector_and_ranges() {
    let mut options = NamedFieldClassContainer::new();
    let ty = FieldClassType::VariantWithUnsignedSelector;
    options
        .append(NamedFieldClass::new("a", fc(1), Some(RangeSetId::new(0, 0))), ty)
        .expect("fresh");
    options
        .append(NamedFieldClass::new("b", fc(2), Some(RangeSetId::new(1, 0))), ty)
        .expect("fresh");

    let var = FieldClass::new(FieldClassKind::VariantWithUnsignedSelector(SelectorVariant {
        options,
        selector: fc(9),
        selector_path: None,
    }));

    let children = var.children();
    assert_eq!(children.field_classes.as_slice(), [fc(1), fc(2), fc(9)]);
    assert_eq!(
        children.range_sets.as_slice(),
        [RangeSetId::new(0, 0), RangeSetId::new(1, 0)]
    );

    // The selector is owned but not part of the published subtree.
    assert_eq!(var.subtree_children().as_slice(), [fc(1), fc(2)]);
    assert_eq!(var.selector_field_class(), fc(9));
    assert_eq!(var.options().len(), 2);
}

#[test]
fn children_of_dynamic_array_include_length() {
    let da = FieldClass::new(FieldClassKind::DynamicArray {
        element: fc(5),
        length: Some(fc(6)),
        length_path: None,
    });
    assert_eq!(da.children().field_classes.as_slice(), [fc(5), fc(6)]);
    assert_eq!(da.subtree_children().as_slice(), [fc(5)]);
}

#[test]
fn leaves_have_no_children() {
    let s = FieldClass::new(FieldClassKind::String);
    assert!(s.children().field_classes.is_empty());
    assert!(s.subtree_children().is_empty());
}

#[test]
#[should_panic(expected = "expected an integer field class, found string field class")]
fn integer_accessor_on_string_panics() {
    let s = FieldClass::new(FieldClassKind::String);
    let _ = s.field_value_range();
}

#[test]
#[should_panic(expected = "expected a structure field class, found variant-without-selector")]
fn members_on_variant_panics() {
    let v = FieldClass::new(FieldClassKind::VariantWithoutSelector(
        NamedFieldClassContainer::new(),
    ));
    let _ = v.members();
}
