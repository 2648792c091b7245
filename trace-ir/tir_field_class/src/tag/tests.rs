use super::*;

const ALL: [FieldClassType; 12] = [
    FieldClassType::UnsignedInteger,
    FieldClassType::SignedInteger,
    FieldClassType::UnsignedEnumeration,
    FieldClassType::SignedEnumeration,
    FieldClassType::Real,
    FieldClassType::String,
    FieldClassType::Structure,
    FieldClassType::VariantWithoutSelector,
    FieldClassType::VariantWithUnsignedSelector,
    FieldClassType::VariantWithSignedSelector,
    FieldClassType::StaticArray,
    FieldClassType::DynamicArray,
];

#[test]
fn integer_family() {
    let ints: Vec<_> = ALL.iter().copied().filter(|t| t.is_integer()).collect();
    assert_eq!(
        ints,
        vec![
            FieldClassType::UnsignedInteger,
            FieldClassType::SignedInteger,
            FieldClassType::UnsignedEnumeration,
            FieldClassType::SignedEnumeration,
        ]
    );
}

#[test]
fn signedness_split() {
    assert!(FieldClassType::UnsignedInteger.is_unsigned_integer());
    assert!(FieldClassType::UnsignedEnumeration.is_unsigned_integer());
    assert!(!FieldClassType::SignedInteger.is_unsigned_integer());
    assert!(FieldClassType::SignedEnumeration.is_signed_integer());

    // Non-integers are neither signed nor unsigned.
    for t in [FieldClassType::Real, FieldClassType::String, FieldClassType::StaticArray] {
        assert!(!t.is_signed_integer());
        assert!(!t.is_unsigned_integer());
    }
}

#[test]
fn containers_and_variants() {
    assert!(FieldClassType::Structure.is_container());
    assert!(!FieldClassType::Structure.is_variant());

    for t in ALL.iter().copied().filter(|t| t.is_variant()) {
        assert!(t.is_container());
    }

    assert!(FieldClassType::VariantWithSignedSelector.is_variant_with_selector());
    assert!(!FieldClassType::VariantWithoutSelector.is_variant_with_selector());
    assert!(!FieldClassType::StaticArray.is_container());
}

#[test]
fn arrays() {
    let arrays: Vec<_> = ALL.iter().copied().filter(|t| t.is_array()).collect();
    assert_eq!(
        arrays,
        vec![FieldClassType::StaticArray, FieldClassType::DynamicArray]
    );
}

#[test]
fn names_are_unique() {
    let mut names: Vec<_> = ALL.iter().map(|t| t.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), ALL.len());
}

#[test]
fn display_uses_name() {
    assert_eq!(FieldClassType::DynamicArray.to_string(), "dynamic-array");
    assert_eq!(
        format!("{:?}", FieldClassType::Real),
        "FieldClassType::real"
    );
}
