use super::*;

#[test]
fn codes_follow_taxonomy() {
    let fc = FieldClassId::new(0, 0);

    assert_eq!(
        Error::frozen_field_class(fc, FieldClassType::Structure).code(),
        StatusCode::InvalidState
    );
    assert_eq!(
        Error::AlreadyPartOfTraceClass { fc }.code(),
        StatusCode::InvalidState
    );
    assert_eq!(
        Error::DuplicateName {
            name: "x".into(),
            ty: FieldClassType::Structure
        }
        .code(),
        StatusCode::DuplicateName
    );
    assert_eq!(
        Error::DuplicateLabel { label: "a".into() }.code(),
        StatusCode::DuplicateLabel
    );
    assert_eq!(
        Error::OverlappingRanges { name: "o".into() }.code(),
        StatusCode::OverlappingRanges
    );
    assert_eq!(
        Error::InvalidBitWidth { bits: 65 }.code(),
        StatusCode::InvalidArgument
    );
    assert_eq!(
        Error::PoolExhausted { count: 1 }.code(),
        StatusCode::MemoryError
    );
}

#[test]
fn messages_carry_context() {
    let err = Error::DuplicateName {
        name: "len".into(),
        ty: FieldClassType::Structure,
    };
    assert_eq!(err.to_string(), "duplicate name `len` in structure field class");

    let err = Error::InvalidRange { lower: 5, upper: -1 };
    assert_eq!(
        err.to_string(),
        "invalid range: lower bound 5 is greater than upper bound -1"
    );

    let err = Error::frozen_field_class(FieldClassId::new(4, 0), FieldClassType::Real);
    assert_eq!(err.to_string(), "real field class fc#4 is frozen");
}
