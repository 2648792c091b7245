use super::*;

#[test]
fn handles_are_eight_bytes() {
    assert_eq!(std::mem::size_of::<FieldClassId>(), 8);
    assert_eq!(std::mem::size_of::<RangeSetId>(), 8);
}

#[test]
fn generation_distinguishes_reused_slots() {
    let old = FieldClassId::new(3, 0);
    let new = FieldClassId::new(3, 1);
    assert_ne!(old, new);
    assert_eq!(old.index(), new.index());
}

#[test]
fn debug_and_display() {
    let id = FieldClassId::new(7, 2);
    assert_eq!(format!("{id:?}"), "fc(7v2)");
    assert_eq!(id.to_string(), "fc#7");

    let rs = RangeSetId::new(1, 0);
    assert_eq!(format!("{rs:?}"), "rs(1v0)");
    assert_eq!(rs.to_string(), "rs#1");
}
