use super::*;

#[test]
fn flags_size() {
    assert_eq!(std::mem::size_of::<FieldClassFlags>(), 1);
}

#[test]
fn default_is_hot() {
    let flags = FieldClassFlags::default();
    assert!(!flags.is_frozen());
    assert!(!flags.is_part_of_trace_class());
}

#[test]
fn sealing_for_publish_implies_frozen() {
    let sealed = FieldClassFlags::sealing(FieldClassFlags::PART_OF_TRACE_CLASS);
    assert!(sealed.is_frozen());
    assert!(sealed.is_part_of_trace_class());
}

#[test]
fn sealing_for_freeze_does_not_publish() {
    let sealed = FieldClassFlags::sealing(FieldClassFlags::FROZEN);
    assert!(sealed.is_frozen());
    assert!(!sealed.is_part_of_trace_class());
}
