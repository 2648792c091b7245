use super::*;
use crate::StatusCode;

#[test]
fn new_pool_is_empty() {
    let pool = Pool::new();
    assert!(pool.is_empty());
    assert_eq!(pool.len(), 0);
    assert_eq!(pool.range_set_count(), 0);
}

#[test]
fn created_field_class_has_one_reference() {
    let mut pool = Pool::new();
    let int = pool.create_unsigned_integer().expect("room");
    assert_eq!(pool.ref_count(int), 1);
    assert_eq!(pool.field_class_type(int), FieldClassType::UnsignedInteger);
    assert_eq!(pool.len(), 1);
}

#[test]
fn get_and_put_ref() {
    let mut pool = Pool::new();
    let s = pool.create_string().expect("room");
    pool.get_ref(s);
    assert_eq!(pool.ref_count(s), 2);

    pool.put_ref(s);
    assert!(pool.contains(s));
    pool.put_ref(s);
    assert!(!pool.contains(s));
    assert!(pool.is_empty());
}

#[test]
fn releasing_parent_releases_children() {
    let mut pool = Pool::new();
    let st = pool.create_structure().expect("room");
    let a = pool.create_unsigned_integer().expect("room");
    let b = pool.create_string().expect("room");
    pool.append_member(st, "a", a).expect("fresh");
    pool.append_member(st, "b", b).expect("fresh");

    // Creator drops its references: the structure now owns both members.
    pool.put_ref(a);
    pool.put_ref(b);
    assert_eq!(pool.len(), 3);

    pool.put_ref(st);
    assert!(pool.is_empty());
}

#[test]
fn releasing_parent_keeps_externally_held_children() {
    let mut pool = Pool::new();
    let st = pool.create_structure().expect("room");
    let a = pool.create_unsigned_integer().expect("room");
    pool.append_member(st, "a", a).expect("fresh");
    assert_eq!(pool.ref_count(a), 2);

    pool.put_ref(st);
    assert!(!pool.contains(st));
    assert!(pool.contains(a));
    assert_eq!(pool.ref_count(a), 1);
}

#[test]
fn releasing_nested_arrays_releases_everything() {
    let mut pool = Pool::new();
    let mut inner = pool.create_real().expect("room");
    for _ in 0..100 {
        let outer = pool.create_static_array(inner, 2).expect("room");
        pool.put_ref(inner);
        inner = outer;
    }
    assert_eq!(pool.len(), 101);

    pool.put_ref(inner);
    assert!(pool.is_empty());
}

#[test]
fn releasing_enumeration_releases_mapping_range_sets() {
    let mut pool = Pool::new();
    let e = pool.create_unsigned_enumeration().expect("room");
    let rs = pool.create_unsigned_range_set().expect("room");
    pool.add_range(rs, 0u64, 3).expect("valid");
    pool.add_mapping(e, "low", rs).expect("fresh");
    pool.put_range_set_ref(rs);
    assert_eq!(pool.range_set_count(), 1);

    pool.put_ref(e);
    assert_eq!(pool.range_set_count(), 0);
}

#[test]
fn slot_reuse_invalidates_old_handle() {
    let mut pool = Pool::new();
    let old = pool.create_string().expect("room");
    pool.put_ref(old);
    let new = pool.create_string().expect("room");
    assert_eq!(old.index(), new.index());
    assert!(!pool.contains(old));
    assert!(pool.contains(new));
}

#[test]
#[should_panic(expected = "stale field class handle")]
fn stale_handle_panics() {
    let mut pool = Pool::new();
    let s = pool.create_string().expect("room");
    pool.put_ref(s);
    let _ = pool.get(s);
}

#[test]
#[should_panic(expected = "stale field class handle")]
fn double_release_panics() {
    let mut pool = Pool::new();
    let s = pool.create_string().expect("room");
    pool.put_ref(s);
    pool.put_ref(s);
}

// === Range sets ===

#[test]
fn range_set_lifecycle() {
    let mut pool = Pool::new();
    let rs = pool.create_signed_range_set().expect("room");
    pool.add_range(rs, -5i64, 5).expect("valid");
    pool.add_range(rs, 10i64, 20).expect("valid");

    let set = pool.range_set::<i64>(rs);
    assert_eq!(set.len(), 2);
    assert!(set.contains(-5));
    assert!(!set.contains(7));
    assert!(pool.any_range_set(rs).is_signed());

    pool.get_range_set_ref(rs);
    assert_eq!(pool.range_set_ref_count(rs), 2);
    pool.put_range_set_ref(rs);
    pool.put_range_set_ref(rs);
    assert!(!pool.contains_range_set(rs));
}

#[test]
fn add_range_reports_inverted_bounds() {
    let mut pool = Pool::new();
    let rs = pool.create_unsigned_range_set().expect("room");
    let err = pool.add_range(rs, 9u64, 1).expect_err("inverted");
    assert_eq!(err.code(), StatusCode::InvalidArgument);
    assert!(pool.range_set::<u64>(rs).is_empty());
}

#[test]
fn insert_prebuilt_range_set() {
    let mut pool = Pool::new();
    let mut set = RangeSet::<u64>::new();
    set.add_range(1, 2).expect("valid");
    let rs = pool.insert_range_set(AnyRangeSet::Unsigned(set)).expect("room");
    assert_eq!(pool.range_set::<u64>(rs).len(), 1);
}

#[test]
#[should_panic(expected = "expected signed range set, found unsigned range set")]
fn add_range_with_wrong_signedness_panics() {
    let mut pool = Pool::new();
    let rs = pool.create_unsigned_range_set().expect("room");
    let _ = pool.add_range(rs, -1i64, 1);
}

#[test]
#[should_panic(expected = "stale range set handle")]
fn stale_range_set_panics() {
    let mut pool = Pool::new();
    let rs = pool.create_unsigned_range_set().expect("room");
    pool.put_range_set_ref(rs);
    let _ = pool.range_set_ref_count(rs);
}

#[test]
fn generic_range_set_constructor() {
    let mut pool = Pool::new();
    let rs = pool.create_range_set::<i64>().expect("room");
    assert!(pool.any_range_set(rs).is_signed());
    assert!(pool.any_range_set(rs).is_empty());
}
