use super::*;

#[test]
fn fnv_split_writes_match_single_write() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"snakegrid");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"snake");
    b.write_bytes(b"grid");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn fnv_empty_input_is_offset_basis() {
    assert_eq!(Fnv1a64::new_default().finish(), Fnv1a64::OFFSET_BASIS);
}

#[test]
fn floor_div_rounds_toward_negative_infinity() {
    assert_eq!(floor_div(3, 2), 1);
    assert_eq!(floor_div(-9, 2), -5);
    assert_eq!(floor_div(-8, 2), -4);
    assert_eq!(floor_div(-5, 1), -5);
}
