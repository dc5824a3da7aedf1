use super::*;

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
}

#[test]
fn approach_moves_fraction_of_gap() {
    assert_eq!(approach(0.0, 100.0, 0.2), 20.0);
    assert_eq!(approach(100.0, 100.0, 0.2), 100.0);
}
