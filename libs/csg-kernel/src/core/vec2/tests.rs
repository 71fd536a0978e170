use super::*;

#[test]
fn normalized_returns_unit_vector() {
    let v = normalized(Vec2::new(3.0, 4.0)).unwrap();
    assert!((v.length() - 1.0).abs() < 1e-12);
    assert!((v.x - 0.6).abs() < 1e-12);
}

#[test]
fn normalized_rejects_zero_vector() {
    assert!(normalized(Vec2::ZERO).is_err());
}

#[test]
fn cross_sign_follows_turn_direction() {
    assert_eq!(cross(Vec2::X, Vec2::Y), 1.0);
    assert_eq!(cross(Vec2::Y, Vec2::X), -1.0);
}
