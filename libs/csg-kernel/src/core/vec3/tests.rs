use super::*;
use crate::KernelError;

#[test]
fn normalized_returns_unit_vector() {
    let v = normalized(Vec3::new(10.0, 0.0, 0.0)).unwrap();
    assert_eq!(v, Vec3::X);
}

#[test]
fn normalized_rejects_zero_vector() {
    assert!(matches!(
        normalized(Vec3::ZERO),
        Err(KernelError::DegenerateVector { .. })
    ));
}

#[test]
fn normalized_rejects_non_finite_vector() {
    assert!(normalized(Vec3::new(f64::NAN, 1.0, 0.0)).is_err());
}

#[test]
fn glam_operations_cover_vector_math() {
    let a = Vec3::new(1.0, 0.0, 0.0);
    let b = Vec3::new(0.0, 1.0, 0.0);
    assert_eq!(a.cross(b), Vec3::Z);
    assert_eq!(a.dot(b), 0.0);
    assert_eq!(a.lerp(b, 0.5), Vec3::new(0.5, 0.5, 0.0));
    assert_eq!((a + b) * 2.0, Vec3::new(2.0, 2.0, 0.0));
}

#[test]
fn approx_eq_tolerates_rounding() {
    assert!(approx_eq(Vec3::ONE, Vec3::ONE + Vec3::splat(1e-12)));
    assert!(!approx_eq(Vec3::ONE, Vec3::ZERO));
}
