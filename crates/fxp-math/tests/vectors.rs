//! Vector layer contract: every operation equals the scalar operation per component.

use fxp_math::prelude::*;
use proptest::prelude::*;

fn small() -> impl Strategy<Value = Fixed> {
    (-(1i64 << 40)..(1i64 << 40)).prop_map(Fixed::from_bits)
}

fn vec3() -> impl Strategy<Value = FVec3> {
    (small(), small(), small()).prop_map(FVec3::from)
}

proptest! {
    #[test]
    fn ops_forward_to_scalar(a in vec3(), b in vec3(), s in small()) {
        let sum = a + b;
        let prod = a * s;
        let mixed = a.lerp(b, s);
        for i in 0..3 {
            prop_assert_eq!(sum[i], a[i] + b[i]);
            prop_assert_eq!(prod[i], a[i] * s);
            prop_assert_eq!(mixed[i], lerp(a[i], b[i], s));
        }
    }

    #[test]
    fn dot_is_symmetric(a in vec3(), b in vec3()) {
        prop_assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn cross_is_anticommutative(a in vec3(), b in vec3()) {
        prop_assert_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn display_parse_roundtrip(a in vec3()) {
        let back: FVec3 = a.to_string().parse().map_err(|e| TestCaseError::fail(format!("{e}")))?;
        prop_assert_eq!(back, a);
    }

    #[test]
    fn swizzle_reverse_twice_is_identity(a in vec3()) {
        let r = swizzle!(a => z, y, x);
        prop_assert_eq!(swizzle!(r => z, y, x), a);
    }
}

#[test]
fn damped_follow_converges_without_overshoot() {
    let target = FVec2::from_ints(10, -4);
    let mut pos = FVec2::ZERO;
    let mut vel = FVec2::ZERO;
    let dt = Fixed::from_f64(1.0 / 30.0);
    for _ in 0..300 {
        (pos, vel) = pos.smooth_damp(target, vel, Fixed::HALF, dt);
        assert!(pos.x <= target.x);
        assert!(pos.y >= target.y);
    }
    assert!(pos.distance(target) < Fixed::from_f64(0.001));
}

#[test]
fn runs_are_bit_identical() {
    let run = || {
        let mut pos = FVec3::ZERO;
        let mut vel = FVec3::ZERO;
        let target = FVec3::from_ints(3, 7, -2);
        for _ in 0..100 {
            (pos, vel) = pos.smooth_damp(target, vel, Fixed::ONE, Fixed::from_f64(0.02));
        }
        pos.to_array().map(Fixed::to_bits)
    };
    assert_eq!(run(), run());
}

#[cfg(feature = "serde")]
#[test]
fn serde_components_are_raw() {
    let v = FVec2::from_ints(1, -1);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"{"x":4294967296,"y":-4294967296}"#);
    let back: FVec2 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}
