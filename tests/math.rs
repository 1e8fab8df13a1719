use proptest::prelude::*;
use rotoframe::{Mat3, Vec2, Vec3};

fn vec2_strategy() -> impl Strategy<Value = Vec2> {
    (-1e6f64..1e6, -1e6f64..1e6).prop_map(|(x, y)| Vec2::new(x, y))
}

fn vec3_strategy() -> impl Strategy<Value = Vec3> {
    (-1e3f64..1e3, -1e3f64..1e3, -1e3f64..1e3).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn mat3_strategy() -> impl Strategy<Value = Mat3> {
    prop::array::uniform9(-100.0f64..100.0).prop_map(Mat3::from_row_major)
}

proptest! {
    #[test]
    fn prop_vector_plus_its_negation_is_zero(v in vec2_strategy()) {
        prop_assert_eq!(v + (-v), Vec2::zero());
    }

    #[test]
    fn prop_vec3_plus_its_negation_is_zero(v in vec3_strategy()) {
        prop_assert_eq!(v + (-v), Vec3::zero());
    }

    #[test]
    fn prop_normalized_has_unit_norm(v in vec2_strategy()) {
        prop_assume!(v.norm() > 0.0);
        prop_assert!(v.normalized().unwrap().is_unit());
    }

    #[test]
    fn prop_vec3_normalized_has_unit_norm(v in vec3_strategy()) {
        prop_assume!(v.norm() > 0.0);
        prop_assert!(v.normalized().unwrap().is_unit());
    }

    #[test]
    fn prop_distance_is_symmetric(a in vec2_strategy(), b in vec2_strategy()) {
        prop_assert_eq!(a.dist(b), b.dist(a));
    }

    #[test]
    fn prop_identity_is_neutral(m in mat3_strategy()) {
        prop_assert_eq!(Mat3::identity() * m, m);
        prop_assert_eq!(m * Mat3::identity(), m);
    }

    #[test]
    fn prop_matrix_product_is_associative(
        a in mat3_strategy(),
        b in mat3_strategy(),
        c in mat3_strategy(),
    ) {
        let left = (a * b) * c;
        let right = a * (b * c);
        prop_assert!(left.approx_eq(&right, 1e-6));
    }

    #[test]
    fn prop_zero_rotation_is_identity(v in vec3_strategy()) {
        prop_assert_eq!(Mat3::rotation(0.0) * v, v);
    }

    #[test]
    fn prop_rotation_round_trips(
        angle in -10.0f64..10.0,
        v in vec3_strategy(),
    ) {
        let forward = Mat3::rotation(angle);
        let back = Mat3::rotation(-angle);
        let round_trip = forward * (back * v);
        prop_assert!(round_trip.approx_eq(v, 1e-9));
    }

    #[test]
    fn prop_clamp_stays_in_bounds(v in vec2_strategy(), lower in -10.0f64..0.0, upper in 0.0f64..10.0) {
        let clamped = v.clamp(lower, upper);
        prop_assert!(clamped.x >= lower && clamped.x <= upper);
        prop_assert!(clamped.y >= lower && clamped.y <= upper);
    }

    #[test]
    fn prop_scaling_scales_norm(v in vec2_strategy(), k in 0.0f64..100.0) {
        let scaled = v * k;
        prop_assert!((scaled.norm() - v.norm() * k).abs() <= 1e-6 * (1.0 + v.norm() * k));
    }
}
