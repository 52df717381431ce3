use meadow_geom::Vec3;
use proptest::num::f32::NORMAL;
use proptest::prelude::*;
use proptest::strategy::Strategy;

fn approx(a: f32, b: f32, eps: f32) -> bool { (a - b).abs() <= eps }
fn vapprox(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx(a.x, b.x, eps) && approx(a.y, b.y, eps) && approx(a.z, b.z, eps)
}

fn approx_zero_scaled(val: f32, scale: f32, atol: f32, rtol: f32) -> bool {
    val.abs() <= atol + rtol * scale
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e6)
}

fn bounded_nonzero_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded_nonzero", |v| v.is_finite() && {
        let a = v.abs();
        a >= 1e-6 && a <= 1e6
    })
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (bounded_f32(), bounded_f32(), bounded_f32())
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn arb_nondegenerate_vec3() -> impl Strategy<Value = Vec3> {
    (bounded_nonzero_f32(), bounded_nonzero_f32(), bounded_nonzero_f32())
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // Negation is exact and involutive
    #[test]
    fn vec3_neg_twice_identity(a in arb_vec3()) {
        prop_assert_eq!(-(-a), a);
        prop_assert_eq!(-a, a * -1.0);
    }

    // Cross orthogonality: a·(a×b) = 0 and b·(a×b) = 0
    #[test]
    fn vec3_cross_orthogonal(
        a in arb_nondegenerate_vec3(),
        b in arb_nondegenerate_vec3(),
    ) {
        let c = a.cross(b);
        let scale_a = a.length() * c.length();
        let scale_b = b.length() * c.length();
        prop_assert!(approx_zero_scaled(a.dot(c), scale_a, 1e-6, 1e-5));
        prop_assert!(approx_zero_scaled(b.dot(c), scale_b, 1e-6, 1e-5));
    }

    // Swapping operands flips the cross product exactly
    #[test]
    fn vec3_cross_swap_is_negation(a in arb_vec3(), b in arb_vec3()) {
        prop_assert_eq!(b.cross(a), -a.cross(b));
    }

    // |normalize(v)| = 1 for non-zero input
    #[test]
    fn vec3_normalized_length(v in arb_nondegenerate_vec3()) {
        prop_assert!(approx(v.normalized().length(), 1.0, 1e-3));
    }

    // min/max are component-wise and bracket both inputs
    #[test]
    fn vec3_min_max_bracket(a in arb_vec3(), b in arb_vec3()) {
        let lo = a.min(b);
        let hi = a.max(b);
        prop_assert!(lo.x <= a.x && lo.x <= b.x && hi.x >= a.x && hi.x >= b.x);
        prop_assert!(lo.y <= a.y && lo.y <= b.y && hi.y >= a.y && hi.y >= b.y);
        prop_assert!(lo.z <= a.z && lo.z <= b.z && hi.z >= a.z && hi.z >= b.z);
        prop_assert!(vapprox(lo + hi, a + b, 1e-6 + 1e-6 * (a.length() + b.length())));
    }
}
