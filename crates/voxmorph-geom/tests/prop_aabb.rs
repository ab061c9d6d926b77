use proptest::prelude::*;
use voxmorph_geom::{Aabb, Vec3};

fn coord() -> impl Strategy<Value = f32> {
    -1.0e4f32..1.0e4
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn small_vec3() -> impl Strategy<Value = Vec3> {
    (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // Every input point lies inside the box built from the set
    #[test]
    fn from_points_contains_all(pts in prop::collection::vec(arb_vec3(), 1..64)) {
        let bb = Aabb::from_points(pts.iter().copied()).unwrap();
        for p in &pts {
            prop_assert_eq!(bb.min.min(*p), bb.min);
            prop_assert_eq!(bb.max.max(*p), bb.max);
        }
        let s = bb.size();
        prop_assert!(s.x >= 0.0 && s.y >= 0.0 && s.z >= 0.0);
    }

    // Box bounds are attained by some input point on each axis
    #[test]
    fn from_points_is_tight(pts in prop::collection::vec(arb_vec3(), 1..64)) {
        let bb = Aabb::from_points(pts.iter().copied()).unwrap();
        prop_assert!(pts.iter().any(|p| p.x == bb.min.x));
        prop_assert!(pts.iter().any(|p| p.y == bb.max.y));
        prop_assert!(pts.iter().any(|p| p.z == bb.min.z));
    }

    // including() is order-independent
    #[test]
    fn including_commutes(a in arb_vec3(), b in arb_vec3(), c in arb_vec3()) {
        let l = Aabb::from_point(a).including(b).including(c);
        let r = Aabb::from_point(a).including(c).including(b);
        prop_assert_eq!(l, r);
    }

    // Cross product is orthogonal to both inputs (bounded magnitudes)
    #[test]
    fn cross_orthogonal(a in small_vec3(), b in small_vec3()) {
        let c = a.cross(b);
        let scale = a.length() * b.length() * c.length().max(1.0);
        prop_assert!(a.dot(c).abs() <= 1e-3 * scale.max(1.0));
        prop_assert!(b.dot(c).abs() <= 1e-3 * scale.max(1.0));
    }
}
