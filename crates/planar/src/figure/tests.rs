use super::*;
use proptest::prelude::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn rhombus_area_and_centroid_from_diagonals() {
    // Diagonals p1–p3 (length 6) and p2–p4 (length 8).
    let r = Rhombus::new(pt(0.0, 0.0), pt(3.0, 4.0), pt(6.0, 0.0), pt(3.0, -4.0));
    assert!((r.area() - 24.0).abs() < 1e-12);
    assert!(r.centroid().approx_eq(pt(3.0, 0.0)));
}

#[test]
fn rhombus_centroid_uses_the_first_diagonal_only() {
    // Not a rhombus: the two diagonal midpoints differ. The centroid is
    // still the p1–p3 midpoint, by definition.
    let q = Rhombus::new(pt(0.0, 0.0), pt(10.0, 10.0), pt(4.0, 0.0), pt(10.0, -2.0));
    assert!(q.centroid().approx_eq(pt(2.0, 0.0)));
}

#[test]
fn pentagon_vertex_centroid() {
    let p = Pentagon::new([
        pt(0.0, 0.0),
        pt(4.0, 0.0),
        pt(4.0, 4.0),
        pt(2.0, 6.0),
        pt(0.0, 4.0),
    ]);
    assert!(p.centroid().approx_eq(pt(2.0, 2.8)));
}

#[test]
fn pentagon_shoelace_area() {
    let p = Pentagon::new([
        pt(0.0, 0.0),
        pt(2.0, 0.0),
        pt(3.0, 1.0),
        pt(2.0, 2.0),
        pt(0.0, 2.0),
    ]);
    assert!((p.area() - 5.0).abs() < 1e-12);
}

#[test]
fn hexagon_area_and_centroid() {
    let h = Hexagon::new([
        pt(0.0, 0.0),
        pt(2.0, 0.0),
        pt(3.0, 1.0),
        pt(2.0, 2.0),
        pt(0.0, 2.0),
        pt(-1.0, 1.0),
    ]);
    assert!((h.area() - 6.0).abs() < 1e-12);
    assert!(h.centroid().approx_eq(pt(1.0, 1.0)));
}

#[test]
fn clockwise_winding_gives_the_same_area() {
    let ccw = [pt(0.0, 0.0), pt(2.0, 0.0), pt(2.0, 2.0), pt(0.0, 2.0), pt(-1.0, 1.0)];
    let mut cw = ccw;
    cw.reverse();
    assert!(signed_area(&ccw) > 0.0);
    assert!(signed_area(&cw) < 0.0);
    assert!((polygon_area(&ccw) - polygon_area(&cw)).abs() < 1e-12);
}

#[test]
fn figures_compare_by_variant_and_point_order() {
    let p = Figure::Pentagon(Pentagon::new([
        pt(0.0, 0.0),
        pt(2.0, 0.0),
        pt(3.0, 1.0),
        pt(2.0, 2.0),
        pt(0.0, 2.0),
    ]));
    let r = Figure::Rhombus(Rhombus::new(
        pt(0.0, 0.0),
        pt(2.0, 0.0),
        pt(3.0, 1.0),
        pt(2.0, 2.0),
    ));
    assert!(p.approx_eq(&p));
    // Different variants never compare equal.
    assert!(!p.approx_eq(&r));
    // Same polygon from a different starting vertex compares unequal.
    let rotated = match p {
        Figure::Pentagon(ref inner) => {
            let mut vs = inner.vertices;
            vs.rotate_left(1);
            Figure::Pentagon(Pentagon::new(vs))
        }
        _ => unreachable!(),
    };
    assert!(!p.approx_eq(&rotated));
}

#[test]
fn point_equality_is_tolerance_based() {
    assert!(pt(1.0, 2.0).approx_eq(pt(1.0 + 1e-12, 2.0 - 1e-12)));
    assert!(!pt(1.0, 2.0).approx_eq(pt(1.0 + 1e-6, 2.0)));
}

#[test]
fn clone_is_independent_of_the_original() {
    let original = Figure::Hexagon(Hexagon::new([
        pt(0.0, 0.0),
        pt(2.0, 0.0),
        pt(3.0, 1.0),
        pt(2.0, 2.0),
        pt(0.0, 2.0),
        pt(-1.0, 1.0),
    ]));
    let mut copy = original.clone();
    assert!(copy.approx_eq(&original));
    if let Figure::Hexagon(ref mut h) = copy {
        h.vertices[0] = pt(100.0, 100.0);
    }
    assert!(!copy.approx_eq(&original));
    assert!((original.area() - 6.0).abs() < 1e-12);
    assert!(original.centroid().approx_eq(pt(1.0, 1.0)));
}

proptest! {
    #[test]
    fn shoelace_is_invariant_under_cyclic_rotation(
        coords in proptest::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 3..10),
        shift in 0usize..10,
    ) {
        let verts: Vec<Point> = coords.iter().map(|&(x, y)| pt(x, y)).collect();
        let mut rotated = verts.clone();
        rotated.rotate_left(shift % verts.len());
        let a = signed_area(&verts);
        let b = signed_area(&rotated);
        prop_assert!((a - b).abs() < 1e-6 * (1.0 + a.abs()));
    }

    #[test]
    fn shoelace_flips_sign_under_reversal(
        coords in proptest::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 3..10),
    ) {
        let verts: Vec<Point> = coords.iter().map(|&(x, y)| pt(x, y)).collect();
        let mut reversed = verts.clone();
        reversed.reverse();
        let a = signed_area(&verts);
        let b = signed_area(&reversed);
        prop_assert!((a + b).abs() < 1e-6 * (1.0 + a.abs()));
        prop_assert!((polygon_area(&verts) - polygon_area(&reversed)).abs() < 1e-6 * (1.0 + a.abs()));
    }
}
