use nalgebra::Vector2;

use super::types::Point;

/// Signed shoelace area: half the cyclic sum of cross terms over the vertex
/// list, wraparound included. Positive for counterclockwise traversal,
/// negative for clockwise. Fewer than three vertices yield 0.
pub fn signed_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut s = 0.0;
    for i in 0..n {
        let p = vertices[i];
        let q = vertices[(i + 1) % n];
        s += p.x * q.y - q.x * p.y;
    }
    s / 2.0
}

/// Winding-independent polygon area.
///
/// Self-intersecting vertex lists are not detected; the shoelace sum is
/// applied as-is.
#[inline]
pub fn polygon_area(vertices: &[Point]) -> f64 {
    signed_area(vertices).abs()
}

/// Arithmetic mean of the vertices (vertex centroid, not area-weighted).
///
/// `vertices` must be non-empty; the fixed-arity figure types guarantee this.
pub fn vertex_centroid(vertices: &[Point]) -> Point {
    debug_assert!(!vertices.is_empty(), "vertex centroid of empty slice");
    let mut c = Vector2::zeros();
    for p in vertices {
        c += p.coords();
    }
    Point::from(c / (vertices.len() as f64))
}
