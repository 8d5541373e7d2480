//! Point and figure variant types.
//!
//! - `Point`: Copy value type with tolerance-based equality.
//! - `Rhombus`: four diagonal endpoints (p1–p3 and p2–p4 span the diagonals).
//! - `Pentagon`/`Hexagon`: fixed-arity ordered vertex arrays.
//! - `Figure`: closed enum dispatching area/centroid/equality per variant.

use nalgebra::Vector2;

use super::util::{polygon_area, vertex_centroid};

/// Tolerance for coordinate-wise point equality.
pub(crate) const EPS: f64 = 1e-9;

/// Planar point.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinates as a nalgebra vector.
    #[inline]
    pub fn coords(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Coordinate-wise equality within `EPS`.
    #[inline]
    pub fn approx_eq(self, other: Point) -> bool {
        (self.x - other.x).abs() < EPS && (self.y - other.y).abs() < EPS
    }

    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.coords() - other.coords()).norm()
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.coords()
    }
}

/// Quadrilateral given by its diagonal endpoints: p1–p3 span one diagonal,
/// p2–p4 the other.
///
/// The four points are not validated against the rhombus conditions; the
/// formulas below are applied to whatever was supplied.
#[derive(Clone, Debug)]
pub struct Rhombus {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
    pub p4: Point,
}

impl Rhombus {
    #[inline]
    pub fn new(p1: Point, p2: Point, p3: Point, p4: Point) -> Self {
        Self { p1, p2, p3, p4 }
    }

    /// Midpoint of the p1–p3 diagonal. For a true rhombus both diagonal
    /// midpoints coincide, so one diagonal suffices.
    #[inline]
    pub fn centroid(&self) -> Point {
        self.p1.midpoint(self.p3)
    }

    /// Half the product of the diagonal lengths.
    #[inline]
    pub fn area(&self) -> f64 {
        self.p1.distance_to(self.p3) * self.p2.distance_to(self.p4) / 2.0
    }

    fn approx_eq(&self, other: &Rhombus) -> bool {
        self.p1.approx_eq(other.p1)
            && self.p2.approx_eq(other.p2)
            && self.p3.approx_eq(other.p3)
            && self.p4.approx_eq(other.p4)
    }
}

/// Simple polygon with five vertices in traversal order (convexity not required).
#[derive(Clone, Debug)]
pub struct Pentagon {
    pub vertices: [Point; 5],
}

impl Pentagon {
    #[inline]
    pub fn new(vertices: [Point; 5]) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn centroid(&self) -> Point {
        vertex_centroid(&self.vertices)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices)
    }
}

/// Simple polygon with six vertices in traversal order (convexity not required).
#[derive(Clone, Debug)]
pub struct Hexagon {
    pub vertices: [Point; 6],
}

impl Hexagon {
    #[inline]
    pub fn new(vertices: [Point; 6]) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn centroid(&self) -> Point {
        vertex_centroid(&self.vertices)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices)
    }
}

/// Discriminant of the figure variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FigureKind {
    Rhombus,
    Pentagon,
    Hexagon,
}

/// Closed set of planar figures.
#[derive(Clone, Debug)]
pub enum Figure {
    Rhombus(Rhombus),
    Pentagon(Pentagon),
    Hexagon(Hexagon),
}

impl Figure {
    #[inline]
    pub fn kind(&self) -> FigureKind {
        match self {
            Figure::Rhombus(_) => FigureKind::Rhombus,
            Figure::Pentagon(_) => FigureKind::Pentagon,
            Figure::Hexagon(_) => FigureKind::Hexagon,
        }
    }

    /// Number of defining points (4, 5, or 6).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        match self {
            Figure::Rhombus(_) => 4,
            Figure::Pentagon(_) => 5,
            Figure::Hexagon(_) => 6,
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Figure::Rhombus(r) => r.area(),
            Figure::Pentagon(p) => p.area(),
            Figure::Hexagon(h) => h.area(),
        }
    }

    pub fn centroid(&self) -> Point {
        match self {
            Figure::Rhombus(r) => r.centroid(),
            Figure::Pentagon(p) => p.centroid(),
            Figure::Hexagon(h) => h.centroid(),
        }
    }

    /// Same variant with pointwise-equal defining points, in order.
    ///
    /// No rotation or reflection normalization: the same polygon listed from
    /// a different starting vertex compares unequal.
    pub fn approx_eq(&self, other: &Figure) -> bool {
        match (self, other) {
            (Figure::Rhombus(a), Figure::Rhombus(b)) => a.approx_eq(b),
            (Figure::Pentagon(a), Figure::Pentagon(b)) => {
                points_approx_eq(&a.vertices, &b.vertices)
            }
            (Figure::Hexagon(a), Figure::Hexagon(b)) => points_approx_eq(&a.vertices, &b.vertices),
            _ => false,
        }
    }
}

impl From<Rhombus> for Figure {
    #[inline]
    fn from(r: Rhombus) -> Self {
        Figure::Rhombus(r)
    }
}
impl From<Pentagon> for Figure {
    #[inline]
    fn from(p: Pentagon) -> Self {
        Figure::Pentagon(p)
    }
}
impl From<Hexagon> for Figure {
    #[inline]
    fn from(h: Hexagon) -> Self {
        Figure::Hexagon(h)
    }
}

#[inline]
fn points_approx_eq(a: &[Point], b: &[Point]) -> bool {
    a.iter().zip(b.iter()).all(|(p, q)| p.approx_eq(*q))
}
