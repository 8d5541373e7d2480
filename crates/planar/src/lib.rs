//! Planar figures: area and centroid over a small closed set of shapes.
//!
//! The variant set (rhombus by diagonals, pentagon, hexagon) is static, so
//! figures are a closed sum type rather than a trait object. `FigureStore`
//! owns its contents by value; removal and drop are automatic.

pub mod figure;
pub mod store;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use figure::{Figure, FigureKind, Point};
pub use store::FigureStore;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::figure::rand::{draw_figure, ReplayToken, SampleCfg};
    pub use crate::figure::{Figure, FigureKind, Hexagon, Pentagon, Point, Rhombus};
    pub use crate::store::FigureStore;
    pub use nalgebra::Vector2 as Vec2;
}
