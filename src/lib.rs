//! Classic raster-graphics algorithms over integer pixel grids: Bresenham
//! line, circle and ellipse rasterization, edge-table and fence scanline
//! polygon fills, and anchored affine transforms of polygon vertex rings.
//!
//! Everything here is a pure computation over its arguments, apart from
//! [`session::Session`], which owns the shapes being edited.

pub mod active;
pub mod circle;
pub mod debug;
pub mod edge;
pub mod ellipse;
pub mod error;
pub mod fence;
pub mod gesture;
pub mod line;
pub mod point;
pub mod polygon;
pub mod scanline;
pub mod session;
pub mod shape;
pub mod transform;

pub use circle::rasterize_circle;
pub use ellipse::rasterize_ellipse;
pub use error::ShapeErr;
pub use fence::fill_fence;
pub use line::rasterize_line;
pub use point::{Point, Vertex};
pub use polygon::Polygon;
pub use scanline::{fill_scanline, Span};
pub use transform::{apply_transform, Affine, Transform};
