//! Coordinate and geometry types shared by the generator and the renderer.
//!
//! Canonical space is normalized device coordinates:
//! - Origin at the center of the surface
//! - +X right, +Y up
//! - Visible range [-1, 1] on both axes
//!
//! No viewport transform exists; vertices are uploaded as-is.

mod triangle;
mod vec2;

pub use triangle::Triangle;
pub use vec2::Vec2;
