//! CPU-side fractal geometry.
//!
//! Output is a flat, ordered vertex list meant for a triangle-list draw: each
//! consecutive triple is one independent triangle.

mod sierpinski;

pub use sierpinski::{generate, generate_iterative, vertex_count};
