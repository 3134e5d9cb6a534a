//! Gasket engine crate.
//!
//! This crate owns the fractal geometry, the one-shot render pipeline, and the
//! platform + GPU runtime pieces that host it.

pub mod device;
pub mod window;
pub mod core;

pub mod logging;
pub mod coords;
pub mod geometry;
pub mod render;
pub mod paint;
