//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the application drawing into it, and the per-frame context passed across.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
