//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and providing encoders/views for rendering
//! - capturing device validation errors so they can be reported as diagnostics

mod error;
mod error_sink;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use error_sink::ErrorSink;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
