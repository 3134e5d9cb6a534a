//! One-shot render pipeline.
//!
//! The pipeline is a strict linear sequence executed once:
//! compile vertex shader, compile fragment shader, link, upload vertices, draw.
//! It is written against the [`GraphicsContext`] capability trait; [`Gpu`]
//! is the wgpu implementation.
//!
//! [`Gpu`]: crate::device::Gpu

mod context;
mod error;
mod pipeline;
mod scene;
mod shaders;
mod wgpu_backend;

pub use context::{DrawCall, GraphicsContext, ShaderStage, VertexLayout};
pub use error::RenderError;
pub use pipeline::{compile_shader, draw, link_program, upload_vertices};
pub use scene::{render_once, Scene};
pub use shaders::{FRAGMENT_SHADER_SRC, VERTEX_SHADER_SRC};
pub use wgpu_backend::{WgpuProgram, WgpuShader};
