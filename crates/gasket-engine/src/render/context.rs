use std::fmt;

use crate::coords::Vec2;
use crate::paint::Color;

use super::RenderError;

/// Programmable pipeline stage a shader is compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Entry point name the stage's source must define.
    #[inline]
    pub const fn entry_point(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vs_main",
            ShaderStage::Fragment => "fs_main",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// Layout of the single vertex attribute: `components` × `f32` per vertex.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexLayout {
    pub location: u32,
    pub components: u32,
    /// Bytes between consecutive vertices.
    pub stride: u64,
}

impl VertexLayout {
    /// Tightly packed `vec2<f32>` positions at location 0.
    pub const POSITION_2D: VertexLayout = VertexLayout {
        location: 0,
        components: 2,
        stride: std::mem::size_of::<Vec2>() as u64,
    };
}

/// Everything a single draw needs.
pub struct DrawCall<'a, C: GraphicsContext + ?Sized> {
    pub program: &'a C::Program,
    pub buffer: &'a C::Buffer,
    pub layout: VertexLayout,
    pub clear: Color,
    pub vertex_count: u32,
}

/// Capabilities the pipeline needs from a graphics backend.
///
/// Compile and link report failure as the backend's diagnostic log. A failed
/// shader or program is released by the backend before returning.
pub trait GraphicsContext {
    type Shader;
    type Program;
    type Buffer;

    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<Self::Shader, String>;

    fn link_program(
        &mut self,
        vertex: &Self::Shader,
        fragment: &Self::Shader,
    ) -> Result<Self::Program, String>;

    /// Copies `vertices` into static, write-once GPU storage.
    fn upload_vertices(&mut self, vertices: &[Vec2]) -> Self::Buffer;

    /// Clears the frame to `call.clear` and draws `call.vertex_count` vertices
    /// as a triangle list.
    fn draw(&mut self, call: &DrawCall<'_, Self>) -> Result<(), RenderError>;
}
