use crate::coords::Vec2;

use super::{
    FRAGMENT_SHADER_SRC, GraphicsContext, RenderError, ShaderStage, VERTEX_SHADER_SRC,
    compile_shader, draw, link_program, upload_vertices,
};

/// GPU-resident state for one gasket render.
///
/// Returned by [`Scene::init`] and owned by the caller; there is no global
/// context, program or buffer. Resources live as long as the scene.
#[derive(Debug)]
pub struct Scene<P, B> {
    program: P,
    buffer: B,
    vertex_count: u32,
}

impl<P, B> Scene<P, B> {
    /// Compiles the built-in shader pair, links it and uploads `vertices`.
    ///
    /// Stops at the first failure; nothing is uploaded if a shader fails.
    pub fn init<C>(ctx: &mut C, vertices: &[Vec2]) -> Result<Self, RenderError>
    where
        C: GraphicsContext<Program = P, Buffer = B>,
    {
        Self::with_sources(ctx, VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC, vertices)
    }

    /// Same as [`Scene::init`] with caller-provided shader sources.
    pub fn with_sources<C>(
        ctx: &mut C,
        vertex_src: &str,
        fragment_src: &str,
        vertices: &[Vec2],
    ) -> Result<Self, RenderError>
    where
        C: GraphicsContext<Program = P, Buffer = B>,
    {
        let vertex_count =
            u32::try_from(vertices.len()).map_err(|_| RenderError::TooManyVertices(vertices.len()))?;

        let vs = compile_shader(ctx, ShaderStage::Vertex, vertex_src)?;
        let fs = compile_shader(ctx, ShaderStage::Fragment, fragment_src)?;
        let program = link_program(ctx, &vs, &fs)?;
        let buffer = upload_vertices(ctx, vertices);

        Ok(Self {
            program,
            buffer,
            vertex_count,
        })
    }

    /// Issues the scene's draw call.
    pub fn draw<C>(&self, ctx: &mut C) -> Result<(), RenderError>
    where
        C: GraphicsContext<Program = P, Buffer = B>,
    {
        draw(ctx, &self.program, &self.buffer, self.vertex_count)
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn program(&self) -> &P {
        &self.program
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }
}

/// Initializes a scene and draws it once.
pub fn render_once<C: GraphicsContext>(
    ctx: &mut C,
    vertices: &[Vec2],
) -> Result<Scene<C::Program, C::Buffer>, RenderError> {
    let scene = Scene::init(ctx, vertices)?;
    scene.draw(ctx)?;
    Ok(scene)
}
