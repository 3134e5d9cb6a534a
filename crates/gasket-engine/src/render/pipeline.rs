use crate::coords::Vec2;
use crate::paint::Color;

use super::{DrawCall, GraphicsContext, RenderError, ShaderStage, VertexLayout};

/// Compiles `source` for `stage`.
///
/// On failure the backend has already released the shader; the diagnostic is
/// returned in [`RenderError::ShaderCompile`].
pub fn compile_shader<C: GraphicsContext>(
    ctx: &mut C,
    stage: ShaderStage,
    source: &str,
) -> Result<C::Shader, RenderError> {
    log::debug!("compiling {stage} shader ({} bytes)", source.len());
    ctx.compile_shader(stage, source)
        .map_err(|diagnostic| RenderError::ShaderCompile { stage, log: diagnostic })
}

/// Links a vertex and fragment shader into a program.
pub fn link_program<C: GraphicsContext>(
    ctx: &mut C,
    vertex: &C::Shader,
    fragment: &C::Shader,
) -> Result<C::Program, RenderError> {
    log::debug!("linking shader program");
    ctx.link_program(vertex, fragment)
        .map_err(|diagnostic| RenderError::ProgramLink { log: diagnostic })
}

/// Uploads `vertices` once into static vertex storage.
pub fn upload_vertices<C: GraphicsContext>(ctx: &mut C, vertices: &[Vec2]) -> C::Buffer {
    log::debug!(
        "uploading {} vertices ({} bytes)",
        vertices.len(),
        std::mem::size_of_val(vertices)
    );
    ctx.upload_vertices(vertices)
}

/// Clears to opaque black and draws `vertex_count` vertices as a triangle list,
/// reading tightly packed `vec2<f32>` positions from `buffer`.
pub fn draw<C: GraphicsContext>(
    ctx: &mut C,
    program: &C::Program,
    buffer: &C::Buffer,
    vertex_count: u32,
) -> Result<(), RenderError> {
    let call = DrawCall {
        program,
        buffer,
        layout: VertexLayout::POSITION_2D,
        clear: Color::BLACK,
        vertex_count,
    };
    ctx.draw(&call)?;
    log::info!("drew {vertex_count} vertices ({} triangles)", vertex_count / 3);
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording fake backend shared by the render tests.

    use super::*;

    /// Backend call, in the order it was made.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Compile(ShaderStage),
        Link,
        Upload(usize),
        Draw {
            layout: VertexLayout,
            clear: Color,
            vertex_count: u32,
        },
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct FakeShader {
        pub stage: ShaderStage,
        pub source: String,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct FakeProgram {
        pub vertex: String,
        pub fragment: String,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct FakeBuffer {
        pub data: Vec<f32>,
    }

    /// Compiles any source that does not contain `marker`, and links unless
    /// `link_log` is set. Skips the first `skip_frames` draws.
    #[derive(Debug, Default)]
    pub struct FakeContext {
        pub calls: Vec<Call>,
        pub reject_marker: Option<&'static str>,
        pub link_log: Option<String>,
        pub skip_frames: usize,
        pub live_shaders: usize,
    }

    impl FakeContext {
        pub fn draws(&self) -> Vec<&Call> {
            self.calls.iter().filter(|c| matches!(c, Call::Draw { .. })).collect()
        }
    }

    impl GraphicsContext for FakeContext {
        type Shader = FakeShader;
        type Program = FakeProgram;
        type Buffer = FakeBuffer;

        fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<FakeShader, String> {
            self.calls.push(Call::Compile(stage));
            if let Some(marker) = self.reject_marker {
                if source.contains(marker) {
                    return Err(format!("1:1: unexpected token `{marker}`"));
                }
            }
            self.live_shaders += 1;
            Ok(FakeShader { stage, source: source.to_string() })
        }

        fn link_program(&mut self, vertex: &FakeShader, fragment: &FakeShader) -> Result<FakeProgram, String> {
            self.calls.push(Call::Link);
            if let Some(log) = &self.link_log {
                return Err(log.clone());
            }
            Ok(FakeProgram {
                vertex: vertex.source.clone(),
                fragment: fragment.source.clone(),
            })
        }

        fn upload_vertices(&mut self, vertices: &[Vec2]) -> FakeBuffer {
            self.calls.push(Call::Upload(vertices.len()));
            FakeBuffer { data: bytemuck::cast_slice(vertices).to_vec() }
        }

        fn draw(&mut self, call: &DrawCall<'_, Self>) -> Result<(), RenderError> {
            if self.skip_frames > 0 {
                self.skip_frames -= 1;
                return Err(RenderError::FrameSkipped);
            }
            self.calls.push(Call::Draw {
                layout: call.layout,
                clear: call.clear,
                vertex_count: call.vertex_count,
            });
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{Call, FakeContext};
    use super::*;

    #[test]
    fn compile_failure_carries_stage_and_log() {
        let mut ctx = FakeContext { reject_marker: Some("@@"), ..Default::default() };
        let err = compile_shader(&mut ctx, ShaderStage::Vertex, "fn @@").unwrap_err();

        assert_eq!(
            err,
            RenderError::ShaderCompile {
                stage: ShaderStage::Vertex,
                log: "1:1: unexpected token `@@`".into(),
            }
        );
        assert_eq!(ctx.live_shaders, 0);
    }

    #[test]
    fn link_failure_carries_log() {
        let mut ctx = FakeContext { link_log: Some("entry point missing".into()), ..Default::default() };
        let vs = compile_shader(&mut ctx, ShaderStage::Vertex, "vs").unwrap();
        let fs = compile_shader(&mut ctx, ShaderStage::Fragment, "fs").unwrap();

        let err = link_program(&mut ctx, &vs, &fs).unwrap_err();
        assert_eq!(err, RenderError::ProgramLink { log: "entry point missing".into() });
    }

    #[test]
    fn upload_flattens_coordinates_in_order() {
        let mut ctx = FakeContext::default();
        let buf = upload_vertices(&mut ctx, &[Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
        assert_eq!(buf.data, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(ctx.calls, vec![Call::Upload(2)]);
    }

    #[test]
    fn draw_declares_packed_vec2_layout_and_black_clear() {
        let mut ctx = FakeContext::default();
        let vs = compile_shader(&mut ctx, ShaderStage::Vertex, "vs").unwrap();
        let fs = compile_shader(&mut ctx, ShaderStage::Fragment, "fs").unwrap();
        let program = link_program(&mut ctx, &vs, &fs).unwrap();
        let buffer = upload_vertices(&mut ctx, &[Vec2::default(); 3]);

        draw(&mut ctx, &program, &buffer, 3).unwrap();

        assert_eq!(
            ctx.draws(),
            vec![&Call::Draw {
                layout: VertexLayout { location: 0, components: 2, stride: 8 },
                clear: Color::BLACK,
                vertex_count: 3,
            }]
        );
    }
}
