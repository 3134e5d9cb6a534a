use gasket_engine::coords::Vec2;
use gasket_engine::core::{App, AppControl, FrameCtx};
use gasket_engine::render::{GraphicsContext, RenderError, Scene, WgpuProgram};

/// Where the one-shot render stands.
#[derive(Debug)]
pub enum GasketState<P, B> {
    /// Waiting for the first frame.
    Pending,
    /// Uploaded, but the surface had no frame yet.
    Uploaded(Scene<P, B>),
    /// The single draw call has been issued.
    Drawn(Scene<P, B>),
    /// Terminal failure; nothing was drawn.
    Failed(RenderError),
}

/// The app as hosted by the wgpu window runtime.
pub type WgpuGasketApp = GasketApp<WgpuProgram, wgpu::Buffer>;

/// Draws the gasket exactly once and then idles until the window closes.
pub struct GasketApp<P, B> {
    vertices: Vec<Vec2>,
    state: GasketState<P, B>,
}

impl<P, B> GasketApp<P, B> {
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Self {
            vertices,
            state: GasketState::Pending,
        }
    }

    pub fn state(&self) -> &GasketState<P, B> {
        &self.state
    }

    /// The terminal error, if the render failed.
    pub fn into_failure(self) -> Option<RenderError> {
        match self.state {
            GasketState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Advances the state machine by one frame against `ctx`.
    ///
    /// Returns `true` if another frame is needed (the surface skipped this one).
    pub fn step<C>(&mut self, ctx: &mut C) -> Result<bool, RenderError>
    where
        C: GraphicsContext<Program = P, Buffer = B>,
    {
        let scene = match std::mem::replace(&mut self.state, GasketState::Pending) {
            GasketState::Pending => match Scene::init(ctx, &self.vertices) {
                Ok(scene) => scene,
                Err(err) => return Err(self.fail(err)),
            },
            GasketState::Uploaded(scene) => scene,
            done @ (GasketState::Drawn(_) | GasketState::Failed(_)) => {
                self.state = done;
                return Ok(false);
            }
        };

        match scene.draw(ctx) {
            Ok(()) => {
                self.state = GasketState::Drawn(scene);
                Ok(false)
            }
            Err(RenderError::FrameSkipped) => {
                log::debug!("frame skipped; retrying on next redraw");
                self.state = GasketState::Uploaded(scene);
                Ok(true)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    fn fail(&mut self, err: RenderError) -> RenderError {
        self.state = GasketState::Failed(err.clone());
        err
    }
}

impl App for WgpuGasketApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        match self.step(&mut *ctx.gpu) {
            Ok(true) => {
                ctx.window.request_redraw();
                AppControl::Continue
            }
            Ok(false) => AppControl::Continue,
            Err(_) => {
                log::debug!("render abandoned, failure kept for the caller");
                AppControl::Exit
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use gasket_engine::coords::Triangle;
    use gasket_engine::render::{DrawCall, ShaderStage};

    use super::*;

    /// Backend that counts draws and can reject shaders or skip frames.
    #[derive(Default)]
    struct CountingContext {
        fail_compile: bool,
        skip_frames: usize,
        draws: Vec<u32>,
    }

    impl GraphicsContext for CountingContext {
        type Shader = ();
        type Program = ();
        type Buffer = usize;

        fn compile_shader(&mut self, stage: ShaderStage, _source: &str) -> Result<(), String> {
            if self.fail_compile {
                Err(format!("{stage}: syntax error"))
            } else {
                Ok(())
            }
        }

        fn link_program(&mut self, _vertex: &(), _fragment: &()) -> Result<(), String> {
            Ok(())
        }

        fn upload_vertices(&mut self, vertices: &[Vec2]) -> usize {
            vertices.len()
        }

        fn draw(&mut self, call: &DrawCall<'_, Self>) -> Result<(), RenderError> {
            if self.skip_frames > 0 {
                self.skip_frames -= 1;
                return Err(RenderError::FrameSkipped);
            }
            self.draws.push(call.vertex_count);
            Ok(())
        }
    }

    fn app() -> GasketApp<(), usize> {
        GasketApp::new(Triangle::default().gasket(5))
    }

    #[test]
    fn draws_exactly_once_across_redraws() {
        let mut ctx = CountingContext::default();
        let mut app = app();

        assert_eq!(app.step(&mut ctx), Ok(false));
        assert_eq!(app.step(&mut ctx), Ok(false));
        assert_eq!(app.step(&mut ctx), Ok(false));

        assert_eq!(ctx.draws, vec![729]);
        assert!(matches!(app.state(), GasketState::Drawn(scene) if *scene.buffer() == 729));
    }

    #[test]
    fn skipped_frame_requests_another_without_reuploading() {
        let mut ctx = CountingContext { skip_frames: 2, ..Default::default() };
        let mut app = app();

        assert_eq!(app.step(&mut ctx), Ok(true));
        assert!(matches!(app.state(), GasketState::Uploaded(_)));
        assert_eq!(app.step(&mut ctx), Ok(true));
        assert_eq!(app.step(&mut ctx), Ok(false));

        assert_eq!(ctx.draws, vec![729]);
    }

    #[test]
    fn compile_failure_is_terminal_and_never_draws() {
        let mut ctx = CountingContext { fail_compile: true, ..Default::default() };
        let mut app = app();

        let err = app.step(&mut ctx).unwrap_err();
        assert!(matches!(err, RenderError::ShaderCompile { stage: ShaderStage::Vertex, .. }));

        // Later redraws do not retry.
        ctx.fail_compile = false;
        assert_eq!(app.step(&mut ctx), Ok(false));
        assert!(ctx.draws.is_empty());
        assert_eq!(app.into_failure(), Some(err));
    }
}
