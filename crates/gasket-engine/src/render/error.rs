use std::fmt;

use super::ShaderStage;

/// Failure of the render pipeline.
///
/// Everything except [`RenderError::FrameSkipped`] is terminal for the run:
/// no retry, no partial draw.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The host graphics context (surface, adapter, device) could not be created.
    ContextUnavailable(String),
    /// A shader stage failed to compile; `log` is the compiler diagnostic.
    ShaderCompile { stage: ShaderStage, log: String },
    /// The program failed to link; `log` is the linker diagnostic.
    ProgramLink { log: String },
    /// The vertex sequence does not fit in a single draw call.
    TooManyVertices(usize),
    /// The surface cannot produce frames anymore.
    FrameUnavailable(String),
    /// The surface had no frame this time; nothing was drawn.
    FrameSkipped,
}

impl RenderError {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RenderError::FrameSkipped)
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::ContextUnavailable(msg) => {
                write!(f, "unable to initialize the graphics context: {msg}")
            }
            RenderError::ShaderCompile { stage, log } => {
                write!(f, "an error occurred compiling the {stage} shader: {log}")
            }
            RenderError::ProgramLink { log } => {
                write!(f, "unable to initialize the shader program: {log}")
            }
            RenderError::TooManyVertices(n) => {
                write!(f, "{n} vertices exceed the range of a single draw call")
            }
            RenderError::FrameUnavailable(msg) => write!(f, "surface frame unavailable: {msg}"),
            RenderError::FrameSkipped => f.write_str("surface frame skipped"),
        }
    }
}

impl std::error::Error for RenderError {}
