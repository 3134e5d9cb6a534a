use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called for window events before the runtime handles them.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called whenever the window is asked to redraw.
    ///
    /// The runtime requests exactly one redraw after the window is created;
    /// further frames only happen if the app asks via [`WindowCtx::request_redraw`].
    ///
    /// [`WindowCtx::request_redraw`]: super::WindowCtx::request_redraw
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
