use std::sync::{Arc, Mutex, MutexGuard};

/// Collects device errors that wgpu reports outside of a `Result`.
///
/// wgpu validates resource creation (shader modules, pipelines) and hands
/// failures to the device's uncaptured-error callback instead of returning
/// them. The sink replaces the default callback, which panics, and keeps the
/// messages so the caller can drain them after each operation and turn them
/// into a diagnostic log.
#[derive(Debug, Clone, Default)]
pub struct ErrorSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl ErrorSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes `device`'s uncaptured errors into this sink.
    pub fn install(&self, device: &wgpu::Device) {
        device.on_uncaptured_error(self.handler());
    }

    /// Callback that pushes each error it receives into this sink.
    fn handler(&self) -> Arc<dyn wgpu::UncapturedErrorHandler> {
        let sink = self.clone();
        Arc::new(move |err: wgpu::Error| {
            log::debug!("captured wgpu error: {err}");
            sink.push(err.to_string());
        })
    }

    pub fn push(&self, message: impl Into<String>) {
        self.lock().push(message.into());
    }

    /// Removes and returns everything captured so far.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        // Poisoning only means a panic happened mid-push; the Vec is still valid.
        self.messages.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
