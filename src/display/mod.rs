pub mod surface;

use std::sync::Arc;

pub use surface::{LogSurface, StdoutSurface, SurfaceKind};

#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("display surface is not ready")]
    NotReady,
    #[error("failed to write script to display surface: {0}")]
    Io(#[from] std::io::Error),
}

/// Capability to run a script inside the page hosted by the display surface.
/// Implemented by whatever owns the native window; the bridge only holds it.
pub trait ScriptSurface: Send + Sync {
    fn exec_js(&self, script: &str) -> Result<(), DisplayError>;
}

/// One-way channel into the active display.
///
/// `deliver` posts an already-encoded payload to the page as a window message.
/// The page decodes it and decides what to do; nothing comes back except the
/// surface's own failure, if it can report one.
#[derive(Clone)]
pub struct DisplayBridge {
    surface: Arc<dyn ScriptSurface>,
}

impl DisplayBridge {
    pub fn new(surface: Arc<dyn ScriptSurface>) -> Self {
        DisplayBridge { surface }
    }

    /// `payload` must already be opaque-encoded (base64); it is interpolated
    /// into the script without escaping.
    pub fn deliver(&self, payload: &str) -> Result<(), DisplayError> {
        self.surface.exec_js(&post_message_script(payload))
    }
}

/// Script the page receives for one delivery.
pub fn post_message_script(payload: &str) -> String {
    format!("window.postMessage(atob('{payload}'))")
}
