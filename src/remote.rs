use tokio::sync::Mutex;

use crate::command::DisplayCommand;
use crate::display::{DisplayBridge, DisplayError};

/// Serializes "show video" commands onto the display.
///
/// Holds the bridge to the one active display and the update lock. The bridge
/// is fixed at construction and never reassigned, so reading it needs no lock;
/// the lock only makes build-and-deliver a single step per request.
pub struct Remote {
    bridge: DisplayBridge,
    embed_base: String,
    update_lock: Mutex<()>,
}

impl Remote {
    pub fn new(bridge: DisplayBridge, embed_base: impl Into<String>) -> Self {
        Remote {
            bridge,
            embed_base: embed_base.into(),
            update_lock: Mutex::new(()),
        }
    }

    pub fn embed_base(&self) -> &str {
        &self.embed_base
    }

    /// Build the command for `video` and deliver it while holding the update lock.
    ///
    /// Waits for the lock with no timeout. Waiters are served in the order they
    /// queued (tokio's mutex is fair). The guard is dropped on every return,
    /// including when the bridge reports an error.
    pub async fn show(&self, video: &str) -> Result<(), DisplayError> {
        let _guard = self.update_lock.lock().await;
        let command = DisplayCommand::for_video(&self.embed_base, video);
        tracing::debug!(url = command.url(), "delivering display command");
        self.bridge.deliver(&command.encode())
    }
}
