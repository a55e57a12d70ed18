use std::sync::Mutex;

use tokio::sync::oneshot;

/// "Runtime ready" notification from the window host.
///
/// Only the first `fire` has an effect; the host may call it on every
/// ready event it sees.
pub struct ReadySignal {
    tx: Mutex<Option<oneshot::Sender<()>>>,
}

/// Waiting half of [`ReadySignal`]; the server awaits it before binding.
pub struct ReadyGate {
    rx: oneshot::Receiver<()>,
}

pub fn ready_pair() -> (ReadySignal, ReadyGate) {
    let (tx, rx) = oneshot::channel();
    (
        ReadySignal {
            tx: Mutex::new(Some(tx)),
        },
        ReadyGate { rx },
    )
}

impl ReadySignal {
    /// Returns true for the call that opened the gate, false afterwards.
    pub fn fire(&self) -> bool {
        let tx = match self.tx.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        match tx {
            Some(tx) => {
                tracing::info!("runtime ready");
                // A dropped gate means nobody is waiting to serve; nothing to do.
                let _ = tx.send(());
                true
            }
            None => false,
        }
    }
}

impl ReadyGate {
    /// Resolves once the signal fires. Returns false if the signal was dropped
    /// without firing, in which case the server must not start.
    pub async fn wait(self) -> bool {
        self.rx.await.is_ok()
    }
}
