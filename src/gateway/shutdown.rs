// src/gateway/shutdown.rs
use tokio::sync::oneshot;

/// Create the pair of ends of the process lifetime signal: the entry point
/// keeps the `ShutdownSignal` and waits on it; the platform-disconnect
/// collaborator consumes the `DisconnectHandle` when the session ends.
pub fn shutdown_channel() -> (DisconnectHandle, ShutdownSignal) {
    let (tx, rx) = oneshot::channel();
    (DisconnectHandle { tx }, ShutdownSignal { rx })
}

/// Completion token signaled exactly once on disconnect. Consuming `self`
/// makes double-signaling unrepresentable.
pub struct DisconnectHandle {
    tx: oneshot::Sender<()>,
}

impl DisconnectHandle {
    pub fn signal(self) {
        // The receiver may already be gone during shutdown; nothing to do then
        let _ = self.tx.send(());
    }
}

/// The "bot is alive" signal the process blocks on until disconnect.
pub struct ShutdownSignal {
    rx: oneshot::Receiver<()>,
}

impl ShutdownSignal {
    /// Wait until the disconnect collaborator signals. Also completes if the
    /// handle is dropped unsignaled, so a crashed session still unblocks the
    /// process.
    pub async fn wait(self) {
        let _ = self.rx.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_signal_completes_wait() {
        let (handle, signal) = shutdown_channel();
        handle.signal();
        signal.wait().await;
    }

    #[tokio::test]
    async fn test_dropped_handle_completes_wait() {
        let (handle, signal) = shutdown_channel();
        drop(handle);
        signal.wait().await;
    }
}
