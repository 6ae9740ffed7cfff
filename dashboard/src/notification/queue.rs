//! Notification queue and worker.
//!
//! Senders never block: toasts go into an unbounded channel and the worker
//! prints them in arrival order.

use tokio::sync::mpsc;

use super::types::{Toast, ToastLevel};

/// Sending half of the toast queue. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Toast>,
}

impl Notifier {
    /// Create a notifier and the receiver a worker (or test) drains.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Toast>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Create a notifier with a worker already running on the current runtime.
    pub fn spawn() -> (Self, tokio::task::JoinHandle<()>) {
        let (notifier, rx) = Self::channel();
        let handle = tokio::spawn(worker_loop(rx));
        (notifier, handle)
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Toast::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Toast::error(message));
    }

    fn push(&self, toast: Toast) {
        if self.tx.send(toast).is_err() {
            tracing::debug!("Toast dropped: notification worker stopped");
        }
    }
}

/// Worker loop: render every toast until all notifiers are dropped.
pub async fn worker_loop(mut rx: mpsc::UnboundedReceiver<Toast>) {
    while let Some(toast) = rx.recv().await {
        match toast.level {
            ToastLevel::Success => tracing::info!(message = %toast.message, "toast"),
            ToastLevel::Error => tracing::warn!(message = %toast.message, "toast"),
        }
        eprintln!("{toast}");
    }
    tracing::debug!("Notification worker stopped");
}
