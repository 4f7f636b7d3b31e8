// Drop-and-replace delivery from the monitor loop to the single subscriber.
//
// Built on tokio::sync::watch: the producer never blocks, only the latest
// undelivered update is retained, and observed updates are never reordered.
// A slow subscriber simply sees fewer updates.

use std::panic::{AssertUnwindSafe, catch_unwind};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::models::MonitorUpdate;

/// Create a connected sender/receiver pair.
pub fn channel() -> (UpdateSender, UpdateReceiver) {
    let (tx, rx) = watch::channel(None);
    (UpdateSender { tx }, UpdateReceiver { rx })
}

pub struct UpdateSender {
    tx: watch::Sender<Option<MonitorUpdate>>,
}

impl UpdateSender {
    /// Publish an update, replacing any undelivered one. Never blocks;
    /// sending with the receiver gone is a silent no-op.
    pub fn send(&self, update: MonitorUpdate) {
        let _ = self.tx.send(Some(update));
    }
}

pub struct UpdateReceiver {
    rx: watch::Receiver<Option<MonitorUpdate>>,
}

impl UpdateReceiver {
    /// Wait for the next update. Returns None once the sender is dropped
    /// and no unseen update remains.
    pub async fn recv(&mut self) -> Option<MonitorUpdate> {
        loop {
            self.rx.changed().await.ok()?;
            if let Some(update) = self.rx.borrow_and_update().clone() {
                return Some(update);
            }
        }
    }
}

/// Run the subscriber side: invoke the callback once per received update.
/// A panicking callback is caught and logged so delivery survives a faulty
/// subscriber; the task ends when the sender side is dropped.
pub fn spawn_subscriber<F>(mut rx: UpdateReceiver, mut callback: F) -> JoinHandle<()>
where
    F: FnMut(MonitorUpdate) + Send + 'static,
{
    tokio::spawn(async move {
        while let Some(update) = rx.recv().await {
            let seq = update.seq;
            if catch_unwind(AssertUnwindSafe(|| callback(update))).is_err() {
                warn!(seq, operation = "subscriber_callback", "callback panicked");
            }
        }
        tracing::debug!("Subscriber shutting down");
    })
}
