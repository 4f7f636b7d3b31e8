// Start/stop lifecycle around the monitor loop. At most one loop runs at
// a time; start() replaces any running loop, stop() is a no-op when
// already stopped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::delivery;
use crate::models::MonitorUpdate;
use crate::sources::Sources;
use crate::worker::{self, WorkerConfig, WorkerDeps};

#[derive(Default)]
pub struct MonitorController {
    running: Option<RunningMonitor>,
}

struct RunningMonitor {
    cancelled: Arc<AtomicBool>,
    shutdown_tx: oneshot::Sender<()>,
    worker: JoinHandle<()>,
    subscriber: JoinHandle<()>,
}

impl RunningMonitor {
    fn signal(self) -> (JoinHandle<()>, JoinHandle<()>) {
        self.cancelled.store(true, Ordering::Release);
        let _ = self.shutdown_tx.send(());
        (self.worker, self.subscriber)
    }
}

impl MonitorController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh monitor loop delivering updates to `callback` on a
    /// background task. Any loop already running is stopped first.
    pub fn start<F>(&mut self, sources: Sources, config: WorkerConfig, callback: F)
    where
        F: FnMut(MonitorUpdate) + Send + 'static,
    {
        self.stop();

        let (tx, rx) = delivery::channel();
        let subscriber = delivery::spawn_subscriber(rx, callback);
        let cancelled = Arc::new(AtomicBool::new(false));
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let worker = worker::spawn(
            WorkerDeps {
                sources,
                tx,
                cancelled: cancelled.clone(),
                shutdown_rx,
            },
            config,
        );
        tracing::debug!("Monitor started");
        self.running = Some(RunningMonitor {
            cancelled,
            shutdown_tx,
            worker,
            subscriber,
        });
    }

    /// Signal cancellation and release the loop reference without waiting
    /// for the final iteration. The update already in flight when the flag
    /// is set may still reach the subscriber.
    pub fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.signal();
            tracing::debug!("Monitor stopped");
        }
    }

    /// Stop and wait for both the loop and the subscriber task to finish.
    /// Tests use this to observe shutdown deterministically.
    pub async fn stop_and_join(&mut self) {
        if let Some(running) = self.running.take() {
            let (worker, subscriber) = running.signal();
            let _ = worker.await;
            let _ = subscriber.await;
            tracing::debug!("Monitor stopped and joined");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }
}
