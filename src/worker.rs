// Background monitor loop: refresh every source, assemble one update,
// push it to the delivery channel, sleep, repeat until cancelled.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::oneshot;
use tokio::time::Duration;

use crate::delivery::UpdateSender;
use crate::models::assemble;
use crate::sources::Sources;

/// Sources, delivery, and cancellation for the monitor loop.
pub struct WorkerDeps {
    pub sources: Sources,
    pub tx: UpdateSender,
    /// Set once by the controller; observed at the top of every iteration.
    pub cancelled: Arc<AtomicBool>,
    /// Interrupts an in-progress inter-iteration wait.
    pub shutdown_rx: oneshot::Receiver<()>,
}

pub struct WorkerConfig {
    pub sample_interval_ms: u64,
}

/// Spawns the monitor loop on a background task.
///
/// Cancellation is cooperative: the flag is re-checked at the top of each
/// iteration and the wait is interruptible, so stop() takes effect within
/// one interval plus one iteration's reader time. Reader calls themselves
/// are synchronous and are never aborted mid-call.
pub fn spawn(deps: WorkerDeps, config: WorkerConfig) -> tokio::task::JoinHandle<()> {
    let WorkerDeps {
        mut sources,
        tx,
        cancelled,
        mut shutdown_rx,
    } = deps;
    let interval = Duration::from_millis(config.sample_interval_ms);

    tokio::spawn(async move {
        let worker_span = tracing::span!(
            tracing::Level::DEBUG,
            "monitor",
            sample_interval_ms = config.sample_interval_ms
        );
        let _guard = worker_span.enter();

        let mut seq: u64 = 0;
        loop {
            if cancelled.load(Ordering::Acquire) {
                tracing::debug!("Monitor loop cancelled");
                return;
            }

            // Fixed sampling order: counters first, then foreground
            // discovery, then the memory read keyed to that pid.
            sources.net.update();
            sources.cpu.update();
            sources.foreground.update();
            let app = sources.foreground.foreground_app();
            sources.memory.update(app.pid);

            seq += 1;
            let update = assemble(
                seq,
                app,
                sources.net.net_data(),
                sources.memory.memory_data(),
                sources.cpu.cpu_data(),
            );
            tx.send(update);

            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = &mut shutdown_rx => {
                    // Stop signal, or the controller went away entirely.
                    tracing::debug!("Monitor loop shutting down");
                    return;
                }
            }
        }
    })
}
