use anyhow::Result;
use procwatch::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;
    tracing::info!(
        version = version::VERSION,
        sample_interval_ms = app_config.monitoring.sample_interval_ms,
        "Starting {}",
        version::NAME
    );

    let mut controller = controller::MonitorController::new();
    controller.start(
        sources::Sources::local(),
        worker::WorkerConfig {
            sample_interval_ms: app_config.monitoring.sample_interval_ms,
        },
        |update| match serde_json::to_string(&update) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::warn!(error = %e, "update serialization failed"),
        },
    );

    #[cfg(unix)]
    {
        let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                tokio::signal::ctrl_c().await?;
                controller.stop_and_join().await;
                return Ok(());
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
    }

    tracing::info!("Received shutdown signal");
    controller.stop_and_join().await;
    Ok(())
}
