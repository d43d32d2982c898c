use log::{error, info};
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::watch;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};
use upsync::{
    Error, LoadBalancerPoolSink, MonitoringTargetFileSink, NotificationSink, Reconciler, Result,
    ServiceDirectoryReader, Settings, ZooKeeperDirectory,
};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<()> {
    let settings = Settings::load()?;

    // Initializing Logs
    let _guard = init_observability()?;

    // Initializing Shutdown Signal
    let (graceful_tx, graceful_rx) = watch::channel(());

    // One long-lived read-only store handle, reused across ticks
    let directory = ZooKeeperDirectory::connect(&settings.directory.hosts).await?;
    let reader = ServiceDirectoryReader::new(directory, settings.directory.service_name.clone());

    let sinks: Vec<Box<dyn NotificationSink>> = vec![
        Box::new(LoadBalancerPoolSink::new(
            settings.load_balancer.endpoints.clone(),
        )),
        Box::new(MonitoringTargetFileSink::new(
            settings.monitoring.target_file.clone(),
            settings.directory.service_name.clone(),
        )),
    ];

    let reconciler = Reconciler::new(reader, sinks, &settings.reconciler, graceful_rx);

    info!(
        "Reconciling service '{}' every {}s. Waiting for CTRL+C signal...",
        settings.directory.service_name, settings.reconciler.poll_interval_secs
    );

    // Listen on Shutdown Signal
    tokio::spawn(async {
        if let Err(e) = graceful_shutdown(graceful_tx).await {
            error!("Failed to shutdown: {:?}", e);
        }
    });

    if let Err(e) = reconciler.run().await {
        error!("reconciler stops: {:?}", e);
    }

    println!("Exiting program.");
    Ok(())
}

async fn graceful_shutdown(graceful_tx: watch::Sender<()>) -> Result<()> {
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    tokio::select! {
        _ = sigint.recv() => {
            info!("SIGINT detected.");
        },
        _ = sigterm.recv() => {
            info!("SIGTERM detected.");
        },
        _ = tokio::signal::ctrl_c() => {
            info!("Ctrl+C detected.");
        },
    }

    graceful_tx.send(()).map_err(|e| {
        error!("Failed to send shutdown signal: {}", e);
        Error::SignalSenderClosed(format!("Failed to send shutdown signal: {}", e))
    })?;

    info!("Shutdown completed");
    Ok(())
}

fn init_observability() -> Result<WorkerGuard> {
    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stdout());
    let base_subscriber = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        );
    tracing_subscriber::registry().with(base_subscriber).init();

    Ok(guard)
}
