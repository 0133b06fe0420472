use tokio::signal;
use tracing::{error, warn};

async fn ctrl_c() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(e) => {
            error!("Failed to listen for SIGTERM: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}

/// 等待 Ctrl+C 或 SIGTERM
pub async fn listen_for_shutdown() {
    tokio::select! {
        _ = ctrl_c() => {}
        _ = terminate() => {}
    }
    warn!("Shutdown signal received, initiating graceful shutdown...");
}
