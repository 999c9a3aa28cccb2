use crate::config::TomlConfig;
use crate::core::{ConfigProvider, LandmarkStore, LocatorService};
use crate::http;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;

/// A fully initialized server ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    address: SocketAddr,
    static_dir: Option<String>,
    service: LocatorService<dyn LandmarkStore>,
}

impl Server {
    /// Builds the landmark store and the service on top of it.
    ///
    /// # Errors
    /// Returns an error if the in-memory store cannot be seeded from its file
    /// or the store configuration is incomplete.
    pub async fn build(config: &TomlConfig) -> Result<Self> {
        let service = super::build_service(config)
            .await
            .context("Failed to initialize landmark store")?;

        Ok(Self {
            address: config.bind_address(),
            static_dir: config.static_dir().map(str::to_string),
            service,
        })
    }

    /// Serves requests until Ctrl+C or SIGTERM, then drains open connections.
    pub async fn run(self) -> Result<()> {
        let app = http::router(self.service, self.static_dir.as_deref());

        let listener = TcpListener::bind(self.address)
            .await
            .with_context(|| format!("Failed to bind {}", self.address))?;

        tracing::info!(address = %self.address, "API running on http://{}", self.address);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
