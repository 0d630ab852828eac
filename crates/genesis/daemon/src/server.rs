//! Server setup and lifecycle management

use crate::api::create_router;
use crate::api::rest::state::AppState;
use crate::config::DaemonConfig;
use crate::error::{DaemonError, DaemonResult};
use crate::sink::{LoggingSink, SubmissionSink};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Genesis daemon server
pub struct Server {
    config: DaemonConfig,
    sink: Arc<dyn SubmissionSink>,
}

impl Server {
    /// Create a server that logs accepted submissions
    pub fn new(config: DaemonConfig) -> Self {
        Self::with_sink(config, Arc::new(LoggingSink))
    }

    /// Create a server with a custom submission sink
    pub fn with_sink(config: DaemonConfig, sink: Arc<dyn SubmissionSink>) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &DaemonConfig {
        &self.config
    }

    /// Bind the configured address and serve until Ctrl+C or SIGTERM
    pub async fn run(self) -> DaemonResult<()> {
        let addr = self.config.server.listen_addr;
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> DaemonResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.config.validate()?;

        let state = AppState::new(self.sink).with_ack_delay(self.config.contact.ack_delay());
        let app = create_router(state, &self.config.server);

        let addr = listener.local_addr()?;
        tracing::info!(%addr, "genesis daemon listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| DaemonError::Server(e.to_string()))?;

        tracing::info!("genesis daemon shut down");
        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serve_rejects_ack_delay_beyond_timeout() {
        let mut config = DaemonConfig::default();
        config.server.request_timeout_secs = 1;
        config.contact.ack_delay_ms = 1_500;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let result = Server::new(config).serve(listener, async {}).await;
        assert!(matches!(result, Err(DaemonError::Config(_))));
    }
}
