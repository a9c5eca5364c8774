//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Own the route table, config and access log sink
//! - Wire up middleware (trace, access log, timeout, body limit)
//! - Serve connections until shutdown is signalled

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{ServerConfig, SlashConfig};
use crate::health;
use crate::http::middleware::{request_log, RequestLogState};
use crate::observability::{LogSink, TracingSink};
use crate::slash::{handlers::slash_command, PresenceCheck, TokenVerifier};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<dyn TokenVerifier>,
    pub slash: SlashConfig,
}

/// Error type for serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to serve: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP server answering slash commands.
pub struct SlashServer {
    config: ServerConfig,
    state: AppState,
    sink: Arc<dyn LogSink>,
}

impl SlashServer {
    /// Create a server that writes its access log through `tracing`.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_sink(config, Arc::new(TracingSink))
    }

    /// Create a server that writes its access log to `sink`.
    pub fn with_sink(config: ServerConfig, sink: Arc<dyn LogSink>) -> Self {
        let state = AppState {
            verifier: Arc::new(PresenceCheck),
            slash: config.slash.clone(),
        };
        Self {
            config,
            state,
            sink,
        }
    }

    /// Replace the token verifier.
    pub fn with_verifier(mut self, verifier: Arc<dyn TokenVerifier>) -> Self {
        self.state.verifier = verifier;
        self
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The access log sits outside the timeout and body limit so rejections
    /// from those layers are logged too.
    #[allow(deprecated)]
    pub fn router(&self) -> Router {
        let log_state = RequestLogState::new(self.sink.clone(), &self.config.logging);

        Router::new()
            .route("/status", get(health::status))
            .route("/slash", post(slash_command))
            .with_state(self.state.clone())
            .layer(RequestBodyLimitLayer::new(self.config.limits.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(
                self.config.timeouts.request_secs,
            )))
            .layer(middleware::from_fn_with_state(log_state, request_log))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until a
    /// shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router()
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
