//! AppBuilder for fluent construction of the HTTP application

use crate::config::AppConfig;
use crate::containers::{BillsContainer, NewBillContainer};
use crate::core::session::{InMemorySessionStore, SessionStore};
use crate::server::handlers::AppState;
use crate::server::router::build_router;
use crate::store::{BillsStore, InMemoryBillsStore};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the billed application
///
/// # Example
///
/// ```ignore
/// AppBuilder::new()
///     .with_config(AppConfig::default_config())
///     .with_store(InMemoryBillsStore::seeded())
///     .serve().await?;
/// ```
pub struct AppBuilder {
    config: AppConfig,
    store: Option<Arc<dyn BillsStore>>,
    session: Option<Arc<dyn SessionStore>>,
}

impl AppBuilder {
    /// Create a new AppBuilder
    pub fn new() -> Self {
        Self {
            config: AppConfig::default_config(),
            store: None,
            session: None,
        }
    }

    /// Set the application configuration
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the bills store (defaults to the seeded in-memory store)
    pub fn with_store(mut self, store: impl BillsStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set the session store (defaults to the in-memory store)
    pub fn with_session(mut self, session: impl SessionStore + 'static) -> Self {
        self.session = Some(Arc::new(session));
        self
    }

    /// Build the axum router with all routes wired
    pub fn build(self) -> Router {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(InMemoryBillsStore::seeded()));
        let session = self
            .session
            .unwrap_or_else(|| Arc::new(InMemorySessionStore::new()));
        let config = Arc::new(self.config);

        let bills = Arc::new(BillsContainer::new(store.clone(), session.clone()));
        let new_bill = Arc::new(NewBillContainer::new(
            store.clone(),
            session.clone(),
            config.allowed_extensions.clone(),
        ));

        build_router(AppState {
            bills,
            new_bill,
            store,
            session,
            config,
        })
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to the configured address and handles SIGTERM and SIGINT
    /// (Ctrl+C) for graceful shutdown.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_addr();
        let app = self.build();
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
