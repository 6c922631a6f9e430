//! Application startup and lifecycle management.

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::adapters::http::{
    api_router, apply_middleware, CostHandlers, HealthState, SubscriptionHandlers,
};
use crate::adapters::postgres::{
    self, PostgresHealthProbe, PostgresRecordSource, PostgresSubscriptionRepository,
};
use crate::application::handlers::{
    CreateSubscriptionHandler, DeleteSubscriptionHandler, GetSubscriptionHandler,
    ListSubscriptionsHandler, TotalCostHandler, UpdateSubscriptionHandler,
};
use crate::config::{AppConfig, ValidationError};
use crate::ports::{HealthProbe, RecordSource, SubscriptionRepository};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("Database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database ping failed: {0}")]
    Ping(String),

    #[error("Migrations failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Port implementations the router is wired against.
#[derive(Clone)]
pub struct Ports {
    pub repository: Arc<dyn SubscriptionRepository>,
    pub records: Arc<dyn RecordSource>,
    pub health: Arc<dyn HealthProbe>,
}

/// Wires handlers onto `ports` and returns the full router with middleware.
pub fn build_router(ports: Ports, config: &AppConfig) -> Router {
    let subscriptions = SubscriptionHandlers::new(
        Arc::new(CreateSubscriptionHandler::new(ports.repository.clone())),
        Arc::new(GetSubscriptionHandler::new(ports.repository.clone())),
        Arc::new(ListSubscriptionsHandler::new(ports.repository.clone())),
        Arc::new(UpdateSubscriptionHandler::new(ports.repository.clone())),
        Arc::new(DeleteSubscriptionHandler::new(ports.repository)),
    );
    let cost = CostHandlers::new(Arc::new(TotalCostHandler::new(
        ports.records,
        config.billing.currency.clone(),
    )));
    let health = HealthState::new(ports.health);

    apply_middleware(api_router(subscriptions, cost, health), &config.server)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
    shutdown_timeout: Duration,
}

impl Application {
    /// Build the application against PostgreSQL.
    pub async fn build(config: AppConfig) -> Result<Self, StartupError> {
        config.validate()?;

        let pool = postgres::connect(&config.database).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to connect to PostgreSQL");
            e
        })?;

        let probe = PostgresHealthProbe::new(pool.clone());
        probe
            .ping()
            .await
            .map_err(|e| StartupError::Ping(e.to_string()))?;

        if config.database.run_migrations {
            postgres::run_migrations(&pool).await.map_err(|e| {
                tracing::error!(error = %e, "Failed to run migrations");
                e
            })?;
        }

        let ports = Ports {
            repository: Arc::new(PostgresSubscriptionRepository::new(pool.clone())),
            records: Arc::new(PostgresRecordSource::new(pool)),
            health: Arc::new(probe),
        };

        Self::with_ports(ports, config).await
    }

    /// Build the application against caller-supplied ports.
    pub async fn with_ports(ports: Ports, config: AppConfig) -> Result<Self, StartupError> {
        let addr = config.server.socket_addr()?;
        let listener = TcpListener::bind(addr).await.map_err(|source| {
            tracing::error!(error = %source, addr = %addr, "Failed to bind HTTP listener");
            StartupError::Bind { addr, source }
        })?;
        let port = listener
            .local_addr()
            .map_err(|source| StartupError::Bind { addr, source })?
            .port();

        tracing::info!(port = port, "HTTP listener bound");

        Ok(Self {
            port,
            listener,
            router: build_router(ports, &config),
            shutdown_timeout: config.server.shutdown_timeout(),
        })
    }

    /// Port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serves until `shutdown` resolves, then drains in-flight requests for
    /// at most the configured shutdown timeout.
    pub async fn run_until_stopped<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let (stopping_tx, stopping_rx) = oneshot::channel::<()>();
        let grace = self.shutdown_timeout;

        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            port = self.port,
            "Service ready to accept connections"
        );

        let server = axum::serve(self.listener, self.router).with_graceful_shutdown(async move {
            shutdown.await;
            let _ = stopping_tx.send(());
        })
        .into_future();

        let drain_deadline = async move {
            if stopping_rx.await.is_ok() {
                tokio::time::sleep(grace).await;
            } else {
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            result = server => result,
            _ = drain_deadline => {
                tracing::warn!(
                    grace_secs = grace.as_secs(),
                    "Shutdown grace period elapsed; dropping in-flight requests"
                );
                Ok(())
            }
        }
    }
}
