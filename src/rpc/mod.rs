//! JSON-RPC transport
//!
//! Exposes the four account operations as JSON-RPC 2.0 methods on `POST /`.
//!
//! ```text
//! RpcServer
//!     ├── ServerConfig (bind_addr, worker_threads, store, seed)
//!     ├── axum Router ── handlers::handle_rpc_request
//!     └── AccountService
//!         └── Arc<dyn AccountStore>
//! ```

pub mod handlers;
pub mod types;

use crate::cli::StoreType;
use crate::core::{create_store, demo_seed, AccountService};
use axum::{routing::post, Router};
use thiserror::Error;
use tracing::{info, warn};

/// Startup and serving failures
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to create tokio runtime: {0}")]
    Runtime(String),

    #[error("Failed to bind RPC server to {addr}: {message}")]
    Bind { addr: String, message: String },

    #[error("RPC server failed: {0}")]
    Serve(String),
}

/// Configuration for the RPC server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind_addr: String,
    /// Number of runtime worker threads
    pub worker_threads: usize,
    /// Store backend
    pub store: StoreType,
    /// Load the demonstration accounts at startup
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:50051".to_string(),
            worker_threads: num_cpus::get(),
            store: StoreType::Concurrent,
            seed: true,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig; a zero worker count falls back to the default
    pub fn new(bind_addr: String, worker_threads: usize, store: StoreType, seed: bool) -> Self {
        let default = Self::default();

        let worker_threads = if worker_threads == 0 {
            warn!(
                "Invalid worker_threads ({}), using default ({})",
                worker_threads, default.worker_threads
            );
            default.worker_threads
        } else {
            worker_threads
        };

        Self {
            bind_addr,
            worker_threads,
            store,
            seed,
        }
    }

    /// Build the account service described by this configuration
    pub fn build_service(&self) -> AccountService {
        let seed = if self.seed { demo_seed() } else { Vec::new() };
        let seeded = seed.len();
        let service = AccountService::new(create_store(self.store, seed));
        info!("{:?} store ready with {} seed accounts", self.store, seeded);
        service
    }
}

/// Build the JSON-RPC router around a service
pub fn router(service: AccountService) -> Router {
    Router::new()
        .route("/", post(handlers::handle_rpc_request))
        .with_state(service)
}

pub struct RpcServer {
    service: AccountService,
    bind_addr: String,
}

impl RpcServer {
    pub fn new(service: AccountService, bind_addr: impl Into<String>) -> Self {
        Self {
            service,
            bind_addr: bind_addr.into(),
        }
    }

    /// Serve until Ctrl-C, then drain in-flight requests and return
    pub async fn start(self) -> Result<(), ServerError> {
        let app = router(self.service);

        let listener = tokio::net::TcpListener::bind(&self.bind_addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: self.bind_addr.clone(),
                message: e.to_string(),
            })?;

        info!("RPC server listening on {}", self.bind_addr);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Serve(e.to_string()))?;

        info!("RPC server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Build the runtime described by `config` and serve on it until shutdown
pub fn run(config: ServerConfig) -> Result<(), ServerError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .enable_all()
        .build()
        .map_err(|e| ServerError::Runtime(e.to_string()))?;

    let service = config.build_service();
    runtime.block_on(RpcServer::new(service, config.bind_addr).start())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero_falls_back(0, num_cpus::get())]
    #[case::explicit(4, 4)]
    fn test_worker_threads(#[case] requested: usize, #[case] expected: usize) {
        let config = ServerConfig::new("127.0.0.1:0".to_string(), requested, StoreType::Locked, true);
        assert_eq!(config.worker_threads, expected);
    }

    #[rstest]
    #[case::seeded(true, 2)]
    #[case::clean(false, 0)]
    fn test_build_service_seed(#[case] seed: bool, #[case] expected: usize) {
        let config = ServerConfig::new("127.0.0.1:0".to_string(), 1, StoreType::Concurrent, seed);

        let service = config.build_service();

        assert_eq!(service.list_accounts().unwrap().len(), expected);
    }

    #[tokio::test]
    async fn test_bind_failure_is_reported() {
        let server = RpcServer::new(config_service(), "not-an-address");

        let result = server.start().await;

        assert!(matches!(result, Err(ServerError::Bind { .. })));
    }

    fn config_service() -> AccountService {
        ServerConfig::default().build_service()
    }
}
