//! Ryze Server - HTTP and CLI Surface
//!
//! Exposes the generator over HTTP with warp:
//! - `GET /health`
//! - `POST /generate`, `/modify`, `/deploy`
//! - `GET /view/{id}`, `/download/{id}`
//!
//! Each path is also served under `/api/generator`. Configuration comes
//! from `ryze.toml`, the environment and command-line flags.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod routes;
pub mod telemetry;

pub use config::{RyzeConfig, ServerConfig, StorageConfig, DEFAULT_CONFIG_FILE};
pub use routes::{app, error_reply, routes, AppState};
pub use telemetry::init_tracing;

use ryze_core::{DeploymentStore, DirectoryDeploymentStore, InMemoryDeploymentStore, Packager};
use std::sync::Arc;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Deployment store selected by `config`
#[must_use]
pub fn deployment_store(config: &StorageConfig) -> Arc<dyn DeploymentStore> {
    match config {
        StorageConfig::Memory => Arc::new(InMemoryDeploymentStore::new()),
        StorageConfig::Directory { path } => Arc::new(DirectoryDeploymentStore::new(path)),
    }
}

/// Application state for `config`
#[must_use]
pub fn app_state(config: &RyzeConfig) -> AppState {
    let packager = Packager::new(
        deployment_store(&config.deployments),
        config.public_base_url(),
    );
    AppState::new(ryze_core::UiGenerator::default(), packager)
}
