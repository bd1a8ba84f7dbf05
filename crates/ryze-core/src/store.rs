//! Deployment storage
//!
//! Two backends behind one trait: an in-process map for tests and
//! single-node runs, and a directory of `<id>.html` + `<id>.json` pairs
//! that survives restarts.

use crate::error::PackagingError;
use crate::packaging::DeploymentId;
use crate::types::Deployment;
use dashmap::DashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Deployment storage backend
#[async_trait::async_trait]
pub trait DeploymentStore: Send + Sync + std::fmt::Debug {
    /// Backend name for logs
    fn name(&self) -> &'static str;

    /// Store a deployment, replacing any previous one with the same id
    async fn put(&self, deployment: Deployment) -> Result<(), PackagingError>;

    /// Fetch a deployment; `None` when the id is unknown
    async fn get(&self, id: &DeploymentId) -> Result<Option<Deployment>, PackagingError>;
}

/// Deployments kept by [`InMemoryDeploymentStore::new`]
pub const DEFAULT_MAX_IN_MEMORY: usize = 256;

/// Deployments held in memory
///
/// Meant for tests and single-node runs: nothing survives a restart and
/// each page may be as large as the request body limit. Once `max_entries`
/// is reached, storing a new id evicts the oldest deployment.
#[derive(Debug)]
pub struct InMemoryDeploymentStore {
    deployments: DashMap<String, Deployment>,
    max_entries: usize,
}

impl InMemoryDeploymentStore {
    /// Empty store holding up to [`DEFAULT_MAX_IN_MEMORY`] deployments
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_IN_MEMORY)
    }

    /// Empty store holding up to `max_entries` deployments (at least one)
    #[must_use]
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            deployments: DashMap::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Eviction threshold
    #[inline]
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Number of stored deployments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.deployments.len()
    }

    /// Whether nothing is stored
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deployments.is_empty()
    }

    fn evict_oldest(&self) -> Option<String> {
        let oldest = self
            .deployments
            .iter()
            .min_by(|a, b| {
                (a.value().created_at, a.key()).cmp(&(b.value().created_at, b.key()))
            })
            .map(|entry| entry.key().clone())?;
        self.deployments.remove(&oldest).map(|(id, _)| id)
    }
}

impl Default for InMemoryDeploymentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DeploymentStore for InMemoryDeploymentStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn put(&self, deployment: Deployment) -> Result<(), PackagingError> {
        while !self.deployments.contains_key(&deployment.id)
            && self.deployments.len() >= self.max_entries
        {
            let Some(evicted) = self.evict_oldest() else {
                break;
            };
            tracing::debug!(deployment = %evicted, "evicted in-memory deployment");
        }
        self.deployments.insert(deployment.id.clone(), deployment);
        Ok(())
    }

    async fn get(&self, id: &DeploymentId) -> Result<Option<Deployment>, PackagingError> {
        Ok(self.deployments.get(id.as_str()).map(|d| d.value().clone()))
    }
}

/// Deployments persisted as files under one directory
///
/// The page goes to `<id>.html`; everything else to `<id>.json`.
#[derive(Debug, Clone)]
pub struct DirectoryDeploymentStore {
    root: PathBuf,
}

impl DirectoryDeploymentStore {
    /// Store rooted at `root`; the directory is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage directory
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn html_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.html"))
    }

    fn meta_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }
}

#[async_trait::async_trait]
impl DeploymentStore for DirectoryDeploymentStore {
    fn name(&self) -> &'static str {
        "directory"
    }

    async fn put(&self, deployment: Deployment) -> Result<(), PackagingError> {
        // Ids reach the filesystem, so re-check them here too.
        let id = DeploymentId::parse(&deployment.id)?;
        tokio::fs::create_dir_all(&self.root).await?;

        let meta = serde_json::to_vec_pretty(&deployment)?;
        tokio::fs::write(self.html_path(id.as_str()), deployment.html.as_bytes()).await?;
        tokio::fs::write(self.meta_path(id.as_str()), meta).await?;

        tracing::debug!(deployment = %id, root = %self.root.display(), "deployment written");
        Ok(())
    }

    async fn get(&self, id: &DeploymentId) -> Result<Option<Deployment>, PackagingError> {
        let meta = match tokio::fs::read(self.meta_path(id.as_str())).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let html = match tokio::fs::read_to_string(self.html_path(id.as_str())).await {
            Ok(html) => html,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let mut deployment: Deployment = serde_json::from_slice(&meta)?;
        deployment.html = html;
        Ok(Some(deployment))
    }
}
