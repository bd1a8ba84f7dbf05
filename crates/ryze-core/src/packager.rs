//! Packaging service
//!
//! Renders an artifact into a standalone page, stores it, and hands back
//! the view and download URLs.

use crate::error::{PackagingError, RyzeError};
use crate::packaging::{derive_title, render_standalone, DeploymentId};
use crate::store::{DeploymentStore, InMemoryDeploymentStore};
use crate::types::{Deployment, PackageRequest, PackageResponse};
use ryze_artifact::Artifact;
use std::sync::Arc;

/// Default public base URL
pub const DEFAULT_PUBLIC_URL: &str = "http://localhost:3000";

/// Packages artifacts and serves stored deployments
#[derive(Debug, Clone)]
pub struct Packager {
    store: Arc<dyn DeploymentStore>,
    public_base_url: String,
}

impl Packager {
    /// Packager over `store`, publishing under `public_base_url`
    pub fn new(store: Arc<dyn DeploymentStore>, public_base_url: impl Into<String>) -> Self {
        let public_base_url = public_base_url.into().trim_end_matches('/').to_string();
        Self {
            store,
            public_base_url,
        }
    }

    /// In-memory packager on [`DEFAULT_PUBLIC_URL`]
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryDeploymentStore::new()), DEFAULT_PUBLIC_URL)
    }

    /// Base URL without trailing slash
    #[inline]
    #[must_use]
    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }

    /// Page URL for `id`
    #[must_use]
    pub fn view_url(&self, id: &DeploymentId) -> String {
        format!("{}/view/{id}", self.public_base_url)
    }

    /// Attachment URL for `id`
    #[must_use]
    pub fn download_url(&self, id: &DeploymentId) -> String {
        format!("{}/download/{id}", self.public_base_url)
    }

    /// Package `request.code` as a standalone page and store it
    ///
    /// # Errors
    /// - [`RyzeError::InvalidInput`] if the code is blank
    /// - [`RyzeError::Packaging`] if the store fails
    pub async fn package(&self, request: PackageRequest) -> Result<PackageResponse, RyzeError> {
        let artifact = Artifact::parse(request.code)
            .map_err(|_| RyzeError::invalid_input("code is required"))?;

        let id = DeploymentId::generate();
        let title = derive_title(request.prompt.as_deref());
        let url = self.view_url(&id);
        let download_url = self.download_url(&id);
        let html = render_standalone(artifact.as_str(), &title, &url, &download_url);

        let deployment = Deployment {
            id: id.to_string(),
            title,
            prompt: request.prompt,
            content_hash: *artifact.hash(),
            original_code: artifact.into_text(),
            html,
            created_at: chrono::Utc::now(),
        };
        self.store.put(deployment).await?;

        tracing::info!(
            deployment = %id,
            store = self.store.name(),
            "deployment created"
        );

        Ok(PackageResponse {
            success: true,
            id: id.to_string(),
            url,
            download_url,
        })
    }

    /// Look up a stored deployment
    ///
    /// # Errors
    /// - [`RyzeError::NotFound`] if the id is malformed or unknown
    /// - [`RyzeError::Packaging`] if the store fails
    pub async fn deployment(&self, id: &str) -> Result<Deployment, RyzeError> {
        let id = match DeploymentId::parse(id) {
            Ok(id) => id,
            Err(PackagingError::InvalidId(raw)) => return Err(RyzeError::NotFound(raw)),
            Err(err) => return Err(err.into()),
        };
        self.store
            .get(&id)
            .await?
            .ok_or_else(|| RyzeError::NotFound(id.to_string()))
    }
}

impl Default for Packager {
    fn default() -> Self {
        Self::in_memory()
    }
}
