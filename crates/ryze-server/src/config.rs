//! Server configuration
//!
//! Loaded from TOML, then overridden by environment variables, then by
//! command-line flags.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//! allowed_origins = ["https://app.example.com"]
//! max_body_bytes = 52428800
//! public_base_url = "https://ryze.example.com"
//!
//! [deployments]
//! storage = "directory"
//! path = "./deployments"
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "ryze.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RyzeConfig {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Where packaged deployments live
    pub deployments: StorageConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// CORS origins; any origin when empty
    pub allowed_origins: Vec<String>,
    /// Request body limit
    pub max_body_bytes: u64,
    /// Base of the URLs handed out for deployments
    pub public_base_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            allowed_origins: Vec::new(),
            max_body_bytes: 50 * 1024 * 1024,
            public_base_url: None,
        }
    }
}

/// Deployment storage backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "storage", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Keep deployments in process memory
    #[default]
    Memory,
    /// Persist deployments as files under `path`
    Directory {
        /// Storage directory
        path: PathBuf,
    },
}

impl RyzeConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document
    ///
    /// # Errors
    /// Returns an error if the document is not valid configuration
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    /// Load configuration
    ///
    /// Reads `explicit` when given (it must exist), else
    /// [`DEFAULT_CONFIG_FILE`] when present, else the defaults.
    ///
    /// # Errors
    /// Returns an error if a file cannot be read or parsed
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Apply `RYZE_HOST`, `PORT`, `RYZE_PUBLIC_URL` and `RYZE_DEPLOY_DIR`
    /// from the process environment
    ///
    /// # Errors
    /// Returns an error if `PORT` is not a port number
    pub fn with_process_env(self) -> anyhow::Result<Self> {
        self.with_env(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`
    ///
    /// # Errors
    /// Returns an error if `PORT` is not a port number
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        if let Some(host) = lookup("RYZE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port: {port:?}"))?;
        }
        if let Some(url) = lookup("RYZE_PUBLIC_URL") {
            self.server.public_base_url = Some(url);
        }
        if let Some(dir) = lookup("RYZE_DEPLOY_DIR") {
            self.deployments = StorageConfig::Directory { path: dir.into() };
        }
        Ok(self)
    }

    /// With bind host
    #[inline]
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.server.host = host.into();
        self
    }

    /// With bind port
    #[inline]
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }

    /// With public base URL
    #[inline]
    #[must_use]
    pub fn with_public_base_url(mut self, url: impl Into<String>) -> Self {
        self.server.public_base_url = Some(url.into());
        self
    }

    /// With CORS origins
    #[inline]
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.server.allowed_origins = origins;
        self
    }

    /// With request body limit
    #[inline]
    #[must_use]
    pub fn with_max_body_bytes(mut self, limit: u64) -> Self {
        self.server.max_body_bytes = limit;
        self
    }

    /// With a deployment directory
    #[inline]
    #[must_use]
    pub fn with_deployment_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.deployments = StorageConfig::Directory { path: path.into() };
        self
    }

    /// Socket address to listen on
    ///
    /// # Errors
    /// Returns an error if the host is not an IP address
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .with_context(|| format!("host is not an IP address: {:?}", self.server.host))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    /// Base URL for deployment links
    ///
    /// The configured value, else one derived from the listener with
    /// unspecified hosts shown as `localhost`.
    #[must_use]
    pub fn public_base_url(&self) -> String {
        if let Some(url) = &self.server.public_base_url {
            return url.trim_end_matches('/').to_string();
        }
        let port = self.server.port;
        match self.server.host.as_str() {
            "0.0.0.0" | "::" => format!("http://localhost:{port}"),
            host if host.contains(':') => format!("http://[{host}]:{port}"),
            host => format!("http://{host}:{port}"),
        }
    }
}
