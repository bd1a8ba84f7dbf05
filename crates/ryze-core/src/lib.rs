//! Ryze Core - Generator Facade
//!
//! The entry point behind every surface (HTTP, CLI):
//! - Generates a component from a natural-language description
//! - Applies follow-up instructions to an existing component
//! - Packages a component into a standalone, shareable HTML page
//! - Stores and serves packaged deployments
//!
//! # Example
//!
//! ```rust
//! use ryze_core::UiGenerator;
//!
//! let generator = UiGenerator::default();
//! let generated = generator.generate("Create a red dashboard called Nova").unwrap();
//! assert_eq!(generated.meta.intent.as_str(), "dashboard");
//!
//! let modified = generator.modify("add a footer", &generated.code).unwrap();
//! assert!(modified.code.contains("<footer"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod generator;
pub mod packager;
pub mod packaging;
pub mod store;
pub mod types;

pub use error::{PackagingError, RyzeError};
pub use generator::UiGenerator;
pub use packager::{Packager, DEFAULT_PUBLIC_URL};
pub use packaging::{
    derive_title, escape_html, prepare_component, render_standalone, DeploymentId,
};
pub use store::{
    DeploymentStore, DirectoryDeploymentStore, InMemoryDeploymentStore, DEFAULT_MAX_IN_MEMORY,
};
pub use types::{
    Deployment, GenerateRequest, GenerateResponse, GenerationMeta, ModifyRequest,
    ModifyResponse, PackageRequest, PackageResponse,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Ryze Core
    pub use crate::{
        DeploymentStore, GenerateResponse, ModifyResponse, PackageRequest, Packager, RyzeError,
        UiGenerator,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
