//! Ryze Artifact System
//!
//! Generated component text with content fingerprints.
//!
//! # Core Concepts
//!
//! - [`Artifact`]: Component source text owned by the caller across requests
//! - [`ContentHash`]: 32-byte Blake3 hash identifying one version of the text
//!
//! # Example
//!
//! ```rust
//! use ryze_artifact::Artifact;
//!
//! let artifact = Artifact::new("export default function App() { return (<div />); }");
//! println!("artifact {}", artifact.hash().short());
//! ```

#![warn(unreachable_pub)]

mod artifact;
mod hash;

pub use artifact::{Artifact, ArtifactError};
pub use hash::{ContentHash, HashError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
