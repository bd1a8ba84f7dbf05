//! Generated UI artifacts
//!
//! An [`Artifact`] is the component source text the caller owns across
//! requests. The service never stores it between calls; the hash exists so
//! logs and deployment records can refer to a version without echoing it.

use crate::hash::ContentHash;
use std::fmt;

/// Errors related to artifact construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArtifactError {
    /// Artifact text was empty or whitespace
    #[error("artifact text is empty")]
    Empty,
}

/// Component source text with its content hash
///
/// # Invariants
/// - `hash` is always `ContentHash::compute(text)`
/// - Immutable after construction; edits produce a new artifact
#[derive(Clone, PartialEq, Eq)]
pub struct Artifact {
    hash: ContentHash,
    text: String,
}

impl Artifact {
    /// Wrap text as an artifact (computes hash)
    ///
    /// Empty text is allowed here; use [`Artifact::parse`] where the caller
    /// must supply something.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let hash = ContentHash::compute(text.as_bytes());
        Self { hash, text }
    }

    /// Wrap caller-supplied text, rejecting blank input
    ///
    /// # Errors
    /// Returns [`ArtifactError::Empty`] if `text` is empty or whitespace
    pub fn parse(text: impl Into<String>) -> Result<Self, ArtifactError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ArtifactError::Empty);
        }
        Ok(Self::new(text))
    }

    /// Content hash
    #[inline]
    #[must_use]
    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }

    /// Artifact text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Take the text out of the artifact
    #[inline]
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Length of the text in bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the text is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Substring presence test used by marker guards
    #[inline]
    #[must_use]
    pub fn contains(&self, marker: &str) -> bool {
        self.text.contains(marker)
    }
}

impl fmt::Debug for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Artifact")
            .field("hash", &self.hash.short())
            .field("len", &self.text.len())
            .finish()
    }
}

impl AsRef<str> for Artifact {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<String> for Artifact {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Artifact {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
