//! Content fingerprints
//!
//! Provides [`ContentHash`], a strongly-typed 32-byte Blake3 hash used to
//! identify artifact text in logs and deployment records.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Bytes shown by [`ContentHash::short`]
const SHORT_BYTES: usize = 8;

/// Blake3 digest of artifact text
///
/// `Copy`; compared and displayed as lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Digest `data`
    #[inline]
    #[must_use]
    pub fn compute(data: &[u8]) -> Self {
        Self(blake3::hash(data).into())
    }

    /// Log-friendly prefix (16 hex chars)
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..SHORT_BYTES])
    }
}

impl Display for ContentHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for ContentHash {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut digest = [0u8; 32];
        hex::decode_to_slice(s, &mut digest)?;
        Ok(Self(digest))
    }
}

// Hex string on the wire; deployment metadata is JSON only.
impl serde::Serialize for ContentHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for ContentHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// A hash string that is not 64 hex characters
#[derive(Debug, thiserror::Error)]
#[error("malformed content hash: {0}")]
pub struct HashError(#[from] hex::FromHexError);
