//! Content digests with domain separation.
//!
//! Every digest is `SHA-256(domain_prefix || data)` rendered as
//! `"sha256:<hex>"`. Each prefix is null-terminated so no prefix is a prefix
//! of another.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Domain separator selecting what a digest is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// A video catalog snapshot (`videoId → URL`).
    VideoCatalog,
    /// A replayed trajectory of step responses.
    Trajectory,
}

impl HashDomain {
    pub const ALL: &'static [Self] = &[Self::VideoCatalog, Self::Trajectory];

    /// The raw prefix bytes (null-terminated).
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::VideoCatalog => b"DINING::VIDEO_CATALOG::V1\0",
            Self::Trajectory => b"DINING::TRAJECTORY::V1\0",
        }
    }
}

/// A content-addressed digest, `"algorithm:hex_digest"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Parse from `"algorithm:hex"`.
    ///
    /// Returns `None` unless there is a non-empty algorithm, a `:`, and a
    /// non-empty lowercase hex digest.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (algorithm, digest) = s.split_once(':')?;
        let hex_ok = !digest.is_empty()
            && digest
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        (!algorithm.is_empty() && hex_ok).then(|| Self(s.to_string()))
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        self.0.split_once(':').map_or("", |(alg, _)| alg)
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        self.0.split_once(':').map_or("", |(_, hex)| hex)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Digest `data` under `domain`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    ContentHash(format!("sha256:{}", hex::encode(hasher.finalize())))
}
