//! Content hashing for plans.
//!
//! A plan's hash is a truncated SHA-256 of its JSON serialization. Because
//! emission is deterministic, equal inputs always produce equal hashes.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::consts::PLAN_HASH_PREFIX_LEN;

pub type HashError = serde_json::Error;

/// A content hash identifying a serialized value.
///
/// # Format
///
/// A 20-character lowercase hexadecimal string, e.g. `"a1b2c3d4e5f6789012ab"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectHash(pub String);

impl std::fmt::Display for ObjectHash {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

pub trait Hashable: Serialize {
  fn compute_hash(&self) -> Result<ObjectHash, HashError> {
    let serialized = serde_json::to_string(self)?;
    let mut hasher = Sha256::new();
    hasher.update(serialized.as_bytes());
    let full = format!("{:x}", hasher.finalize());
    Ok(ObjectHash(full[..PLAN_HASH_PREFIX_LEN].to_string()))
  }
}
