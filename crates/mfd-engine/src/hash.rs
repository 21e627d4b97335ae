use mfd_core::{ErrorInfo, MfdError};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Computes the sha256 hex digest of a serializable payload.
pub fn hash_json<T: Serialize>(value: &T) -> Result<String, MfdError> {
    let json = serde_json::to_vec(value)
        .map_err(|err| MfdError::Serde(ErrorInfo::new("serialize", err.to_string())))?;
    Ok(hash_bytes(&json))
}

/// Computes the sha256 hex digest of raw bytes.
pub fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
