//! Flat JSON document store.
//!
//! The persistence contract is deliberately forgiving: `load` hands back
//! the caller's default when the document is missing or corrupt, and `save`
//! swallows failures. Both log what happened. Single-process, single-user:
//! no atomicity, no locking.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;

use crate::error::StoreError;

async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let raw = fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

/// Load a JSON document, falling back to `default` when the file is absent
/// or does not parse. Never returns an error.
pub async fn load<T: DeserializeOwned>(path: &Path, default: T) -> T {
    match read_document(path).await {
        Ok(doc) => doc,
        Err(e) if e.is_missing() => {
            tracing::warn!(path = %path.display(), "Document not found, using default");
            default
        }
        Err(e) => {
            tracing::error!(path = %path.display(), "Failed to load document, using default: {e}");
            default
        }
    }
}

/// Serialize and overwrite a JSON document. Failures are logged and
/// dropped; the caller never observes them.
pub async fn save<T: Serialize>(path: &Path, doc: &T) {
    let json = match serde_json::to_string_pretty(doc) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!(path = %path.display(), "Failed to serialize document: {e}");
            return;
        }
    };
    if let Err(e) = fs::write(path, json).await {
        tracing::error!(path = %path.display(), "Failed to save document: {e}");
    }
}
