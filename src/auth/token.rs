// src/auth/token.rs
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::AuthError;

/// A token is treated as expired this many seconds early.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// The single blob kept in the token cache file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedToken {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Unix seconds.
    pub expires_at: i64,
}

impl CachedToken {
    pub fn is_fresh(&self, now: i64) -> bool {
        self.expires_at - EXPIRY_MARGIN_SECS > now
    }
}

/// Reads the cache. A missing or blank file is `Ok(None)`.
pub fn load_cached_token(path: &Path) -> Result<Option<CachedToken>, AuthError> {
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(AuthError::Cache(format!("read {}: {e}", path.display()))),
    };

    if data.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(&data)
        .map(Some)
        .map_err(|e| AuthError::Cache(format!("parse {}: {e}", path.display())))
}

pub fn save_cached_token(path: &Path, token: &CachedToken) -> Result<(), AuthError> {
    let data = serde_json::to_string_pretty(token)
        .map_err(|e| AuthError::Cache(format!("serialize token: {e}")))?;
    fs::write(path, data).map_err(|e| AuthError::Cache(format!("write {}: {e}", path.display())))
}
