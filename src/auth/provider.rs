// src/auth/provider.rs
use reqwest::blocking::Client;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::token::{load_cached_token, save_cached_token, CachedToken};
use super::AuthError;
use crate::config::GraphConfig;

pub const SCOPES: &str = "Tasks.Read Tasks.ReadWrite offline_access";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    expires_in: i64,
}

#[derive(Debug, Default, Deserialize)]
struct TokenErrorBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    error_description: String,
}

/// Hands out Graph access tokens from the file cache, refreshing through the
/// identity token endpoint when the cached one is stale.
pub struct TokenProvider {
    client: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    cache_path: PathBuf,
}

impl TokenProvider {
    pub fn new(cfg: &GraphConfig) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AuthError::Network(e.to_string()))?;

        Ok(Self {
            client,
            token_url: format!(
                "{}/{}/oauth2/v2.0/token",
                cfg.authority_host.trim_end_matches('/'),
                cfg.tenant_id
            ),
            client_id: cfg.client_id.clone(),
            client_secret: cfg.client_secret.clone(),
            cache_path: cfg.token_cache_path.clone(),
        })
    }

    pub fn access_token(&self) -> Result<String, AuthError> {
        self.access_token_at(chrono::Utc::now().timestamp())
    }

    /// `now` is unix seconds.
    pub fn access_token_at(&self, now: i64) -> Result<String, AuthError> {
        let cache_name = self.cache_path.display().to_string();
        let cached = load_cached_token(&self.cache_path)?
            .ok_or_else(|| AuthError::NoCachedCredentials(cache_name.clone()))?;

        if cached.is_fresh(now) {
            log::debug!("Using cached access token");
            return Ok(cached.access_token);
        }

        let refresh_token = cached
            .refresh_token
            .ok_or(AuthError::NoCachedCredentials(cache_name))?;

        log::info!("Cached access token expired, refreshing");
        let refreshed = self.refresh(&refresh_token, now)?;
        save_cached_token(&self.cache_path, &refreshed)?;
        Ok(refreshed.access_token)
    }

    fn refresh(&self, refresh_token: &str, now: i64) -> Result<CachedToken, AuthError> {
        let resp = self
            .client
            .post(&self.token_url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
                ("scope", SCOPES),
            ])
            .send()
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !status.is_success() {
            let body: TokenErrorBody = serde_json::from_str(&text).unwrap_or_default();
            return Err(AuthError::TokenEndpoint {
                status: status.as_u16(),
                error: body.error,
                description: body.error_description,
            });
        }

        let token: TokenResponse =
            serde_json::from_str(&text).map_err(|e| AuthError::UnexpectedShape(e.to_string()))?;

        Ok(CachedToken {
            access_token: token.access_token,
            // Entra doesn't always rotate the refresh token.
            refresh_token: token.refresh_token.or_else(|| Some(refresh_token.to_string())),
            expires_at: now + token.expires_in,
        })
    }
}
