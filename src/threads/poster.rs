// src/threads/poster.rs

use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

use super::PostError;
use crate::config::ThreadsConfig;

/// Anything that can publish a plain-text post.
pub trait Poster {
    /// Returns the id the service gave the published post.
    fn post(&self, text: &str) -> Result<String, PostError>;
}

/// `title`, a blank line, then `content` when there is any.
pub fn format_post(title: &str, content: &str) -> String {
    if content.trim().is_empty() {
        title.to_string()
    } else {
        format!("{title}\n\n{content}")
    }
}

#[derive(Debug, Deserialize)]
struct IdResponse {
    id: String,
}

/// Text-only client for the Threads publishing API.
pub struct ThreadsPoster {
    user_id: String,
    access_token: String,
    api_base: String,
    client: Client,
}

impl ThreadsPoster {
    pub fn new(cfg: &ThreadsConfig) -> Result<Self, PostError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| PostError::RequestFailed(e.to_string()))?;

        Ok(Self {
            user_id: cfg.user_id.clone(),
            access_token: cfg.access_token.clone(),
            api_base: cfg.api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn call(&self, path: &str, params: &[(&str, &str)]) -> Result<String, PostError> {
        let url = format!("{}/{}/{}", self.api_base, self.user_id, path);

        let resp = self
            .client
            .post(&url)
            .query(params)
            .query(&[("access_token", self.access_token.as_str())])
            .send()
            .map_err(|e| PostError::RequestFailed(e.to_string()))?;

        let status = resp.status();
        let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());

        if !status.is_success() {
            return Err(PostError::ApiError(format!("{path}: {status} - {text}")));
        }

        let body: IdResponse = serde_json::from_str(&text)
            .map_err(|e| PostError::ApiError(format!("{path}: unexpected response {text}: {e}")))?;
        Ok(body.id)
    }
}

impl Poster for ThreadsPoster {
    fn post(&self, text: &str) -> Result<String, PostError> {
        if text.trim().is_empty() {
            return Err(PostError::Empty);
        }

        // Threads publishes in two steps: create a container, then publish it.
        let container_id = self.call("threads", &[("media_type", "TEXT"), ("text", text)])?;
        log::debug!("Created Threads container {container_id}");

        let post_id = self.call("threads_publish", &[("creation_id", container_id.as_str())])?;
        Ok(post_id)
    }
}
