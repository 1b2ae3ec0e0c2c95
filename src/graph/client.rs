// src/graph/client.rs
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use super::models::{Page, TodoList, TodoTask};
use super::GraphError;

/// Safety valve against a server that keeps handing back nextLinks.
pub const MAX_PAGES: usize = 500;

/// Read-only client for the Microsoft To Do part of Graph.
pub struct GraphClient {
    client: Client,
    base: Url,
    access_token: String,
    max_pages: usize,
}

impl GraphClient {
    pub fn new(api_base: &str, access_token: String) -> Result<Self, GraphError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| GraphError::Network(e.to_string()))?;

        let base = Url::parse(api_base).map_err(|e| GraphError::Url(format!("{api_base}: {e}")))?;

        Ok(Self {
            client,
            base,
            access_token,
            max_pages: MAX_PAGES,
        })
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn todo_lists(&self) -> Result<Vec<TodoList>, GraphError> {
        let url = self.endpoint(&["me", "todo", "lists"])?;
        self.get_all(url)
    }

    pub fn tasks(&self, list_id: &str) -> Result<Vec<TodoTask>, GraphError> {
        let url = self.endpoint(&["me", "todo", "lists", list_id, "tasks"])?;
        self.get_all(url)
    }

    /// Appends path segments to the base, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GraphError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| GraphError::Url(format!("{} cannot be a base", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Follows `@odata.nextLink` until the collection is exhausted. A collection
    /// longer than `max_pages` is an error, never a silent partial result.
    fn get_all<T: DeserializeOwned>(&self, first: Url) -> Result<Vec<T>, GraphError> {
        let mut out = Vec::new();
        let mut next = Some(first.to_string());
        let mut pages = 0;

        while let Some(url) = next.take() {
            if pages == self.max_pages {
                return Err(GraphError::TooManyPages(pages));
            }
            pages += 1;

            log::debug!("GET {url}");
            let page: Page<T> = self.get_page(&url)?;
            out.extend(page.value);
            next = page.next_link;
        }

        Ok(out)
    }

    fn get_page<T: DeserializeOwned>(&self, url: &str) -> Result<Page<T>, GraphError> {
        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .header("Content-Type", "application/json")
            .send()
            .map_err(|e| GraphError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| GraphError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(GraphError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| GraphError::JsonParse(e.to_string()))
    }
}
