mod client;
mod models;

pub use client::GraphClient;
pub use models::{load_tasks_json, save_tasks_json, ItemBody, Page, TodoList, TodoTask};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Graph API {status}: {body}")]
    Api { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    #[error("Bad URL: {0}")]
    Url(String),
    #[error("Gave up after {0} pages; the collection still had a nextLink")]
    TooManyPages(usize),
    #[error("Task file error: {0}")]
    File(String),
}
