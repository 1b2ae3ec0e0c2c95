// src/graph/models.rs
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::GraphError;

// Only the fields we use; Graph sends many more and they are ignored.
//
// todoTaskList
//  ├── id
//  └── displayName
//
// todoTask
//  ├── id
//  ├── title
//  ├── status        (notStarted | inProgress | completed | ...)
//  ├── importance    (low | normal | high)
//  ├── body
//  │    ├── content
//  │    └── contentType
//  ├── createdDateTime
//  └── lastModifiedDateTime

/// One page of a Graph collection.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    #[serde(rename = "@odata.nextLink")]
    pub next_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    pub id: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBody {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoTask {
    pub id: String,
    pub title: String,
    pub status: String,
    #[serde(default)]
    pub importance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<ItemBody>,
    #[serde(default)]
    pub created_date_time: Option<String>,
    #[serde(default)]
    pub last_modified_date_time: Option<String>,
}

impl TodoTask {
    pub fn content(&self) -> &str {
        self.body.as_ref().map_or("", |b| b.content.as_str())
    }

    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }
}

pub fn save_tasks_json(tasks: &[TodoTask], path: &Path) -> Result<(), GraphError> {
    let data =
        serde_json::to_string_pretty(tasks).map_err(|e| GraphError::JsonParse(e.to_string()))?;
    fs::write(path, data).map_err(|e| GraphError::File(format!("{}: {e}", path.display())))
}

pub fn load_tasks_json(path: &Path) -> Result<Vec<TodoTask>, GraphError> {
    let data =
        fs::read_to_string(path).map_err(|e| GraphError::File(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&data).map_err(|e| GraphError::JsonParse(e.to_string()))
}
