use crate::config::GraphConfig;
use crate::db::{init_db, Database};
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

/// Fresh schema in a scratch directory. Keep the `TempDir` alive for the test.
pub fn init_test_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap_or_else(|e| panic!("tempdir failed: {e}"));
    let db = Database::new(dir.path().join("test_tasks.db"));
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    (dir, db)
}

pub fn graph_config(server_url: &str, cache_path: PathBuf) -> GraphConfig {
    GraphConfig {
        client_id: "client-id".into(),
        tenant_id: "tenant-id".into(),
        client_secret: "shh".into(),
        authority_host: server_url.to_string(),
        api_base: server_url.to_string(),
        token_cache_path: cache_path,
    }
}

pub fn task_json(id: &str, title: &str, status: &str, content: &str) -> Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "status": status,
        "importance": "normal",
        "body": { "content": content, "contentType": "text" },
        "createdDateTime": "2024-12-26T11:52:18Z",
        "lastModifiedDateTime": "2024-12-27T08:00:00Z"
    })
}
