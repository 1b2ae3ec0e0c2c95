// src/config.rs
use std::env;
use std::path::PathBuf;

use crate::errors::PipelineError;

pub const DEFAULT_INPUT_PATH: &str = "data/todos_full.json";
pub const DEFAULT_OUTPUT_PATH: &str = "data/todos_simple.json";

pub const DEFAULT_AUTHORITY_HOST: &str = "https://login.microsoftonline.com";
pub const DEFAULT_GRAPH_API_BASE: &str = "https://graph.microsoft.com/v1.0";
pub const DEFAULT_THREADS_API_BASE: &str = "https://graph.threads.net/v1.0";

/// Loads `.env` if there is one. Missing file is fine.
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        log::debug!("Loaded environment from {}", path.display());
    }
}

fn required(key: &str) -> Result<String, PipelineError> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| PipelineError::Config(format!("{key} environment variable not set")))
}

fn optional(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Input and output for the simplify run: positional args, then defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifyPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl SimplifyPaths {
    /// `args` excludes the program name.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut args = args.into_iter();
        let input = args.next().unwrap_or_else(|| DEFAULT_INPUT_PATH.to_string());
        let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Everything needed to talk to Microsoft identity + Graph.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub client_id: String,
    pub tenant_id: String,
    pub client_secret: String,
    pub authority_host: String,
    pub api_base: String,
    pub token_cache_path: PathBuf,
}

impl GraphConfig {
    pub fn from_env() -> Result<Self, PipelineError> {
        Ok(Self {
            client_id: required("CLIENT_ID")?,
            tenant_id: required("TENANT_ID")?,
            client_secret: required("CLIENT_SECRET")?,
            authority_host: optional("AUTHORITY_HOST", DEFAULT_AUTHORITY_HOST),
            api_base: optional("GRAPH_API_BASE", DEFAULT_GRAPH_API_BASE),
            token_cache_path: optional("TOKEN_CACHE_PATH", "token_cache.json").into(),
        })
    }
}

/// Where fetched tasks land locally.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub database_path: PathBuf,
    pub tasks_json_path: PathBuf,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            database_path: optional("DATABASE_PATH", "todo_tasks.db").into(),
            tasks_json_path: optional("TASKS_JSON_PATH", "todo_tasks.json").into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThreadsConfig {
    pub user_id: String,
    pub access_token: String,
    pub api_base: String,
}

impl ThreadsConfig {
    pub fn from_env() -> Result<Self, PipelineError> {
        Ok(Self {
            user_id: required("THREADS_USER_ID")?,
            access_token: required("THREADS_ACCESS_TOKEN")?,
            api_base: optional("THREADS_API_BASE", DEFAULT_THREADS_API_BASE),
        })
    }
}
