// Error types for the duemap application.
// Handles Asana API errors, due-map cache errors, and general application errors.

#![allow(dead_code)]

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DueMapError {
    #[error("Asana API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Authentication failed: invalid or expired token")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Asana service error: HTTP {status}")]
    Server { status: u16 },

    #[error("Missing ASANA_TOKEN environment variable")]
    MissingToken,

    #[error("No workspace configured: pass --workspace or set ASANA_WORKSPACE")]
    MissingWorkspace,

    #[error("Due map {path:?} is missing; run `duemap rebuild` to create it")]
    CacheMissing { path: PathBuf },

    #[error("Malformed due map line {line} in {path:?}: expected `key,task_gid`, got {content:?}")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("Key {key:?} maps to both task {existing} and task {incoming}; widen the project names or rebuild")]
    KeyCollision {
        key: String,
        existing: String,
        incoming: String,
    },

    #[error("No project named {0:?} in the workspace")]
    UnknownProject(String),

    #[error("No due task cached under key {0:?}")]
    UnknownKey(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl DueMapError {
    /// Whether a retry with backoff could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            DueMapError::RateLimited { .. } | DueMapError::Server { .. } => true,
            DueMapError::Api(err) => err.is_timeout() || err.is_connect(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, DueMapError>;
