// Runtime configuration.
// Resolves the API credential, target workspace, and due map location.

use std::env;
use std::path::PathBuf;

use crate::cache::paths;
use crate::error::{DueMapError, Result};

pub const TOKEN_VAR: &str = "ASANA_TOKEN";
pub const WORKSPACE_VAR: &str = "ASANA_WORKSPACE";

#[derive(Debug, Clone)]
pub struct Config {
    /// Personal access token presented as a bearer credential.
    pub token: String,
    /// Workspace whose projects are enumerated.
    pub workspace_gid: String,
    /// Location of the persisted due map.
    pub cache_file: PathBuf,
}

impl Config {
    /// Resolve configuration from CLI flags and the environment. The token
    /// and workspace are required before any remote call; flags win over
    /// environment variables.
    pub fn resolve(workspace: Option<String>, cache_file: Option<PathBuf>) -> Result<Self> {
        let token = env::var(TOKEN_VAR).map_err(|_| DueMapError::MissingToken)?;
        let workspace_gid = workspace
            .or_else(|| env::var(WORKSPACE_VAR).ok())
            .ok_or(DueMapError::MissingWorkspace)?;
        let cache_file = resolve_cache_file(cache_file)?;

        Ok(Self {
            token,
            workspace_gid,
            cache_file,
        })
    }
}

/// Pick the due map location: explicit flag, else the platform default.
pub fn resolve_cache_file(cache_file: Option<PathBuf>) -> Result<PathBuf> {
    cache_file
        .or_else(paths::due_map_path)
        .ok_or_else(|| DueMapError::Other("could not determine a cache directory".into()))
}
