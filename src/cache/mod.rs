// Due-task cache module.
// Builds, persists, and reloads the mapping from project key to that
// project's outstanding Due task, sparing a full workspace scan per run.

#![allow(dead_code)]

pub mod paths;
pub mod store;

use std::path::PathBuf;

use tracing::{debug, info};

use crate::asana::TaskCompact;
use crate::error::Result;
use crate::gateway::TaskGateway;

pub use store::{DueEntry, DueMap, project_key};

/// Marker substring identifying a project's due-checklist task.
const DUE_MARKER: &str = "Due";

/// Cache lifecycle. The map is never invalidated implicitly; it moves to
/// `Stale` only through an explicit `invalidate` and back to `Loaded` only
/// through a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheState {
    #[default]
    Unloaded,
    Loaded,
    Stale,
    Rebuilding,
}

/// File-backed cache of outstanding due tasks, keyed by project prefix.
pub struct DueCache {
    path: PathBuf,
    map: DueMap,
    state: CacheState,
}

impl DueCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            map: DueMap::default(),
            state: CacheState::Unloaded,
        }
    }

    pub fn state(&self) -> CacheState {
        self.state
    }

    pub fn map(&self) -> &DueMap {
        &self.map
    }

    /// Make the cache usable: read the persisted file when one exists,
    /// otherwise fall back to a full rebuild. A stale cache always rebuilds;
    /// a loaded one is left alone.
    pub async fn ensure_loaded<G: TaskGateway + Sync>(
        &mut self,
        gateway: &G,
        workspace_gid: &str,
    ) -> Result<()> {
        match self.state {
            CacheState::Loaded => Ok(()),
            CacheState::Stale => self.rebuild(gateway, workspace_gid).await.map(|_| ()),
            CacheState::Unloaded | CacheState::Rebuilding => {
                if self.path.exists() {
                    self.load()
                } else {
                    self.rebuild(gateway, workspace_gid).await.map(|_| ())
                }
            }
        }
    }

    /// Read the persisted file into memory. Issues no remote calls.
    pub fn load(&mut self) -> Result<()> {
        self.map = store::read_due_map(&self.path)?;
        self.state = CacheState::Loaded;
        debug!(path = %self.path.display(), entries = self.map.len(), "due map loaded");
        Ok(())
    }

    /// Scan every project in the workspace for incomplete tasks named with
    /// the due marker, then overwrite the persisted file with the result.
    /// Returns the retained task summaries in enumeration order.
    pub async fn rebuild<G: TaskGateway + Sync>(
        &mut self,
        gateway: &G,
        workspace_gid: &str,
    ) -> Result<Vec<TaskCompact>> {
        self.state = CacheState::Rebuilding;

        let projects = gateway.list_projects(workspace_gid).await?;
        info!(projects = projects.len(), "rebuilding due map");

        let mut retained = Vec::new();
        for project in &projects {
            debug!(project = %project.name, "scanning");
            for task in gateway.list_tasks(&project.gid).await? {
                if !task.name.contains(DUE_MARKER) {
                    continue;
                }
                let record = gateway.get_task(&task.gid).await?;
                if !record.completed {
                    retained.push(task);
                }
            }
        }

        let mut map = DueMap::default();
        for task in &retained {
            map.insert(DueEntry {
                key: project_key(&task.name),
                task_gid: task.gid.clone(),
            })?;
        }
        store::write_due_map(&self.path, &map)?;

        self.map = map;
        self.state = CacheState::Loaded;
        info!(entries = self.map.len(), path = %self.path.display(), "due map rebuilt");

        Ok(retained)
    }

    /// Mark the cache stale so the next `ensure_loaded` rebuilds.
    pub fn invalidate(&mut self) {
        self.map = DueMap::default();
        self.state = CacheState::Stale;
    }

    /// Remove the persisted file and reset to unloaded, so the next run
    /// rebuilds from the workspace.
    pub fn purge(&mut self) -> Result<()> {
        store::delete(&self.path)?;
        self.map = DueMap::default();
        self.state = CacheState::Unloaded;
        Ok(())
    }
}
