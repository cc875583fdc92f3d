// Remote task gateway.
// The surface the due-map cache needs from the remote service, as a trait so
// the cache component can be exercised against an in-memory fake.

use async_trait::async_trait;

use crate::asana::{AsanaClient, ProjectCompact, Task, TaskCompact};
use crate::error::Result;

/// Remote calls the due-map cache depends on. Pagination, rate limiting,
/// and retry live behind this seam and are invisible to callers.
#[async_trait]
pub trait TaskGateway {
    /// List projects reachable from a workspace.
    async fn list_projects(&self, workspace_gid: &str) -> Result<Vec<ProjectCompact>>;

    /// List tasks in a project.
    async fn list_tasks(&self, project_gid: &str) -> Result<Vec<TaskCompact>>;

    /// Fetch a task's full record.
    async fn get_task(&self, task_gid: &str) -> Result<Task>;
}

#[async_trait]
impl TaskGateway for AsanaClient {
    async fn list_projects(&self, workspace_gid: &str) -> Result<Vec<ProjectCompact>> {
        self.get_workspace_projects(workspace_gid).await
    }

    async fn list_tasks(&self, project_gid: &str) -> Result<Vec<TaskCompact>> {
        self.get_project_tasks(project_gid).await
    }

    async fn get_task(&self, task_gid: &str) -> Result<Task> {
        AsanaClient::get_task(self, task_gid).await
    }
}
