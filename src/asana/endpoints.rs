// Asana API endpoint functions.
// Provides typed methods for fetching data from the Asana REST API.

use serde::de::DeserializeOwned;

use crate::error::Result;

use super::client::AsanaClient;
use super::types::{DataResponse, ProjectCompact, Task, TaskCompact};

/// Page size for list endpoints.
const PAGE_LIMIT: u32 = 100;

impl AsanaClient {
    /// List every project in a workspace, following pagination to the end.
    pub async fn get_workspace_projects(&self, workspace_gid: &str) -> Result<Vec<ProjectCompact>> {
        self.get_all_pages(&format!("/workspaces/{}/projects", workspace_gid))
            .await
    }

    /// List every task in a project, following pagination to the end.
    pub async fn get_project_tasks(&self, project_gid: &str) -> Result<Vec<TaskCompact>> {
        self.get_all_pages(&format!("/projects/{}/tasks", project_gid))
            .await
    }

    /// Fetch a task's full record.
    pub async fn get_task(&self, task_gid: &str) -> Result<Task> {
        let params = [("opt_fields", "name,completed,due_on,notes")];
        let response = self
            .get_with_params(&format!("/tasks/{}", task_gid), &params)
            .await?;
        let wrapper: DataResponse<Task> = response.json().await?;
        Ok(wrapper.data)
    }

    /// Drain a paginated listing into a single vector.
    async fn get_all_pages<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let mut params = vec![("limit", PAGE_LIMIT.to_string())];
            if let Some(offset) = &offset {
                params.push(("offset", offset.clone()));
            }

            let response = self.get_with_params(endpoint, &params).await?;
            let wrapper: DataResponse<Vec<T>> = response.json().await?;
            items.extend(wrapper.data);

            match wrapper.next_page {
                Some(page) => offset = Some(page.offset),
                None => break,
            }
        }

        Ok(items)
    }
}
