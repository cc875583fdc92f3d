// Asana API response types.
// Defines structs for deserializing Asana REST API responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Compact project record from a workspace listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCompact {
    pub gid: String,
    pub name: String,
}

/// Compact task record from a project listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCompact {
    pub gid: String,
    pub name: String,
}

/// Full task record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub gid: String,
    pub name: String,
    pub completed: bool,
    #[serde(default)]
    pub due_on: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Envelope wrapping every Asana response body.
#[derive(Debug, Clone, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
    #[serde(default)]
    pub next_page: Option<NextPage>,
}

/// Offset token for continuing a paginated listing.
#[derive(Debug, Clone, Deserialize)]
pub struct NextPage {
    pub offset: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project_listing() {
        let body = r#"{
            "data": [
                {"gid": "37480810169333", "name": "06_11", "resource_type": "project"},
                {"gid": "37480810169400", "name": "07_10", "resource_type": "project"}
            ],
            "next_page": {"offset": "eyJ0eXAi", "path": "/projects?offset=eyJ0eXAi", "uri": "https://app.asana.com/api/1.0/projects?offset=eyJ0eXAi"}
        }"#;

        let parsed: DataResponse<Vec<ProjectCompact>> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[0].name, "06_11");
        assert_eq!(parsed.next_page.unwrap().offset, "eyJ0eXAi");
    }

    #[test]
    fn test_parse_task_record() {
        let body = r#"{
            "data": {
                "gid": "37480810169337",
                "name": "06_11 Due",
                "completed": false,
                "due_on": "2016-06-24",
                "notes": "outstanding deliverables"
            }
        }"#;

        let parsed: DataResponse<Task> = serde_json::from_str(body).unwrap();
        assert!(parsed.next_page.is_none());
        let task = parsed.data;
        assert_eq!(task.name, "06_11 Due");
        assert!(!task.completed);
        assert_eq!(task.due_on.unwrap().to_string(), "2016-06-24");
    }

    #[test]
    fn test_parse_task_without_due_date() {
        let body = r#"{"data": {"gid": "1", "name": "General Notes:", "completed": false, "due_on": null}}"#;

        let parsed: DataResponse<Task> = serde_json::from_str(body).unwrap();
        assert!(parsed.data.due_on.is_none());
        assert!(parsed.data.notes.is_none());
    }
}
