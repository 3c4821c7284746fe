//! Project and column records and requests.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub desc: String,
    pub userid: i64,
    pub dialog_id: i64,
    pub archived_at: String,
    pub created_at: String,
    pub updated_at: String,
    pub owner: i64,
    pub owner_userid: i64,
    pub personal: i64,
    // Task statistics, populated when requested via `getstatistics`.
    pub task_num: i64,
    pub task_complete: i64,
    pub task_percent: i64,
    pub task_my_num: i64,
    pub task_my_complete: i64,
    pub task_my_percent: i64,
}

/// A task column (board lane) inside a project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectColumn {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub color: String,
    pub sort: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetProjectListRequest {
    #[serde(rename = "type")]
    pub project_type: String,
    pub archived: String,
    pub getcolumn: String,
    pub getuserid: String,
    pub getstatistics: String,
    pub timerange: String,
    pub page: i64,
    pub pagesize: i64,
}

impl Default for GetProjectListRequest {
    fn default() -> Self {
        Self {
            project_type: "all".into(),
            archived: "no".into(),
            getcolumn: "no".into(),
            getuserid: "no".into(),
            getstatistics: "no".into(),
            timerange: String::new(),
            page: 1,
            pagesize: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetProjectRequest {
    pub project_id: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub desc: String,
    /// Comma-separated initial column names.
    pub columns: String,
    pub flow: String,
    pub personal: i64,
}

impl CreateProjectRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProjectRequest {
    pub project_id: i64,
    pub name: String,
    pub desc: String,
    pub archive_method: String,
    pub archive_days: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct ProjectActionRequest {
    pub project_id: i64,
    #[serde(rename = "type")]
    pub action: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetColumnListRequest {
    pub project_id: i64,
    pub page: i64,
    pub pagesize: i64,
}

impl GetColumnListRequest {
    pub fn new(project_id: i64) -> Self {
        Self {
            project_id,
            page: 1,
            pagesize: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateColumnRequest {
    pub project_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateColumnRequest {
    pub column_id: i64,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ColumnActionRequest {
    pub column_id: i64,
}
