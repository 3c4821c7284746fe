//! Task records and requests.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectTask {
    pub id: i64,
    pub project_id: i64,
    pub column_id: i64,
    pub parent_id: i64,
    pub name: String,
    pub desc: String,
    pub start_at: String,
    pub end_at: String,
    pub complete_at: String,
    pub archived_at: String,
    pub created_at: String,
    pub updated_at: String,
    pub userid: i64,
    pub dialog_id: i64,
    pub flow_item_id: i64,
    pub flow_item_name: String,
    pub visibility: i64,
    pub color: String,
    // Counters
    pub file_num: i64,
    pub msg_num: i64,
    pub sub_num: i64,
    pub sub_complete: i64,
    pub percent: i64,
    // Denormalized names of the owning project and column.
    pub project_name: String,
    pub column_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskFile {
    pub id: i64,
    pub task_id: i64,
    pub name: String,
    pub ext: String,
    pub size: i64,
    pub path: String,
    pub thumb: String,
    pub userid: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskContent {
    pub content: String,
    #[serde(rename = "type")]
    pub content_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetTaskListRequest {
    pub project_id: i64,
    pub parent_id: i64,
    pub archived: String,
    pub deleted: String,
    pub timerange: String,
    pub page: i64,
    pub pagesize: i64,
}

impl Default for GetTaskListRequest {
    fn default() -> Self {
        Self {
            project_id: 0,
            parent_id: 0,
            archived: "no".into(),
            deleted: "no".into(),
            timerange: String::new(),
            page: 1,
            pagesize: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetTaskRequest {
    pub task_id: i64,
    pub archived: String,
}

impl GetTaskRequest {
    pub fn new(task_id: i64) -> Self {
        Self {
            task_id,
            archived: "no".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetTaskContentRequest {
    pub task_id: i64,
    pub history_id: i64,
}

impl GetTaskContentRequest {
    pub fn new(task_id: i64) -> Self {
        Self {
            task_id,
            history_id: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetTaskFilesRequest {
    pub task_id: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTaskRequest {
    pub project_id: i64,
    pub name: String,
    pub column_id: i64,
    pub content: String,
    /// `[start, end]` time strings.
    pub times: Vec<String>,
    pub owner: Vec<i64>,
    pub top: i64,
}

impl CreateTaskRequest {
    pub fn new(project_id: i64, name: impl Into<String>) -> Self {
        Self {
            project_id,
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateSubTaskRequest {
    pub task_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTaskRequest {
    pub task_id: i64,
    pub name: String,
    pub content: String,
    pub times: Vec<String>,
    pub owner: Vec<i64>,
    pub assist: Vec<i64>,
    pub color: String,
    pub visibility: i64,
    /// Opaque: the server accepts several shapes (`false`, a time string, ...).
    pub complete_at: Value,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TaskActionRequest {
    pub task_id: i64,
    #[serde(rename = "type")]
    pub action: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTaskDialogRequest {
    pub task_id: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTaskDialogResponse {
    pub id: i64,
    pub dialog_id: i64,
    /// Opaque dialog snapshot; not validated by this layer.
    pub dialog_data: Value,
}
