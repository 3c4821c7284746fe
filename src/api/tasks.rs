//! Task endpoints.
//!
//! Task create/update go over POST; everything else uses the query-string
//! path like the rest of the API.

use crate::client::DooTaskClient;
use crate::error::DooTaskError;
use crate::types::{
    CreateSubTaskRequest, CreateTaskDialogRequest, CreateTaskDialogResponse, CreateTaskRequest,
    GetTaskContentRequest, GetTaskFilesRequest, GetTaskListRequest, GetTaskRequest, Paginated,
    ProjectTask, TaskActionRequest, TaskContent, TaskFile, UpdateTaskRequest,
};

impl DooTaskClient {
    /// Tasks matching the filter, paginated.
    pub fn get_task_list(
        &self,
        params: Option<GetTaskListRequest>,
    ) -> Result<Paginated<ProjectTask>, DooTaskError> {
        self.get("/api/project/task/lists", &params.unwrap_or_default())
    }

    pub fn get_task(&self, params: GetTaskRequest) -> Result<ProjectTask, DooTaskError> {
        self.get("/api/project/task/one", &params)
    }

    pub fn get_task_content(&self, params: GetTaskContentRequest) -> Result<TaskContent, DooTaskError> {
        self.get("/api/project/task/content", &params)
    }

    pub fn get_task_files(&self, params: GetTaskFilesRequest) -> Result<Vec<TaskFile>, DooTaskError> {
        self.get("/api/project/task/files", &params)
    }

    pub fn create_task(&self, params: CreateTaskRequest) -> Result<ProjectTask, DooTaskError> {
        self.post("/api/project/task/add", &params)
    }

    pub fn create_sub_task(&self, params: CreateSubTaskRequest) -> Result<ProjectTask, DooTaskError> {
        self.get("/api/project/task/addsub", &params)
    }

    pub fn update_task(&self, params: UpdateTaskRequest) -> Result<ProjectTask, DooTaskError> {
        self.post("/api/project/task/update", &params)
    }

    /// Open (or create) the dialog attached to a task.
    pub fn create_task_dialog(
        &self,
        params: CreateTaskDialogRequest,
    ) -> Result<CreateTaskDialogResponse, DooTaskError> {
        self.get("/api/project/task/dialog", &params)
    }

    /// Archive a task (`action` `"add"`, the default when empty) or restore
    /// it from the archive (`action` `"recovery"`).
    pub fn archive_task(&self, task_id: i64, action: &str) -> Result<(), DooTaskError> {
        let action = if action.is_empty() { "add" } else { action };
        self.get_unit(
            "/api/project/task/archived",
            &TaskActionRequest {
                task_id,
                action: action.to_string(),
            },
        )
    }

    /// Delete a task (`action` `"delete"`, the default when empty) or restore
    /// a deleted one (`action` `"recovery"`).
    pub fn delete_task(&self, task_id: i64, action: &str) -> Result<(), DooTaskError> {
        let action = if action.is_empty() { "delete" } else { action };
        self.get_unit(
            "/api/project/task/remove",
            &TaskActionRequest {
                task_id,
                action: action.to_string(),
            },
        )
    }
}
