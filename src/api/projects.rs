//! Project endpoints.

use crate::client::DooTaskClient;
use crate::error::DooTaskError;
use crate::types::{
    CreateProjectRequest, GetProjectListRequest, GetProjectRequest, Paginated, Project,
    ProjectActionRequest, UpdateProjectRequest,
};

impl DooTaskClient {
    /// Projects visible to the authenticated user, paginated.
    pub fn get_project_list(
        &self,
        params: Option<GetProjectListRequest>,
    ) -> Result<Paginated<Project>, DooTaskError> {
        self.get("/api/project/lists", &params.unwrap_or_default())
    }

    pub fn get_project(&self, params: GetProjectRequest) -> Result<Project, DooTaskError> {
        self.get("/api/project/one", &params)
    }

    pub fn create_project(&self, params: CreateProjectRequest) -> Result<Project, DooTaskError> {
        self.get("/api/project/add", &params)
    }

    pub fn update_project(&self, params: UpdateProjectRequest) -> Result<Project, DooTaskError> {
        self.get("/api/project/update", &params)
    }

    pub fn exit_project(&self, project_id: i64) -> Result<(), DooTaskError> {
        self.get_unit(
            "/api/project/exit",
            &ProjectActionRequest {
                project_id,
                action: String::new(),
            },
        )
    }

    pub fn delete_project(&self, project_id: i64) -> Result<(), DooTaskError> {
        self.get_unit(
            "/api/project/remove",
            &ProjectActionRequest {
                project_id,
                action: String::new(),
            },
        )
    }
}
