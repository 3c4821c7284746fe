//! Task column endpoints.

use crate::client::DooTaskClient;
use crate::error::DooTaskError;
use crate::types::{
    ColumnActionRequest, CreateColumnRequest, GetColumnListRequest, Paginated, ProjectColumn,
    UpdateColumnRequest,
};

impl DooTaskClient {
    /// Columns of a project, paginated.
    pub fn get_column_list(
        &self,
        params: GetColumnListRequest,
    ) -> Result<Paginated<ProjectColumn>, DooTaskError> {
        self.get("/api/project/column/lists", &params)
    }

    pub fn create_column(&self, params: CreateColumnRequest) -> Result<ProjectColumn, DooTaskError> {
        self.get("/api/project/column/add", &params)
    }

    pub fn update_column(&self, params: UpdateColumnRequest) -> Result<ProjectColumn, DooTaskError> {
        self.get("/api/project/column/update", &params)
    }

    pub fn delete_column(&self, column_id: i64) -> Result<(), DooTaskError> {
        self.get_unit("/api/project/column/remove", &ColumnActionRequest { column_id })
    }
}
