//! Dialog endpoints.

use crate::client::DooTaskClient;
use crate::error::DooTaskError;
use crate::types::{
    DialogInfo, DialogMember, GetDialogRequest, GetDialogUserRequest, Paginated,
    SearchDialogRequest, TimeRangeRequest,
};

impl DooTaskClient {
    /// Dialogs visible to the authenticated user, paginated.
    pub fn get_dialog_list(
        &self,
        params: Option<TimeRangeRequest>,
    ) -> Result<Paginated<DialogInfo>, DooTaskError> {
        self.get("/api/dialog/lists", &params.unwrap_or_default())
    }

    pub fn search_dialog(
        &self,
        params: SearchDialogRequest,
    ) -> Result<Vec<DialogInfo>, DooTaskError> {
        self.get("/api/dialog/search", &params)
    }

    pub fn get_dialog_one(&self, params: GetDialogRequest) -> Result<DialogInfo, DooTaskError> {
        self.get("/api/dialog/one", &params)
    }

    /// Members of a dialog.
    pub fn get_dialog_user(
        &self,
        params: GetDialogUserRequest,
    ) -> Result<Vec<DialogMember>, DooTaskError> {
        self.get("/api/dialog/user", &params)
    }
}
