//! Group dialog endpoints.

use crate::client::DooTaskClient;
use crate::error::DooTaskError;
use crate::types::{
    AddGroupUserRequest, CreateGroupRequest, DialogInfo, DisbandGroupRequest, EditGroupRequest,
    RemoveGroupUserRequest, TransferGroupRequest,
};

impl DooTaskClient {
    pub fn create_group(&self, params: CreateGroupRequest) -> Result<DialogInfo, DooTaskError> {
        self.get("/api/dialog/group/add", &params)
    }

    pub fn edit_group(&self, params: EditGroupRequest) -> Result<(), DooTaskError> {
        self.get_unit("/api/dialog/group/edit", &params)
    }

    pub fn add_group_user(&self, params: AddGroupUserRequest) -> Result<(), DooTaskError> {
        self.get_unit("/api/dialog/group/adduser", &params)
    }

    pub fn remove_group_user(&self, params: RemoveGroupUserRequest) -> Result<(), DooTaskError> {
        self.get_unit("/api/dialog/group/deluser", &params)
    }

    /// Leave a group: a member removal with no target users.
    pub fn exit_group(&self, dialog_id: i64) -> Result<(), DooTaskError> {
        self.remove_group_user(RemoveGroupUserRequest {
            dialog_id,
            userids: Vec::new(),
        })
    }

    pub fn transfer_group(&self, params: TransferGroupRequest) -> Result<(), DooTaskError> {
        self.get_unit("/api/dialog/group/transfer", &params)
    }

    pub fn disband_group(&self, params: DisbandGroupRequest) -> Result<(), DooTaskError> {
        self.get_unit("/api/dialog/group/disband", &params)
    }
}
