//! Group dialog management requests.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateGroupRequest {
    pub userids: Vec<i64>,
    pub avatar: String,
    pub chat_name: String,
}

impl CreateGroupRequest {
    pub fn new(userids: Vec<i64>) -> Self {
        Self {
            userids,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EditGroupRequest {
    pub dialog_id: i64,
    pub avatar: String,
    pub chat_name: String,
    pub admin: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddGroupUserRequest {
    pub dialog_id: i64,
    pub userids: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RemoveGroupUserRequest {
    pub dialog_id: i64,
    /// Empty means "remove the calling user", i.e. leave the group.
    pub userids: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TransferGroupRequest {
    pub dialog_id: i64,
    pub userid: i64,
    pub check_owner: String,
    pub key: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DisbandGroupRequest {
    pub dialog_id: i64,
}
