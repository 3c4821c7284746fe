//! Dialog (conversation thread) records and requests.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A conversation thread, direct or group.
///
/// `last_msg` is an opaque JSON value whose shape is not validated here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogInfo {
    pub id: i64,
    #[serde(rename = "type")]
    pub dialog_type: String,
    pub group_type: String,
    pub name: String,
    pub avatar: String,
    pub owner_id: i64,
    pub created_at: String,
    pub updated_at: String,
    pub last_at: String,
    pub mark_unread: i64,
    pub silence: i64,
    pub hide: i64,
    pub color: String,
    pub unread: i64,
    pub unread_one: i64,
    pub mention: i64,
    pub mention_ids: Vec<i64>,
    pub people: i64,
    pub people_user: i64,
    pub people_bot: i64,
    pub todo_num: i64,
    pub last_msg: Value,
    pub pinyin: String,
    pub bot: i64,
    pub top_at: String,
}

/// One member of a dialog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogMember {
    pub id: i64,
    pub dialog_id: i64,
    pub userid: i64,
    pub nickname: String,
    pub email: String,
    pub userimg: String,
    pub bot: i64,
    pub online: bool,
}

/// The per-user dialog membership row inside [`DialogOpenUserResponse`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogUser {
    pub dialog_id: i64,
    pub userid: i64,
    pub bot: i64,
}

/// Response of `/api/dialog/open/user`: resolves the direct dialog with a
/// given user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogOpenUserResponse {
    pub dialog_user: DialogUser,
}

/// Time-window plus pagination parameters shared by several list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct TimeRangeRequest {
    pub timerange: String,
    pub page: i64,
    pub pagesize: i64,
}

impl Default for TimeRangeRequest {
    fn default() -> Self {
        Self {
            timerange: String::new(),
            page: 1,
            pagesize: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchDialogRequest {
    pub key: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetDialogRequest {
    pub dialog_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetDialogUserRequest {
    pub dialog_id: i64,
    pub getuser: i64,
}

impl GetDialogUserRequest {
    pub fn new(dialog_id: i64) -> Self {
        Self {
            dialog_id,
            getuser: 0,
        }
    }
}
