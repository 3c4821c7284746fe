//! User records.

use serde::{Deserialize, Serialize};

/// The authenticated user, as returned by `/api/users/info`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    pub userid: i64,
    /// Role/permission tags, e.g. `"admin"`.
    pub identity: Vec<String>,
    pub email: String,
    pub nickname: String,
    pub profession: String,
    pub userimg: String,
    pub bot: i64,
    pub department: Vec<i64>,
    pub department_name: String,
}

/// Reduced user record returned by batch lookups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserBasic {
    pub userid: i64,
    pub email: String,
    pub nickname: String,
    pub profession: String,
    pub userimg: String,
    pub bot: i64,
    pub online: bool,
    pub department: Vec<i64>,
    pub department_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub parent_id: i64,
    pub owner_userid: i64,
}
