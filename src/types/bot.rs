//! Bot account records and requests.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Bot {
    pub id: i64,
    pub name: String,
    pub avatar: String,
    pub clear_day: i64,
    pub webhook_url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BotListResponse {
    pub list: Vec<Bot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetBotRequest {
    pub id: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateBotRequest {
    pub name: String,
    pub avatar: String,
    pub clear_day: i64,
    pub webhook_url: String,
    pub session: i64,
}

impl CreateBotRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EditBotRequest {
    pub id: i64,
    pub name: String,
    pub avatar: String,
    pub clear_day: i64,
    pub webhook_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteBotRequest {
    pub id: i64,
    pub remark: String,
}
