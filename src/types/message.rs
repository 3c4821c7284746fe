//! Message records and requests.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::dialog::DialogInfo;

/// Send a text message into an existing dialog.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub dialog_id: i64,
    pub text: String,
    /// `"md"` or `"text"`; an empty value is replaced with `"md"` before
    /// transmission.
    pub text_type: String,
    pub silence: bool,
    pub reply_id: Option<i64>,
    pub reply_check: Option<String>,
    pub update_id: Option<i64>,
    pub update_mark: Option<String>,
}

impl SendMessageRequest {
    pub fn new(dialog_id: i64, text: impl Into<String>) -> Self {
        Self {
            dialog_id,
            text: text.into(),
            ..Default::default()
        }
    }
}

impl Default for SendMessageRequest {
    fn default() -> Self {
        Self {
            dialog_id: 0,
            text: String::new(),
            text_type: "md".into(),
            silence: false,
            reply_id: None,
            reply_check: None,
            update_id: None,
            update_mark: None,
        }
    }
}

/// Send a text message to a user, resolving their direct dialog first.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageToUserRequest {
    pub userid: i64,
    pub text: String,
    pub text_type: String,
    pub silence: bool,
}

impl SendMessageToUserRequest {
    pub fn new(userid: i64, text: impl Into<String>) -> Self {
        Self {
            userid,
            text: text.into(),
            text_type: "md".into(),
            silence: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SendBotMessageRequest {
    pub userid: i64,
    pub text: String,
    /// An empty value is replaced with `"system-msg"` before transmission.
    pub bot_type: String,
    pub bot_name: String,
    pub silence: bool,
}

impl SendBotMessageRequest {
    pub fn new(userid: i64, text: impl Into<String>) -> Self {
        Self {
            userid,
            text: text.into(),
            bot_type: "system-msg".into(),
            bot_name: String::new(),
            silence: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SendAnonymousMessageRequest {
    pub userid: i64,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendStreamMessageRequest {
    pub userid: i64,
    pub stream_url: String,
    /// An empty value is replaced with `"api"` before transmission.
    pub source: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendNoticeMessageRequest {
    pub dialog_id: i64,
    pub dialog_ids: String,
    pub notice: String,
    pub silence: bool,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateContent {
    pub content: String,
    pub style: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendTemplateMessageRequest {
    pub dialog_id: i64,
    pub dialog_ids: String,
    pub content: Vec<TemplateContent>,
    pub title: String,
    pub silence: bool,
    pub source: String,
}

/// A single message in a dialog.
///
/// `msg` is an opaque JSON value: its shape varies by message type and is not
/// validated by this layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogMessage {
    pub id: i64,
    pub dialog_id: i64,
    pub userid: i64,
    pub bot: i64,
    pub created_at: String,
    #[serde(rename = "type")]
    pub message_type: String,
    pub mtype: String,
    pub msg: Value,
    pub reply_id: i64,
    pub reply_num: i64,
    pub forward_id: i64,
    pub forward_num: i64,
    pub tag: i64,
    pub todo: i64,
    pub read: i64,
    pub send: i64,
    pub read_at: Option<String>,
    pub mention: i64,
    pub dot: i64,
    pub emoji: Vec<Value>,
    pub link: i64,
    pub modify: i64,
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogMessageListResponse {
    pub list: Vec<DialogMessage>,
    pub time: i64,
    pub dialog: DialogInfo,
    pub todo: Vec<Value>,
    pub top: Value,
}

/// Matching message ids for a dialog search.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogMessageSearchResponse {
    pub data: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoUser {
    pub userid: i64,
    pub nickname: String,
    pub userimg: String,
    pub done: bool,
    pub done_at: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoListResponse {
    pub users: Vec<TodoUser>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetMessageListRequest {
    pub dialog_id: i64,
    pub msg_id: Option<i64>,
    pub position_id: Option<i64>,
    pub prev_id: Option<i64>,
    pub next_id: Option<i64>,
    pub msg_type: Option<String>,
    pub take: Option<i64>,
}

impl GetMessageListRequest {
    pub fn new(dialog_id: i64) -> Self {
        Self {
            dialog_id,
            msg_id: None,
            position_id: None,
            prev_id: None,
            next_id: None,
            msg_type: None,
            take: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchMessageRequest {
    pub dialog_id: i64,
    pub key: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetMessageRequest {
    pub msg_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WithdrawMessageRequest {
    pub msg_id: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ForwardMessageRequest {
    pub msg_id: i64,
    pub dialogids: Vec<i64>,
    pub userids: Vec<i64>,
    pub show_source: i64,
    pub leave_message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ToggleMessageTodoRequest {
    pub msg_id: i64,
    /// An empty value is replaced with `"all"` before transmission.
    #[serde(rename = "type")]
    pub todo_type: String,
    pub userids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkMessageDoneRequest {
    pub msg_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConvertWebhookMessageRequest {
    pub msg: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertWebhookMessageResponse {
    pub msg: String,
}
