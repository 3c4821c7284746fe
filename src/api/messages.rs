//! Messaging endpoints.

use serde_json::json;

use crate::client::DooTaskClient;
use crate::error::DooTaskError;
use crate::types::{
    ConvertWebhookMessageRequest, ConvertWebhookMessageResponse, DialogMessage,
    DialogMessageListResponse, DialogMessageSearchResponse, DialogOpenUserResponse,
    ForwardMessageRequest, GetMessageListRequest, GetMessageRequest, MarkMessageDoneRequest,
    SendAnonymousMessageRequest, SendBotMessageRequest, SendMessageRequest,
    SendMessageToUserRequest, SendNoticeMessageRequest, SendStreamMessageRequest,
    SendTemplateMessageRequest, SearchMessageRequest, TodoListResponse, ToggleMessageTodoRequest,
    WithdrawMessageRequest,
};

impl DooTaskClient {
    /// Send a text message into a dialog. An unset `text_type` defaults to
    /// `"md"`.
    pub fn send_message(&self, mut message: SendMessageRequest) -> Result<(), DooTaskError> {
        if message.text_type.is_empty() {
            message.text_type = "md".into();
        }
        self.post_unit("/api/dialog/msg/sendtext", &message)
    }

    /// Send a text message to a user: resolves their direct dialog first,
    /// then sends through the standard message endpoint (two round trips).
    pub fn send_message_to_user(
        &self,
        message: SendMessageToUserRequest,
    ) -> Result<(), DooTaskError> {
        let opened: DialogOpenUserResponse =
            self.get("/api/dialog/open/user", &json!({ "userid": message.userid }))?;

        self.send_message(SendMessageRequest {
            dialog_id: opened.dialog_user.dialog_id,
            text: message.text,
            text_type: message.text_type,
            silence: message.silence,
            ..Default::default()
        })
    }

    /// Send a message as a bot. An unset `bot_type` defaults to
    /// `"system-msg"`.
    pub fn send_bot_message(&self, mut message: SendBotMessageRequest) -> Result<(), DooTaskError> {
        if message.bot_type.is_empty() {
            message.bot_type = "system-msg".into();
        }
        self.post_unit("/api/dialog/msg/sendbot", &message)
    }

    pub fn send_anonymous_message(
        &self,
        message: SendAnonymousMessageRequest,
    ) -> Result<(), DooTaskError> {
        self.post_unit("/api/dialog/msg/sendanon", &message)
    }

    /// Open a streaming message fed from `stream_url`. An unset `source`
    /// defaults to `"api"`.
    pub fn send_stream_message(
        &self,
        mut message: SendStreamMessageRequest,
    ) -> Result<(), DooTaskError> {
        if message.source.is_empty() {
            message.source = "api".into();
        }
        self.post_unit("/api/dialog/msg/stream", &message)
    }

    /// Send a notice message. An unset `source` defaults to `"api"`.
    pub fn send_notice_message(
        &self,
        mut message: SendNoticeMessageRequest,
    ) -> Result<(), DooTaskError> {
        if message.source.is_empty() {
            message.source = "api".into();
        }
        self.post_unit("/api/dialog/msg/sendnotice", &message)
    }

    /// Send a templated message. An unset `source` defaults to `"api"`.
    pub fn send_template_message(
        &self,
        mut message: SendTemplateMessageRequest,
    ) -> Result<(), DooTaskError> {
        if message.source.is_empty() {
            message.source = "api".into();
        }
        self.post_unit("/api/dialog/msg/sendtemplate", &message)
    }

    pub fn get_message_list(
        &self,
        params: GetMessageListRequest,
    ) -> Result<DialogMessageListResponse, DooTaskError> {
        self.get("/api/dialog/msg/list", &params)
    }

    pub fn search_message(
        &self,
        params: SearchMessageRequest,
    ) -> Result<DialogMessageSearchResponse, DooTaskError> {
        self.get("/api/dialog/msg/search", &params)
    }

    pub fn get_message(&self, params: GetMessageRequest) -> Result<DialogMessage, DooTaskError> {
        self.get("/api/dialog/msg/one", &params)
    }

    /// Like [`DooTaskClient::get_message`] but includes the full message
    /// detail payload.
    pub fn get_message_detail(
        &self,
        params: GetMessageRequest,
    ) -> Result<DialogMessage, DooTaskError> {
        self.get("/api/dialog/msg/detail", &params)
    }

    pub fn withdraw_message(&self, params: WithdrawMessageRequest) -> Result<(), DooTaskError> {
        self.get_unit("/api/dialog/msg/withdraw", &params)
    }

    pub fn forward_message(&self, params: ForwardMessageRequest) -> Result<(), DooTaskError> {
        self.get_unit("/api/dialog/msg/forward", &params)
    }

    /// Toggle the todo mark on a message. An unset `type` defaults to
    /// `"all"`.
    pub fn toggle_message_todo(
        &self,
        mut params: ToggleMessageTodoRequest,
    ) -> Result<(), DooTaskError> {
        if params.todo_type.is_empty() {
            params.todo_type = "all".into();
        }
        self.get_unit("/api/dialog/msg/todo", &params)
    }

    pub fn get_message_todo_list(
        &self,
        params: GetMessageRequest,
    ) -> Result<TodoListResponse, DooTaskError> {
        self.get("/api/dialog/msg/todolist", &params)
    }

    pub fn mark_message_done(&self, params: MarkMessageDoneRequest) -> Result<(), DooTaskError> {
        self.get_unit("/api/dialog/msg/done", &params)
    }

    /// Convert a webhook message payload into the AI-dialog format.
    pub fn convert_webhook_message(
        &self,
        params: ConvertWebhookMessageRequest,
    ) -> Result<ConvertWebhookMessageResponse, DooTaskError> {
        self.post("/api/dialog/msg/webhookmsg2ai", &params)
    }
}
