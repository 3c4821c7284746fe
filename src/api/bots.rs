//! Bot account endpoints.

use crate::client::DooTaskClient;
use crate::error::DooTaskError;
use crate::types::{Bot, BotListResponse, CreateBotRequest, DeleteBotRequest, EditBotRequest, GetBotRequest};

impl DooTaskClient {
    /// Bots owned by the authenticated user.
    pub fn get_bot_list(&self) -> Result<BotListResponse, DooTaskError> {
        self.get("/api/users/bot/list", &())
    }

    pub fn get_bot(&self, params: GetBotRequest) -> Result<Bot, DooTaskError> {
        self.get("/api/users/bot/info", &params)
    }

    /// Create a bot. The server uses the same endpoint for create and edit,
    /// keyed on whether an id is present.
    pub fn create_bot(&self, params: CreateBotRequest) -> Result<Bot, DooTaskError> {
        self.post("/api/users/bot/edit", &params)
    }

    pub fn update_bot(&self, params: EditBotRequest) -> Result<Bot, DooTaskError> {
        self.post("/api/users/bot/edit", &params)
    }

    pub fn delete_bot(&self, params: DeleteBotRequest) -> Result<(), DooTaskError> {
        self.get_unit("/api/users/bot/delete", &params)
    }
}
