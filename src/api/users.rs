//! User endpoints.

use serde_json::json;
use tracing::trace;

use crate::client::DooTaskClient;
use crate::error::DooTaskError;
use crate::types::{Department, UserBasic, UserInfo};

impl DooTaskClient {
    /// Fetch the authenticated user, served from the cache when a live entry
    /// exists (10-minute time-to-live by default).
    pub fn get_user_info(&self) -> Result<UserInfo, DooTaskError> {
        self.fetch_user_info(false)
    }

    /// Fetch the authenticated user, bypassing and refreshing the cache.
    pub fn refresh_user_info(&self) -> Result<UserInfo, DooTaskError> {
        self.fetch_user_info(true)
    }

    fn fetch_user_info(&self, bypass_cache: bool) -> Result<UserInfo, DooTaskError> {
        let key = self.user_cache_key();
        if !bypass_cache {
            if let Some(user) = self.cache.get(&key) {
                trace!(userid = user.userid, "current-user cache hit");
                return Ok(user);
            }
        }

        let user: UserInfo = self.get("/api/users/info", &())?;
        self.cache.insert(key, user.clone(), self.cache_ttl);
        Ok(user)
    }

    /// Fetch the authenticated user and require `identity` among their
    /// identity tags.
    pub fn check_user_identity(&self, identity: &str) -> Result<UserInfo, DooTaskError> {
        let user = self.get_user_info()?;
        if !user.identity.iter().any(|tag| tag == identity) {
            return Err(DooTaskError::Permission(format!(
                "user {} lacks identity \"{identity}\"",
                user.userid
            )));
        }
        Ok(user)
    }

    /// Departments of the authenticated user.
    pub fn get_user_departments(&self) -> Result<Vec<Department>, DooTaskError> {
        self.get("/api/users/info/departments", &())
    }

    /// Basic info for a batch of users. An empty id list is passed through
    /// unmodified; the server decides what that means.
    pub fn get_users_basic(&self, userids: &[i64]) -> Result<Vec<UserBasic>, DooTaskError> {
        self.get("/api/users/basic", &json!({ "userid": userids }))
    }

    /// Basic info for a single user. Fails with [`DooTaskError::NotFound`]
    /// when the batch lookup returns no rows.
    pub fn get_user_basic(&self, userid: i64) -> Result<UserBasic, DooTaskError> {
        self.get_users_basic(&[userid])?
            .into_iter()
            .next()
            .ok_or_else(|| DooTaskError::NotFound(format!("user {userid} does not exist")))
    }
}
