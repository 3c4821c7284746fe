//! System endpoints.

use reqwest::header::{HeaderMap, HeaderValue};

use crate::client::DooTaskClient;
use crate::error::DooTaskError;
use crate::types::{SystemSettings, VersionInfo};

impl DooTaskClient {
    pub fn get_system_settings(&self) -> Result<SystemSettings, DooTaskError> {
        self.get("/api/system/setting", &())
    }

    /// Server version info. This endpoint requires the request-scoped
    /// `version: true` header.
    pub fn get_version(&self) -> Result<VersionInfo, DooTaskError> {
        let mut headers = HeaderMap::new();
        headers.insert("version", HeaderValue::from_static("true"));
        self.get_with_headers("/api/system/version", &(), headers)
    }
}
