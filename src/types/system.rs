//! System settings and version records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemSettings {
    pub reg: Option<String>,
    pub task_default_time: Option<Vec<String>>,
    pub system_alias: Option<String>,
    pub system_welcome: String,
    pub server_timezone: Option<String>,
    pub server_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionInfo {
    pub device_count: i64,
    pub version: String,
}
