//! Sync state reported by the chat client

use serde::{Deserialize, Serialize};

/// Error code of a homeserver refusing service over a usage limit
pub const M_RESOURCE_LIMIT_EXCEEDED: &str = "M_RESOURCE_LIMIT_EXCEEDED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncState {
    Prepared,
    Syncing,
    Error,
    Reconnecting,
    Catchup,
    Stopped,
}

/// Payload accompanying a sync state change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncErrorData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<SyncError>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncError {
    pub errcode: String,
    #[serde(default)]
    pub data: LimitDetails,
}

/// Contact and limit information attached to usage-limit errors and notices
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_type: Option<String>,
}

impl SyncErrorData {
    pub fn errcode(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.errcode.as_str())
    }

    /// The details of a hard usage limit, if this is one
    pub fn resource_limit(&self) -> Option<&LimitDetails> {
        self.error
            .as_ref()
            .filter(|e| e.errcode == M_RESOURCE_LIMIT_EXCEEDED)
            .map(|e| &e.data)
    }
}

pub(crate) fn errcode_of(data: Option<&SyncErrorData>) -> Option<&str> {
    data.and_then(SyncErrorData::errcode)
}
