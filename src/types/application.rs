use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An isolated tenant namespace owning endpoints, messages, and event types.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub uid: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A named category of message, optionally carrying a JSON schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventType {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub archived: bool,
    pub schemas: Option<serde_json::Value>,
}
