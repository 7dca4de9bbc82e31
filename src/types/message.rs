use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An event payload submitted to the delivery server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub event_type: String,
    pub event_id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default)]
    pub payload: serde_json::Value,
    pub expiration: Option<DateTime<Utc>>,
}
