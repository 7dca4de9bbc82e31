use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery outcome as reported by the server. The wire format is a bare
/// integer; codes outside the known set are preserved as `Unknown` so a
/// newer server never breaks deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum AttemptStatus {
    Success,
    Pending,
    Failed,
    Sending,
    Unknown(i64),
}

impl AttemptStatus {
    /// Sending counts as success-class: the server has accepted the
    /// delivery and is in the middle of it.
    pub fn is_success_class(self) -> bool {
        matches!(self, AttemptStatus::Success | AttemptStatus::Sending)
    }
}

impl From<i64> for AttemptStatus {
    fn from(code: i64) -> Self {
        match code {
            0 => AttemptStatus::Success,
            1 => AttemptStatus::Pending,
            2 => AttemptStatus::Failed,
            3 => AttemptStatus::Sending,
            other => AttemptStatus::Unknown(other),
        }
    }
}

impl From<AttemptStatus> for i64 {
    fn from(status: AttemptStatus) -> Self {
        match status {
            AttemptStatus::Success => 0,
            AttemptStatus::Pending => 1,
            AttemptStatus::Failed => 2,
            AttemptStatus::Sending => 3,
            AttemptStatus::Unknown(code) => code,
        }
    }
}

impl Default for AttemptStatus {
    fn default() -> Self {
        AttemptStatus::Unknown(-1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum TriggerType {
    Automatic,
    Manual,
    Unknown(i64),
}

impl From<i64> for TriggerType {
    fn from(code: i64) -> Self {
        match code {
            0 => TriggerType::Automatic,
            1 => TriggerType::Manual,
            other => TriggerType::Unknown(other),
        }
    }
}

impl From<TriggerType> for i64 {
    fn from(trigger: TriggerType) -> Self {
        match trigger {
            TriggerType::Automatic => 0,
            TriggerType::Manual => 1,
            TriggerType::Unknown(code) => code,
        }
    }
}

impl Default for TriggerType {
    fn default() -> Self {
        TriggerType::Unknown(-1)
    }
}

/// One delivery try of a message to one endpoint.
///
/// Every field except the ids is optional on the wire; the console never
/// rejects an attempt record for missing data, it just falls back per field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub msg_id: String,
    pub endpoint_id: Option<String>,
    #[serde(default)]
    pub status: AttemptStatus,
    pub response_status_code: Option<i64>,
    pub response_duration_ms: Option<u64>,
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub trigger_type: TriggerType,
}
