pub mod endpoints;
pub mod stats;
pub mod timeline;

use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::types::attempt::Attempt;
use crate::types::endpoint::Endpoint;
use crate::types::message::Message;

/// How many endpoints the per-endpoint charts keep.
pub const TOP_ENDPOINTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
}

impl TimeRange {
    pub fn days(self) -> u64 {
        match self {
            TimeRange::Day => 1,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "24h" => Some(TimeRange::Day),
            "7d" => Some(TimeRange::Week),
            "30d" => Some(TimeRange::Month),
            _ => None,
        }
    }
}

impl std::str::FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .ok_or_else(|| format!("unknown time range '{}', expected 24h, 7d, or 30d", s))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_messages: u64,
    pub total_attempts: u64,
    pub success_attempts: u64,
    pub failed_attempts: u64,
    pub pending_attempts: u64,
    pub avg_response_time_ms: u64,
    /// Percentage in [0, 100], one decimal place. The denominator is all
    /// attempts, pending and unrecognized included.
    pub success_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSlice {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBucket {
    pub date: String,
    pub message_count: u64,
    pub attempt_count: u64,
    pub success_count: u64,
    pub failed_count: u64,
    pub avg_response_time_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointResponseTime {
    pub name: String,
    pub avg_time_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointVolume {
    pub name: String,
    pub message_count: u64,
    pub attempt_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAnalytics {
    pub stats: SummaryStats,
    pub timeline: Vec<DayBucket>,
    pub status_distribution: Vec<StatusSlice>,
    pub response_time_by_endpoint: Vec<EndpointResponseTime>,
    pub volume_by_endpoint: Vec<EndpointVolume>,
}

/// Derive the full dashboard view-model from one fetched snapshot.
///
/// Pure and synchronous: `now` is explicit (with the caller's UTC offset,
/// which fixes the midnight boundaries of the timeline), no clock reads, no
/// I/O, no shared state.
pub fn analytics_compute(
    messages: &[Message],
    attempts: &[Attempt],
    endpoints: &[Endpoint],
    range: TimeRange,
    now: DateTime<FixedOffset>,
) -> DashboardAnalytics {
    let stats = stats::compute_summary_stats(messages, attempts);
    let status_distribution = stats::compute_status_distribution(&stats);
    let timeline = timeline::compute_timeline(messages, attempts, range, now);
    let response_time_by_endpoint =
        endpoints::compute_response_time_by_endpoint(attempts, endpoints, TOP_ENDPOINTS);
    let volume_by_endpoint =
        endpoints::compute_volume_by_endpoint(messages, attempts, endpoints, TOP_ENDPOINTS);

    DashboardAnalytics {
        stats,
        timeline,
        status_distribution,
        response_time_by_endpoint,
        volume_by_endpoint,
    }
}

/// Raw-JSON entry point for callers holding unparsed server payloads.
///
/// An input that is not a list at all is an error; a malformed record inside
/// a list degrades to a defaulted record instead of failing the whole call.
pub fn analytics_compute_value(
    messages: &serde_json::Value,
    attempts: &serde_json::Value,
    endpoints: &serde_json::Value,
    range: TimeRange,
    now: DateTime<FixedOffset>,
) -> Result<DashboardAnalytics, String> {
    let messages: Vec<Message> = parse_records(messages, "messages")?;
    let attempts: Vec<Attempt> = parse_records(attempts, "attempts")?;
    let endpoints: Vec<Endpoint> = parse_records(endpoints, "endpoints")?;
    Ok(analytics_compute(&messages, &attempts, &endpoints, range, now))
}

fn parse_records<T: DeserializeOwned + Default>(
    value: &serde_json::Value,
    what: &str,
) -> Result<Vec<T>, String> {
    let items = value
        .as_array()
        .ok_or_else(|| format!("invalid input: {} is not a list", what))?;
    Ok(items
        .iter()
        .map(|item| serde_json::from_value(item.clone()).unwrap_or_default())
        .collect())
}
