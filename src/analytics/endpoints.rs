use std::collections::{HashMap, HashSet};

use crate::types::attempt::Attempt;
use crate::types::endpoint::Endpoint;
use crate::types::message::Message;

use super::{EndpointResponseTime, EndpointVolume};

/// Display name for an endpoint id: the endpoint's description when it has
/// one, otherwise the first 8 characters of the id. Ids missing from the
/// endpoint list get the same truncated-id fallback; an unresolved id is not
/// an error.
fn display_name(endpoint_id: &str, endpoints: &[Endpoint]) -> String {
    endpoints
        .iter()
        .find(|ep| ep.id == endpoint_id)
        .and_then(|ep| ep.description.as_deref())
        .filter(|desc| !desc.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| endpoint_id.chars().take(8).collect())
}

/// Slowest endpoints by mean response time, descending, at most `top_n`.
///
/// Only attempts carrying both an endpoint id and a response duration
/// participate. Ties keep first-encountered order.
pub fn compute_response_time_by_endpoint(
    attempts: &[Attempt],
    endpoints: &[Endpoint],
    top_n: usize,
) -> Vec<EndpointResponseTime> {
    let mut order: Vec<String> = Vec::new();
    let mut times: HashMap<String, Vec<u64>> = HashMap::new();

    for attempt in attempts {
        let Some(endpoint_id) = attempt.endpoint_id.as_deref() else {
            continue;
        };
        let Some(ms) = attempt.response_duration_ms else {
            continue;
        };
        times
            .entry(endpoint_id.to_string())
            .or_insert_with(|| {
                order.push(endpoint_id.to_string());
                Vec::new()
            })
            .push(ms);
    }

    let mut rows: Vec<EndpointResponseTime> = order
        .iter()
        .map(|id| {
            let group = &times[id];
            let sum: f64 = group.iter().map(|&ms| ms as f64).sum();
            EndpointResponseTime {
                name: display_name(id, endpoints),
                avg_time_ms: (sum / group.len() as f64).round() as u64,
            }
        })
        .collect();

    // Vec::sort_by is stable, so equal averages keep insertion order.
    rows.sort_by(|a, b| b.avg_time_ms.cmp(&a.avg_time_ms));
    rows.truncate(top_n);
    rows
}

/// Busiest endpoints by attempt volume, descending, at most `top_n`.
///
/// `message_count` is the number of distinct message ids delivered to the
/// endpoint, which can be well below `attempt_count` when deliveries retry.
/// An attempt whose `msg_id` is absent from the supplied message list
/// contributes to neither count.
pub fn compute_volume_by_endpoint(
    messages: &[Message],
    attempts: &[Attempt],
    endpoints: &[Endpoint],
    top_n: usize,
) -> Vec<EndpointVolume> {
    struct Volume {
        messages: HashSet<String>,
        attempts: u64,
    }

    let known_messages: HashSet<&str> = messages.iter().map(|m| m.id.as_str()).collect();

    let mut order: Vec<String> = Vec::new();
    let mut volumes: HashMap<String, Volume> = HashMap::new();

    for attempt in attempts {
        let Some(endpoint_id) = attempt.endpoint_id.as_deref() else {
            continue;
        };
        if !known_messages.contains(attempt.msg_id.as_str()) {
            continue;
        }
        let volume = volumes
            .entry(endpoint_id.to_string())
            .or_insert_with(|| {
                order.push(endpoint_id.to_string());
                Volume {
                    messages: HashSet::new(),
                    attempts: 0,
                }
            });
        volume.messages.insert(attempt.msg_id.clone());
        volume.attempts += 1;
    }

    let mut rows: Vec<EndpointVolume> = order
        .iter()
        .map(|id| {
            let volume = &volumes[id];
            EndpointVolume {
                name: display_name(id, endpoints),
                message_count: volume.messages.len() as u64,
                attempt_count: volume.attempts,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.attempt_count.cmp(&a.attempt_count));
    rows.truncate(top_n);
    rows
}
