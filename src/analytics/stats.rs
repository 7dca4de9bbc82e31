use crate::types::attempt::{Attempt, AttemptStatus};
use crate::types::message::Message;

use super::{StatusSlice, SummaryStats};

/// Compute the summary card numbers for one snapshot of messages and
/// attempts.
///
/// Attempts with an unrecognized status code count toward `total_attempts`
/// but toward none of the success/failed/pending buckets. Attempts without a
/// response duration are excluded from the average's denominator, not
/// treated as zero.
pub fn compute_summary_stats(messages: &[Message], attempts: &[Attempt]) -> SummaryStats {
    let total_messages = messages.len() as u64;
    let total_attempts = attempts.len() as u64;

    let mut success_attempts = 0u64;
    let mut failed_attempts = 0u64;
    let mut pending_attempts = 0u64;
    // Sum in f64: extreme durations must not overflow the accumulator.
    let mut duration_sum = 0f64;
    let mut duration_count = 0u64;

    for attempt in attempts {
        match attempt.status {
            AttemptStatus::Success | AttemptStatus::Sending => success_attempts += 1,
            AttemptStatus::Failed => failed_attempts += 1,
            AttemptStatus::Pending => pending_attempts += 1,
            AttemptStatus::Unknown(_) => {}
        }
        if let Some(ms) = attempt.response_duration_ms {
            duration_sum += ms as f64;
            duration_count += 1;
        }
    }

    let avg_response_time_ms = if duration_count > 0 {
        (duration_sum / duration_count as f64).round() as u64
    } else {
        0
    };

    let success_rate = if total_attempts > 0 {
        ((success_attempts as f64 / total_attempts as f64) * 1000.0).round() / 10.0
    } else {
        0.0
    };

    SummaryStats {
        total_messages,
        total_attempts,
        success_attempts,
        failed_attempts,
        pending_attempts,
        avg_response_time_ms,
        success_rate,
    }
}

/// Pie-chart slices in fixed Success/Failed/Pending order; zero-count
/// categories are dropped rather than rendered as empty segments.
pub fn compute_status_distribution(stats: &SummaryStats) -> Vec<StatusSlice> {
    [
        ("Success", stats.success_attempts),
        ("Failed", stats.failed_attempts),
        ("Pending", stats.pending_attempts),
    ]
    .into_iter()
    .filter(|(_, value)| *value > 0)
    .map(|(label, value)| StatusSlice {
        label: label.to_string(),
        value,
    })
    .collect()
}
