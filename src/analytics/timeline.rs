use chrono::{DateTime, Days, Duration, FixedOffset, NaiveTime, Utc};

use crate::types::attempt::Attempt;
use crate::types::message::Message;

use super::{DayBucket, TimeRange};

/// Bucket messages and attempts into calendar days, oldest first, ending on
/// the day containing `now`.
///
/// Day boundaries are midnight-to-midnight in the UTC offset carried by
/// `now`, and each bucket is the half-open interval `[start, end)`: a record
/// stamped exactly at midnight belongs to the day that starts there. Records
/// without a timestamp, or outside the covered range, land in no bucket.
pub fn compute_timeline(
    messages: &[Message],
    attempts: &[Attempt],
    range: TimeRange,
    now: DateTime<FixedOffset>,
) -> Vec<DayBucket> {
    let days = range.days();
    let offset_secs = i64::from(now.offset().local_minus_utc());
    let today = now.date_naive();

    let mut buckets = Vec::with_capacity(days as usize);
    for i in (0..days).rev() {
        let day = today - Days::new(i);
        let start_naive = day.and_time(NaiveTime::MIN) - Duration::seconds(offset_secs);
        let start: DateTime<Utc> = DateTime::from_naive_utc_and_offset(start_naive, Utc);
        let end = start + Duration::days(1);

        let in_bucket = |ts: Option<DateTime<Utc>>| ts.is_some_and(|t| t >= start && t < end);

        let message_count = messages.iter().filter(|m| in_bucket(m.timestamp)).count() as u64;

        let mut attempt_count = 0u64;
        let mut success_count = 0u64;
        let mut failed_count = 0u64;
        let mut duration_sum = 0f64;
        let mut duration_n = 0u64;
        for attempt in attempts.iter().filter(|a| in_bucket(a.timestamp)) {
            attempt_count += 1;
            if attempt.status.is_success_class() {
                success_count += 1;
            } else if attempt.status == crate::types::attempt::AttemptStatus::Failed {
                failed_count += 1;
            }
            if let Some(ms) = attempt.response_duration_ms {
                duration_sum += ms as f64;
                duration_n += 1;
            }
        }

        let avg_response_time_ms = if duration_n > 0 {
            (duration_sum / duration_n as f64).round() as u64
        } else {
            0
        };

        buckets.push(DayBucket {
            date: day.format("%b %-d").to_string(),
            message_count,
            attempt_count,
            success_count,
            failed_count,
            avg_response_time_ms,
        });
    }

    buckets
}
