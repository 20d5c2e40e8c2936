use chrono::{DateTime, Duration, Utc};

/// Coarse human label for how far `timestamp` lies from `now`, e.g.
/// "2 hours ago" or "in 3 days". Deterministic given `now`; future
/// timestamps are labeled, never an error.
pub fn relative_label(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(timestamp);

    if delta < Duration::zero() {
        let ahead = -delta;
        if ahead.num_seconds() < 60 {
            return "in a moment".to_string();
        }
        return format!("in {}", span_label(ahead));
    }

    if delta.num_seconds() < 60 {
        return "just now".to_string();
    }
    format!("{} ago", span_label(delta))
}

fn span_label(span: Duration) -> String {
    let minutes = span.num_minutes();
    let hours = span.num_hours();
    let days = span.num_days();

    if minutes < 60 {
        count_label(minutes, "minute")
    } else if hours < 24 {
        count_label(hours, "hour")
    } else if days < 30 {
        count_label(days, "day")
    } else if days < 365 {
        count_label(days / 30, "month")
    } else {
        count_label(days / 365, "year")
    }
}

fn count_label(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
