use crate::domain::values::history_range::HistoryRange;
use chrono::{DateTime, Duration, Months, Utc};
use serde::Serialize;

/// Hours the broker's reporting day starts ahead of UTC midnight. The
/// upstream terminal reports history in the broker's server timezone,
/// not the caller's.
pub const BROKER_UTC_OFFSET_HOURS: i64 = 3;

/// Concrete `[start, end)` interval a history range resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Resolve a coarse range against `now`. `end` is always `now`;
    /// `start` is the broker-shifted midnight of the range's first day.
    /// Month subtraction is calendar-based, not 30 fixed days, with the
    /// day-of-month clamped when the earlier month is shorter.
    pub fn resolve(range: HistoryRange, now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let start_date = match range {
            HistoryRange::Today => today,
            HistoryRange::Week => today - Duration::days(7),
            HistoryRange::Month => today.checked_sub_months(Months::new(1)).unwrap_or(today),
        };
        let midnight = start_date.and_hms_opt(0, 0, 0).unwrap();
        let start = DateTime::from_naive_utc_and_offset(midnight, Utc)
            + Duration::hours(BROKER_UTC_OFFSET_HOURS);

        TimeWindow { start, end: now }
    }
}
