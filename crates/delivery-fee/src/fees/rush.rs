use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};

use super::FeeError;

pub const RUSH_DAY: Weekday = Weekday::Fri;
/// UTC hours covered by the rush window, 15:00:00 up to 18:59:59.
pub const RUSH_HOURS: RangeInclusive<u32> = 15..=18;

// 1.2x, truncated toward zero.
const RUSH_NUMERATOR: u64 = 6;
const RUSH_DENOMINATOR: u64 = 5;

/// Parse an ISO-8601 instant carrying an explicit offset and normalize it to UTC.
pub fn parse_order_time(raw: &str) -> Result<DateTime<Utc>, FeeError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|_| FeeError::InvalidTimeFormat {
            value: raw.to_string(),
        })
}

pub fn is_friday_rush(instant: &DateTime<Utc>) -> bool {
    instant.weekday() == RUSH_DAY && RUSH_HOURS.contains(&instant.hour())
}

pub fn apply_friday_rush(fee: u64, time: &str) -> Result<u64, FeeError> {
    let instant = parse_order_time(time)?;

    if is_friday_rush(&instant) {
        Ok(fee.saturating_mul(RUSH_NUMERATOR) / RUSH_DENOMINATOR)
    } else {
        Ok(fee)
    }
}
