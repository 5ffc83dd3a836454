// src/services/opening_hours.rs
// DOCUMENTATION: Opening hours summary
// PURPOSE: Turn Google opening periods into a short "N hours" label

use crate::errors::FinderError;
use crate::services::google_maps_client::{GoogleOpeningHours, GoogleOpeningTime};
use chrono::NaiveTime;

pub const HOURS_NOT_AVAILABLE: &str = "Hours not available";
pub const ALWAYS_OPEN: &str = "24 hours";

/// Summarize how long a place is open per day
/// DOCUMENTATION: Only the first period is examined. A close time earlier than
/// the open time is not wrapped past midnight and yields a negative count.
///
/// # Errors
/// MalformedResponse when the first period lacks an open/close time or a time
/// is not a valid "HHMM" string.
pub fn calculate_open_hours(
    opening_hours: Option<&GoogleOpeningHours>,
) -> Result<String, FinderError> {
    let Some(periods) = opening_hours.and_then(|hours| hours.periods.as_deref()) else {
        return Ok(HOURS_NOT_AVAILABLE.to_string());
    };

    let Some(first) = periods.first() else {
        return Ok(HOURS_NOT_AVAILABLE.to_string());
    };

    let open_now = opening_hours
        .and_then(|hours| hours.open_now)
        .unwrap_or(false);

    if open_now && periods.len() == 1 && first.close.is_none() {
        return Ok(ALWAYS_OPEN.to_string());
    }

    let open = parse_clock_time(first.open.as_ref(), "open")?;
    let close = parse_clock_time(first.close.as_ref(), "close")?;

    let minutes = close.signed_duration_since(open).num_minutes();
    let hours = minutes as f64 / 60.0;

    Ok(format!("{} hours", hours))
}

/// Parse a Google "HHMM" time into a same-day clock time
fn parse_clock_time(
    entry: Option<&GoogleOpeningTime>,
    label: &str,
) -> Result<NaiveTime, FinderError> {
    let raw = entry.and_then(|t| t.time.as_deref()).ok_or_else(|| {
        FinderError::MalformedResponse(format!("Opening period has no {} time", label))
    })?;

    NaiveTime::parse_from_str(raw, "%H%M").map_err(|e| {
        FinderError::MalformedResponse(format!("Invalid {} time '{}': {}", label, raw, e))
    })
}
