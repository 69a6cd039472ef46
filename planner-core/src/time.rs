//! Timestamp normalization for event ingestion.
//!
//! Collaborators feeding the engine may hold date-only or date-time
//! strings; both normalize to one `DateTime<Utc>` representation here, so
//! no mixed formats ever reach the ledger.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Parse `"2026-08-01 14:30"` or `"2026-08-01"` into UTC.
///
/// Date-only input resolves to midnight.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M") {
        return Ok(Utc.from_utc_datetime(&ndt));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("invalid timestamp '{raw}': expected YYYY-MM-DD [HH:MM]"))?;
    Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_time_form() {
        let ts = parse_timestamp("2026-08-01 14:30").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-08-01T14:30:00+00:00");
    }

    #[test]
    fn date_only_resolves_to_midnight() {
        let ts = parse_timestamp("2026-08-01").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-08-01T00:00:00+00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("08/01/2026").is_err());
    }
}
