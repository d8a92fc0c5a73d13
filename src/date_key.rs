//! Canonical local-date keys.
//!
//! `YYYY-MM-DD` strings built from local date fields, used as a seed
//! component for the daily suggestion shuffle and as the day index for meal
//! history. Never derived through UTC: near midnight the UTC day can differ
//! from the local day, and a meal logged at 00:30 belongs to today.

use chrono::{Datelike, Local, NaiveDate};

/// Format a date as a zero-padded `YYYY-MM-DD` key.
pub fn local_date_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Today's key, from the local clock.
pub fn today_local_date_key() -> String {
    local_date_key(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};

    #[test]
    fn test_formats_with_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid date");
        assert_eq!(local_date_key(date), "2024-01-05");

        let date = NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date");
        assert_eq!(local_date_key(date), "2024-12-31");
    }

    #[test]
    fn test_uses_local_fields_not_utc() {
        // 23:30 on Jan 5 in UTC+2 is 21:30 Jan 5 UTC; 00:30 on Jan 6 in
        // UTC+2 is still Jan 5 in UTC. The key must follow the zone-local
        // date fields, not the UTC instant.
        let zone = FixedOffset::east_opt(2 * 3600).expect("valid offset");
        let after_local_midnight = zone.with_ymd_and_hms(2024, 1, 6, 0, 30, 0).unwrap();
        assert_eq!(
            local_date_key(after_local_midnight.date_naive()),
            "2024-01-06"
        );
        assert_eq!(
            local_date_key(after_local_midnight.with_timezone(&Utc).date_naive()),
            "2024-01-05"
        );
    }
}
