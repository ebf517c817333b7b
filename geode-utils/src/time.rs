use chrono::{DateTime, Timelike, Utc};

/// Seconds from `now` until the next UTC midnight. Exactly at midnight the
/// answer is a full day, so a scheduler that just fired sleeps until the
/// next boundary instead of spinning.
pub fn seconds_until_next_utc_midnight(now: DateTime<Utc>) -> u64 {
    let elapsed_today = u64::from(now.num_seconds_from_midnight());
    86_400 - elapsed_today.min(86_399)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::seconds_until_next_utc_midnight;

    #[test]
    fn counts_down_to_the_next_midnight() {
        let just_before = Utc.with_ymd_and_hms(2026, 3, 15, 23, 59, 59).single().expect("valid");
        assert_eq!(seconds_until_next_utc_midnight(just_before), 1);

        let noon = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).single().expect("valid");
        assert_eq!(seconds_until_next_utc_midnight(noon), 12 * 3_600);

        let midnight = Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).single().expect("valid");
        assert_eq!(seconds_until_next_utc_midnight(midnight), 86_400);
    }
}
