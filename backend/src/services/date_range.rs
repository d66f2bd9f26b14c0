use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};

/// Fixed offset (UTC+5:30) used to anchor "today" to one calendar day
/// regardless of where the caller runs.
const DAY_ANCHOR_OFFSET_MINUTES: i32 = 330;

fn anchor_offset() -> FixedOffset {
    FixedOffset::east_opt(DAY_ANCHOR_OFFSET_MINUTES * 60).unwrap()
}

/// Truncate an instant to its calendar date under the anchor offset.
pub fn local_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&anchor_offset()).date_naive()
}

/// Today's calendar date under the anchor offset.
pub fn today() -> NaiveDate {
    local_date(Utc::now())
}

/// Expand an inclusive date range into one entry per calendar day, in
/// ascending order with no gaps or duplicates. `start > end` yields an
/// empty sequence.
pub fn expand(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = start;
    while day <= end {
        days.push(day);
        day += Duration::days(1);
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_expand_yields_one_entry_per_day() {
        let days = expand(date(2024, 6, 1), date(2024, 6, 3));
        assert_eq!(days.len(), 3);
        assert_eq!(days[0], date(2024, 6, 1));
        assert_eq!(days[1], date(2024, 6, 2));
        assert_eq!(days[2], date(2024, 6, 3));
    }

    #[test]
    fn test_expand_count_matches_span() {
        let start = date(2024, 1, 1);
        let end = date(2024, 3, 1);
        let days = expand(start, end);
        assert_eq!(days.len() as i64, (end - start).num_days() + 1);
        assert!(days.windows(2).all(|w| w[1] - w[0] == Duration::days(1)));
    }

    #[test]
    fn test_expand_crosses_month_and_leap_boundaries() {
        let days = expand(date(2024, 2, 28), date(2024, 3, 1));
        assert_eq!(
            days,
            vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]
        );
    }

    #[test]
    fn test_expand_single_day() {
        assert_eq!(expand(date(2024, 6, 1), date(2024, 6, 1)), vec![date(2024, 6, 1)]);
    }

    #[test]
    fn test_expand_inverted_range_is_empty() {
        assert!(expand(date(2024, 6, 3), date(2024, 6, 1)).is_empty());
    }

    #[test]
    fn test_expand_is_pure() {
        let first = expand(date(2024, 6, 1), date(2024, 6, 5));
        let second = expand(date(2024, 6, 1), date(2024, 6, 5));
        assert_eq!(first, second);
    }

    #[test]
    fn test_dates_format_as_zero_padded_iso() {
        for day in expand(date(2024, 1, 5), date(2024, 1, 7)) {
            let text = day.to_string();
            assert_eq!(text.len(), 10);
            assert!(text.starts_with("2024-01-0"));
        }
    }

    #[test]
    fn test_local_date_shifts_late_utc_evening_forward() {
        // 20:00 UTC is already 01:30 the next day at UTC+5:30.
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 20, 0, 0).unwrap();
        assert_eq!(local_date(instant), date(2024, 1, 2));

        let morning = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        assert_eq!(local_date(morning), date(2024, 1, 1));
    }

}
