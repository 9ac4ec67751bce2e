use time::{Date, Duration};

/// Most recent Monday relative to `date` (possibly `date` itself).
pub fn monday_of(date: Date) -> Date {
    date - Duration::days(i64::from(date.weekday().number_days_from_monday()))
}

/// ISO `YYYY-MM-DD` string for a date.
pub fn iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Canonical document id for a weekly plan: `week_{Monday's ISO date}`.
pub fn week_key(date: Date) -> String {
    format!("week_{}", iso_date(monday_of(date)))
}
