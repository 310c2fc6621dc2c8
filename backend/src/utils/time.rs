use chrono::{Datelike, DateTime, Months, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

/// Returns the current time in the configured timezone.
pub fn now_in_timezone(tz: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

/// Returns today's date in the configured timezone.
pub fn today_local(tz: &Tz) -> NaiveDate {
    now_in_timezone(tz).date_naive()
}

/// Entries punched strictly after this time of day count as late.
pub fn late_arrival_cutoff() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 10, 0).expect("static time")
}

/// Nominal end of the working day. Only informs the assistant context.
pub fn workday_end() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).expect("static time")
}

/// Half-open reporting window `[first day of month, first day of next month)`
/// for the month containing `date`.
pub fn month_window(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date.with_day(1).expect("day 1 exists in every month");
    let next = start
        .checked_add_months(Months::new(1))
        .expect("date within chrono range");
    (start, next)
}
