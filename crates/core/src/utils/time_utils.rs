use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Default timezone for valuation dates.
/// This is the canonical timezone used to convert UTC instants to domain dates.
pub const DEFAULT_VALUATION_TZ: Tz = chrono_tz::Australia::Sydney;

/// Converts a UTC instant to a valuation date in the given timezone.
///
/// This is the single source of truth for converting instants to domain dates.
pub fn valuation_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// The last second of `date` in `tz`, as a UTC instant.
///
/// Historical valuations for a calendar date are evaluated at end of day so
/// that anything recorded on that date is included.
pub fn end_of_day_utc(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN));
    match tz.from_local_datetime(&naive).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => Utc.from_utc_datetime(&naive),
    }
}

/// Whole days elapsed from `start` to `end`, clamped at zero.
pub fn whole_days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_days().max(0)
}

/// Dates from `start` to `end` inclusive, stepping `step_days` at a time.
/// `end` is always included so a chart ends on the requested date.
pub fn stepped_dates(start: NaiveDate, end: NaiveDate, step_days: u32) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let step = chrono::Days::new(u64::from(step_days.max(1)));
    let mut dates = Vec::new();
    let mut current = start;
    while current < end {
        dates.push(current);
        match current.checked_add_days(step) {
            Some(next) => current = next,
            None => break,
        }
    }
    dates.push(end);
    dates
}
