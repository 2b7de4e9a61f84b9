//! Trading-calendar arithmetic backing the cache freshness checks.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};
use chrono_tz::America::New_York;

/// The trading date whose end-of-session data the provider can currently serve.
///
/// Fundamentals are finalized only after the close of a session, so at or
/// before 16:00 US Eastern the authoritative session is still yesterday's;
/// after the close it is today's. A result landing on Saturday or Sunday
/// rolls back to the preceding Friday.
///
/// Pure function of `now`; callers re-invoke it for every freshness check
/// rather than memoizing it. The returned [`NaiveDate`] displays as
/// `YYYY-MM-DD`.
pub fn reference_trading_date(now: DateTime<Utc>) -> NaiveDate {
    let eastern = now.with_timezone(&New_York);
    let close = NaiveTime::from_hms_opt(16, 0, 0).expect("valid market close time");

    let mut date = if eastern.time() <= close {
        eastern.date_naive() - Duration::days(1)
    } else {
        eastern.date_naive()
    };

    match date.weekday() {
        Weekday::Sat => date = date - Duration::days(1),
        Weekday::Sun => date = date - Duration::days(2),
        _ => {}
    }

    date
}
