//! Calendar-week boundaries. The opening weekday is injected rather than
//! inherited from a host locale, so callers and tests pick the convention.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc, Weekday};

/// Which weekday opens a calendar week.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekConvention {
    pub first_day: Weekday,
}

impl Default for WeekConvention {
    fn default() -> Self {
        Self {
            first_day: Weekday::Mon,
        }
    }
}

impl WeekConvention {
    pub fn starting(first_day: Weekday) -> Self {
        Self { first_day }
    }

    /// Midnight (UTC) of the most recent `first_day` on or before `now`:
    /// the start of the calendar week containing `now`.
    pub fn start_of_week(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now.date_naive();
        let days_back = (today.weekday().num_days_from_monday() + 7
            - self.first_day.num_days_from_monday())
            % 7;
        let start = today - Duration::days(i64::from(days_back));
        start.and_time(NaiveTime::MIN).and_utc()
    }
}
