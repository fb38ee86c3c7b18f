use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};

/// Length of the rolling window requested from the contribution calendar.
pub const WINDOW_DAYS: i64 = 365;

/// UTC bounds of a contribution query, `to - from` is exactly [`WINDOW_DAYS`].
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct QueryWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl QueryWindow {
    pub fn ending_at(to: DateTime<Utc>) -> QueryWindow {
        QueryWindow {
            from: to - TimeDelta::days(WINDOW_DAYS),
            to,
        }
    }

    /// The year leading up to now.
    pub fn trailing_year() -> QueryWindow {
        QueryWindow::ending_at(Utc::now())
    }

    /// `from` as an ISO-8601 timestamp, e.g. `2023-06-15T12:00:00Z`
    pub fn from_iso(&self) -> String {
        self.from.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn to_iso(&self) -> String {
        self.to.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
