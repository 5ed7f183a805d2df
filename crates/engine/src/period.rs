//! Calendar-month reporting period for compliance reports.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, Utc};

/// A calendar month, from its first second to its last second (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ReportingPeriod {
    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let first_day = date - Days::new(u64::from(date.day0()));
        let next_month = first_day + Months::new(1);

        let start = first_day.and_time(NaiveTime::MIN).and_utc();
        let end = next_month.and_time(NaiveTime::MIN).and_utc() - chrono::Duration::seconds(1);

        Self { start, end }
    }

    /// The month containing `now`.
    pub fn current(now: DateTime<Utc>) -> Self {
        Self::containing(now.date_naive())
    }

    /// "<month>/<year>" without zero padding, e.g. "3/2025".
    pub fn label(&self) -> String {
        format!("{}/{}", self.start.month(), self.start.year())
    }
}
