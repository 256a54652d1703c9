use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};

/// The bounded future interval of events considered in one run.
///
/// Always satisfies `start < end`. Computed fresh from the current time on
/// every run; nothing is persisted across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Rolling lookahead window covering the next 24 hours from `now`.
    pub fn day_ahead(now: DateTime<Utc>) -> Self {
        Self {
            start: now,
            end: now + TimeDelta::days(1),
        }
    }

    /// Lower bound as an RFC 3339 instant, for the `timeMin` query parameter.
    pub fn time_min(&self) -> String {
        self.start.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Upper bound as an RFC 3339 instant, for the `timeMax` query parameter.
    pub fn time_max(&self) -> String {
        self.end.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
