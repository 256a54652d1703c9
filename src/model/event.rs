use serde::Deserialize;

/// A calendar event as returned by the events feed.
///
/// Every field the extractor cares about is optional; real calendars carry
/// events with no description and all-day events with no clock time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarEvent {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub start: Option<EventTime>,
}

/// Start marker of an event. Timed events carry `dateTime` (RFC 3339),
/// all-day events carry `date` (`YYYY-MM-DD`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventTime {
    #[serde(rename = "dateTime")]
    pub date_time: Option<String>,
    pub date: Option<String>,
}
