use chrono::{DateTime, NaiveDate};
use scraper::{Html, Selector};
use tracing::warn;

use crate::model::{CalendarEvent, Tournament};

/// Convert one calendar event into a [`Tournament`].
///
/// Extraction is total: malformed or missing fields degrade to empty or zero
/// values, so a single bad event can never fail the batch or drop a record.
pub fn extract_tournament(event: &CalendarEvent) -> Tournament {
    // Descriptions pack several logical fields into one blob separated by
    // <br> markers; only the first segment holds the registration link.
    let first_segment = event
        .description
        .as_deref()
        .unwrap_or_default()
        .split("<br>")
        .next()
        .unwrap_or_default();

    let registration_link =
        first_anchor_text(first_segment).unwrap_or_else(|| first_segment.to_string());

    Tournament {
        title: event.summary.clone().unwrap_or_default(),
        registration_link,
        start_date: start_epoch(event),
    }
}

fn start_epoch(event: &CalendarEvent) -> i64 {
    let start = event
        .start
        .as_ref()
        .and_then(|s| s.date_time.as_deref().or(s.date.as_deref()));

    match start {
        Some(value) => parse_instant(value).unwrap_or_else(|| {
            warn!(value, "unparseable event start, defaulting to epoch");
            0
        }),
        None => 0,
    }
}

/// Parse either an RFC 3339 instant or a bare calendar date, the latter taken
/// as midnight UTC.
fn parse_instant(value: &str) -> Option<i64> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.timestamp());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc().timestamp())
}

/// Visible text of the first anchor element in a short markup snippet.
///
/// Returns `None` when the snippet contains no anchor or the anchor has no
/// visible text. Malformed markup is absorbed by the parser's error recovery
/// rather than surfaced to the caller.
fn first_anchor_text(snippet: &str) -> Option<String> {
    if snippet.is_empty() {
        return None;
    }
    let fragment = Html::parse_fragment(snippet);
    let anchor_selector = Selector::parse("a").ok()?;
    let text: String = fragment.select(&anchor_selector).next()?.text().collect();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use crate::model::EventTime;

    use super::*;

    fn event(summary: Option<&str>, description: Option<&str>, start: Option<EventTime>) -> CalendarEvent {
        CalendarEvent {
            summary: summary.map(str::to_string),
            description: description.map(str::to_string),
            start,
        }
    }

    fn timed(date_time: &str) -> Option<EventTime> {
        Some(EventTime {
            date_time: Some(date_time.to_string()),
            date: None,
        })
    }

    #[test]
    fn anchor_text_wins_over_raw_segment() {
        let event = event(
            Some("Spring Open"),
            Some("<a href=\"https://x/y\">Sign up</a><br>extra"),
            timed("2024-01-01T00:00:00Z"),
        );
        let tournament = extract_tournament(&event);
        assert_eq!(tournament.title, "Spring Open");
        assert_eq!(tournament.registration_link, "Sign up");
        assert_eq!(tournament.start_date, 1704067200);
    }

    #[test]
    fn plain_segment_is_the_fallback_link() {
        let event = event(None, Some("https://x/y<br>extra"), timed("2024-01-01T00:00:00Z"));
        let tournament = extract_tournament(&event);
        assert_eq!(tournament.registration_link, "https://x/y");
    }

    #[test]
    fn only_the_first_segment_is_considered() {
        let event = event(
            None,
            Some("first<br><a href=\"https://x/y\">ignored</a>"),
            None,
        );
        assert_eq!(extract_tournament(&event).registration_link, "first");
    }

    #[test]
    fn empty_event_degrades_to_defaults() {
        let tournament = extract_tournament(&CalendarEvent::default());
        assert_eq!(tournament.title, "");
        assert_eq!(tournament.registration_link, "");
        assert_eq!(tournament.start_date, 0);
    }

    #[test]
    fn anchor_without_text_falls_back_to_segment() {
        let event = event(None, Some("<a href=\"https://x/y\"></a>"), None);
        assert_eq!(
            extract_tournament(&event).registration_link,
            "<a href=\"https://x/y\"></a>"
        );
    }

    #[test]
    fn malformed_markup_never_panics() {
        let event = event(None, Some("<a href=\"unterminated"), None);
        let tournament = extract_tournament(&event);
        assert_eq!(tournament.registration_link, "<a href=\"unterminated");
    }

    #[test]
    fn date_only_start_is_midnight_utc() {
        let start = Some(EventTime {
            date_time: None,
            date: Some("2024-01-01".to_string()),
        });
        let event = event(None, None, start);
        assert_eq!(extract_tournament(&event).start_date, 1704067200);
    }

    #[test]
    fn date_time_is_preferred_over_date() {
        let start = Some(EventTime {
            date_time: Some("2024-06-01T18:00:00Z".to_string()),
            date: Some("2024-01-01".to_string()),
        });
        let event = event(None, None, start);
        assert_eq!(extract_tournament(&event).start_date, 1717264800);
    }

    #[test]
    fn unparseable_start_defaults_to_epoch() {
        let start = Some(EventTime {
            date_time: Some("next tuesday".to_string()),
            date: None,
        });
        let event = event(None, None, start);
        assert_eq!(extract_tournament(&event).start_date, 0);
    }

    #[test]
    fn first_anchor_text_picks_the_first_of_many() {
        assert_eq!(
            first_anchor_text("<a>one</a><a>two</a>"),
            Some("one".to_string())
        );
    }

    #[test]
    fn first_anchor_text_empty_cases() {
        assert_eq!(first_anchor_text(""), None);
        assert_eq!(first_anchor_text("no markup here"), None);
        assert_eq!(first_anchor_text("<a></a>"), None);
    }
}
