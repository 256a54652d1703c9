use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::google::{self, API_BASE};
use crate::model::CalendarEvent;
use crate::window::TimeWindow;

#[derive(Debug, Deserialize)]
struct EventsPage {
    #[serde(default)]
    items: Vec<CalendarEvent>,
}

/// List the events starting inside `window`, ascending by start time, with
/// recurring events expanded into single instances.
#[instrument(skip(client, access_token))]
pub(crate) async fn list_events(
    client: &reqwest::Client,
    access_token: &str,
    calendar_id: &str,
    window: &TimeWindow,
) -> Result<Vec<CalendarEvent>> {
    let url = format!("{API_BASE}/calendars/{calendar_id}/events");
    let request = client.get(&url).bearer_auth(access_token).query(&[
        ("timeMin", window.time_min()),
        ("timeMax", window.time_max()),
        ("singleEvents", "true".to_string()),
        ("orderBy", "startTime".to_string()),
    ]);

    let page: EventsPage = google::send_and_decode(request, &url).await?;
    debug!(count = page.items.len(), calendar_id, "listed calendar events");
    Ok(page.items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_page_decodes_timed_and_all_day_events() {
        let page: EventsPage = serde_json::from_str(
            r#"{
                "kind": "calendar#events",
                "items": [
                    {
                        "summary": "Spring Open",
                        "description": "<a href=\"https://x/y\">Sign up</a><br>bring your own mouse",
                        "start": {"dateTime": "2024-01-01T00:00:00Z"}
                    },
                    {
                        "summary": "LAN day",
                        "start": {"date": "2024-01-02"}
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].summary.as_deref(), Some("Spring Open"));
        assert_eq!(
            page.items[0].start.as_ref().unwrap().date_time.as_deref(),
            Some("2024-01-01T00:00:00Z")
        );
        assert!(page.items[1].description.is_none());
        assert_eq!(
            page.items[1].start.as_ref().unwrap().date.as_deref(),
            Some("2024-01-02")
        );
    }

    #[test]
    fn missing_items_decodes_as_empty() {
        let page: EventsPage = serde_json::from_str(r#"{"kind": "calendar#events"}"#).unwrap();
        assert!(page.items.is_empty());
    }
}
