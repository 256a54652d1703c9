pub(crate) mod auth;
pub(crate) mod events;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::{HeraldError, Result};
use crate::model::CalendarEvent;
use crate::pipeline::EventSource;
use crate::window::TimeWindow;

const API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// Calendar fetch collaborator backed by the Google Calendar REST API.
///
/// Wraps a [`reqwest::Client`] plus the service-account credentials used to
/// mint a read-only access token each run.
pub struct GoogleCalendar {
    http: reqwest::Client,
    service_account: String,
    private_key: String,
    calendar_id: String,
}

impl GoogleCalendar {
    /// Create a calendar client with default HTTP settings.
    pub fn new(
        service_account: impl Into<String>,
        private_key: impl Into<String>,
        calendar_id: impl Into<String>,
    ) -> Self {
        Self::with_client(reqwest::Client::new(), service_account, private_key, calendar_id)
    }

    /// Create a calendar client using the provided [`reqwest::Client`].
    ///
    /// Use this to share one connection pool across collaborators or to
    /// configure timeouts and proxies.
    pub fn with_client(
        client: reqwest::Client,
        service_account: impl Into<String>,
        private_key: impl Into<String>,
        calendar_id: impl Into<String>,
    ) -> Self {
        Self {
            http: client,
            service_account: service_account.into(),
            private_key: private_key.into(),
            calendar_id: calendar_id.into(),
        }
    }

    /// Fetch the events starting inside `window`, ascending by start time,
    /// with recurring events expanded into single instances.
    #[instrument(skip(self))]
    pub async fn events_in(&self, window: &TimeWindow) -> Result<Vec<CalendarEvent>> {
        let token =
            auth::fetch_access_token(&self.http, &self.service_account, &self.private_key).await?;
        events::list_events(&self.http, &token, &self.calendar_id, window).await
    }
}

#[async_trait]
impl EventSource for GoogleCalendar {
    async fn events_between(&self, window: &TimeWindow) -> Result<Vec<CalendarEvent>> {
        self.events_in(window).await
    }
}

/// Send a prepared request and decode the JSON response body.
pub(crate) async fn send_and_decode<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    url: &str,
) -> Result<T> {
    debug!(url, "sending request");

    let response = request.send().await.map_err(|e| HeraldError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(HeraldError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.json().await.map_err(|e| HeraldError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })
}
