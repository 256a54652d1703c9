use async_trait::async_trait;
use tracing::{info, instrument};

use crate::error::Result;
use crate::extract::extract_tournament;
use crate::format::render_announcement;
use crate::model::{CalendarEvent, Tournament};
use crate::window::TimeWindow;

/// Source of raw calendar events for a bounded time range.
#[async_trait]
pub trait EventSource {
    /// Events starting inside `window`, in ascending start-time order.
    async fn events_between(&self, window: &TimeWindow) -> Result<Vec<CalendarEvent>>;
}

/// Delivery target for the rendered announcement.
#[async_trait]
pub trait Delivery {
    async fn deliver(&self, content: &str) -> Result<()>;
}

/// Run one notification pass: fetch events for `window`, extract a tournament
/// record from each, render the announcement, and deliver it.
///
/// A fetch failure aborts the run before extraction; extraction itself never
/// fails. The empty-window case still delivers the sentinel message. Delivery
/// is attempted once, with no retry.
#[instrument(skip(source, delivery))]
pub async fn run<S, D>(source: &S, delivery: &D, window: TimeWindow) -> Result<()>
where
    S: EventSource + Sync,
    D: Delivery + Sync,
{
    let events = source.events_between(&window).await?;
    info!(count = events.len(), "fetched events in window");

    let tournaments: Vec<Tournament> = events.iter().map(extract_tournament).collect();
    let message = render_announcement(&tournaments);

    delivery.deliver(&message).await?;
    info!("announcement delivered");
    Ok(())
}
