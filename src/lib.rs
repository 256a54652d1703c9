pub use config::Config;
pub use discord::DiscordWebhook;
pub use error::{HeraldError, Result};
pub use extract::extract_tournament;
pub use format::render_announcement;
pub use google::GoogleCalendar;
pub use pipeline::{Delivery, EventSource};
pub use window::TimeWindow;

pub mod config;
pub mod discord;
pub mod error;
pub mod extract;
pub mod format;
pub mod google;
pub mod model;
pub mod pipeline;
pub mod window;
