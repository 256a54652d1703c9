use chrono::Utc;
use tourney_herald::{pipeline, Config, DiscordWebhook, GoogleCalendar, TimeWindow};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Err(err) = run().await {
        error!(error = %err, "notification run failed");
        std::process::exit(1);
    }
}

async fn run() -> tourney_herald::Result<()> {
    let config = Config::from_env()?;
    let http = reqwest::Client::new();

    let calendar = GoogleCalendar::with_client(
        http.clone(),
        config.service_account,
        config.private_key,
        config.calendar_id,
    );
    let webhook =
        DiscordWebhook::with_client(http, config.webhook_url, config.username, config.avatar_url);

    pipeline::run(&calendar, &webhook, TimeWindow::day_ahead(Utc::now())).await
}
