use clap::Parser;
use tracing::{error, info};

use hookwatch::analytics::{analytics_compute, TimeRange};
use hookwatch::client::ApiClient;
use hookwatch::config::ConsoleConfig;

// Fetch ceilings match what the dashboard renders; deeper history stays on
// the server.
const ENDPOINT_LIMIT: u32 = 100;
const MESSAGE_LIMIT: u32 = 100;
const ATTEMPTS_PER_MESSAGE: u32 = 50;

#[derive(Parser)]
#[command(name = "hookwatch")]
#[command(about = "Delivery analytics console for a webhook server", long_about = None)]
#[command(version)]
struct Cli {
    /// Application (tenant) id to inspect
    app_id: String,

    /// Timeline range: 24h, 7d, or 30d
    #[arg(default_value = "7d")]
    range: TimeRange,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    hookwatch::init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(&cli.app_id, cli.range).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(app_id: &str, range: TimeRange) -> Result<(), String> {
    let config = ConsoleConfig::from_env()?;
    let client = ApiClient::new(&config);

    client.health().await?;

    let endpoints = client.list_endpoints(app_id, ENDPOINT_LIMIT).await?;
    let messages = client.list_messages(app_id, MESSAGE_LIMIT).await?;
    let attempts = client
        .list_all_attempts(app_id, MESSAGE_LIMIT, ATTEMPTS_PER_MESSAGE)
        .await?;
    info!(
        endpoints = endpoints.len(),
        messages = messages.len(),
        attempts = attempts.len(),
        "Fetched snapshot for {}",
        app_id
    );

    let now = chrono::Local::now().fixed_offset();
    let dashboard = analytics_compute(&messages, &attempts, &endpoints, range, now);

    let rendered = serde_json::to_string_pretty(&dashboard)
        .map_err(|e| format!("Failed to render view-model: {}", e))?;
    println!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_app_id_with_default_range() {
        let cli = Cli::try_parse_from(["hookwatch", "app_1"]).unwrap();
        assert_eq!(cli.app_id, "app_1");
        assert_eq!(cli.range, TimeRange::Week);
    }

    #[test]
    fn parses_explicit_range() {
        let cli = Cli::try_parse_from(["hookwatch", "app_1", "30d"]).unwrap();
        assert_eq!(cli.range, TimeRange::Month);
    }

    #[test]
    fn rejects_unknown_range() {
        assert!(Cli::try_parse_from(["hookwatch", "app_1", "1y"]).is_err());
    }

    #[test]
    fn requires_an_app_id() {
        assert!(Cli::try_parse_from(["hookwatch"]).is_err());
    }
}
