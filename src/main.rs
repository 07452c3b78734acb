// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Load config, run the Google Places export and write the actors file

mod config;
mod errors;
mod models;
mod services;

use anyhow::Context;
use config::Config;
use dotenv::dotenv;
use models::ExportDocument;
use std::path::Path;
use services::{
    pacer_from_config, ActorMapper, ExportService, ExportStats, ExportWriter, GooglePlacesClient,
};

// --- ANSI colors for the terminal summary ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";

#[tokio::main]
async fn main() {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.as_str()
        } else {
            "info,reqwest=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();
    for warning in &config.warnings {
        log::warn!("{}", warning);
    }

    // 4. Run; any failure is reported here and not re-raised
    if let Err(e) = run(&config).await {
        log::error!("Export failed: {:?}", e);
        println!("\n{}❌ Error: {:#}{}", RED, e, RESET);
    }
}

async fn run(config: &Config) -> anyhow::Result<()> {
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Configuration error")?;

    let client = GooglePlacesClient::new(
        config.google_places_api_key.clone(),
        config.places_base_url.clone(),
        config.request_timeout,
    )?;
    let mapper = ActorMapper::new(
        client.get_base_url(),
        client.get_api_key(),
        config.photo_max_width,
    );
    let pacer = pacer_from_config(config);

    println!(
        "{}🔍 Searching local actors around {} ({} m)...{}",
        BOLD,
        config.search_area.location_param(),
        config.search_area.radius_m,
        RESET
    );

    let service = ExportService::new(&client, pacer.as_ref(), &mapper, &config.search_area);
    let (document, stats) = service.fetch_all_places().await;

    print_summary(&document, &stats);

    save_export(&config.output_path, &document)?;

    println!(
        "\n{}✅ Data saved to {}{}",
        GREEN,
        config.output_path.display(),
        RESET
    );
    Ok(())
}

fn save_export(path: &Path, document: &ExportDocument) -> anyhow::Result<()> {
    ExportWriter::write(path, document)
        .with_context(|| format!("Failed to write export to {}", path.display()))
}

fn print_summary(document: &ExportDocument, stats: &ExportStats) {
    println!("\n\n{}📊 Summary{}", BOLD, RESET);
    println!("{}", "=".repeat(50));
    for (category, count) in document.counts() {
        println!("{:<15}: {} actors", category.as_str(), count);
    }
    println!("{}", "=".repeat(50));
    println!("{:<15}: {} actors", "TOTAL", document.total());

    println!("\n{}📈 Run:{}", BOLD, RESET);
    println!("  • API requests: {}{}{}", BLUE, stats.api_requests(), RESET);
    println!(
        "  • Duplicates skipped: {}{}{}",
        YELLOW, stats.duplicates_skipped, RESET
    );
    if stats.searches_failed > 0 || stats.details_failed > 0 {
        println!(
            "  • Failures: {}{} searches, {} details{}",
            RED, stats.searches_failed, stats.details_failed, RESET
        );
    }
    println!(
        "  • Duration: {}s (started {})",
        stats.duration_seconds, stats.started_at
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PacingStrategy, SearchArea};
    use std::time::Duration;
    use tempfile::tempdir;

    fn test_config(output_path: &Path) -> Config {
        Config {
            google_places_api_key: "test_key".to_string(),
            places_base_url: "http://127.0.0.1:9".to_string(),
            search_area: SearchArea::default(),
            request_delay: Duration::ZERO,
            pacing_strategy: PacingStrategy::Fixed,
            request_timeout: Duration::from_secs(1),
            photo_max_width: 800,
            output_path: output_path.to_path_buf(),
            log_level: "info".to_string(),
            warnings: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_missing_api_key_stops_before_export() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("data").join("actors-data.json");
        let mut config = test_config(&output);
        config.google_places_api_key = String::new();

        let err = run(&config).await.unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("Configuration error"));
        assert!(message.contains("GOOGLE_PLACES_API_KEY"));
        assert!(!output.exists());
        assert!(!output.parent().unwrap().exists());
    }

    #[test]
    fn test_write_failure_carries_path_context() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("data");
        std::fs::write(&blocker, "not a directory").unwrap();
        let output = blocker.join("actors-data.json");

        let err = save_export(&output, &ExportDocument::new()).unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("Failed to write export to"));
        assert!(message.contains("actors-data.json"));
    }
}
