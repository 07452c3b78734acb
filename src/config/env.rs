// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use crate::config::SearchArea;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use validator::Validate;

/// How calls to the Places API are spaced out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingStrategy {
    /// Sleep a fixed delay after every call
    Fixed,
    /// Token bucket allowing one call per delay period
    RateLimited,
}

impl FromStr for PacingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(PacingStrategy::Fixed),
            "rate_limited" | "rate-limited" | "governor" => Ok(PacingStrategy::RateLimited),
            other => Err(format!("Unknown pacing strategy: {}", other)),
        }
    }
}

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Google Places API Key (required)
    pub google_places_api_key: String,

    /// Root of the Places web service
    pub places_base_url: String,

    /// Center and radius of every nearby search
    pub search_area: SearchArea,

    /// Pacing interval applied after each API call
    pub request_delay: Duration,

    /// Fixed sleep or token bucket
    pub pacing_strategy: PacingStrategy,

    /// HTTP client timeout
    pub request_timeout: Duration,

    /// Width requested in generated photo URLs
    pub photo_max_width: u32,

    /// Where the export document is written
    pub output_path: PathBuf,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Malformed variables replaced by their default, logged once the logger is up
    pub warnings: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = SearchArea::default();
        let mut warnings = Vec::new();

        let search_area = SearchArea::new(
            read_var("SEARCH_CENTER_LAT", &mut warnings).unwrap_or(defaults.latitude),
            read_var("SEARCH_CENTER_LNG", &mut warnings).unwrap_or(defaults.longitude),
            read_var("SEARCH_RADIUS_M", &mut warnings).unwrap_or(defaults.radius_m),
        );
        let request_delay = Duration::from_millis(read_var("REQUEST_DELAY_MS", &mut warnings).unwrap_or(300));
        let pacing_strategy = read_var("PACING_STRATEGY", &mut warnings).unwrap_or(PacingStrategy::Fixed);
        let request_timeout = Duration::from_secs(read_var("REQUEST_TIMEOUT_SECS", &mut warnings).unwrap_or(30));
        let photo_max_width = read_var("PHOTO_MAX_WIDTH", &mut warnings).unwrap_or(800);

        Config {
            google_places_api_key: env::var("GOOGLE_PLACES_API_KEY").unwrap_or_default(),

            places_base_url: env::var("PLACES_API_BASE_URL")
                .unwrap_or_else(|_| "https://maps.googleapis.com/maps/api/place".to_string()),

            search_area,
            request_delay,
            pacing_strategy,
            request_timeout,
            photo_max_width,

            output_path: env::var("OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("../data/actors-data.json")),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            warnings,
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures the export can run before any request is sent
    pub fn validate(&self) -> Result<(), String> {
        if self.google_places_api_key.trim().is_empty() {
            return Err("GOOGLE_PLACES_API_KEY is required".to_string());
        }

        if self.places_base_url.is_empty() {
            return Err("PLACES_API_BASE_URL must not be empty".to_string());
        }

        self.search_area
            .validate()
            .map_err(|e| format!("Invalid search area: {}", e))?;

        if self.output_path.as_os_str().is_empty() {
            return Err("OUTPUT_PATH must not be empty".to_string());
        }

        Ok(())
    }
}

/// Read and parse a variable; `None` when unset or malformed
fn read_var<T: FromStr>(name: &str, warnings: &mut Vec<String>) -> Option<T> {
    parse_value(name, env::var(name).ok(), warnings)
}

/// Parse a raw variable value. `None` means unset or malformed; a malformed
/// value also records a warning so the caller can fall back to its default.
fn parse_value<T: FromStr>(
    name: &str,
    raw: Option<String>,
    warnings: &mut Vec<String>,
) -> Option<T> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warnings.push(format!("Ignoring malformed {}={:?}, using default", name, raw));
            None
        }
    }
}
