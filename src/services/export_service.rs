// src/services/export_service.rs
// DOCUMENTATION: Google Places export orchestration
// PURPOSE: Search every category, enrich each place once, aggregate actors

use crate::config::SearchArea;
use crate::models::{Category, ExportDocument};
use crate::services::{ActorMapper, GooglePlace, GooglePlaceSummary, Pacer, PlacesApi};
use chrono::Utc;
use std::collections::HashSet;
use std::time::Instant;

/// Export statistics
/// DOCUMENTATION: Tracks what a run did; printed with the summary,
/// never written to the export file
#[derive(Debug, Clone)]
pub struct ExportStats {
    /// Nearby Search calls made
    pub searches: u32,
    /// Nearby Search calls that failed (absorbed)
    pub searches_failed: u32,
    /// Places returned by all searches, duplicates included
    pub places_retrieved: u32,
    /// Places already seen in the same category
    pub duplicates_skipped: u32,
    /// Place Details calls made
    pub details_requested: u32,
    /// Place Details calls that failed (place skipped)
    pub details_failed: u32,
    /// Actors added to the document
    pub actors_exported: u32,
    /// Total run duration in seconds
    pub duration_seconds: u64,
    /// Timestamp when the run started
    pub started_at: String,
    /// Timestamp when the run completed
    pub completed_at: Option<String>,
}

impl ExportStats {
    /// Create new export statistics tracker
    pub fn new() -> Self {
        Self {
            searches: 0,
            searches_failed: 0,
            places_retrieved: 0,
            duplicates_skipped: 0,
            details_requested: 0,
            details_failed: 0,
            actors_exported: 0,
            duration_seconds: 0,
            started_at: Utc::now().to_rfc3339(),
            completed_at: None,
        }
    }

    /// Mark export as completed
    pub fn complete(&mut self, duration: u64) {
        self.duration_seconds = duration;
        self.completed_at = Some(Utc::now().to_rfc3339());
    }

    /// Total API calls (searches + details)
    pub fn api_requests(&self) -> u32 {
        self.searches + self.details_requested
    }
}

impl Default for ExportStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Export service for the local actors directory
/// DOCUMENTATION: Strictly sequential fetch-transform loop. API and transport
/// failures are logged and absorbed here, never returned.
pub struct ExportService<'a> {
    api: &'a dyn PlacesApi,
    pacer: &'a dyn Pacer,
    mapper: &'a ActorMapper,
    area: &'a SearchArea,
}

impl<'a> ExportService<'a> {
    pub fn new(
        api: &'a dyn PlacesApi,
        pacer: &'a dyn Pacer,
        mapper: &'a ActorMapper,
        area: &'a SearchArea,
    ) -> Self {
        Self {
            api,
            pacer,
            mapper,
            area,
        }
    }

    /// Fetch every category
    /// DOCUMENTATION: Main export method
    ///
    /// Process:
    /// 1. For each category, search each of its place types
    /// 2. Skip places already seen in this category
    /// 3. Fetch Place Details for new places
    /// 4. Map details to actors and append them in discovery order
    ///
    /// # Returns
    /// The document (all six categories present) and run statistics
    pub async fn fetch_all_places(&self) -> (ExportDocument, ExportStats) {
        let start_time = Instant::now();
        let mut stats = ExportStats::new();
        let mut document = ExportDocument::new();

        log::info!(
            "Starting export around {} (radius {} m)",
            self.area.location_param(),
            self.area.radius_m
        );

        for category in Category::ALL {
            self.fetch_category(category, &mut document, &mut stats)
                .await;
        }

        stats.complete(start_time.elapsed().as_secs());

        log::info!(
            "Export fetched {} actors with {} API requests in {}s",
            stats.actors_exported,
            stats.api_requests(),
            stats.duration_seconds
        );

        (document, stats)
    }

    /// Fetch one category into the document
    /// DOCUMENTATION: Deduplication is per category; the same place may
    /// legitimately appear under two categories
    async fn fetch_category(
        &self,
        category: Category,
        document: &mut ExportDocument,
        stats: &mut ExportStats,
    ) {
        log::info!("Category: {}", category.as_str().to_uppercase());
        let mut seen: HashSet<String> = HashSet::new();

        for place_type in category.place_types() {
            log::info!("  Searching: {}...", place_type);
            let places = self.search_places(place_type, stats).await;
            self.pacer.pace().await;

            for place in places {
                if !seen.insert(place.place_id.clone()) {
                    stats.duplicates_skipped += 1;
                    continue;
                }

                let details = self.get_place_details(&place, stats).await;
                self.pacer.pace().await;

                if let Some(details) = details {
                    let actor = self.mapper.to_actor(&details, category);
                    log::info!("    ✓ {}", actor.name);
                    document.push(actor);
                    stats.actors_exported += 1;
                }
            }
        }

        log::info!(
            "  Total {}: {} actors",
            category,
            document.actors(category).len()
        );
    }

    /// Nearby Search with failures absorbed into an empty list
    async fn search_places(
        &self,
        place_type: &str,
        stats: &mut ExportStats,
    ) -> Vec<GooglePlaceSummary> {
        stats.searches += 1;

        match self.api.nearby_search(self.area, place_type).await {
            Ok(places) => {
                stats.places_retrieved += places.len() as u32;
                places
            }
            Err(e) => {
                stats.searches_failed += 1;
                if e.is_api_error() {
                    log::warn!("  API error for type {}: {}", place_type, e);
                } else {
                    log::error!("  Fetch error for type {}: {}", place_type, e);
                }
                Vec::new()
            }
        }
    }

    /// Place Details with failures absorbed into None
    async fn get_place_details(
        &self,
        place: &GooglePlaceSummary,
        stats: &mut ExportStats,
    ) -> Option<GooglePlace> {
        stats.details_requested += 1;

        match self.api.get_place_details(&place.place_id).await {
            Ok(mut details) => {
                // place_id is only echoed back when requested; keep the one we looked up
                if details.place_id.is_empty() {
                    details.place_id = place.place_id.clone();
                }
                Some(details)
            }
            Err(e) => {
                stats.details_failed += 1;
                if e.is_api_error() {
                    log::warn!("  Details error for {}: {}", place.place_id, e);
                } else {
                    log::error!("  Details fetch error for {}: {}", place.place_id, e);
                }
                None
            }
        }
    }
}
