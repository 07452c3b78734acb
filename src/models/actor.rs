// src/models/actor.rs
// DOCUMENTATION: Local actor record consumed by the static website
// PURPOSE: Output shape of one place, tagged with its category

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::Category;

/// Local actor (business, artisan, association...) as the website reads it
/// DOCUMENTATION: Field names are part of the site's data contract,
/// French keys included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Google Place ID
    pub id: String,

    pub name: String,

    pub category: Category,

    /// Up to three place types joined with ", "
    pub description: String,

    pub address: String,

    pub phone: String,

    /// Never provided by the Places API, always empty
    pub email: String,

    pub website: String,

    /// Weekday opening hours joined with ", "
    pub horaires: String,

    /// Up to five place types
    pub specialites: Vec<String>,

    pub lat: f64,

    pub lng: f64,

    /// Photo URL (Places photo endpoint or stock fallback)
    pub image: String,

    /// API rating as received; integer 0 when the place has none
    pub rating: Number,

    pub reviews_count: u32,

    pub google_maps_url: String,
}
