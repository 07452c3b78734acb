// src/services/actor_mapper.rs
// DOCUMENTATION: Google place -> local actor conversion
// PURPOSE: Project Place Details records onto the website's actor shape

use crate::models::{Actor, Category};
use crate::services::GooglePlace;
use serde_json::Number;
use url::form_urlencoded;

/// Stock photo used when a place has no photo
pub const FALLBACK_IMAGE_URL: &str = "https://images.unsplash.com/photo-1441986300917-64674bd600d8?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

pub const DEFAULT_HORAIRES: &str = "Horaires non renseignés";
pub const DEFAULT_DESCRIPTION: &str = "Commerce local";
pub const DEFAULT_PHONE: &str = "Non renseigné";

const DESCRIPTION_TYPES: usize = 3;
const SPECIALITY_TYPES: usize = 5;

/// Converts detailed places into actors
/// DOCUMENTATION: Pure and infallible; every missing field degrades to a fixed
/// default. Holds the credential because photo URLs embed it.
pub struct ActorMapper {
    /// Base URL of the Places web service (photo endpoint lives under it)
    base_url: String,
    api_key: String,
    photo_max_width: u32,
}

impl ActorMapper {
    pub fn new(base_url: &str, api_key: &str, photo_max_width: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            photo_max_width,
        }
    }

    /// Convert a Place Details record into an actor of `category`
    pub fn to_actor(&self, place: &GooglePlace, category: Category) -> Actor {
        let image = place
            .photos
            .as_ref()
            .and_then(|photos| photos.first())
            .map(|photo| self.get_photo_url(&photo.photo_reference))
            .unwrap_or_else(|| FALLBACK_IMAGE_URL.to_string());

        let horaires = place
            .opening_hours
            .as_ref()
            .and_then(|hours| hours.weekday_text.as_ref())
            .filter(|lines| !lines.is_empty())
            .map(|lines| lines.join(", "))
            .unwrap_or_else(|| DEFAULT_HORAIRES.to_string());

        let description = if place.types.is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            place
                .types
                .iter()
                .take(DESCRIPTION_TYPES)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };

        // Vicinity is shorter and reads better on cards
        let address = place
            .vicinity
            .clone()
            .filter(|v| !v.is_empty())
            .or_else(|| place.formatted_address.clone())
            .unwrap_or_default();

        let google_maps_url = place
            .url
            .clone()
            .unwrap_or_else(|| maps_search_url(&place.name, &place.place_id));

        Actor {
            id: place.place_id.clone(),
            name: place.name.clone(),
            category,
            description,
            address,
            phone: place
                .formatted_phone_number
                .clone()
                .unwrap_or_else(|| DEFAULT_PHONE.to_string()),
            email: String::new(),
            website: place.website.clone().unwrap_or_default(),
            horaires,
            specialites: place.types.iter().take(SPECIALITY_TYPES).cloned().collect(),
            lat: place.geometry.location.lat,
            lng: place.geometry.location.lng,
            image,
            rating: place
                .rating
                .and_then(Number::from_f64)
                .unwrap_or_else(|| Number::from(0u32)),
            reviews_count: place.user_ratings_total.unwrap_or(0),
            google_maps_url,
        }
    }

    /// Get photo URL from photo reference
    /// DOCUMENTATION: Converts Google photo_reference to a URL usable in img tags
    pub fn get_photo_url(&self, photo_reference: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("maxwidth", &self.photo_max_width.to_string())
            .append_pair("photo_reference", photo_reference)
            .append_pair("key", &self.api_key)
            .finish();
        format!("{}/photo?{}", self.base_url, query)
    }
}

/// Google Maps search link for a place without an API-provided url
fn maps_search_url(name: &str, place_id: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("api", "1")
        .append_pair("query", name)
        .append_pair("query_place_id", place_id)
        .finish();
    format!("https://www.google.com/maps/search/?{}", query)
}
