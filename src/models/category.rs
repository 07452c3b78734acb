// src/models/category.rs
// DOCUMENTATION: Actor categories used by the website
// PURPOSE: Fixed category set and its Google place type keywords

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six buckets the website groups actors into
/// DOCUMENTATION: Declaration order is the export order (Ord is derived from it)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Commerce,
    Restaurant,
    Artisan,
    Therapeute,
    Service,
    Association,
}

impl Category {
    /// Every category, in export order
    pub const ALL: [Category; 6] = [
        Category::Commerce,
        Category::Restaurant,
        Category::Artisan,
        Category::Therapeute,
        Category::Service,
        Category::Association,
    ];

    /// Google place types searched for this category, in search order
    pub fn place_types(self) -> &'static [&'static str] {
        match self {
            Category::Commerce => &[
                "store",
                "supermarket",
                "convenience_store",
                "grocery_or_supermarket",
                "shopping_mall",
            ],
            Category::Restaurant => &["restaurant", "cafe", "bakery", "meal_takeaway", "food"],
            Category::Artisan => &[
                "plumber",
                "electrician",
                "locksmith",
                "roofing_contractor",
                "hardware_store",
            ],
            Category::Therapeute => &[
                "physiotherapist",
                "spa",
                "beauty_salon",
                "hair_care",
                "dentist",
                "doctor",
            ],
            Category::Service => &[
                "car_repair",
                "car_dealer",
                "gas_station",
                "bank",
                "post_office",
                "laundry",
            ],
            Category::Association => &["community_center", "local_government_office", "library"],
        }
    }

    /// Label used in JSON keys and console output
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Commerce => "commerce",
            Category::Restaurant => "restaurant",
            Category::Artisan => "artisan",
            Category::Therapeute => "therapeute",
            Category::Service => "service",
            Category::Association => "association",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_place_types() {
        for category in Category::ALL {
            assert!(!category.place_types().is_empty(), "{} has no types", category);
        }
    }

    #[test]
    fn test_serde_label_matches_display() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }

    #[test]
    fn test_export_order() {
        let mut sorted = Category::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, Category::ALL.to_vec());
        assert_eq!(Category::ALL[0], Category::Commerce);
        assert_eq!(Category::ALL[5], Category::Association);
    }
}
