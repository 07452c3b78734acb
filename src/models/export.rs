// src/models/export.rs
// DOCUMENTATION: Export document written to disk
// PURPOSE: Category -> actors mapping with every category always present

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Actor, Category};

/// Whole export, serialized as a JSON object keyed by category
/// DOCUMENTATION: BTreeMap keeps keys in Category declaration order.
/// All six keys exist from construction, empty lists included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExportDocument {
    actors: BTreeMap<Category, Vec<Actor>>,
}

impl ExportDocument {
    /// Create a document with an empty list for every category
    pub fn new() -> Self {
        Self {
            actors: Category::ALL
                .iter()
                .map(|category| (*category, Vec::new()))
                .collect(),
        }
    }

    /// Append an actor to its category's list
    pub fn push(&mut self, actor: Actor) {
        self.actors.entry(actor.category).or_default().push(actor);
    }

    /// Actors of one category, in discovery order
    pub fn actors(&self, category: Category) -> &[Actor] {
        self.actors
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Per-category counts, in export order
    pub fn counts(&self) -> Vec<(Category, usize)> {
        self.actors
            .iter()
            .map(|(category, actors)| (*category, actors.len()))
            .collect()
    }

    /// Total number of actors across categories
    pub fn total(&self) -> usize {
        self.actors.values().map(Vec::len).sum()
    }
}

impl Default for ExportDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(id: &str, category: Category) -> Actor {
        Actor {
            id: id.to_string(),
            name: format!("Place {}", id),
            category,
            description: "Commerce local".to_string(),
            address: String::new(),
            phone: "Non renseigné".to_string(),
            email: String::new(),
            website: String::new(),
            horaires: "Horaires non renseignés".to_string(),
            specialites: Vec::new(),
            lat: 43.93,
            lng: 3.70,
            image: String::new(),
            rating: serde_json::Number::from(0u32),
            reviews_count: 0,
            google_maps_url: String::new(),
        }
    }

    #[test]
    fn test_empty_document_has_all_keys() {
        let doc = ExportDocument::new();
        let value = serde_json::to_value(&doc).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 6);
        for category in Category::ALL {
            assert!(object[category.as_str()].as_array().unwrap().is_empty());
        }
        assert_eq!(doc.total(), 0);
    }

    #[test]
    fn test_serialized_key_order_follows_categories() {
        let doc = ExportDocument::new();
        let json = serde_json::to_string(&doc).unwrap();

        let positions: Vec<usize> = Category::ALL
            .iter()
            .map(|c| json.find(&format!("\"{}\"", c)).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_counts_and_total() {
        let mut doc = ExportDocument::new();
        doc.push(actor("a", Category::Commerce));
        doc.push(actor("b", Category::Commerce));
        doc.push(actor("c", Category::Service));

        assert_eq!(doc.actors(Category::Commerce).len(), 2);
        assert_eq!(doc.actors(Category::Artisan).len(), 0);
        assert_eq!(doc.total(), 3);
        assert_eq!(doc.counts()[0], (Category::Commerce, 2));
        assert_eq!(doc.counts()[4], (Category::Service, 1));
    }
}
