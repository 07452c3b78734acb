// src/config/search_area.rs
// DOCUMENTATION: Geographic search area
// PURPOSE: Center point and radius shared by every nearby search

use geo_types::Point;
use validator::Validate;

/// Circle around which all nearby searches are run
/// DOCUMENTATION: Defaults to a 5 km radius around Ganges
#[derive(Debug, Clone, Validate)]
pub struct SearchArea {
    /// Center latitude
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    /// Center longitude
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    /// Search radius in meters (the Places API caps it at 50000)
    #[validate(range(min = 1, max = 50000))]
    pub radius_m: u32,
}

impl SearchArea {
    pub fn new(latitude: f64, longitude: f64, radius_m: u32) -> Self {
        Self {
            latitude,
            longitude,
            radius_m,
        }
    }

    /// Center as a geo point (x = longitude, y = latitude)
    pub fn center(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Value of the `location` query parameter: "lat,lng"
    pub fn location_param(&self) -> String {
        let center = self.center();
        format!("{},{}", center.y(), center.x())
    }
}

impl Default for SearchArea {
    fn default() -> Self {
        Self::new(43.9339, 3.7086, 5000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_area_is_valid() {
        let area = SearchArea::default();
        assert!(area.validate().is_ok());
        assert_eq!(area.location_param(), "43.9339,3.7086");
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(SearchArea::new(91.0, 3.7, 5000).validate().is_err());
        assert!(SearchArea::new(43.9, -181.0, 5000).validate().is_err());
        assert!(SearchArea::new(43.9, 3.7, 0).validate().is_err());
        assert!(SearchArea::new(43.9, 3.7, 50001).validate().is_err());
    }
}
