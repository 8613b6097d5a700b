//! Location model for trip origins and destinations

use serde::{Deserialize, Serialize};

/// A named place, optionally qualified by a country or by coordinates
///
/// The two entry points populate this differently: interactive intake
/// supplies coordinates, the built-in demo request supplies country names.
/// Both shapes are valid and no cross-field consistency is enforced.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Location name (city, region, etc.)
    pub name: String,
    /// Country name or ISO code
    pub country: Option<String>,
    /// Latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
}

impl Location {
    /// Create a new location with just a name
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            country: None,
            latitude: None,
            longitude: None,
        }
    }

    /// Create a location with a country
    #[must_use]
    pub fn with_country(name: String, country: String) -> Self {
        Self {
            name,
            country: Some(country),
            latitude: None,
            longitude: None,
        }
    }

    /// Create a location with coordinates
    #[must_use]
    pub fn with_coordinates(name: String, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            country: None,
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    /// Format the coordinates, if both are present
    #[must_use]
    pub fn format_coordinates(&self) -> Option<String> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(format!("{lat:.4}, {lon:.4}")),
            _ => None,
        }
    }

    /// Human-readable label, with the country appended when known
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_with_country_only() {
        let location = Location::with_country("New York".to_string(), "USA".to_string());
        assert_eq!(location.name, "New York");
        assert_eq!(location.country, Some("USA".to_string()));
        assert!(location.latitude.is_none());
        assert!(location.longitude.is_none());
    }

    #[test]
    fn test_location_with_coordinates_only() {
        let location = Location::with_coordinates("Paris".to_string(), 48.8566, 2.3522);
        assert_eq!(location.name, "Paris");
        assert!(location.country.is_none());
        assert_eq!(location.latitude, Some(48.8566));
        assert_eq!(location.longitude, Some(2.3522));
    }

    #[test]
    fn test_location_serde_round_trip() {
        let with_country = Location::with_country("Rome".to_string(), "Italy".to_string());
        let json = serde_json::to_string(&with_country).unwrap();
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back, with_country);

        let with_coords = Location::with_coordinates("Rome".to_string(), 41.9028, 12.4964);
        let json = serde_json::to_string(&with_coords).unwrap();
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back, with_coords);
    }

    #[test]
    fn test_format_coordinates() {
        let location = Location::with_coordinates("Paris".to_string(), 48.8566, 2.3522);
        assert_eq!(
            location.format_coordinates(),
            Some("48.8566, 2.3522".to_string())
        );

        let bare = Location::new("Paris".to_string());
        assert!(bare.format_coordinates().is_none());
    }

    #[test]
    fn test_describe() {
        let with_country = Location::with_country("Rome".to_string(), "Italy".to_string());
        assert_eq!(with_country.describe(), "Rome, Italy");

        let bare = Location::new("Rome".to_string());
        assert_eq!(bare.describe(), "Rome");
    }
}
