//! The city registry and fixed label sets

use crate::models::City;

/// A registry entry. Kept `'static` so the table needs no initialisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegistryCity {
    pub id: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl RegistryCity {
    pub fn to_city(&self) -> City {
        City {
            id: self.id.to_string(),
            name: self.name.to_string(),
            lat: self.lat,
            lon: self.lon,
            country: None,
        }
    }
}

/// Cities shown on the dashboard
pub const REGISTRY: [RegistryCity; 6] = [
    RegistryCity { id: "delhi", name: "Delhi", lat: 28.6139, lon: 77.209 },
    RegistryCity { id: "mumbai", name: "Mumbai", lat: 19.076, lon: 72.8777 },
    RegistryCity { id: "bangalore", name: "Bangalore", lat: 12.9716, lon: 77.5946 },
    RegistryCity { id: "chennai", name: "Chennai", lat: 13.0827, lon: 80.2707 },
    RegistryCity { id: "kolkata", name: "Kolkata", lat: 22.5726, lon: 88.3639 },
    RegistryCity { id: "hyderabad", name: "Hyderabad", lat: 17.385, lon: 78.4867 },
];

/// Labels the fallback current-conditions generator draws from
pub const FALLBACK_CONDITIONS: [&str; 4] = ["Clear", "Clouds", "Rain", "Mist"];

/// Labels a perturbed forecast sample draws from
pub const FORECAST_CONDITIONS: [&str; 3] = ["Clear", "Clouds", "Rain"];

/// Query strings shorter than this never reach the geocoder
pub const MIN_SEARCH_QUERY_LEN: usize = 2;

/// Matches returned by the geocoder per query
pub const SEARCH_RESULT_LIMIT: u8 = 5;

pub fn find_registry_city(id: &str) -> Option<City> {
    REGISTRY.iter().find(|c| c.id == id).map(RegistryCity::to_city)
}

pub fn registry_cities() -> Vec<City> {
    REGISTRY.iter().map(RegistryCity::to_city).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_ids_unique_and_lowercase() {
        let ids: HashSet<_> = REGISTRY.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), REGISTRY.len());
        for city in REGISTRY {
            assert_eq!(city.id, city.id.to_lowercase());
            assert!(!city.id.contains('-'));
        }
    }

    #[test]
    fn test_find_registry_city() {
        let delhi = find_registry_city("delhi").unwrap();
        assert_eq!(delhi.name, "Delhi");
        assert_eq!(delhi.lat, 28.6139);
        assert!(delhi.country.is_none());

        assert!(find_registry_city("Delhi").is_none());
        assert!(find_registry_city("paris-fr").is_none());
    }
}
