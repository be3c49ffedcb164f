//! City records and slug handling

use serde::{Deserialize, Serialize};

use crate::types::Coordinates;

/// A city the dashboard can show weather for.
///
/// Registry cities use a fixed lowercase id (`"delhi"`); cities found through
/// the name search use a synthesized `"<name>-<country>"` slug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct City {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl City {
    /// Build a searched city, deriving its id from name and country code
    pub fn searched(name: &str, country: &str, lat: f64, lon: f64) -> Self {
        Self {
            id: city_slug(name, country),
            name: name.to_string(),
            lat,
            lon,
            country: Some(country.to_string()),
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }

    /// Name as shown in headers: `Paris (FR)` for searched cities
    pub fn display_name(&self) -> String {
        match &self.country {
            Some(country) => format!("{} ({})", self.name, country),
            None => self.name.clone(),
        }
    }
}

/// Synthesize the id of a searched city: lowercased name with every run of
/// non-alphanumeric characters replaced by a single hyphen, then `-<country>`.
///
/// The id is used as a URL path segment, so `/`, `?` and `#` never survive.
pub fn city_slug(name: &str, country: &str) -> String {
    format!("{}-{}", slug_words(name), slug_words(country))
}

fn slug_words(text: &str) -> String {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// The parts recovered from a searched-city slug
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugParts {
    /// Name query with hyphens turned back into spaces (`"new york"`)
    pub query: String,
    /// Lowercase country code (`"us"`)
    pub country: String,
}

impl SlugParts {
    /// Title-cased name used when the city has not been resolved yet
    pub fn display_name(&self) -> String {
        let mut chars = self.query.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Split a slug on its last hyphen into a name query and a country code.
///
/// Returns `None` when the id has no hyphen or either side is empty.
pub fn parse_city_slug(id: &str) -> Option<SlugParts> {
    let (name, country) = id.rsplit_once('-')?;
    if name.is_empty() || country.is_empty() {
        return None;
    }
    Some(SlugParts {
        query: name.replace('-', " "),
        country: country.to_lowercase(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_slug_lowercases_and_hyphenates() {
        assert_eq!(city_slug("Paris", "FR"), "paris-fr");
        assert_eq!(city_slug("New  York", "US"), "new-york-us");
        assert_eq!(city_slug("Rio de Janeiro", "BR"), "rio-de-janeiro-br");
    }

    #[test]
    fn test_city_slug_drops_url_reserved_characters() {
        assert_eq!(city_slug("Biel/Bienne", "CH"), "biel-bienne-ch");
        assert_eq!(city_slug("What?#Town", "US"), "what-town-us");
        assert_eq!(city_slug("Saint-Étienne", "FR"), "saint-étienne-fr");

        let parts = parse_city_slug(&city_slug("Biel/Bienne", "CH")).unwrap();
        assert_eq!(parts.query, "biel bienne");
        assert_eq!(parts.country, "ch");
    }

    #[test]
    fn test_parse_slug_splits_on_last_hyphen() {
        let parts = parse_city_slug("paris-fr").unwrap();
        assert_eq!(parts.query, "paris");
        assert_eq!(parts.country, "fr");

        let parts = parse_city_slug("new-york-us").unwrap();
        assert_eq!(parts.query, "new york");
        assert_eq!(parts.country, "us");
    }

    #[test]
    fn test_parse_slug_rejects_malformed_ids() {
        assert!(parse_city_slug("delhi").is_none());
        assert!(parse_city_slug("-fr").is_none());
        assert!(parse_city_slug("paris-").is_none());
    }

    #[test]
    fn test_slug_display_name() {
        let parts = parse_city_slug("san-jose-cr").unwrap();
        assert_eq!(parts.display_name(), "San jose");
    }

    #[test]
    fn test_searched_city_round_trips_through_slug() {
        let city = City::searched("New York", "US", 40.71, -74.0);
        assert_eq!(city.id, "new-york-us");

        let parts = parse_city_slug(&city.id).unwrap();
        assert_eq!(parts.query, "new york");
        assert_eq!(parts.country, "us");
    }

    #[test]
    fn test_display_name_includes_country() {
        let city = City::searched("Paris", "FR", 48.85, 2.35);
        assert_eq!(city.display_name(), "Paris (FR)");
    }
}
