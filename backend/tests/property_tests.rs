//! Property tests for the shared display helpers

use proptest::prelude::*;
use shared::{
    city_slug, condition_counts, parse_city_slug, round_display, weather_icon, TemperatureBand,
    TemperatureUnit,
};

// ============================================================================
// Strategies
// ============================================================================

fn city_name() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z]{1,10}", 1..4).prop_map(|words| words.join(" "))
}

fn country_code() -> impl Strategy<Value = String> {
    "[A-Z]{2}"
}

fn condition_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Clear".to_string()),
        Just("Clouds".to_string()),
        Just("Rain".to_string()),
        Just("Mist".to_string()),
        Just(String::new()),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property 1: A slug parses back to the lowercased name and country
    #[test]
    fn prop_slug_round_trip(name in city_name(), country in country_code()) {
        let slug = city_slug(&name, &country);
        let parts = parse_city_slug(&slug).unwrap();

        prop_assert_eq!(parts.query, name.to_lowercase());
        prop_assert_eq!(parts.country, country.to_lowercase());
        prop_assert!(!slug.contains(' '));
    }

    /// Property 2: Display rounding sends halves up
    #[test]
    fn prop_round_display_matches_floor_plus_half(value in -100.0f64..100.0) {
        let rounded = round_display(value);
        prop_assert_eq!(rounded, (value + 0.5).floor() as i64);
        prop_assert!((rounded as f64 - value).abs() <= 0.5);
    }

    /// Property 3: Icon lookup ignores case
    #[test]
    fn prop_icon_is_case_insensitive(label in "(clear|clouds|rain|drizzle|thunderstorm|snow|mist|fog)") {
        prop_assert_eq!(weather_icon(&label), weather_icon(&label.to_uppercase()));
    }

    /// Property 4: Condition counts cover every non-empty label exactly once
    #[test]
    fn prop_condition_counts_sum(labels in prop::collection::vec(condition_label(), 0..40)) {
        let counts = condition_counts(labels.iter().map(String::as_str));
        let total: usize = counts.iter().map(|c| c.count).sum();

        prop_assert_eq!(total, labels.iter().filter(|l| !l.is_empty()).count());
        prop_assert!(counts.iter().all(|c| !c.condition.is_empty()));
    }

    /// Property 5: Unit conversions are offsets of Celsius
    #[test]
    fn prop_unit_conversions(celsius in -60.0f64..60.0) {
        let kelvin = TemperatureUnit::Kelvin.from_celsius(celsius);
        let fahrenheit = TemperatureUnit::Fahrenheit.from_celsius(celsius);

        prop_assert!((kelvin - celsius - 273.15).abs() < 1e-9);
        prop_assert!(((fahrenheit - 32.0) * 5.0 / 9.0 - celsius).abs() < 1e-9);
        prop_assert_eq!(TemperatureUnit::Celsius.from_celsius(celsius), celsius);
    }

    /// Property 6: Bands split at 10 °C and 35 °C
    #[test]
    fn prop_temperature_bands(celsius in -60.0f64..60.0) {
        let expected = if celsius > 35.0 {
            TemperatureBand::Hot
        } else if celsius < 10.0 {
            TemperatureBand::Cold
        } else {
            TemperatureBand::Normal
        };
        prop_assert_eq!(TemperatureBand::classify(celsius), expected);
    }
}
