//! OpenWeatherMap client tests against a mock server

use std::time::Duration;

use serde_json::json;
use shared::Coordinates;
use weather_dashboard::error::AppError;
use weather_dashboard::external::WeatherClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> WeatherClient {
    WeatherClient::with_base_url("test-key".to_string(), server.uri(), Duration::from_secs(5)).unwrap()
}

fn delhi() -> Coordinates {
    Coordinates::new(28.6139, 77.209)
}

fn current_body() -> serde_json::Value {
    json!({
        "weather": [{ "main": "Haze", "description": "haze" }],
        "main": {
            "temp": 31.4,
            "feels_like": 35.2,
            "temp_min": 30.0,
            "temp_max": 33.1,
            "humidity": 62
        },
        "wind": { "speed": 3.6 },
        "clouds": { "all": 40 },
        "dt": 1_700_000_000,
        "sys": { "sunrise": 1_699_923_000, "sunset": 1_699_963_000 }
    })
}

#[tokio::test]
async fn test_current_weather_is_parsed_and_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let first = client.get_current_weather(delhi()).await.unwrap();
    let second = client.get_current_weather(delhi()).await.unwrap();

    assert_eq!(first.main, "Haze");
    assert_eq!(first.temp, 31.4);
    assert_eq!(first.humidity, 62);
    assert_eq!(first.clouds, 40);
    assert_eq!(first.sunrise, Some(1_699_923_000));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_error_status_maps_to_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    let result = client.get_current_weather(delhi()).await;
    assert!(matches!(result, Err(AppError::Upstream(ref msg)) if msg.contains("401")));

    // Failures are not cached
    assert!(client.get_current_weather(delhi()).await.is_err());
}

#[tokio::test]
async fn test_malformed_body_maps_to_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "cod": "200" })))
        .mount(&server)
        .await;

    let result = client(&server).get_forecast(delhi()).await;
    assert!(matches!(result, Err(AppError::Upstream(_))));
}

#[tokio::test]
async fn test_forecast_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "list": [
                {
                    "dt": 1_700_010_800,
                    "main": { "temp": 24.5, "feels_like": 24.9, "humidity": 80 },
                    "weather": [{ "main": "Rain" }]
                },
                {
                    "dt": 1_700_021_600,
                    "main": { "temp": 22.0, "feels_like": 21.5, "humidity": 85 },
                    "weather": [{ "main": "Clouds" }]
                }
            ]
        })))
        .mount(&server)
        .await;

    let forecast = client(&server).get_forecast(delhi()).await.unwrap();

    assert_eq!(forecast.len(), 2);
    assert_eq!(forecast[0].main, "Rain");
    assert_eq!(forecast[0].humidity, 80);
    assert_eq!(forecast[1].dt, 1_700_021_600);
}

#[tokio::test]
async fn test_geocode_builds_city_slugs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .and(query_param("q", "new york"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "New York", "lat": 40.7128, "lon": -74.006, "country": "US", "state": "New York" },
            { "name": "New York", "lat": 53.07, "lon": -0.14, "country": "GB" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let cities = client.geocode("new york", 5).await.unwrap();

    let ids: Vec<&str> = cities.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["new-york-us", "new-york-gb"]);
    assert_eq!(cities[0].display_name(), "New York (US)");

    // Same query in a different case is served from cache
    assert_eq!(client.geocode("New York", 5).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_geocode_without_matches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    assert!(client(&server).geocode("zzqx", 5).await.unwrap().is_empty());
}
