// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use oshirase_bot::config::settings::WeatherSettings;
use oshirase_bot::domain::models::weather::RainfallKind;
use oshirase_bot::domain::services::rainfall_service::WeatherSource;
use oshirase_bot::infrastructure::weather_client::YolpWeatherClient;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> WeatherSettings {
    WeatherSettings {
        api_url: format!("{}/weather/V1/place", server.uri()),
        map_url: "https://map.yahooapis.jp/map/V1/static".to_string(),
        app_id: "test-app-id".to_string(),
        lat: 38.2682,
        lon: 140.8694,
        place: "仙台".to_string(),
    }
}

#[tokio::test]
async fn test_fetch_rainfall_parses_observation_and_forecast() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather/V1/place"))
        .and(query_param("coordinates", "140.8694,38.2682"))
        .and(query_param("appid", "test-app-id"))
        .and(query_param("output", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Feature": [{
                "Property": {
                    "WeatherList": {
                        "Weather": [
                            { "Type": "observation", "Date": "202001161240", "Rainfall": 10.21 },
                            { "Type": "forecast", "Date": "202001161250", "Rainfall": 7.89 },
                            { "Type": "forecast", "Date": "202001161300", "Rainfall": 0.0 }
                        ]
                    }
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = YolpWeatherClient::new(settings(&server));
    let rainfalls = client.fetch_rainfall().await;

    assert_eq!(rainfalls.len(), 3);
    assert_eq!(rainfalls[0].kind, RainfallKind::Observation);
    assert_eq!(rainfalls[0].millimeters_per_hour, 10.21);
    assert_eq!(rainfalls[1].kind, RainfallKind::Forecast);
    assert!(!rainfalls[2].is_raining());
}

#[tokio::test]
async fn test_missing_feature_degrades_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather/V1/place"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Feature": [] })))
        .mount(&server)
        .await;

    let client = YolpWeatherClient::new(settings(&server));
    assert!(client.fetch_rainfall().await.is_empty());
}

#[tokio::test]
async fn test_server_error_degrades_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather/V1/place"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = YolpWeatherClient::new(settings(&server));
    assert!(client.fetch_rainfall().await.is_empty());
}
