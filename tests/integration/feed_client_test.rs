// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use oshirase_bot::domain::services::delay_service::FeedSource;
use oshirase_bot::infrastructure::feed_client::HttpFeedClient;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_parses_feed_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/free/delay.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "name": "東北本線",
                "company": "JR東日本",
                "lastupdate_gmt": 1578638905,
                "source": "鉄道com RSS"
            },
            {
                "name": "山手線",
                "company": "JR東日本",
                "lastupdate_gmt": 1578638905,
                "source": "鉄道com RSS"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpFeedClient::new(format!("{}/free/delay.json", server.uri()));
    let entries = client.fetch().await;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].line_name, "東北本線");
    assert_eq!(entries[0].operator_name, "JR東日本");
    assert_eq!(entries[0].updated_at.timestamp(), 1578638905);
}

#[tokio::test]
async fn test_server_error_degrades_to_empty_feed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/free/delay.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = HttpFeedClient::new(format!("{}/free/delay.json", server.uri()));
    assert!(client.fetch().await.is_empty());
}

#[tokio::test]
async fn test_malformed_body_degrades_to_empty_feed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/free/delay.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = HttpFeedClient::new(format!("{}/free/delay.json", server.uri()));
    assert!(client.fetch().await.is_empty());
}

#[tokio::test]
async fn test_unreachable_endpoint_degrades_to_empty_feed() {
    // どのポートにも紐付いていないURL
    let client = HttpFeedClient::new("http://127.0.0.1:9/free/delay.json".to_string());
    assert!(client.fetch().await.is_empty());
}
