// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use oshirase_bot::domain::services::notifier::{Notifier, Presentation};
use oshirase_bot::infrastructure::slack_notifier::SlackNotifier;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn presentation() -> Presentation {
    Presentation {
        username: "運行遅延お知らせbot".to_string(),
        icon_emoji: ":train:".to_string(),
        color: "#36a64f".to_string(),
        pretext: "<!channel> 電車の遅延があります。".to_string(),
        channel: Some("#列車運行情報".to_string()),
        image_url: None,
    }
}

#[tokio::test]
async fn test_notify_posts_webhook_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/hook"))
        .and(body_partial_json(json!({
            "username": "運行遅延お知らせbot",
            "icon_emoji": ":train:",
            "attachments": [{
                "color": "#36a64f",
                "pretext": "<!channel> 電車の遅延があります。",
                "text": "*・JR東日本 <東北本線>*\n 列車遅延",
                "mrkdwn_in": ["text"],
                "channel": "#列車運行情報"
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = SlackNotifier::new(format!("{}/services/hook", server.uri()));
    let result = notifier
        .notify("*・JR東日本 <東北本線>*\n 列車遅延", &presentation())
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_notify_omits_optional_fields_when_absent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/hook"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = SlackNotifier::new(format!("{}/services/hook", server.uri()));
    let mut presentation = presentation();
    presentation.channel = None;
    presentation.image_url = None;

    assert!(notifier.notify("テスト", &presentation).await.is_ok());
}

#[tokio::test]
async fn test_notify_surfaces_delivery_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/hook"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let notifier = SlackNotifier::new(format!("{}/services/hook", server.uri()));
    let result = notifier.notify("テスト", &presentation()).await;

    let error = result.unwrap_err();
    assert!(error.to_string().contains("500"));
}
