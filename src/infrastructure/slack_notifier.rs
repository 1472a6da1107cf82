// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Serialize;

use crate::domain::services::notifier::{Notifier, Presentation};

/// Slack Incoming Webhookによる通知
pub struct SlackNotifier {
    client: reqwest::Client,
    webhook_url: String,
}

#[derive(Serialize)]
struct SlackPayload<'a> {
    username: &'a str,
    icon_emoji: &'a str,
    attachments: Vec<SlackAttachment<'a>>,
}

#[derive(Serialize)]
struct SlackAttachment<'a> {
    fallback: &'a str,
    color: &'a str,
    pretext: &'a str,
    text: &'a str,
    mrkdwn_in: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<&'a str>,
}

impl SlackNotifier {
    pub fn new(webhook_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            client,
            webhook_url,
        }
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn notify(&self, text: &str, presentation: &Presentation) -> Result<()> {
        let payload = SlackPayload {
            username: &presentation.username,
            icon_emoji: &presentation.icon_emoji,
            attachments: vec![SlackAttachment {
                fallback: text,
                color: &presentation.color,
                pretext: &presentation.pretext,
                text,
                mrkdwn_in: vec!["text"],
                channel: presentation.channel.as_deref(),
                image_url: presentation.image_url.as_deref(),
            }],
        };

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(anyhow!(
                "Slackへの通知に失敗しました status {}: {}",
                status,
                body
            ))
        }
    }
}
