// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error};

use crate::domain::models::delay::FeedEntry;
use crate::domain::services::delay_service::FeedSource;

/// フィードエラー型
#[derive(Error, Debug)]
pub enum FeedError {
    /// 取得または解析の失敗
    #[error("フィードの取得に失敗しました: {0}")]
    Request(#[from] reqwest::Error),
}

/// 遅延フィードのHTTPクライアント
///
/// 現在遅延中の路線の一覧をJSONエンドポイントから取得する
pub struct HttpFeedClient {
    client: reqwest::Client,
    url: String,
}

impl HttpFeedClient {
    pub fn new(url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self { client, url }
    }

    async fn try_fetch(&self) -> Result<Vec<FeedEntry>, FeedError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl FeedSource for HttpFeedClient {
    /// フィードを取得する
    ///
    /// 失敗はログに残して空のフィードとして扱う。下流からは
    /// 「遅延なし」と区別がつかない
    async fn fetch(&self) -> Vec<FeedEntry> {
        match self.try_fetch().await {
            Ok(entries) => {
                debug!(count = entries.len(), "遅延フィードを取得しました");
                entries
            }
            Err(e) => {
                error!(error = %e, "遅延フィードの取得に失敗しました");
                Vec::new()
            }
        }
    }
}
