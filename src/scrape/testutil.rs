// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! スクレイプ関連テストの共有フェイク

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::scrape::traits::{ExtractionStrategy, PageFetcher, ScrapeError};

/// URLからHTMLを引くだけのフェイクフェッチャ
///
/// 遷移と後始末の呼び出し回数を数え、未登録URLへの遷移は失敗させる
pub(crate) struct FakeFetcher {
    pages: HashMap<String, String>,
    delay: Option<Duration>,
    pub fetch_calls: AtomicUsize,
    pub close_calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            delay: None,
            fetch_calls: AtomicUsize::new(0),
            close_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }

    /// すべての遷移に遅延を入れる（タイムアウトのテスト用）
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn close_count(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Navigation(format!("接続できません: {url}")))
    }

    async fn close(&self) {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// 常に固定のテキストを返すストラテジ
pub(crate) struct StaticStrategy(pub &'static str);

impl ExtractionStrategy for StaticStrategy {
    fn extract(&self, _html: &str, _line_name: &str) -> Result<String, ScrapeError> {
        Ok(self.0.to_string())
    }
}

/// 常に要素の取得に失敗するストラテジ
pub(crate) struct FailingStrategy {
    pub selector: &'static str,
}

impl ExtractionStrategy for FailingStrategy {
    fn extract(&self, _html: &str, _line_name: &str) -> Result<String, ScrapeError> {
        Err(ScrapeError::ElementNotFound {
            selector: self.selector.to_string(),
        })
    }
}
