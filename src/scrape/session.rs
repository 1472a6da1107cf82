// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::sync::Mutex;
use tracing::warn;

use crate::config::settings::ScrapeSettings;
use crate::domain::models::delay::{ExtractionResult, FailureMarker, MatchedEntry};
use crate::scrape::registry::StrategyRegistry;
use crate::scrape::traits::{DelayScraper, PageFetcher, ScrapeError};

/// マッチした各路線を順に処理する
///
/// 1件の失敗は [`FailureMarker`] に変換して次の路線へ進む。
/// 結果の件数は常に入力の件数と一致し、どの経路でも最後に
/// `fetcher.close()` を一度だけ呼ぶ
pub(crate) async fn run_with_fetcher(
    fetcher: &dyn PageFetcher,
    registry: &StrategyRegistry,
    matched: &[MatchedEntry],
    page_timeout: Duration,
) -> Vec<ExtractionResult> {
    let mut results = Vec::with_capacity(matched.len());
    for m in matched {
        let outcome = extract_entry(fetcher, registry, m, page_timeout).await;
        if let Err(e) = &outcome {
            warn!(
                line = %m.entry.line_name,
                operator = %m.entry.operator_name,
                error = %e,
                "遅延内容の取得に失敗しました"
            );
        }
        results.push(ExtractionResult {
            entry: m.clone(),
            outcome: outcome.map_err(|e| failure_marker(&e)),
        });
    }
    fetcher.close().await;
    results
}

async fn extract_entry(
    fetcher: &dyn PageFetcher,
    registry: &StrategyRegistry,
    matched: &MatchedEntry,
    page_timeout: Duration,
) -> Result<String, ScrapeError> {
    let strategy =
        registry
            .resolve(&matched.entry.adapter_key)
            .ok_or_else(|| ScrapeError::UnknownAdapter {
                key: matched.entry.adapter_key.clone(),
            })?;

    let html = tokio::time::timeout(page_timeout, fetcher.fetch_page(&matched.entry.page_url))
        .await
        .map_err(|_| ScrapeError::Timeout)??;

    strategy.extract(&html, &matched.entry.line_name)
}

fn failure_marker(error: &ScrapeError) -> FailureMarker {
    match error {
        // 警告文にはバッククォートでセレクタだけを見せる
        ScrapeError::ElementNotFound { selector } => FailureMarker::new(selector.clone()),
        other => FailureMarker::new(other.to_string()),
    }
}

/// chromiumoxideベースのページ取得
///
/// 1回のセッションにつきブラウザを1プロセス起動し、1ページを
/// 使い回して順に遷移する。ブラウザとページはこの型の外に出さない
pub struct ChromiumFetcher {
    browser: Mutex<Browser>,
    page: Page,
    handler_task: tokio::task::JoinHandle<()>,
}

impl ChromiumFetcher {
    /// ブラウザを起動する
    ///
    /// # 戻り値
    ///
    /// * `Ok(ChromiumFetcher)` - 起動済みのセッション
    /// * `Err(ScrapeError::SessionFatal)` - ブラウザまたはページの作成に失敗
    pub async fn launch(settings: &ScrapeSettings) -> Result<Self, ScrapeError> {
        let config = BrowserConfig::builder()
            .no_sandbox()
            .request_timeout(settings.page_timeout())
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .build()
            .map_err(ScrapeError::SessionFatal)?;

        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| ScrapeError::SessionFatal(e.to_string()))?;

        // Drain browser events for the lifetime of the session
        let handler_task = tokio::spawn(async move {
            while let Some(h) = handler.next().await {
                if h.is_err() {
                    break;
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                // ページが作れなければブラウザを道連れにして終了する
                if let Err(close_err) = browser.close().await {
                    warn!(error = %close_err, "ブラウザの終了に失敗しました");
                }
                handler_task.abort();
                return Err(ScrapeError::SessionFatal(e.to_string()));
            }
        };

        Ok(Self {
            browser: Mutex::new(browser),
            page,
            handler_task,
        })
    }
}

#[async_trait]
impl PageFetcher for ChromiumFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        self.page
            .goto(url)
            .await
            .map_err(|e| ScrapeError::Navigation(e.to_string()))?;
        self.page
            .content()
            .await
            .map_err(|e| ScrapeError::Other(e.to_string()))
    }

    async fn close(&self) {
        let mut browser = self.browser.lock().await;
        if let Err(e) = browser.close().await {
            warn!(error = %e, "ブラウザの終了に失敗しました");
        }
        self.handler_task.abort();
    }
}

/// スクレイプセッション
///
/// 呼び出しごとにブラウザを起動し、終了時に必ず閉じる
pub struct ChromiumSession {
    registry: StrategyRegistry,
    settings: ScrapeSettings,
}

impl ChromiumSession {
    pub fn new(registry: StrategyRegistry, settings: ScrapeSettings) -> Self {
        Self { registry, settings }
    }
}

#[async_trait]
impl DelayScraper for ChromiumSession {
    async fn run(&self, matched: &[MatchedEntry]) -> Result<Vec<ExtractionResult>, ScrapeError> {
        let fetcher = ChromiumFetcher::launch(&self.settings).await?;
        Ok(run_with_fetcher(&fetcher, &self.registry, matched, self.settings.page_timeout()).await)
    }
}
