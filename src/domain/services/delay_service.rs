// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::matcher::match_watch_list;
use crate::domain::models::delay::{ExtractionResult, FailureMarker, FeedEntry, WatchEntry};
use crate::domain::services::formatter::format_results;
use crate::domain::services::notifier::{Notifier, Presentation};
use crate::scrape::traits::DelayScraper;

const USERNAME: &str = "運行遅延お知らせbot";
const ICON_EMOJI: &str = ":train:";
const COLOR: &str = "#36a64f";
const PRETEXT: &str = "<!channel> 電車の遅延があります。";
const CHANNEL: &str = "#列車運行情報";

/// 遅延フィードの取得インターフェース
///
/// 取得や解析に失敗しても空のフィードを返す。フィードの不調で
/// パイプライン全体を止めることはない
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self) -> Vec<FeedEntry>;
}

/// 遅延通知パイプライン
///
/// フィード取得 → 監視リストとの突き合わせ → スクレイプ →
/// メッセージ整形 → 通知、の順に実行する
pub struct DelayService {
    feed: Arc<dyn FeedSource>,
    scraper: Arc<dyn DelayScraper>,
    notifier: Arc<dyn Notifier>,
    watch_list: Vec<WatchEntry>,
}

impl DelayService {
    pub fn new(
        feed: Arc<dyn FeedSource>,
        scraper: Arc<dyn DelayScraper>,
        notifier: Arc<dyn Notifier>,
        watch_list: Vec<WatchEntry>,
    ) -> Self {
        Self {
            feed,
            scraper,
            notifier,
            watch_list,
        }
    }

    /// パイプラインを1回実行する
    ///
    /// マッチする路線がなければブラウザを起動せずに終了する。
    /// ブラウザが起動できなかった場合もマッチした路線の情報だけで
    /// 通知したうえで、運用エラーとして呼び出し元へ返す
    pub async fn run(&self) -> Result<()> {
        let feed = self.feed.fetch().await;
        let matched = match_watch_list(&feed, &self.watch_list);
        if matched.is_empty() {
            info!("遅延情報はありませんでした。");
            return Ok(());
        }
        info!(lines = matched.len(), "遅延情報が見つかりました。");

        let (results, session_error) = match self.scraper.run(&matched).await {
            Ok(results) => (results, None),
            Err(e) => {
                error!(error = %e, "スクレイプセッションを開始できませんでした");
                // 遅延内容は取れなくても、どの路線が遅れているかは通知する
                let results = matched
                    .iter()
                    .map(|m| ExtractionResult {
                        entry: m.clone(),
                        outcome: Err(FailureMarker::new(e.to_string())),
                    })
                    .collect();
                (results, Some(e))
            }
        };

        let message = format_results(&results);
        info!(%message, "遅延通知を送信します");
        self.notifier.notify(&message, &self.presentation()).await?;

        match session_error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    fn presentation(&self) -> Presentation {
        Presentation {
            username: USERNAME.to_string(),
            icon_emoji: ICON_EMOJI.to_string(),
            color: COLOR.to_string(),
            pretext: PRETEXT.to_string(),
            channel: Some(CHANNEL.to_string()),
            image_url: None,
        }
    }
}
