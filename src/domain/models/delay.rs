// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// 監視対象の路線
///
/// 設定で静的に定義され、実行中は変化しない。
/// 識別子は `(line_name, operator_name)` の組
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WatchEntry {
    /// 路線名
    pub line_name: String,
    /// 事業者名
    pub operator_name: String,
    /// 運行情報ページのURL
    pub page_url: String,
    /// 抽出ストラテジのレジストリキー
    pub adapter_key: String,
}

/// 遅延フィードの1エントリ
///
/// 実行のたびにフィードから取得し直す。永続化はしない
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEntry {
    /// 路線名
    #[serde(rename = "name")]
    pub line_name: String,
    /// 事業者名
    #[serde(rename = "company")]
    pub operator_name: String,
    /// フィード側の最終更新時刻
    #[serde(rename = "lastupdate_gmt", with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
    /// フィードの情報源
    pub source: String,
}

/// 現在のフィードに存在することが確認できた監視対象
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedEntry {
    pub entry: WatchEntry,
}

/// 抽出が成功しなかったことを表す値
///
/// 失敗したセレクタやストラテジの識別子を持ち、通知文中の
/// 警告行としてそのまま利用者に見せる。例外ではなく値として運ぶ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureMarker {
    /// 失敗したセレクタ、または失敗理由
    pub detail: String,
}

impl FailureMarker {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// 通知に埋め込む警告文
    pub fn fallback_text(&self) -> String {
        format!(
            ":warning: ノードの取得に失敗しました。DOMが変更されている可能性があります。\n  `{}`",
            self.detail
        )
    }
}

/// マッチした1路線に対する抽出結果
///
/// マッチ数と結果数は常に一致する。失敗も [`FailureMarker`] として
/// 結果に含め、黙って捨てることはない
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    pub entry: MatchedEntry,
    pub outcome: Result<String, FailureMarker>,
}
