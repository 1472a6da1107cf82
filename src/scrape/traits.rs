// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::delay::{ExtractionResult, MatchedEntry};

/// スクレイプエラー型
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// セレクタに一致する要素がない
    #[error("要素が見つかりません: {selector}")]
    ElementNotFound { selector: String },
    /// レジストリに登録されていないアダプタキー
    #[error("未登録のアダプタキーです: {key}")]
    UnknownAdapter { key: String },
    /// ページ遷移の失敗
    #[error("ページ遷移に失敗しました: {0}")]
    Navigation(String),
    /// ページ読み込みのタイムアウト
    #[error("ページの読み込みがタイムアウトしました")]
    Timeout,
    /// ブラウザセッションを開始できない。実行全体に対して致命的
    #[error("ブラウザセッションの開始に失敗しました: {0}")]
    SessionFatal(String),
    /// その他のエラー
    #[error("その他のエラー: {0}")]
    Other(String),
}

/// 事業者ごとの抽出ストラテジ
///
/// レンダリング済みページのHTMLを受け取り、対象路線の遅延内容の
/// テキストを返す。ページやブラウザへの参照は保持せず、HTMLは
/// 呼び出しごとに明示的に渡される
pub trait ExtractionStrategy: Send + Sync {
    /// 遅延内容のテキストを抽出する
    ///
    /// # 引数
    ///
    /// * `html` - レンダリング済みページのHTML
    /// * `line_name` - 対象の路線名
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - 抽出された遅延内容（空文字にはならない）
    /// * `Err(ScrapeError)` - 要素が見つからない等の抽出失敗
    fn extract(&self, html: &str, line_name: &str) -> Result<String, ScrapeError>;
}

/// ページの取得を担うブラウザ側の窓口
///
/// セッションが所有するブラウザを外に出さないための境界。
/// `close` はすべての経路で一度だけ呼ばれる
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// URLへ遷移し、レンダリング後のHTMLを返す
    async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError>;

    /// セッションの後始末
    async fn close(&self);
}

/// スクレイプセッションの実行インターフェース
#[async_trait]
pub trait DelayScraper: Send + Sync {
    /// マッチした各路線の遅延内容を取得する
    ///
    /// 返される結果の件数は常に `matched` の件数と一致する。
    /// 個々の失敗は [`crate::domain::models::delay::FailureMarker`] として
    /// 結果に含まれ、`Err` になるのはブラウザを起動できなかった場合のみ
    async fn run(&self, matched: &[MatchedEntry]) -> Result<Vec<ExtractionResult>, ScrapeError>;
}
