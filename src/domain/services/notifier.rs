// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::Result;
use async_trait::async_trait;

/// 通知の見た目
///
/// 本文とは別に、送信者名・アイコン・色などの表示情報を運ぶ
#[derive(Debug, Clone)]
pub struct Presentation {
    /// botの表示名
    pub username: String,
    /// アイコン絵文字
    pub icon_emoji: String,
    /// アタッチメントの色
    pub color: String,
    /// 本文の前に表示される文
    pub pretext: String,
    /// 投稿先チャンネル（Webhookの既定を使う場合はNone）
    pub channel: Option<String>,
    /// 添付画像のURL
    pub image_url: Option<String>,
}

/// チャットへの通知インターフェース
///
/// 配送の失敗はログに残して呼び出し元へ返す。リトライはしない
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str, presentation: &Presentation) -> Result<()>;
}
