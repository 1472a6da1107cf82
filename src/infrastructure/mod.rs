// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 遅延フィードのHTTPクライアント
pub mod feed_client;

/// Slack Incoming Webhookによる通知
pub mod slack_notifier;

/// YOLP天気APIのクライアント
pub mod weather_client;
