// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 設定モジュール
///
/// 環境変数と設定ファイルからのアプリケーション設定の読み込みを扱う
pub mod config;

/// ドメインモジュール
///
/// 監視対象・遅延フィード・降雨のモデルと、通知パイプラインの
/// ビジネスロジックを含む
pub mod domain;

/// 基盤モジュール
///
/// 外部サービスとの連携（遅延フィード、天気API、Slack Webhook）を提供する
pub mod infrastructure;

/// スクレイプモジュール
///
/// ブラウザセッションと事業者別の抽出ストラテジを実装する
pub mod scrape;

/// ユーティリティモジュール
///
/// ロギング初期化などの補助機能を提供する
pub mod utils;
