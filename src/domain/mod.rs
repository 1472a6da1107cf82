// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 監視リストと遅延フィードの突き合わせ
pub mod matcher;

/// ドメインモデル
pub mod models;

/// ドメインサービス
///
/// 遅延通知・降雨通知のパイプラインと、その部品となる
/// メッセージ整形・通知インターフェースを含む
pub mod services;
