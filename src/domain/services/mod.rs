// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 遅延通知パイプライン
pub mod delay_service;

/// 通知メッセージの整形
pub mod formatter;

/// 通知インターフェース
pub mod notifier;

/// 降雨通知パイプライン
pub mod rainfall_service;
