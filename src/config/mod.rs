// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 設定モジュール
///
/// フィードURL・Slack Webhook・天気API・監視対象路線などの設定を扱う
pub mod settings;
#[cfg(test)]
mod settings_test;
