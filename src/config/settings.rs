// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::models::delay::WatchEntry;

/// アプリケーション設定
///
/// 遅延フィード・Slack・天気API・スクレイプと監視対象路線の全設定項目を含む
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 遅延フィード設定
    pub feed: FeedSettings,
    /// Slack通知設定
    pub slack: SlackSettings,
    /// 天気API設定
    pub weather: WeatherSettings,
    /// スクレイプ設定
    pub scrape: ScrapeSettings,
    /// 監視対象路線の一覧（設定ファイルの `[[watch]]`）
    #[serde(default)]
    pub watch: Vec<WatchEntry>,
}

/// 遅延フィード設定
#[derive(Debug, Clone, Deserialize)]
pub struct FeedSettings {
    /// 遅延フィードのJSONエンドポイント
    pub url: String,
}

/// Slack通知設定
#[derive(Debug, Clone, Deserialize)]
pub struct SlackSettings {
    /// Incoming WebhookのURL
    pub webhook_url: String,
}

/// 天気API（YOLP）設定
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherSettings {
    /// 気象情報APIのエンドポイント
    pub api_url: String,
    /// スタティックマップAPIのエンドポイント
    pub map_url: String,
    /// アプリケーションID
    pub app_id: String,
    /// 対象地点の緯度
    pub lat: f64,
    /// 対象地点の経度
    pub lon: f64,
    /// 通知文に使う地名
    pub place: String,
}

/// スクレイプ設定
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeSettings {
    /// 1ページあたりの読み込みタイムアウト（秒）
    pub page_timeout_secs: u64,
}

impl ScrapeSettings {
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }
}

impl Settings {
    /// 設定を読み込む
    ///
    /// デフォルト値の上に `config/default`・`config/{APP_ENVIRONMENT}` の
    /// 設定ファイル、最後に `OSHIRASE__` プレフィックスの環境変数を重ねる
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 読み込まれた設定
    /// * `Err(ConfigError)` - 設定の読み込みに失敗
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default feed settings
            .set_default("feed.url", "https://tetsudo.rti-giken.jp/free/delay.json")?
            // Default Slack settings
            .set_default("slack.webhook_url", "")?
            // Default weather settings
            .set_default("weather.api_url", "https://map.yahooapis.jp/weather/V1/place")?
            .set_default("weather.map_url", "https://map.yahooapis.jp/map/V1/static")?
            .set_default("weather.app_id", "")?
            .set_default("weather.lat", 38.2682)?
            .set_default("weather.lon", 140.8694)?
            .set_default("weather.place", "仙台")?
            // Default scrape settings
            .set_default("scrape.page_timeout_secs", 30)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("OSHIRASE").separator("__"));

        builder.build()?.try_deserialize()
    }
}
