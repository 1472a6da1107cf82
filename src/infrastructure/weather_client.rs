// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error};
use url::Url;

use crate::config::settings::WeatherSettings;
use crate::domain::models::weather::{Rainfall, RainfallKind};
use crate::domain::services::rainfall_service::WeatherSource;

/// 天気APIエラー型
#[derive(Error, Debug)]
pub enum WeatherError {
    /// 呼び出しまたは解析の失敗
    #[error("天気APIの呼び出しに失敗しました: {0}")]
    Request(#[from] reqwest::Error),
    /// エンドポイントURLの組み立て失敗
    #[error("天気APIのURLが不正です: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// 応答に対象地点のデータがない
    #[error("天気APIの応答に降雨データがありません")]
    MissingData,
}

// YOLP気象情報APIの応答
// https://developer.yahoo.co.jp/webapi/map/openlocalplatform/v1/weather.html
#[derive(Debug, Deserialize)]
struct YolpResponse {
    #[serde(rename = "Feature", default)]
    features: Vec<YolpFeature>,
}

#[derive(Debug, Deserialize)]
struct YolpFeature {
    #[serde(rename = "Property")]
    property: YolpProperty,
}

#[derive(Debug, Deserialize)]
struct YolpProperty {
    #[serde(rename = "WeatherList")]
    weather_list: YolpWeatherList,
}

#[derive(Debug, Deserialize)]
struct YolpWeatherList {
    #[serde(rename = "Weather", default)]
    weather: Vec<YolpWeather>,
}

#[derive(Debug, Deserialize)]
struct YolpWeather {
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Rainfall")]
    rainfall: f64,
}

impl From<YolpWeather> for Rainfall {
    fn from(weather: YolpWeather) -> Self {
        let kind = if weather.kind == "observation" {
            RainfallKind::Observation
        } else {
            RainfallKind::Forecast
        };
        Rainfall {
            kind,
            date: weather.date,
            millimeters_per_hour: weather.rainfall,
        }
    }
}

/// YOLP天気APIのクライアント
///
/// 設定された座標の直近1時間の降雨強度（実測＋予測）を取得する
pub struct YolpWeatherClient {
    client: reqwest::Client,
    settings: WeatherSettings,
}

impl YolpWeatherClient {
    pub fn new(settings: WeatherSettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self { client, settings }
    }

    async fn try_fetch(&self) -> Result<Vec<Rainfall>, WeatherError> {
        // 座標は「経度,緯度」の順
        let url = Url::parse_with_params(
            &self.settings.api_url,
            &[
                (
                    "coordinates",
                    format!("{},{}", self.settings.lon, self.settings.lat),
                ),
                ("appid", self.settings.app_id.clone()),
                ("output", "json".to_string()),
            ],
        )?;

        let response: YolpResponse = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let feature = response
            .features
            .into_iter()
            .next()
            .ok_or(WeatherError::MissingData)?;

        Ok(feature
            .property
            .weather_list
            .weather
            .into_iter()
            .map(Rainfall::from)
            .collect())
    }
}

#[async_trait]
impl WeatherSource for YolpWeatherClient {
    /// 降雨情報を取得する
    ///
    /// 失敗はログに残して空として扱う
    async fn fetch_rainfall(&self) -> Vec<Rainfall> {
        match self.try_fetch().await {
            Ok(rainfalls) => {
                debug!(count = rainfalls.len(), "降雨情報を取得しました");
                rainfalls
            }
            Err(e) => {
                error!(error = %e, "降雨情報の取得に失敗しました");
                Vec::new()
            }
        }
    }
}
