// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::config::settings::WeatherSettings;
use crate::domain::models::weather::{Rainfall, RainfallKind};
use crate::domain::services::notifier::{Notifier, Presentation};

const USERNAME: &str = "降雨お知らせbot";
const ICON_EMOJI: &str = ":umbrella:";
const COLOR: &str = "#0000dd";

/// 降雨情報の取得インターフェース
///
/// 直近1時間分の実測・予測をまとめて返す。失敗時は空を返す
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn fetch_rainfall(&self) -> Vec<Rainfall>;
}

/// 降雨通知パイプライン
///
/// 降雨量が0を超えるデータが1つでもあれば、先頭のデータから
/// メッセージを組み立てて雨雲マップの画像つきで通知する
pub struct RainfallService {
    weather: Arc<dyn WeatherSource>,
    notifier: Arc<dyn Notifier>,
    settings: WeatherSettings,
}

impl RainfallService {
    pub fn new(
        weather: Arc<dyn WeatherSource>,
        notifier: Arc<dyn Notifier>,
        settings: WeatherSettings,
    ) -> Self {
        Self {
            weather,
            notifier,
            settings,
        }
    }

    /// パイプラインを1回実行する
    pub async fn run(&self) -> Result<()> {
        let rainy: Vec<Rainfall> = self
            .weather
            .fetch_rainfall()
            .await
            .into_iter()
            .filter(Rainfall::is_raining)
            .collect();
        if rainy.is_empty() {
            info!("降雨情報はありませんでした。");
            return Ok(());
        }
        info!(count = rainy.len(), "降雨情報がありました。");

        let message = rain_message(&rainy[0]);
        let presentation = Presentation {
            username: USERNAME.to_string(),
            icon_emoji: ICON_EMOJI.to_string(),
            color: COLOR.to_string(),
            pretext: format!("<!channel> {}で{}", self.settings.place, message),
            channel: None,
            image_url: Some(self.map_image_url()),
        };
        self.notifier.notify(&message, &presentation).await
    }

    /// 対象地点の雨雲オーバーレイつきスタティックマップのURL
    fn map_image_url(&self) -> String {
        format!(
            "{}?appid={}&lat={}&lon={}&z=15&width=600&height=600&overlay=type:rainfall|datelabel:off",
            self.settings.map_url, self.settings.app_id, self.settings.lat, self.settings.lon
        )
    }
}

/// 降雨データ1件から通知文を組み立てる
pub(crate) fn rain_message(rainfall: &Rainfall) -> String {
    let strength = rain_strength(rainfall.millimeters_per_hour);
    match rainfall.kind {
        RainfallKind::Observation => {
            format!(
                "現在 `{} mm/h` の{}が降っています。",
                rainfall.millimeters_per_hour, strength
            )
        }
        RainfallKind::Forecast => {
            format!(
                "今後１時間以内に `{} mm/h` の{}が予想されています。",
                rainfall.millimeters_per_hour, strength
            )
        }
    }
}

/// 気象庁の雨の強さ区分に倣った表現
fn rain_strength(millimeters_per_hour: f64) -> &'static str {
    if millimeters_per_hour >= 80.0 {
        "猛烈な雨"
    } else if millimeters_per_hour >= 50.0 {
        "非常に激しい雨"
    } else if millimeters_per_hour >= 30.0 {
        "激しい雨"
    } else if millimeters_per_hour >= 20.0 {
        "強い雨"
    } else if millimeters_per_hour >= 10.0 {
        "やや強い雨"
    } else {
        "雨"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rain_strength_buckets() {
        assert_eq!(rain_strength(80.0), "猛烈な雨");
        assert_eq!(rain_strength(50.0), "非常に激しい雨");
        assert_eq!(rain_strength(30.0), "激しい雨");
        assert_eq!(rain_strength(20.0), "強い雨");
        assert_eq!(rain_strength(10.0), "やや強い雨");
        assert_eq!(rain_strength(9.99), "雨");
        assert_eq!(rain_strength(0.5), "雨");
    }

    #[test]
    fn test_rain_message_for_observation() {
        let rainfall = Rainfall {
            kind: RainfallKind::Observation,
            date: "202001161240".to_string(),
            millimeters_per_hour: 10.21,
        };
        assert_eq!(
            rain_message(&rainfall),
            "現在 `10.21 mm/h` のやや強い雨が降っています。"
        );
    }

    #[test]
    fn test_rain_message_for_forecast() {
        let rainfall = Rainfall {
            kind: RainfallKind::Forecast,
            date: "202001161250".to_string(),
            millimeters_per_hour: 7.89,
        };
        assert_eq!(
            rain_message(&rainfall),
            "今後１時間以内に `7.89 mm/h` の雨が予想されています。"
        );
    }
}
