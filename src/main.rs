// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use oshirase_bot::config::settings::Settings;
use oshirase_bot::domain::services::delay_service::DelayService;
use oshirase_bot::domain::services::rainfall_service::RainfallService;
use oshirase_bot::infrastructure::feed_client::HttpFeedClient;
use oshirase_bot::infrastructure::slack_notifier::SlackNotifier;
use oshirase_bot::infrastructure::weather_client::YolpWeatherClient;
use oshirase_bot::scrape::registry::StrategyRegistry;
use oshirase_bot::scrape::session::ChromiumSession;
use oshirase_bot::utils::telemetry;
use tracing::{error, info};

/// メイン関数
///
/// 外部スケジューラから定期的に起動され、降雨チェックと遅延チェックを
/// 1回ずつ実行して終了する
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting oshirase-bot...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    let notifier = Arc::new(SlackNotifier::new(settings.slack.webhook_url.clone()));

    // 3. 降雨チェック
    let weather = Arc::new(YolpWeatherClient::new(settings.weather.clone()));
    let rainfall = RainfallService::new(weather, notifier.clone(), settings.weather.clone());
    let rainfall_result = rainfall.run().await;
    if let Err(e) = &rainfall_result {
        error!(error = %e, "降雨通知の処理に失敗しました");
    }

    // 4. 列車遅延チェック
    let feed = Arc::new(HttpFeedClient::new(settings.feed.url.clone()));
    let scraper = Arc::new(ChromiumSession::new(
        StrategyRegistry::with_default_strategies(),
        settings.scrape.clone(),
    ));
    let delay = DelayService::new(feed, scraper, notifier, settings.watch.clone());
    let delay_result = delay.run().await;
    if let Err(e) = &delay_result {
        error!(error = %e, "遅延通知の処理に失敗しました");
    }

    // 5. どちらかが運用エラーならスケジューラに失敗を返す
    if rainfall_result.is_err() || delay_result.is_err() {
        anyhow::bail!("一部の通知処理が失敗しました");
    }
    Ok(())
}
