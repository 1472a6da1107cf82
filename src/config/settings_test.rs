// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use crate::config::settings::Settings;

#[test]
fn test_settings_defaults() {
    let settings = Settings::new().expect("設定の読み込みに失敗");

    assert_eq!(
        settings.feed.url,
        "https://tetsudo.rti-giken.jp/free/delay.json"
    );
    assert_eq!(
        settings.weather.api_url,
        "https://map.yahooapis.jp/weather/V1/place"
    );
    assert_eq!(settings.weather.place, "仙台");
    assert_eq!(settings.scrape.page_timeout_secs, 30);
    assert_eq!(settings.scrape.page_timeout(), Duration::from_secs(30));
}

#[test]
fn test_settings_watch_list_from_default_toml() {
    let settings = Settings::new().expect("設定の読み込みに失敗");

    // config/default.toml に定義した監視対象が読み込まれる
    assert_eq!(settings.watch.len(), 6);

    let tohoku = settings
        .watch
        .iter()
        .find(|w| w.line_name == "東北本線")
        .expect("東北本線が監視対象にない");
    assert_eq!(tohoku.operator_name, "JR東日本");
    assert_eq!(tohoku.adapter_key, "jreast_tohoku");

    let subway = settings
        .watch
        .iter()
        .find(|w| w.operator_name == "仙台市交通局")
        .expect("仙台市営地下鉄が監視対象にない");
    assert_eq!(subway.adapter_key, "sendai_subway");
}
