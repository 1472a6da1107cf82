// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;
use std::sync::Arc;

use crate::scrape::strategies::{SingleNodeStrategy, TableRowStrategy};
use crate::scrape::traits::ExtractionStrategy;

/// JR東日本（東北エリア）の運行情報テーブルの行コンテナ
const JREAST_TOHOKU_ROWS: &str =
    "#wrapper > div.main_con02 > div.table_access > table > tbody > tr";

/// 仙台市地下鉄（南北・東西）の運行情報コンテナ
const SENDAI_SUBWAY_DETAIL: &str = "#unkou_detail";

/// ページアダプタのレジストリ
///
/// アダプタキーから事業者別の抽出ストラテジを引く。
/// 事業者の追加は既存のストラテジを変更せず、新しいキーの登録で行う
pub struct StrategyRegistry {
    strategies: HashMap<String, Arc<dyn ExtractionStrategy>>,
}

impl StrategyRegistry {
    /// 空のレジストリを作る
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// 既定の事業者を登録済みのレジストリを作る
    pub fn with_default_strategies() -> Self {
        let mut registry = Self::new();
        registry.register(
            "jreast_tohoku",
            Arc::new(TableRowStrategy::new(
                JREAST_TOHOKU_ROWS,
                ".line_name",
                ".status_text",
            )),
        );
        registry.register(
            "sendai_subway",
            Arc::new(SingleNodeStrategy::new(SENDAI_SUBWAY_DETAIL)),
        );
        registry
    }

    /// ストラテジを登録する
    pub fn register(&mut self, key: impl Into<String>, strategy: Arc<dyn ExtractionStrategy>) {
        self.strategies.insert(key.into(), strategy);
    }

    /// アダプタキーからストラテジを解決する
    pub fn resolve(&self, key: &str) -> Option<Arc<dyn ExtractionStrategy>> {
        self.strategies.get(key).cloned()
    }
}
