// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::delay::{FeedEntry, MatchedEntry, WatchEntry};

/// 遅延フィードと監視リストを突き合わせる
///
/// `(路線名, 事業者名)` の完全一致で比較する。表記ゆれの正規化は行わない。
/// 結果の順序はフィードではなく監視リストの順序に従うため、
/// 通知メッセージの並びは設定で制御できる
///
/// # 引数
///
/// * `feed` - 現在遅延中の路線のフィード
/// * `watch_list` - 監視対象の路線一覧
///
/// # 戻り値
///
/// フィードに存在した監視対象のみ。フィードに同じ路線が複数回
/// 現れてもマッチは1件にしかならない
pub fn match_watch_list(feed: &[FeedEntry], watch_list: &[WatchEntry]) -> Vec<MatchedEntry> {
    watch_list
        .iter()
        .filter(|watch| {
            feed.iter().any(|delayed| {
                delayed.line_name == watch.line_name
                    && delayed.operator_name == watch.operator_name
            })
        })
        .map(|watch| MatchedEntry {
            entry: watch.clone(),
        })
        .collect()
}
