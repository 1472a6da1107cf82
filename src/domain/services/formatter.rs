// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::delay::ExtractionResult;

/// 抽出結果を1本の通知文にまとめる
///
/// 結果1件につき、事業者名・路線名・運行情報ページへのリンクと
/// 抽出テキスト（失敗時は警告文）のブロックを1つ作り、入力順の
/// まま空行区切りで連結する。入力が空なら空文字を返す
pub fn format_results(results: &[ExtractionResult]) -> String {
    results
        .iter()
        .map(format_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_block(result: &ExtractionResult) -> String {
    let entry = &result.entry.entry;
    let body = match &result.outcome {
        Ok(text) => text.clone(),
        Err(marker) => marker.fallback_text(),
    };
    format!(
        "*・{} <{}>* (<{}|jump>)\n {}",
        entry.operator_name, entry.line_name, entry.page_url, body
    )
}
