// Copyright (c) 2025 oshirase-bot developers
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{Html, Selector};

use crate::scrape::traits::{ExtractionStrategy, ScrapeError};

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::Other(format!("不正なセレクタ {selector}: {e}")))
}

fn text_of(element: scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// テーブル行ストラテジ
///
/// 1ページに複数路線を一覧表示する事業者向け。行コンテナを走査し、
/// 路線名セルが対象路線と完全一致する行のステータスセルを返す
pub struct TableRowStrategy {
    /// 行コンテナのセレクタ
    rows_selector: String,
    /// 行内の路線名セルのセレクタ
    name_selector: String,
    /// 行内のステータスセルのセレクタ
    status_selector: String,
}

impl TableRowStrategy {
    pub fn new(
        rows_selector: impl Into<String>,
        name_selector: impl Into<String>,
        status_selector: impl Into<String>,
    ) -> Self {
        Self {
            rows_selector: rows_selector.into(),
            name_selector: name_selector.into(),
            status_selector: status_selector.into(),
        }
    }
}

impl ExtractionStrategy for TableRowStrategy {
    fn extract(&self, html: &str, line_name: &str) -> Result<String, ScrapeError> {
        let rows_selector = parse_selector(&self.rows_selector)?;
        let name_selector = parse_selector(&self.name_selector)?;
        let status_selector = parse_selector(&self.status_selector)?;

        let document = Html::parse_document(html);
        let rows: Vec<_> = document.select(&rows_selector).collect();
        if rows.is_empty() {
            return Err(ScrapeError::ElementNotFound {
                selector: self.rows_selector.clone(),
            });
        }

        let mut statuses = Vec::new();
        for row in rows {
            let name_cell = row.select(&name_selector).next().ok_or_else(|| {
                ScrapeError::ElementNotFound {
                    selector: self.name_selector.clone(),
                }
            })?;
            // 表記ゆれの正規化はせず、路線名の完全一致で比較する
            if text_of(name_cell) == line_name {
                let status_cell = row.select(&status_selector).next().ok_or_else(|| {
                    ScrapeError::ElementNotFound {
                        selector: self.status_selector.clone(),
                    }
                })?;
                statuses.push(text_of(status_cell));
            }
        }

        let text = statuses.join("\n");
        if text.is_empty() {
            return Err(ScrapeError::ElementNotFound {
                selector: self.rows_selector.clone(),
            });
        }
        Ok(text)
    }
}

/// 単一ノードストラテジ
///
/// 専用の運行情報ページを持つ事業者向け。固定のコンテナノードの
/// テキストをそのまま返す
pub struct SingleNodeStrategy {
    selector: String,
}

impl SingleNodeStrategy {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }
}

impl ExtractionStrategy for SingleNodeStrategy {
    fn extract(&self, html: &str, _line_name: &str) -> Result<String, ScrapeError> {
        let selector = parse_selector(&self.selector)?;

        let document = Html::parse_document(html);
        let node = document
            .select(&selector)
            .next()
            .ok_or_else(|| ScrapeError::ElementNotFound {
                selector: self.selector.clone(),
            })?;

        let text = text_of(node);
        if text.is_empty() {
            return Err(ScrapeError::ElementNotFound {
                selector: self.selector.clone(),
            });
        }
        Ok(text)
    }
}
