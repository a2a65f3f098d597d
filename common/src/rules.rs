//! フィールド検出ルール
//!
//! CSVのレイアウトはファイルごとに揺れるため、マーカー文字列と値パターンの
//! 組を「ルール」として定義し、行の文脈（対象行と次の行）から値を拾う。
//!
//! - FieldRule: チケット番号・顧客コード
//! - detect_notes: 備考欄
//! - detect_detail_columns: 明細テーブルのヘッダー

use crate::types::{LineItem, Row, is_blank_row, row_text};
use regex::Regex;
use tracing::debug;

/// 明細テーブルのヘッダー行を示すマーカー
pub const DETAIL_HEADER_MARKERS: &[&str] = &["Detail Items", "Item Description", "ItemDescription"];

/// 備考欄のマーカー
pub const NOTES_MARKER: &str = "Notes";

/// この文字列で始まる明細説明はヘッダーの残骸として除外する
pub const ITEM_PREFIX: &str = "Item";

/// マーカーと値パターンの組
///
/// マーカーを含む行、なければその次の行から最初のパターン一致を取り出す
#[derive(Debug)]
pub struct FieldRule {
    pub name: &'static str,
    markers: &'static [&'static str],
    pattern: Regex,
}

lazy_static::lazy_static! {
    /// チケット番号: `tn_TicketNumber` → `TKT` + 数字
    pub static ref TICKET_NUMBER: FieldRule = FieldRule {
        name: "ticket_number",
        markers: &["tn_TicketNumber"],
        pattern: Regex::new(r"TKT\d+").unwrap(),
    };

    /// 顧客コード: `CustName8` / `CustomerName` → `EP-` + 数字
    pub static ref CUSTOMER_CODE: FieldRule = FieldRule {
        name: "customer_code",
        markers: &["CustName8", "CustomerName"],
        pattern: Regex::new(r"EP-\d+").unwrap(),
    };
}

impl FieldRule {
    /// 行テキストがマーカーを含むか
    pub fn is_triggered(&self, text: &str) -> bool {
        self.markers.iter().any(|marker| text.contains(marker))
    }

    /// テキスト中の最初のパターン一致
    pub fn find_in(&self, text: &str) -> Option<String> {
        self.pattern.find(text).map(|m| m.as_str().to_string())
    }

    /// `index` 行目を起点に値を検出する
    ///
    /// マーカーがなければ None。マーカー行に値がなければ次の行を見る。
    pub fn detect(&self, grid: &[Row], index: usize) -> Option<String> {
        let text = row_text(grid.get(index)?);
        if !self.is_triggered(&text) {
            return None;
        }

        let found = self.find_in(&text).or_else(|| {
            grid.get(index + 1)
                .and_then(|next| self.find_in(&row_text(next)))
        });
        if let Some(value) = &found {
            debug!(rule = self.name, row = index, %value, "ルール一致");
        }
        found
    }

    /// マーカーに関係なく全行から最初の一致を探す（フォールバック用）
    pub fn scan(&self, grid: &[Row]) -> Option<String> {
        let (index, value) = grid
            .iter()
            .enumerate()
            .find_map(|(i, row)| self.find_in(&row_text(row)).map(|v| (i, v)))?;
        debug!(rule = self.name, row = index, %value, "全行走査で一致");
        Some(value)
    }
}

/// 行テキストが明細ヘッダーのマーカーを含むか
pub fn is_detail_header(text: &str) -> bool {
    DETAIL_HEADER_MARKERS.iter().any(|marker| text.contains(marker))
}

/// 備考を検出する
///
/// マーカー行の2列目以降に値があればそれを使う。なければ後続行をスペース区切りで
/// 連結する。連結は明細ヘッダー、空行（セル0個）、グリッド末尾のいずれかで止まる。
/// 空白セルだけの行は何も足さない。
pub fn detect_notes(grid: &[Row], index: usize) -> Option<String> {
    let row = grid.get(index)?;
    if !row_text(row).contains(NOTES_MARKER) {
        return None;
    }

    if row.iter().skip(1).any(|cell| !cell.trim().is_empty()) {
        let inline = row
            .iter()
            .skip(1)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",");
        return Some(inline.trim().to_string());
    }

    let following: Vec<String> = grid
        .iter()
        .skip(index + 1)
        .map(|r| (r, row_text(r)))
        .take_while(|(r, text)| !r.is_empty() && !is_detail_header(text))
        .filter(|(r, _)| !is_blank_row(r))
        .map(|(_, text)| text.trim().to_string())
        .collect();

    Some(following.join(" ").trim().to_string())
}

/// 明細ヘッダー行から見つかった列位置
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailColumns {
    pub description: Option<usize>,
    pub quantity: Option<usize>,
}

/// ヘッダー行から説明列と数量列を探す
///
/// `Item` / `Description` を含むセルが説明列、それ以外で `Qty` を含むセルが
/// 数量列。同じ種類が複数あれば右側が優先される。
pub fn detect_detail_columns(row: &[String]) -> DetailColumns {
    let mut columns = DetailColumns::default();

    for (idx, cell) in row.iter().enumerate() {
        if cell.is_empty() {
            continue;
        }
        if cell.contains("Item") || cell.contains("Description") {
            columns.description = Some(idx);
        } else if cell.contains("Qty") {
            columns.quantity = Some(idx);
        }
    }

    columns
}

/// 明細行を1件取り出す
///
/// 列が足りない行、説明が空の行、説明が `Item` で始まる行は None
pub fn capture_line_item(row: &[String], description_col: usize, quantity_col: usize) -> Option<LineItem> {
    if row.len() <= description_col.max(quantity_col) {
        return None;
    }

    let description = row.get(description_col)?.trim();
    if description.is_empty() || description.starts_with(ITEM_PREFIX) {
        return None;
    }

    let quantity = row.get(quantity_col).map(|q| q.trim()).unwrap_or_default();
    Some(LineItem::new(description, quantity))
}
