//! チケットレコードの型定義
//!
//! CSVから抽出したデータを表す型:
//! - Row / Grid: CSVファイル1つ分のセル表
//! - LineItem: 明細行
//! - TicketRecord: 1ファイルから抽出した最終結果

use serde::{Deserialize, Serialize};

/// フィールドが見つからなかった場合の値
pub const UNKNOWN: &str = "Unknown";

/// CSVの1行（セルの並び）
pub type Row = Vec<String>;

/// CSVファイル1つ分の行の並び
pub type Grid = Vec<Row>;

/// 明細行
///
/// 数量はテキストのまま保持する（数値としては解釈しない）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "ItemDescription")]
    pub description: String,

    #[serde(rename = "Qty")]
    pub quantity: String,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            quantity: quantity.into(),
        }
    }
}

/// 1ファイルから抽出したチケット
///
/// JSONのキー名は既存の出力との互換のため元データの列名を使う
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    #[serde(rename = "tn_TicketNumber")]
    pub ticket_number: String,      // TKT + 数字

    #[serde(rename = "CustName8")]
    pub customer_code: String,      // EP- + 数字

    #[serde(rename = "Notes", default)]
    pub notes: String,

    #[serde(rename = "LineItems", default)]
    pub line_items: Vec<LineItem>,
}

impl Default for TicketRecord {
    fn default() -> Self {
        Self {
            ticket_number: UNKNOWN.to_string(),
            customer_code: UNKNOWN.to_string(),
            notes: String::new(),
            line_items: Vec::new(),
        }
    }
}

impl TicketRecord {
    /// チケット番号が見つかったか
    pub fn has_ticket_number(&self) -> bool {
        self.ticket_number != UNKNOWN
    }

    /// 顧客コードが見つかったか
    pub fn has_customer_code(&self) -> bool {
        self.customer_code != UNKNOWN
    }
}

/// 行が空か（全セルが空白のみ）
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// 行をカンマ区切りで連結した検索用テキスト
pub fn row_text(row: &[String]) -> String {
    row.join(",")
}
