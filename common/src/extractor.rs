//! チケット抽出
//!
//! グリッドを先頭から1回走査し、各ルールで見つかった値を走査状態に積み上げる。
//! 構造的に見つからなかった番号・コードは最後に全行走査で補完する。

use crate::rules::{
    CUSTOMER_CODE, TICKET_NUMBER, capture_line_item, detect_detail_columns, detect_notes,
    is_detail_header,
};
use crate::types::{LineItem, Row, TicketRecord, UNKNOWN, is_blank_row, row_text};
use tracing::debug;

/// 走査中の状態
#[derive(Debug, Default)]
struct ScanState {
    ticket_number: Option<String>,
    customer_code: Option<String>,
    notes: String,
    in_detail_section: bool,
    description_col: Option<usize>,
    quantity_col: Option<usize>,
    line_items: Vec<LineItem>,
}

impl ScanState {
    fn visit(&mut self, grid: &[Row], index: usize) {
        let Some(row) = grid.get(index) else {
            return;
        };
        if is_blank_row(row) {
            return;
        }
        let text = row_text(row);

        // 番号・コードは最初に見つかった値を保持
        if self.ticket_number.is_none() {
            self.ticket_number = TICKET_NUMBER.detect(grid, index);
        }
        if self.customer_code.is_none() {
            self.customer_code = CUSTOMER_CODE.detect(grid, index);
        }

        // 備考は後から出てきたマーカーで置き換える
        if let Some(notes) = detect_notes(grid, index) {
            debug!(row = index, len = notes.len(), "備考");
            self.notes = notes;
        }

        let is_header = is_detail_header(&text);
        if is_header {
            self.in_detail_section = true;
            let columns = detect_detail_columns(row);
            debug!(row = index, ?columns, "明細ヘッダー");
            if columns.description.is_some() {
                self.description_col = columns.description;
            }
            if columns.quantity.is_some() {
                self.quantity_col = columns.quantity;
            }
        }

        if index == 0 || is_header || !self.in_detail_section {
            return;
        }
        if let (Some(desc), Some(qty)) = (self.description_col, self.quantity_col) {
            match capture_line_item(row, desc, qty) {
                Some(item) => self.line_items.push(item),
                None => debug!(row = index, "明細行をスキップ"),
            }
        }
    }

    fn fill_missing(&mut self, grid: &[Row]) {
        if self.ticket_number.is_none() {
            self.ticket_number = TICKET_NUMBER.scan(grid);
        }
        if self.customer_code.is_none() {
            self.customer_code = CUSTOMER_CODE.scan(grid);
        }
    }

    fn into_record(self) -> TicketRecord {
        TicketRecord {
            ticket_number: self.ticket_number.unwrap_or_else(|| UNKNOWN.to_string()),
            customer_code: self.customer_code.unwrap_or_else(|| UNKNOWN.to_string()),
            notes: self.notes,
            line_items: self.line_items,
        }
    }
}

/// グリッドからチケットを1件抽出する
///
/// 失敗しない。何も見つからなければ "Unknown" と空の値で埋めたレコードを返す。
///
/// # Examples
/// ```
/// use ticket_extract_common::extract;
///
/// let grid: Vec<Vec<String>> = vec![
///     vec!["tn_TicketNumber".into(), "TKT123".into()],
///     vec!["CustName8".into(), "EP-9".into()],
/// ];
/// let record = extract(&grid);
/// assert_eq!(record.ticket_number, "TKT123");
/// assert_eq!(record.customer_code, "EP-9");
/// ```
pub fn extract(grid: &[Row]) -> TicketRecord {
    let mut state = ScanState::default();

    for index in 0..grid.len() {
        state.visit(grid, index);
    }

    if state.ticket_number.is_none() || state.customer_code.is_none() {
        state.fill_missing(grid);
    }

    state.into_record()
}
