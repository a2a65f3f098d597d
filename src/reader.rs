//! CSVファイルをグリッドに読み込む
//!
//! 先頭のBOMを除去し、UTF-8として解釈する。列数は行ごとに違ってよい。
//! 空行はセル0個の行としてグリッドに残す（「次の行」の判定や備考の終端に使う）。

use crate::error::Result;
use csv::ReaderBuilder;
use std::path::Path;
use ticket_extract_common::{Grid, Row};
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 物理行の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// 引用符の外にある空行
    Empty,
    /// レコードの開始行
    RecordStart,
}

/// CSVファイルを読み込む
pub fn read_grid(path: &Path) -> Result<Grid> {
    let bytes = std::fs::read(path)?;
    decode_grid(&bytes)
}

/// CSVのバイト列をグリッドに変換
pub fn decode_grid(bytes: &[u8]) -> Result<Grid> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let content = String::from_utf8(bytes.to_vec())?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records: Vec<Row> = Vec::new();
    for record in reader.records() {
        let record = record?;
        records.push(record.iter().map(String::from).collect());
    }

    let layout = line_layout(&content);
    let starts = layout.iter().filter(|&&k| k == LineKind::RecordStart).count();
    if starts != records.len() {
        // 引用符の対応が取れない入力は空行の位置を復元しない
        debug!(starts, records = records.len(), "空行の位置を復元できません");
        return Ok(records);
    }

    let mut records = records.into_iter();
    let grid = layout
        .into_iter()
        .filter_map(|kind| match kind {
            LineKind::Empty => Some(Vec::new()),
            LineKind::RecordStart => records.next(),
        })
        .collect();

    Ok(grid)
}

/// 物理行ごとに空行かレコード開始かを判定する
///
/// 引用符の内側にある改行はレコードの途中なので数えない
fn line_layout(content: &str) -> Vec<LineKind> {
    if content.is_empty() {
        return Vec::new();
    }
    let body = content.strip_suffix('\n').unwrap_or(content);

    let mut layout = Vec::new();
    let mut in_quotes = false;

    for line in body.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if !in_quotes {
            layout.push(if line.is_empty() { LineKind::Empty } else { LineKind::RecordStart });
        }
        if line.matches('"').count() % 2 == 1 {
            in_quotes = !in_quotes;
        }
    }

    layout
}
