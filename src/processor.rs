//! 一括変換
//!
//! フォルダ内のCSVを1ファイルずつ抽出し、顧客別の一覧にまとめてJSONに書き出す。
//! 1ファイルの失敗はログに出してスキップし、他のファイルには影響させない。

use crate::error::{Result, TicketError};
use crate::reader;
use crate::scanner::{self, CsvFile};
use std::path::Path;
use ticket_extract_common::{Catalog, TicketRecord, extract};
use tracing::{debug, warn};

/// 一括変換の結果
#[derive(Debug, Default)]
pub struct RunSummary {
    /// 見つかったCSVファイル数
    pub files_found: usize,
    /// 処理に失敗したファイル数
    pub files_failed: usize,
    /// 出力JSONを書き出したか
    pub written: bool,
    pub catalog: Catalog,
}

/// CSVファイル1つからチケットを抽出
pub fn process_file(path: &Path) -> Result<TicketRecord> {
    let grid = reader::read_grid(path)?;
    debug!(path = %path.display(), rows = grid.len(), "CSVを読み込み");

    let record = extract(&grid);
    debug!(
        ticket = %record.ticket_number,
        customer = %record.customer_code,
        line_items = record.line_items.len(),
        notes_len = record.notes.len(),
        "抽出完了"
    );
    Ok(record)
}

/// ファイルを順に処理して一覧を作る
///
/// 戻り値は（一覧, 失敗件数）
pub fn build_catalog(files: &[CsvFile]) -> (Catalog, usize) {
    let mut catalog = Catalog::new();
    let mut failed = 0;

    for file in files {
        println!("処理中: {}", file.path.display());

        match process_file(&file.path) {
            Ok(record) => {
                println!(
                    "  ✔ チケット={}, 顧客={}, 明細={}件",
                    record.ticket_number,
                    record.customer_code,
                    record.line_items.len()
                );
                if !record.has_ticket_number() {
                    println!("  ⚠ チケット番号が見つかりません");
                }
                if !record.has_customer_code() {
                    println!("  ⚠ 顧客コードが見つかりません");
                }
                if let Some(previous) = catalog.insert(record) {
                    debug!(
                        ticket = %previous.ticket_number,
                        customer = %previous.customer_code,
                        file = %file.file_name,
                        "既存のチケットを上書き"
                    );
                }
            }
            Err(e) => {
                failed += 1;
                println!("  ✗ 処理エラー {}: {}", file.path.display(), e);
                warn!(file = %file.file_name, error = %e, "ファイルをスキップ");
            }
        }
    }

    (catalog, failed)
}

/// フォルダ内のCSVを変換して `output` に書き出す
///
/// CSVが1つもない、または1件も抽出できなかった場合は何も書き出さない
pub fn run(input_dir: &Path, output: &Path) -> Result<RunSummary> {
    let files = match scanner::scan_folder(input_dir) {
        Ok(files) => files,
        Err(TicketError::FolderNotFound(folder)) => {
            warn!(%folder, "入力フォルダが存在しません");
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    let mut summary = RunSummary {
        files_found: files.len(),
        ..Default::default()
    };

    if files.is_empty() {
        println!("CSVファイルが見つかりません: {}", input_dir.display());
        return Ok(summary);
    }
    println!("✔ {}件のCSVを検出\n", files.len());

    let (catalog, failed) = build_catalog(&files);
    summary.files_failed = failed;

    if catalog.is_empty() {
        println!("抽出できたデータがありません");
    } else {
        catalog.write_to(output)?;
        summary.written = true;
        println!(
            "\n✔ {}顧客 / {}チケットを保存: {}",
            catalog.customer_count(),
            catalog.ticket_count(),
            output.display()
        );
    }

    summary.catalog = catalog;
    Ok(summary)
}
