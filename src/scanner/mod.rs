use crate::error::{Result, TicketError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct CsvFile {
    pub path: PathBuf,
    pub file_name: String,
}

/// 小文字拡張子のグループを先に処理する
const CSV_EXTENSIONS: &[&str] = &["csv", "CSV"];

/// フォルダ直下のCSVファイルを列挙する
///
/// `.csv` のファイル群、`.CSV` のファイル群の順に並べ、各グループ内はファイル名順。
/// この順序が同じチケットの上書き順になる。
pub fn scan_folder(folder: &Path) -> Result<Vec<CsvFile>> {
    if !folder.is_dir() {
        return Err(TicketError::FolderNotFound(folder.display().to_string()));
    }

    let mut groups: Vec<Vec<CsvFile>> = vec![Vec::new(); CSV_EXTENSIONS.len()];

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(ext) = path.extension() else {
            continue;
        };
        let ext_str = ext.to_string_lossy();
        if let Some(group) = CSV_EXTENSIONS.iter().position(|&e| e == ext_str) {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            groups[group].push(CsvFile {
                path: path.to_path_buf(),
                file_name,
            });
        }
    }

    // ファイル名でソート
    for group in &mut groups {
        group.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    }

    Ok(groups.into_iter().flatten().collect())
}
