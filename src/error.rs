use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicketError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("文字コードエラー: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("CSV解析エラー: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("出力エラー: {0}")]
    Output(#[from] ticket_extract_common::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TicketError>;
