//! ticket-extract
//!
//! CSVエクスポートに散在するチケット情報を抽出し、顧客別のJSONにまとめる

pub mod cli;
pub mod config;
pub mod error;
pub mod processor;
pub mod reader;
pub mod scanner;

pub use ticket_extract_common as common;
