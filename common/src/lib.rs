//! Ticket Extract Common Library
//!
//! CSVエクスポートからチケット情報を取り出す抽出ロジックと出力用の型

pub mod types;
pub mod rules;
pub mod extractor;
pub mod catalog;
pub mod error;

pub use types::{Grid, LineItem, Row, TicketRecord, UNKNOWN};
pub use rules::{CUSTOMER_CODE, FieldRule, TICKET_NUMBER};
pub use extractor::extract;
pub use catalog::Catalog;
pub use error::{Error, Result};
