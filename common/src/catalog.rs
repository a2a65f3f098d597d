//! 顧客別チケット一覧
//!
//! 顧客コード → チケット番号 → レコード の2階層マップ。
//! キーはソート順で保持し、同じ入力からは常に同じJSONを出力する。

use crate::error::Result;
use crate::types::TicketRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const JSON_INDENT: &[u8] = b"    ";

/// 顧客別のチケット一覧
///
/// JSONのキーは顧客コード・チケット番号ともに文字列のソート順で出力される。
/// ファイルの処理順（登録順）ではない。非ASCII文字はエスケープせずUTF-8のまま書く。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    customers: BTreeMap<String, BTreeMap<String, TicketRecord>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// レコードを登録する
    ///
    /// 同じ（顧客コード, チケット番号）が既にあれば置き換え、古いレコードを返す
    pub fn insert(&mut self, record: TicketRecord) -> Option<TicketRecord> {
        self.customers
            .entry(record.customer_code.clone())
            .or_default()
            .insert(record.ticket_number.clone(), record)
    }

    pub fn get(&self, customer_code: &str, ticket_number: &str) -> Option<&TicketRecord> {
        self.customers.get(customer_code)?.get(ticket_number)
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// 顧客数
    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// チケット総数
    pub fn ticket_count(&self) -> usize {
        self.customers.values().map(BTreeMap::len).sum()
    }

    /// 4スペースインデントのJSON
    pub fn to_json(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(buf)
    }

    /// JSONファイルに書き出す（既存ファイルは上書き）
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LineItem;

    fn record(customer: &str, ticket: &str, notes: &str) -> TicketRecord {
        TicketRecord {
            ticket_number: ticket.to_string(),
            customer_code: customer.to_string(),
            notes: notes.to_string(),
            line_items: Vec::new(),
        }
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.ticket_count(), 0);
        assert_eq!(String::from_utf8(catalog.to_json().unwrap()).unwrap(), "{}");
    }

    #[test]
    fn test_insert_groups_by_customer() {
        let mut catalog = Catalog::new();
        catalog.insert(record("EP-1", "TKT1", ""));
        catalog.insert(record("EP-1", "TKT2", ""));
        catalog.insert(record("EP-2", "TKT3", ""));

        assert_eq!(catalog.customer_count(), 2);
        assert_eq!(catalog.ticket_count(), 3);
        assert!(catalog.get("EP-1", "TKT2").is_some());
        assert!(catalog.get("EP-2", "TKT1").is_none());
    }

    #[test]
    fn test_later_insert_overwrites() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert(record("EP-1", "TKT1", "old")).is_none());

        let replaced = catalog.insert(record("EP-1", "TKT1", "new"));
        assert_eq!(replaced.map(|r| r.notes), Some("old".to_string()));
        assert_eq!(catalog.get("EP-1", "TKT1").unwrap().notes, "new");
        assert_eq!(catalog.ticket_count(), 1);
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let mut catalog = Catalog::new();
        catalog.insert(TicketRecord::default());
        assert!(catalog.get("Unknown", "Unknown").is_some());
    }

    #[test]
    fn test_to_json_layout() {
        let mut catalog = Catalog::new();
        catalog.insert(TicketRecord {
            ticket_number: "TKT1".to_string(),
            customer_code: "EP-1".to_string(),
            notes: "n".to_string(),
            line_items: vec![LineItem::new("Widget", "5")],
        });

        let json = String::from_utf8(catalog.to_json().unwrap()).unwrap();
        let expected = r#"{
    "EP-1": {
        "TKT1": {
            "tn_TicketNumber": "TKT1",
            "CustName8": "EP-1",
            "Notes": "n",
            "LineItems": [
                {
                    "ItemDescription": "Widget",
                    "Qty": "5"
                }
            ]
        }
    }
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_to_json_is_sorted_regardless_of_insert_order() {
        let mut a = Catalog::new();
        a.insert(record("EP-2", "TKT9", ""));
        a.insert(record("EP-1", "TKT1", ""));

        let mut b = Catalog::new();
        b.insert(record("EP-1", "TKT1", ""));
        b.insert(record("EP-2", "TKT9", ""));

        assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
    }
}
