use chrono::{Local, NaiveDate, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A single recorded monetary event. Immutable once created; the ledger only
/// ever appends or removes whole records.
///
/// The serde layout matches the legacy snapshot document: the kind is stored
/// under `type` as `"income"`/`"expense"`, and the insertion time under
/// `timestamp` as `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: Money,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "timestamp", with = "timestamp_format")]
    pub created_at: NaiveDateTime,
}

impl Transaction {
    /// Creates a record stamped with the current wall-clock time. The stamp
    /// is display/audit only and never participates in ordering.
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        kind: TransactionKind,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            kind,
            date,
            description: description.into(),
            // second precision only, matching the snapshot timestamp format
            created_at: Local::now().naive_local().trunc_subsecs(0),
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self.kind, TransactionKind::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self.kind, TransactionKind::Expense)
    }
}

/// Income/expense classification. Exactly two states, no third.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_layout_matches_legacy_document() {
        let record = r#"{
            "amount": 50.0,
            "category": "Food",
            "type": "expense",
            "date": "2024-01-01",
            "description": "lunch",
            "timestamp": "2024-01-01 12:30:00"
        }"#;
        let txn: Transaction = serde_json::from_str(record).expect("legacy record parses");
        assert_eq!(txn.amount, Money::parse("50").unwrap());
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let json = serde_json::to_string(&txn).expect("serialize");
        assert!(json.contains(r#""type":"expense""#));
        assert!(json.contains(r#""timestamp":"2024-01-01 12:30:00""#));
    }

    #[test]
    fn kind_has_exactly_two_wire_values() {
        assert!(serde_json::from_str::<TransactionKind>(r#""income""#).is_ok());
        assert!(serde_json::from_str::<TransactionKind>(r#""expense""#).is_ok());
        assert!(serde_json::from_str::<TransactionKind>(r#""transfer""#).is_err());
    }
}
