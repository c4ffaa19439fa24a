use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::{
    errors::LedgerError,
    ledger::{Aggregates, CategorySet, Ledger, Money, Transaction, TransactionKind},
    storage,
};

/// Facade that owns the in-memory ledger and its default snapshot location.
///
/// Every successful mutation re-saves the snapshot. A failed save is
/// reported to the caller but never rolls back the in-memory mutation; the
/// mutation already succeeded logically and the user decides whether to
/// re-save elsewhere.
pub struct LedgerStore {
    ledger: Ledger,
    path: PathBuf,
}

impl LedgerStore {
    /// Opens the snapshot at `path` with the stock category set,
    /// bootstrapping an empty ledger when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        Self::open_with_categories(path, CategorySet::default())
    }

    pub fn open_with_categories(
        path: impl Into<PathBuf>,
        categories: CategorySet,
    ) -> Result<Self, LedgerError> {
        let path = path.into();
        let transactions = storage::load_transactions(&path)?;
        Ok(Self {
            ledger: Ledger::from_transactions(transactions, categories),
            path,
        })
    }

    /// Fresh store at `path` with nothing loaded. Used to proceed after a
    /// corrupt snapshot has been surfaced to the user.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            ledger: Ledger::new(CategorySet::default()),
            path: path.into(),
        }
    }

    /// Validates raw amount input, appends the transaction, and persists the
    /// new snapshot. Returns the assigned position index and the stored
    /// record on success.
    pub fn add(
        &mut self,
        raw_amount: &str,
        category: &str,
        kind: TransactionKind,
        date: NaiveDate,
        description: &str,
    ) -> Result<(usize, Transaction), LedgerError> {
        let amount = Money::parse(raw_amount)?;
        let stored = self
            .ledger
            .add(Transaction::new(amount, category, kind, date, description))
            .clone();
        let index = self.ledger.len() - 1;
        info!(index, amount = %stored.amount, category = %stored.category, "transaction added");
        self.persist()?;
        Ok((index, stored))
    }

    /// Tolerant bulk delete by table row index; out-of-range indices are
    /// ignored. Returns how many records were removed.
    pub fn remove_at(&mut self, indices: &[usize]) -> Result<usize, LedgerError> {
        let removed = self.ledger.remove_at(indices);
        if removed > 0 {
            info!(removed, "transactions removed");
        }
        self.persist()?;
        Ok(removed)
    }

    /// Empties the ledger and persists the empty snapshot.
    pub fn clear(&mut self) -> Result<(), LedgerError> {
        self.ledger.clear();
        info!("ledger cleared");
        self.persist()
    }

    pub fn aggregates(&self) -> Aggregates {
        self.ledger.aggregates()
    }

    /// Read-only ordered view for table rendering.
    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saves the current ledger to a caller-chosen location without touching
    /// the default snapshot.
    pub fn export(&self, path: &Path) -> Result<(), LedgerError> {
        storage::save_transactions(self.ledger.transactions(), path)
    }

    fn persist(&self) -> Result<(), LedgerError> {
        storage::save_transactions(self.ledger.transactions(), &self.path).map_err(|err| {
            warn!(%err, "snapshot save failed; in-memory ledger keeps the mutation");
            err
        })
    }
}

/// Parses presentation-supplied `YYYY-MM-DD` input into a calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_like_input() {
        assert_eq!(
            parse_date("2024-01-31").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );
    }

    #[test]
    fn parse_date_rejects_bad_calendar_dates() {
        for raw in ["2024-02-30", "not-a-date", "2024/01/01"] {
            assert!(matches!(
                parse_date(raw),
                Err(LedgerError::InvalidDate(_))
            ));
        }
    }
}
