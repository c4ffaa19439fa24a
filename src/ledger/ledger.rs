use std::collections::BTreeSet;

use super::category::CategorySet;
use super::money::Money;
use super::transaction::{Transaction, TransactionKind};

/// Ordered sequence of transactions. Insertion order is display order; the
/// sequence is the sole source of truth and every aggregate is recomputed
/// from it on demand.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    categories: CategorySet,
}

impl Ledger {
    pub fn new(categories: CategorySet) -> Self {
        Self {
            transactions: Vec::new(),
            categories,
        }
    }

    /// Rebuilds a ledger from a loaded snapshot.
    pub fn from_transactions(transactions: Vec<Transaction>, categories: CategorySet) -> Self {
        Self {
            transactions,
            categories,
        }
    }

    /// Appends a validated transaction and returns a view of the stored
    /// record.
    pub fn add(&mut self, transaction: Transaction) -> &Transaction {
        self.transactions.push(transaction);
        // push guarantees the vec is non-empty here
        &self.transactions[self.transactions.len() - 1]
    }

    /// Removes the transactions at `indices`, highest index first so earlier
    /// removals never shift later ones. Out-of-range indices are ignored,
    /// matching multi-select delete in a table UI. Returns how many records
    /// were removed.
    pub fn remove_at(&mut self, indices: &[usize]) -> usize {
        let unique: BTreeSet<usize> = indices.iter().copied().collect();
        let mut removed = 0;
        for index in unique.into_iter().rev() {
            if index < self.transactions.len() {
                self.transactions.remove(index);
                removed += 1;
            }
        }
        removed
    }

    /// Empties the ledger unconditionally.
    pub fn clear(&mut self) {
        self.transactions.clear();
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Recomputes every derived total in one pass over the sequence. No
    /// caching; dataset sizes are personal-scale.
    pub fn aggregates(&self) -> Aggregates {
        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();
        for txn in &self.transactions {
            match txn.kind {
                TransactionKind::Income => total_income += txn.amount,
                TransactionKind::Expense => total_expense += txn.amount,
            }
        }

        // Every recognized category gets an entry (zero included) so the
        // breakdown axis stays stable; unrecognized categories with expense
        // activity are appended after, so recorded data is never invisible.
        let mut per_category_expense: Vec<(String, Money)> = self
            .categories
            .names()
            .iter()
            .map(|name| (name.clone(), Money::zero()))
            .collect();
        for txn in self.transactions.iter().filter(|txn| txn.is_expense()) {
            match per_category_expense
                .iter_mut()
                .find(|(name, _)| name == &txn.category)
            {
                Some((_, sum)) => *sum += txn.amount,
                None => per_category_expense.push((txn.category.clone(), txn.amount)),
            }
        }

        Aggregates {
            balance: total_income - total_expense,
            total_income,
            total_expense,
            per_category_expense,
        }
    }
}

/// Derived totals for one snapshot of the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    pub balance: Money,
    pub total_income: Money,
    pub total_expense: Money,
    /// Expense sums keyed by category, in recognized-set order.
    pub per_category_expense: Vec<(String, Money)>,
}

impl Aggregates {
    /// Expense total for one category; zero when the category has no expense
    /// activity.
    pub fn category_total(&self, category: &str) -> Money {
        self.per_category_expense
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, sum)| *sum)
            .unwrap_or_else(Money::zero)
    }
}
