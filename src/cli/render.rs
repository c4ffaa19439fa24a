use crate::ledger::{Aggregates, Money, Transaction};

use super::text::Labels;

const BAR_WIDTH: usize = 40;

/// Renders the transaction table in insertion order, one row per record,
/// prefixed with the row index used by `remove`.
pub fn transaction_table(transactions: &[Transaction], labels: &Labels) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>4}  {:<10}  {:<8}  {:<16}  {:>12}  {}\n",
        "#",
        labels.table_date,
        labels.table_type,
        labels.table_category,
        labels.table_amount,
        labels.table_description,
    ));
    for (index, txn) in transactions.iter().enumerate() {
        let kind = if txn.is_income() {
            labels.income
        } else {
            labels.expense
        };
        out.push_str(&format!(
            "{:>4}  {:<10}  {:<8}  {:<16}  {:>12}  {}\n",
            index,
            txn.date.format("%Y-%m-%d"),
            kind,
            txn.category,
            txn.amount.to_string(),
            txn.description,
        ));
    }
    out
}

/// Renders balance, totals, and a textual per-category expense bar chart
/// with a stable axis over the recognized categories.
pub fn summary(aggregates: &Aggregates, labels: &Labels) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", labels.balance, aggregates.balance));
    out.push_str(&format!(
        "{} {}\n",
        labels.total_income, aggregates.total_income
    ));
    out.push_str(&format!(
        "{} {}\n\n",
        labels.total_expense, aggregates.total_expense
    ));

    let max = aggregates
        .per_category_expense
        .iter()
        .map(|(_, sum)| *sum)
        .max()
        .unwrap_or_else(Money::zero);
    let widest = aggregates
        .per_category_expense
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);
    for (name, sum) in &aggregates.per_category_expense {
        out.push_str(&format!(
            "{:<widest$}  {:>12}  {}\n",
            name,
            sum.to_string(),
            bar(*sum, max),
        ));
    }
    out
}

fn bar(value: Money, max: Money) -> String {
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;

    if max.is_zero() || value.is_zero() {
        return String::new();
    }
    let scaled = value.amount() * Decimal::from(BAR_WIDTH as u64) / max.amount();
    let filled = scaled.round().to_usize().unwrap_or(0).clamp(1, BAR_WIDTH);
    "#".repeat(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::text::labels;
    use crate::ledger::{Ledger, TransactionKind};
    use chrono::NaiveDate;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::default();
        ledger.add(Transaction::new(
            Money::parse("50").unwrap(),
            "Food",
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "lunch",
        ));
        ledger.add(Transaction::new(
            Money::parse("2000").unwrap(),
            "Other",
            TransactionKind::Income,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "salary",
        ));
        ledger
    }

    #[test]
    fn table_lists_rows_in_insertion_order() {
        let ledger = sample_ledger();
        let table = transaction_table(ledger.transactions(), labels("en"));
        let food = table.find("Food").expect("food row");
        let other = table.find("Other").expect("other row");
        assert!(food < other);
        assert!(table.contains("50.00"));
        assert!(table.contains("lunch"));
    }

    #[test]
    fn summary_shows_totals_and_fixed_axis() {
        let ledger = sample_ledger();
        let text = summary(&ledger.aggregates(), labels("en"));
        assert!(text.contains("Current Balance: 1950.00"));
        assert!(text.contains("Total Income: 2000.00"));
        assert!(text.contains("Total Expenses: 50.00"));
        for category in ["Food", "Transportation", "Utilities", "Entertainment", "Other"] {
            assert!(text.contains(category), "axis misses {category}");
        }
    }

    #[test]
    fn bar_scales_against_the_largest_category() {
        let max = Money::parse("100").unwrap();
        assert_eq!(bar(max, max).len(), BAR_WIDTH);
        assert_eq!(bar(Money::parse("50").unwrap(), max).len(), BAR_WIDTH / 2);
        assert!(bar(Money::zero(), max).is_empty());
    }
}
