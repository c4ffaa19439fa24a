use budget_ledger::{
    core::LedgerStore,
    errors::LedgerError,
    ledger::{Money, Transaction, TransactionKind},
    storage::{self, json_backend},
};
use chrono::NaiveDate;
use std::fs;
use tempfile::tempdir;

fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(
            Money::parse("50.00").unwrap(),
            "Food",
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "lunch",
        ),
        Transaction::new(
            Money::parse("2000").unwrap(),
            "Other",
            TransactionKind::Income,
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            "salary",
        ),
        Transaction::new(
            Money::parse("12.75").unwrap(),
            "Subscriptions",
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            "",
        ),
    ]
}

#[test]
fn round_trip_preserves_order_and_fields() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("ledger.json");
    let transactions = sample_transactions();

    storage::save_transactions(&transactions, &path).expect("save snapshot");
    let loaded = storage::load_transactions(&path).expect("load snapshot");

    assert_eq!(loaded, transactions);
}

#[test]
fn missing_snapshot_bootstraps_empty() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("does_not_exist.json");

    let loaded = storage::load_transactions(&path).expect("bootstrap");
    assert!(loaded.is_empty());

    let store = LedgerStore::open(&path).expect("open bootstraps");
    assert!(store.transactions().is_empty());
}

#[test]
fn corrupt_snapshot_is_reported_not_swallowed() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("ledger.json");
    fs::write(&path, "not json").unwrap();

    let err = storage::load_transactions(&path).unwrap_err();
    assert!(matches!(err, LedgerError::CorruptData(_)));

    // the application proceeds on an empty ledger after surfacing the error
    assert!(LedgerStore::open(&path).is_err());
    let store = LedgerStore::empty(&path);
    assert!(store.transactions().is_empty());
}

#[test]
fn unreadable_snapshot_is_corrupt_data_not_write_failure() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("ledger.json");
    // exists as an entry but cannot be read back as a file
    fs::create_dir_all(&path).unwrap();

    assert!(matches!(
        storage::load_transactions(&path),
        Err(LedgerError::CorruptData(_))
    ));
    // the shell's warn-and-proceed-empty path hinges on this classification
    assert!(matches!(
        LedgerStore::open(&path),
        Err(LedgerError::CorruptData(_))
    ));
}

#[test]
fn wrong_field_types_are_corrupt_data() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("ledger.json");
    fs::write(
        &path,
        r#"[{"amount": "fifty", "category": "Food", "type": "expense",
            "date": "2024-01-01", "description": "", "timestamp": "2024-01-01 00:00:00"}]"#,
    )
    .unwrap();

    assert!(matches!(
        storage::load_transactions(&path),
        Err(LedgerError::CorruptData(_))
    ));
}

#[test]
fn legacy_python_document_loads_unchanged() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("budget_transactions.json");
    // verbatim shape written by the original desktop application
    fs::write(
        &path,
        r#"[
    {
        "amount": 150.5,
        "category": "Transportation",
        "type": "expense",
        "date": "2023-11-05",
        "description": "fuel",
        "timestamp": "2023-11-05 18:22:41"
    }
]"#,
    )
    .unwrap();

    let loaded = storage::load_transactions(&path).expect("legacy snapshot");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].amount, Money::parse("150.5").unwrap());
    assert_eq!(loaded[0].category, "Transportation");
    assert!(loaded[0].is_expense());
}

#[test]
fn export_leaves_default_snapshot_alone() {
    let temp = tempdir().unwrap();
    let default_path = temp.path().join("ledger.json");
    let export_path = temp.path().join("exported.json");

    let mut store = LedgerStore::open(&default_path).unwrap();
    store
        .add(
            "50",
            "Food",
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "lunch",
        )
        .unwrap();
    let default_before = fs::read_to_string(&default_path).unwrap();

    store.export(&export_path).expect("export");
    assert_eq!(
        fs::read_to_string(&default_path).unwrap(),
        default_before,
        "export must not rewrite the default snapshot"
    );

    let exported = storage::load_transactions(&export_path).unwrap();
    assert_eq!(exported, store.transactions());
}

#[test]
fn failed_save_keeps_mutation_and_previous_snapshot() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("ledger.json");
    let mut store = LedgerStore::open(&path).unwrap();
    store
        .add(
            "10",
            "Food",
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "",
        )
        .unwrap();
    let original = fs::read_to_string(&path).unwrap();

    // Directory colliding with the staging path forces the write to fail.
    fs::create_dir_all(json_backend::tmp_path(&path)).unwrap();
    let result = store.add(
        "20",
        "Food",
        TransactionKind::Expense,
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        "",
    );

    assert!(matches!(result, Err(LedgerError::WriteFailure(_))));
    // in-memory mutation stands, on-disk snapshot is untouched
    assert_eq!(store.transactions().len(), 2);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}
