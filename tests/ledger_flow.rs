// End-to-end flows through the public API: add, save, reload, report

use expense_tracker::{
    aggregate_by_category, load, save, Category, Config, ExpenseRecord, ExpenseTracker, Ledger, LoadError,
    LoadMode,
};
use rust_decimal::Decimal;
use std::fs;

fn record(date: &str, category: &str, amount: &str, description: &str) -> ExpenseRecord {
    ExpenseRecord::parse(date, category, amount, description).unwrap()
}

#[test]
fn test_lunch_and_bus_report() {
    let mut ledger = Ledger::new();
    ledger.append(record("2024-01-05", "Food", "12.50", "lunch"));
    ledger.append(record("2024-01-06", "Transport", "5.00", "bus"));

    let totals = aggregate_by_category(ledger.snapshot());

    assert_eq!(totals.len(), 2);
    assert_eq!(totals[&Category::Food], Decimal::new(1250, 2));
    assert_eq!(totals[&Category::Transport], Decimal::new(500, 2));
}

#[test]
fn test_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        destination: dir.path().join("expenses.csv"),
        ..Config::default()
    };

    let mut first = ExpenseTracker::new(&config);
    first.add_expense(record("2024-01-05", "Food", "12.5", "lunch"));
    first.add_expense(record("2024-01-05", "Food", "12.5", "lunch"));
    first.add_expense(record("2024-01-07", "Entertainment", "9.99", "cinema, late show"));
    first.save().unwrap();

    let mut second = ExpenseTracker::new(&config);
    assert!(second.ledger().is_empty());
    second.load_from_path(&config.destination).unwrap();

    assert_eq!(second.ledger(), first.ledger());
    assert_eq!(second.report()[&Category::Food], Decimal::new(2500, 2));
}

#[test]
fn test_hand_edited_file_with_bad_amount_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expenses.csv");
    save(&[record("2024-01-05", "Food", "12.50", "lunch")], &path).unwrap();

    let mut text = fs::read_to_string(&path).unwrap();
    text.push_str("2024-01-06,Transport,five dollars,bus\n");
    fs::write(&path, &text).unwrap();

    let config = Config {
        destination: path.clone(),
        ..Config::default()
    };
    let mut tracker = ExpenseTracker::new(&config);
    tracker.add_expense(record("2024-02-01", "Utilities", "80", "power"));

    let err = tracker.load_from_path(&path).unwrap_err();
    assert!(matches!(err, LoadError::Row { line: 3, .. }));
    assert_eq!(tracker.ledger().len(), 1);
    assert_eq!(tracker.ledger().snapshot()[0].category(), Category::Utilities);

    // Same file in quarantine mode keeps the good row
    let config = Config {
        load_mode: LoadMode::Quarantine,
        ..config
    };
    let mut lenient = ExpenseTracker::new(&config);
    let report = lenient.load_from_path(&path).unwrap();
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.rejected.len(), 1);
}

#[test]
fn test_external_file_with_other_columns_is_refused() {
    let data = "Date,Category,Amount,Description,Tag\n2024-01-05,Food,1.00,x,y\n";
    assert!(matches!(load(data.as_bytes()), Err(LoadError::Schema { .. })));
}
