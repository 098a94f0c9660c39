// 📒 Ledger Store - ordered, in-memory expense records
//
// Insertion order is preserved and duplicates are allowed; there is no key.
// The ledger is owned by whoever runs the session, never global.

use crate::record::ExpenseRecord;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record to the end. Always succeeds.
    pub fn append(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }

    /// Discard the current contents and install `records` verbatim.
    pub fn replace(&mut self, records: Vec<ExpenseRecord>) {
        self.records = records;
    }

    /// Read-only view of the records in insertion order
    pub fn snapshot(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpenseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of every amount in the ledger
    pub fn total(&self) -> Decimal {
        self.records.iter().map(ExpenseRecord::amount).sum()
    }
}

impl From<Vec<ExpenseRecord>> for Ledger {
    fn from(records: Vec<ExpenseRecord>) -> Self {
        Ledger { records }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a ExpenseRecord;
    type IntoIter = std::slice::Iter<'a, ExpenseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, category: &str, amount: &str, description: &str) -> ExpenseRecord {
        ExpenseRecord::parse(date, category, amount, description).unwrap()
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert!(ledger.snapshot().is_empty());
        assert_eq!(ledger.total(), Decimal::ZERO);
    }

    #[test]
    fn test_append_grows_by_one_and_keeps_order() {
        let mut ledger = Ledger::new();
        let first = record("2024-01-05", "Food", "12.50", "lunch");
        let second = record("2024-01-06", "Transport", "5.00", "bus");

        ledger.append(first.clone());
        let before: Vec<ExpenseRecord> = ledger.snapshot().to_vec();
        ledger.append(second.clone());

        assert_eq!(ledger.len(), before.len() + 1);
        assert_eq!(&ledger.snapshot()[..before.len()], before.as_slice());
        assert_eq!(ledger.snapshot(), &[first, second]);
    }

    #[test]
    fn test_append_allows_duplicates() {
        let mut ledger = Ledger::new();
        let lunch = record("2024-01-05", "Food", "12.50", "lunch");
        ledger.append(lunch.clone());
        ledger.append(lunch.clone());

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.snapshot()[0], ledger.snapshot()[1]);
    }

    #[test]
    fn test_replace_then_snapshot_is_identity() {
        let mut ledger = Ledger::new();
        ledger.append(record("2023-12-31", "Other", "1.00", "old"));

        let incoming = vec![
            record("2024-02-01", "Utilities", "80.00", "power"),
            record("2024-02-02", "Entertainment", "15.00", ""),
            record("2024-02-01", "Utilities", "80.00", "power"),
        ];
        ledger.replace(incoming.clone());

        assert_eq!(ledger.snapshot(), incoming.as_slice());
    }

    #[test]
    fn test_replace_with_empty_clears() {
        let mut ledger = Ledger::new();
        ledger.append(record("2024-01-05", "Food", "3", ""));
        ledger.replace(Vec::new());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_total_sums_amounts() {
        let ledger = Ledger::from(vec![
            record("2024-01-05", "Food", "12.50", ""),
            record("2024-01-06", "Transport", "5", ""),
        ]);
        assert_eq!(ledger.total(), Decimal::new(1750, 2));
        assert_eq!((&ledger).into_iter().count(), 2);
    }
}
