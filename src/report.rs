// 📊 Report Aggregator - per-category totals for charts

use crate::record::{Category, ExpenseRecord};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Sum of amounts per category.
///
/// Categories with no records are absent, so an empty ledger yields an empty
/// map. Callers should skip drawing a chart in that case.
pub fn aggregate_by_category(records: &[ExpenseRecord]) -> BTreeMap<Category, Decimal> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.category()).or_insert(Decimal::ZERO) += record.amount();
    }
    totals
}

/// One bar of the category chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub total: Decimal,
    pub count: usize,
}

impl CategorySummary {
    /// Average amount per record in this category
    pub fn mean(&self) -> Decimal {
        if self.count == 0 {
            Decimal::ZERO
        } else {
            (self.total / Decimal::from(self.count)).round_dp(2)
        }
    }

    /// Share of `grand_total` as a percentage (0-100)
    pub fn share_of(&self, grand_total: Decimal) -> Decimal {
        if grand_total.is_zero() {
            Decimal::ZERO
        } else {
            (self.total * Decimal::ONE_HUNDRED / grand_total).round_dp(1)
        }
    }
}

/// Chart-ready rows, largest total first (ties broken by category order).
pub fn summarize(records: &[ExpenseRecord]) -> Vec<CategorySummary> {
    let mut rows: BTreeMap<Category, CategorySummary> = BTreeMap::new();
    for record in records {
        let row = rows.entry(record.category()).or_insert(CategorySummary {
            category: record.category(),
            total: Decimal::ZERO,
            count: 0,
        });
        row.total += record.amount();
        row.count += 1;
    }

    let mut summary: Vec<CategorySummary> = rows.into_values().collect();
    summary.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));
    summary
}

pub fn grand_total(records: &[ExpenseRecord]) -> Decimal {
    records.iter().map(ExpenseRecord::amount).sum()
}
