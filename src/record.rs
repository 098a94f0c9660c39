// 🧾 Expense Record - one typed ledger entry
//
// Every record is validated when it is built, so a ledger can only ever hold
// non-negative, cent-precision amounts with a known category.

use crate::error::RecordError;
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Text form of [`ExpenseRecord::date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Amounts are kept in currency units with two decimal places.
pub const AMOUNT_SCALE: u32 = 2;

/// Largest accepted amount (10^15). Far below `Decimal::MAX`, so summing a
/// ledger of any realistic length cannot overflow.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

// ============================================================================
// CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Utilities,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
            Category::Other => "Other",
        }
    }

    /// Next category, wrapping around (used by selection widgets)
    pub fn next(&self) -> Self {
        match self {
            Category::Food => Category::Transport,
            Category::Transport => Category::Entertainment,
            Category::Entertainment => Category::Utilities,
            Category::Utilities => Category::Other,
            Category::Other => Category::Food,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Category::Food => Category::Other,
            Category::Transport => Category::Food,
            Category::Entertainment => Category::Transport,
            Category::Utilities => Category::Entertainment,
            Category::Other => Category::Utilities,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == trimmed)
            .ok_or_else(|| RecordError::UnknownCategory(trimmed.to_string()))
    }
}

// ============================================================================
// EXPENSE RECORD
// ============================================================================

/// One expense entry.
///
/// Fields are private so that the only way in is through [`ExpenseRecord::new`]
/// or [`ExpenseRecord::parse`], both of which enforce `amount >= 0` and round
/// the amount to cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseRecord {
    date: NaiveDate,
    category: Category,
    amount: Decimal,
    description: String,
}

impl ExpenseRecord {
    pub fn new(
        date: NaiveDate,
        category: Category,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<Self, RecordError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(RecordError::NegativeAmount(amount));
        }
        if amount > MAX_AMOUNT {
            return Err(RecordError::AmountTooLarge(amount));
        }

        Ok(ExpenseRecord {
            date,
            category,
            amount: to_cents(amount),
            description: description.into(),
        })
    }

    /// Build a record from its four text fields, as they appear in a form or
    /// a CSV row.
    pub fn parse(
        date: &str,
        category: &str,
        amount: &str,
        description: &str,
    ) -> Result<Self, RecordError> {
        let date = parse_date(date)?;
        let category = category.parse::<Category>()?;
        let amount = parse_amount(amount)?;
        ExpenseRecord::new(date, category, amount, description)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Row form used by the persistence layer: `[date, category, amount, description]`
    pub fn to_row(&self) -> [String; 4] {
        [
            self.date.format(DATE_FORMAT).to_string(),
            self.category.to_string(),
            format_amount(self.amount),
            self.description.clone(),
        ]
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| RecordError::InvalidDate(raw.trim().to_string()))
}

/// Parse a decimal amount; sign is checked by [`ExpenseRecord::new`].
pub fn parse_amount(raw: &str) -> Result<Decimal, RecordError> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed).map_err(|_| RecordError::InvalidAmount(trimmed.to_string()))
}

/// Two-decimal text form of an amount (`12.5` → `12.50`).
pub fn format_amount(amount: Decimal) -> String {
    to_cents(amount).to_string()
}

fn to_cents(amount: Decimal) -> Decimal {
    // -0.00 would otherwise print with a sign
    if amount.is_zero() {
        let mut zero = Decimal::ZERO;
        zero.rescale(AMOUNT_SCALE);
        return zero;
    }
    let mut value = amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(AMOUNT_SCALE);
    value
}
