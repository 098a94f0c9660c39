// Session facade handed to every shell handler: one ledger plus where it is
// saved and how loads are validated.

use crate::config::Config;
use crate::error::{LoadError, SaveError};
use crate::ledger::Ledger;
use crate::record::{Category, ExpenseRecord};
use crate::report::{self, CategorySummary};
use crate::storage::{self, LoadMode, LoadReport};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ExpenseTracker {
    ledger: Ledger,
    destination: PathBuf,
    load_mode: LoadMode,
}

impl ExpenseTracker {
    pub fn new(config: &Config) -> Self {
        Self {
            ledger: Ledger::new(),
            destination: config.destination.clone(),
            load_mode: config.load_mode,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn load_mode(&self) -> LoadMode {
        self.load_mode
    }

    pub fn add_expense(&mut self, record: ExpenseRecord) {
        tracing::info!(
            date = %record.date(),
            category = %record.category(),
            amount = %record.amount(),
            "expense added"
        );
        self.ledger.append(record);
    }

    /// Save to the configured destination.
    pub fn save(&self) -> Result<&Path, SaveError> {
        self.save_to(&self.destination)?;
        Ok(&self.destination)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SaveError> {
        match storage::save(self.ledger.snapshot(), path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), records = self.ledger.len(), "ledger saved");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ledger save failed");
                Err(err)
            }
        }
    }

    /// Parse `source` and, only if that succeeds, replace the ledger with it.
    pub fn load_from_reader<R: Read>(&mut self, source: R) -> Result<LoadReport, LoadError> {
        let result = storage::load_with_mode(source, self.load_mode);
        self.apply_load(result, "stream")
    }

    pub fn load_from_path(&mut self, path: &Path) -> Result<LoadReport, LoadError> {
        let result = storage::load_from_path(path, self.load_mode);
        self.apply_load(result, &path.display().to_string())
    }

    fn apply_load(
        &mut self,
        result: Result<LoadReport, LoadError>,
        source: &str,
    ) -> Result<LoadReport, LoadError> {
        match result {
            Ok(report) => {
                self.ledger.replace(report.records.clone());
                tracing::info!(
                    source,
                    records = self.ledger.len(),
                    rejected = report.rejected.len(),
                    "ledger loaded"
                );
                Ok(report)
            }
            Err(err) => {
                tracing::warn!(source, error = %err, "ledger load failed, keeping current records");
                Err(err)
            }
        }
    }

    pub fn report(&self) -> BTreeMap<Category, Decimal> {
        report::aggregate_by_category(self.ledger.snapshot())
    }

    pub fn summary(&self) -> Vec<CategorySummary> {
        report::summarize(self.ledger.snapshot())
    }

    pub fn total(&self) -> Decimal {
        self.ledger.total()
    }
}
