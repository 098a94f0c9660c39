// 💾 Persistence Adapter - ledger <-> CSV
//
// File layout: UTF-8, header row `Date,Category,Amount,Description`, one
// record per row, standard CSV quoting.

use crate::error::{LoadError, RecordError, SaveError};
use crate::record::ExpenseRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Column names, in file order.
pub const HEADER: [&str; 4] = ["Date", "Category", "Amount", "Description"];

const TMP_SUFFIX: &str = "tmp";

// ============================================================================
// LOAD POLICY
// ============================================================================

/// What to do with a row that does not fit the schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    /// Any bad row fails the whole load
    #[default]
    Strict,
    /// Bad rows are set aside and reported; good rows are kept
    Quarantine,
}

impl LoadMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadMode::Strict => "strict",
            LoadMode::Quarantine => "quarantine",
        }
    }
}

impl fmt::Display for LoadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoadMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(LoadMode::Strict),
            "quarantine" => Ok(LoadMode::Quarantine),
            other => Err(other.to_string()),
        }
    }
}

/// A row that failed validation during a quarantining load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based line in the source file
    pub line: u64,
    pub raw: Vec<String>,
    pub reason: RecordError,
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub records: Vec<ExpenseRecord>,
    pub rejected: Vec<RejectedRow>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

// ============================================================================
// LOAD
// ============================================================================

/// Parse a CSV stream in strict mode.
pub fn load<R: Read>(source: R) -> Result<Vec<ExpenseRecord>, LoadError> {
    load_with_mode(source, LoadMode::Strict).map(|report| report.records)
}

/// Parse a CSV stream, validating the header and every row.
///
/// Header and stream-level failures always fail the load. Row failures fail
/// it in [`LoadMode::Strict`] and are collected in [`LoadMode::Quarantine`].
pub fn load_with_mode<R: Read>(source: R, mode: LoadMode) -> Result<LoadReport, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    check_header(rdr.headers()?)?;

    let mut report = LoadReport::default();

    for result in rdr.records() {
        let row = result?;
        let line = row.position().map(|pos| pos.line()).unwrap_or(0);

        match parse_row(&row) {
            Ok(record) => report.records.push(record),
            Err(reason) => match mode {
                LoadMode::Strict => return Err(LoadError::Row { line, source: reason }),
                LoadMode::Quarantine => {
                    tracing::warn!(line, %reason, "quarantined expense row");
                    report.rejected.push(RejectedRow {
                        line,
                        raw: row.iter().map(str::to_string).collect(),
                        reason,
                    });
                }
            },
        }
    }

    tracing::debug!(
        accepted = report.records.len(),
        rejected = report.rejected.len(),
        "parsed expense file"
    );

    Ok(report)
}

/// Open `path` and load it.
pub fn load_from_path(path: &Path, mode: LoadMode) -> Result<LoadReport, LoadError> {
    let file = File::open(path)?;
    load_with_mode(BufReader::new(file), mode)
}

fn check_header(headers: &csv::StringRecord) -> Result<(), LoadError> {
    let found: Vec<String> = headers
        .iter()
        .map(|name| name.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let matches = found.len() == HEADER.len()
        && found
            .iter()
            .zip(HEADER)
            .all(|(got, want)| got.eq_ignore_ascii_case(want));

    if matches {
        Ok(())
    } else {
        Err(LoadError::Schema {
            expected: HEADER.iter().map(|name| name.to_string()).collect(),
            found,
        })
    }
}

fn parse_row(row: &csv::StringRecord) -> Result<ExpenseRecord, RecordError> {
    if row.len() != HEADER.len() {
        return Err(RecordError::FieldCount {
            expected: HEADER.len(),
            found: row.len(),
        });
    }
    ExpenseRecord::parse(&row[0], &row[1], &row[2], &row[3])
}

// ============================================================================
// SAVE
// ============================================================================

/// Write `records` to `writer` as CSV, header first.
pub fn save_to_writer<W: Write>(records: &[ExpenseRecord], writer: W) -> Result<(), SaveError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for record in records {
        wtr.write_record(&record.to_row())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save `records` to `path`, overwriting whatever is there.
///
/// The data is written to a sibling temp file and renamed into place, so the
/// destination holds either the old or the new content, never a partial file.
pub fn save(records: &[ExpenseRecord], path: &Path) -> Result<(), SaveError> {
    let tmp = tmp_path(path);

    let result = write_file(records, &tmp).and_then(|()| fs::rename(&tmp, path).map_err(SaveError::from));

    if result.is_err() {
        // Best effort: the temp file may not exist if create failed
        let _ = fs::remove_file(&tmp);
    }

    result
}

fn write_file(records: &[ExpenseRecord], path: &Path) -> Result<(), SaveError> {
    let mut file = File::create(path)?;
    save_to_writer(records, &mut file)?;
    file.sync_all()?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
