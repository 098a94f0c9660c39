// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{bail, Context, Result};
use expense_tracker::record::format_amount;
use expense_tracker::{Config, ExpenseRecord, ExpenseTracker};
use std::env;
use std::path::PathBuf;

const USAGE: &str = "\
Usage:
  expense-tracker                         open the terminal UI
  expense-tracker report [FILE]           print per-category totals
  expense-tracker add DATE CATEGORY AMOUNT [DESCRIPTION...]";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = Config::from_env().context("Failed to load configuration")?;

    match args.get(1).map(String::as_str) {
        Some("report") => {
            expense_tracker::init_tracing();
            run_report(&config, args.get(2).map(PathBuf::from))
        }
        Some("add") => {
            expense_tracker::init_tracing();
            run_add(&config, &args[2..])
        }
        Some("help") | Some("--help") | Some("-h") => {
            println!("{}", USAGE);
            Ok(())
        }
        Some(other) => bail!("unknown command `{}`\n\n{}", other, USAGE),
        None => run_ui_mode(config),
    }
}

fn run_report(config: &Config, file: Option<PathBuf>) -> Result<()> {
    let path = file.unwrap_or_else(|| config.destination.clone());
    let mut tracker = ExpenseTracker::new(config);

    let report = tracker
        .load_from_path(&path)
        .with_context(|| format!("Error loading the file {}", path.display()))?;

    for row in &report.rejected {
        eprintln!("⚠️  skipped line {}: {}", row.line, row.reason);
    }

    let summary = tracker.summary();
    if summary.is_empty() {
        println!("No expenses to visualize!");
        return Ok(());
    }

    let total = tracker.total();
    println!("📊 Expense Report: {}", path.display());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{:<15} {:>6} {:>12} {:>7}", "Category", "Count", "Total", "Share");
    for row in &summary {
        println!(
            "{:<15} {:>6} {:>12} {:>6}%",
            row.category.as_str(),
            row.count,
            format_amount(row.total),
            row.share_of(total)
        );
    }
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{:<15} {:>6} {:>12}", "Total", tracker.ledger().len(), format_amount(total));

    Ok(())
}

fn run_add(config: &Config, args: &[String]) -> Result<()> {
    if args.len() < 3 {
        bail!("add needs DATE CATEGORY AMOUNT\n\n{}", USAGE);
    }
    let description = args[3..].join(" ");
    let record = ExpenseRecord::parse(&args[0], &args[1], &args[2], &description)
        .context("Invalid expense")?;

    let mut tracker = ExpenseTracker::new(config);
    if config.destination.exists() {
        let report = tracker
            .load_from_path(&config.destination)
            .with_context(|| format!("Error loading the file {}", config.destination.display()))?;

        // Saving now would rewrite the file without the quarantined rows
        if !report.rejected.is_empty() {
            let lines: Vec<String> = report.rejected.iter().map(|row| row.line.to_string()).collect();
            bail!(
                "{} has invalid rows (lines {}); fix them before adding",
                config.destination.display(),
                lines.join(", ")
            );
        }
    }

    tracker.add_expense(record);
    let path = tracker.save().context("Failed to save expenses")?;

    println!("✅ Expense added ({} total) → {}", tracker.ledger().len(), path.display());

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: Config) -> Result<()> {
    // Logging would draw over the alternate screen unless explicitly requested
    if env::var_os("RUST_LOG").is_some() {
        expense_tracker::init_tracing();
    }

    let today = chrono::Local::now().date_naive().format(expense_tracker::record::DATE_FORMAT).to_string();
    let feedback = std::time::Duration::from_millis(config.feedback_ms);
    let tracker = ExpenseTracker::new(&config);

    let mut app = ui::App::new(tracker, &today, feedback);
    ui::run_ui(&mut app)?;

    println!("\n✅ Expense Tracker closed");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: Config) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use web UI: cargo run --bin expense-server --features server");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use expense_tracker::LoadMode;
    use std::fs;

    const HEADER_LINE: &str = "Date,Category,Amount,Description\n";

    fn quarantine_config(dir: &tempfile::TempDir) -> Config {
        Config {
            destination: dir.path().join("expenses.csv"),
            load_mode: LoadMode::Quarantine,
            ..Config::default()
        }
    }

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn test_add_appends_to_clean_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = quarantine_config(&dir);
        fs::write(&config.destination, format!("{}2024-01-05,Food,12.50,lunch\n", HEADER_LINE)).unwrap();

        run_add(&config, &args(&["2024-01-06", "Transport", "5", "bus", "ride"])).unwrap();

        let content = fs::read_to_string(&config.destination).unwrap();
        assert_eq!(
            content,
            format!("{}2024-01-05,Food,12.50,lunch\n2024-01-06,Transport,5.00,bus ride\n", HEADER_LINE)
        );
    }

    #[test]
    fn test_add_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = quarantine_config(&dir);

        run_add(&config, &args(&["2024-01-05", "Food", "3"])).unwrap();

        let content = fs::read_to_string(&config.destination).unwrap();
        assert_eq!(content, format!("{}2024-01-05,Food,3.00,\n", HEADER_LINE));
    }

    #[test]
    fn test_add_refuses_file_with_rejected_rows() {
        let dir = tempfile::tempdir().unwrap();
        let config = quarantine_config(&dir);
        let original = format!(
            "{}2024-01-05,Food,12.50,lunch\n2024-01-06,Groceries,4.00,milk\n",
            HEADER_LINE
        );
        fs::write(&config.destination, &original).unwrap();

        let err = run_add(&config, &args(&["2024-01-07", "Food", "1"])).unwrap_err();

        assert!(err.to_string().contains("lines 3"));
        assert_eq!(fs::read_to_string(&config.destination).unwrap(), original);
    }

    #[test]
    fn test_add_rejects_invalid_expense() {
        let dir = tempfile::tempdir().unwrap();
        let config = quarantine_config(&dir);

        assert!(run_add(&config, &args(&["2024-01-07", "Food", "-1"])).is_err());
        assert!(run_add(&config, &args(&["2024-01-07", "Food"])).is_err());
        assert!(!config.destination.exists());
    }
}
