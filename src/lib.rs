// Expense Tracker - Core Library
// Shared by the terminal UI, the web server, and tests

pub mod config;
pub mod error;
pub mod ledger;
pub mod record;
pub mod report;
pub mod storage;
pub mod tracker;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigError, LoadError, RecordError, SaveError};
pub use ledger::Ledger;
pub use record::{Category, ExpenseRecord};
pub use report::{aggregate_by_category, grand_total, summarize, CategorySummary};
pub use storage::{load, load_from_path, load_with_mode, save, save_to_writer, LoadMode, LoadReport, RejectedRow};
pub use tracker::ExpenseTracker;

use std::sync::Once;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

static INIT_TRACING: Once = Once::new();

/// Install the global `tracing` subscriber once.
///
/// `RUST_LOG` takes precedence; without it the library logs at `info`.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("expense_tracker=info,expense_server=info,tower_http=info"));

        // A subscriber may already be set by an embedding application
        let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_init_tracing_is_idempotent() {
        super::init_tracing();
        super::init_tracing();
    }
}
