// Expense Tracker - Web Server
// REST API + single-page UI with Axum

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use expense_tracker::record::format_amount;
use expense_tracker::{CategorySummary, Config, ExpenseRecord, ExpenseTracker};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared application state: the one session ledger
#[derive(Clone)]
struct AppState {
    tracker: Arc<Mutex<ExpenseTracker>>,
}

impl AppState {
    fn new(tracker: ExpenseTracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }

    /// A panic mid-handler cannot leave the ledger half-written, so a
    /// poisoned lock is still usable.
    fn tracker(&self) -> MutexGuard<'_, ExpenseTracker> {
        self.tracker.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: (),
            error: Some(message.into()),
        }
    }
}

fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::error(message))).into_response()
}

/// Form payload; fields arrive as text and go through the same validation as
/// a CSV row.
#[derive(Deserialize)]
struct AddExpenseRequest {
    date: String,
    category: String,
    amount: String,
    #[serde(default)]
    description: String,
}

#[derive(Serialize)]
struct SaveResponse {
    path: String,
    records: usize,
}

#[derive(Serialize)]
struct RejectedRowResponse {
    line: u64,
    raw: Vec<String>,
    reason: String,
}

#[derive(Serialize)]
struct LoadResponse {
    loaded: usize,
    rejected: Vec<RejectedRowResponse>,
}

#[derive(Serialize)]
struct ReportResponse {
    categories: Vec<CategorySummary>,
    total: String,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/expenses - All records in insertion order
async fn list_expenses(State(state): State<AppState>) -> impl IntoResponse {
    let tracker = state.tracker();
    let records: Vec<ExpenseRecord> = tracker.ledger().snapshot().to_vec();
    Json(ApiResponse::ok(records))
}

/// POST /api/expenses - Validate and append one record
async fn add_expense(State(state): State<AppState>, Json(req): Json<AddExpenseRequest>) -> Response {
    match ExpenseRecord::parse(&req.date, &req.category, &req.amount, &req.description) {
        Ok(record) => {
            state.tracker().add_expense(record.clone());
            (StatusCode::CREATED, Json(ApiResponse::ok(record))).into_response()
        }
        Err(err) => failure(StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
    }
}

/// POST /api/save - Write the ledger to the configured file
async fn save_expenses(State(state): State<AppState>) -> Response {
    let tracker = state.tracker();
    match tracker.save() {
        Ok(path) => {
            let response = SaveResponse {
                path: path.display().to_string(),
                records: tracker.ledger().len(),
            };
            (StatusCode::OK, Json(ApiResponse::ok(response))).into_response()
        }
        Err(err) => failure(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

/// POST /api/load - Replace the ledger with an uploaded CSV body
async fn load_expenses(State(state): State<AppState>, body: Bytes) -> Response {
    let mut tracker = state.tracker();
    match tracker.load_from_reader(body.as_ref()) {
        Ok(report) => {
            let response = LoadResponse {
                loaded: report.records.len(),
                rejected: report
                    .rejected
                    .into_iter()
                    .map(|row| RejectedRowResponse {
                        line: row.line,
                        raw: row.raw,
                        reason: row.reason.to_string(),
                    })
                    .collect(),
            };
            (StatusCode::OK, Json(ApiResponse::ok(response))).into_response()
        }
        Err(err) => failure(StatusCode::BAD_REQUEST, format!("Error loading the file: {}", err)),
    }
}

/// GET /api/report - Per-category totals for the chart
async fn get_report(State(state): State<AppState>) -> impl IntoResponse {
    let tracker = state.tracker();
    Json(ApiResponse::ok(ReportResponse {
        categories: tracker.summary(),
        total: format_amount(tracker.total()),
    }))
}

/// GET / - Serve index.html
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

fn app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/expenses", get(list_expenses).post(add_expense))
        .route("/save", post(save_expenses))
        .route("/load", post(load_expenses))
        .route("/report", get(get_report))
        .with_state(state);

    Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new("web"))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    expense_tracker::init_tracing();

    let config = Config::from_env().context("Failed to load configuration")?;
    let state = AppState::new(ExpenseTracker::new(&config));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    tracing::info!(
        addr = %config.bind_addr,
        destination = %config.destination.display(),
        load_mode = %config.load_mode,
        "expense server listening"
    );

    println!("🚀 Expense Tracker running on http://{}", config.bind_addr);
    println!("   Press Ctrl+C to stop\n");

    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}
