// 🌐 HTTP command endpoint
//
// The same pipeline as the terminal view, behind JSON routes. One mutex
// around Logic serialises every request.

use crate::error::LogicError;
use crate::logic::Logic;
use crate::model::Person;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    logic: Arc<Mutex<Logic>>,
}

impl AppState {
    pub fn new(logic: Logic) -> Self {
        AppState {
            logic: Arc::new(Mutex::new(logic)),
        }
    }

    /// A panic mid-command leaves the book in whatever state the last
    /// completed step produced, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Logic> {
        self.logic.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// API Response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub command: String,
}

/// One row of the displayed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    pub index: usize,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub edu_level: String,
    pub current_year: String,
    pub current_grade: String,
    pub expected_grade: String,
    pub tags: Vec<String>,
    pub payment_fee: u32,
    pub payment_date: String,
    pub payment_status: String,
}

impl PersonResponse {
    fn new(index: usize, person: &Person) -> Self {
        let payment = person.payment_info();
        Self {
            index,
            name: person.name().to_string(),
            phone: person.phone().to_string(),
            email: person.email().to_string(),
            address: person.address().to_string(),
            edu_level: person.edu_level().to_string(),
            current_year: person.current_year().to_string(),
            current_grade: person.current_grade().to_string(),
            expected_grade: person.expected_grade().to_string(),
            tags: person.tags().iter().map(|t| t.full_tag().to_string()).collect(),
            payment_fee: payment.fee(),
            payment_date: payment.date_string(),
            payment_status: payment.status().as_str().to_string(),
        }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/persons - The displayed list, one-based indices
async fn get_persons(State(state): State<AppState>) -> impl IntoResponse {
    let persons: Vec<PersonResponse> = state
        .lock()
        .filtered_persons()
        .iter()
        .enumerate()
        .map(|(i, person)| PersonResponse::new(i + 1, person))
        .collect();
    Json(ApiResponse::ok(persons))
}

/// POST /api/command - Run one command line
async fn run_command(
    State(state): State<AppState>,
    Json(request): Json<CommandRequest>,
) -> Response {
    let outcome = state.lock().execute(&request.command);
    match outcome {
        Ok(result) => (StatusCode::OK, Json(ApiResponse::ok(result.feedback))).into_response(),
        Err(e) => {
            let status = if e.is_user_error() {
                StatusCode::BAD_REQUEST
            } else {
                warn!(error = %e, "command failed to persist");
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(ApiResponse::<String>::err(e.to_string()))).into_response()
        }
    }
}

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/persons", get(get_persons))
        .route("/command", post(run_command))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

pub async fn serve(logic: Logic, addr: &str) -> anyhow::Result<()> {
    use anyhow::Context;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to address: {addr}"))?;
    info!(addr, "server listening");

    axum::serve(listener, router(AppState::new(logic)))
        .await
        .context("Server stopped unexpectedly")
}
