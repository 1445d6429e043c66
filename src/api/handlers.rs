//! HTTP request handlers

use super::types::{ErrorResponse, MessageRequest, MessageResponse, StartResponse};
use super::AppState;
use crate::messages::{main_keyboard, GREETING};
use crate::runtime::UserId;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Longest message text accepted, in bytes
pub const MAX_TEXT_LEN: usize = 4096;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/sessions/:user_id/start", post(start_session))
        .route("/api/sessions/:user_id/messages", post(send_message))
        .route("/version", get(get_version))
        .with_state(state)
}

async fn start_session(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<StartResponse>, AppError> {
    let user_id = parse_user_id(user_id)?;
    state.dispatcher.start_session(&user_id).await;
    Ok(Json(StartResponse {
        text: GREETING.to_string(),
        keyboard: main_keyboard(),
    }))
}

async fn send_message(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<MessageRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let user_id = parse_user_id(user_id)?;
    if req.text.len() > MAX_TEXT_LEN {
        return Err(AppError::BadRequest(format!(
            "text exceeds {MAX_TEXT_LEN} bytes"
        )));
    }
    let dispatched = state.dispatcher.dispatch(&user_id, &req.text).await;
    Ok(Json(dispatched.into()))
}

async fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

fn parse_user_id(raw: String) -> Result<UserId, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::BadRequest("user id must not be empty".to_string()));
    }
    Ok(UserId::from(raw))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
