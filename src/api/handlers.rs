//! HTTP request handlers

use super::sse::sse_stream;
use super::types::{
    ErrorResponse, LanguageRequest, ModeRequest, PresetRequest, PresetsResponse, QueuedResponse,
    RequestedMode, SessionResponse, SuccessResponse, TextRequest,
};
use super::AppState;
use crate::faq;
use crate::i18n::{Language, UiStrings};
use crate::runtime::{SessionError, SseEvent};
use crate::state_machine::Event;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Localized menu
        .route("/api/presets/:lang", get(get_presets))
        // Session lifecycle
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:id", get(get_session))
        // SSE streaming
        .route("/api/sessions/:id/stream", get(stream_session))
        // User actions
        .route("/api/sessions/:id/language", post(select_language))
        .route("/api/sessions/:id/mode", post(choose_mode))
        .route("/api/sessions/:id/draft", post(update_draft))
        .route("/api/sessions/:id/preset", post(submit_preset))
        .route("/api/sessions/:id/ask", post(submit_free_text))
        .route("/api/sessions/:id/reset", post(reset_session))
        .route("/api/sessions/:id/close", post(close_session))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Presets
// ============================================================

async fn get_presets(Path(lang): Path<String>) -> Result<Json<PresetsResponse>, AppError> {
    let language = parse_language(&lang)?;
    Ok(Json(PresetsResponse {
        language,
        ui: UiStrings::for_language(language),
        presets: faq::presets(language),
    }))
}

// ============================================================
// Session Lifecycle
// ============================================================

async fn create_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let (session_id, session_state) = state.sessions.create().await;
    Json(SessionResponse {
        session_id,
        state: session_state,
    })
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    let session_state = state.sessions.snapshot(&id).await?;
    Ok(Json(SessionResponse {
        session_id: id,
        state: session_state,
    }))
}

async fn close_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.sessions.close(&id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

// ============================================================
// SSE Streaming
// ============================================================

async fn stream_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (session_state, broadcast_rx) = state.sessions.subscribe(&id).await?;

    let init_event = SseEvent::Init {
        session_id: id,
        state: session_state,
    };

    Ok(sse_stream(init_event, broadcast_rx))
}

// ============================================================
// User Actions
// ============================================================

async fn select_language(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<LanguageRequest>,
) -> Result<Json<QueuedResponse>, AppError> {
    let language = parse_language(&req.language)?;
    queue(&state, &id, Event::SelectLanguage { language }).await
}

async fn choose_mode(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ModeRequest>,
) -> Result<Json<QueuedResponse>, AppError> {
    let event = match req.mode {
        RequestedMode::Menu => Event::ChooseMenu,
        RequestedMode::FreeText => Event::ChooseFreeText,
    };
    queue(&state, &id, event).await
}

async fn update_draft(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<TextRequest>,
) -> Result<Json<QueuedResponse>, AppError> {
    queue(&state, &id, Event::UpdateDraft { text: req.text }).await
}

/// Looked up by the session against its own language. An unknown
/// question comes back as an SSE error.
async fn submit_preset(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<PresetRequest>,
) -> Result<Json<QueuedResponse>, AppError> {
    let event = Event::SubmitPreset {
        question: req.question,
    };
    queue(&state, &id, event).await
}

async fn submit_free_text(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<TextRequest>,
) -> Result<Json<QueuedResponse>, AppError> {
    queue(&state, &id, Event::SubmitFreeText { text: req.text }).await
}

async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QueuedResponse>, AppError> {
    queue(&state, &id, Event::Reset).await
}

/// Hand an event to the session runtime. Rejections arrive over SSE.
async fn queue(
    state: &AppState,
    id: &str,
    event: Event,
) -> Result<Json<QueuedResponse>, AppError> {
    state.sessions.send_event(id, event).await?;
    Ok(Json(QueuedResponse { queued: true }))
}

fn parse_language(raw: &str) -> Result<Language, AppError> {
    raw.parse::<Language>()
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

// ============================================================
// Version
// ============================================================

async fn get_version() -> &'static str {
    concat!("fan-welcome ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
pub(crate) enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::NotFound(_) => AppError::NotFound(e.to_string()),
            SessionError::Stopped(_) => AppError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
