// HTTP request handlers
use crate::domain::dashboard::DashboardView;
use crate::domain::session::{ParamsUpdate, Session, SessionParams};
use crate::error::{AppError, AppResult};
use crate::infrastructure::csv_export::{predictions_to_csv, EXPORT_FILENAME};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize)]
pub struct SessionCreated {
    pub session_id: Uuid,
}

#[derive(Serialize)]
pub struct RefreshAck {
    pub status: &'static str,
    pub message: String,
}

#[derive(Serialize)]
pub struct SaveAck {
    pub status: &'static str,
    pub message: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Create a session with the default parameter values
pub async fn create_session(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session_id = state.sessions.create().await;
    (StatusCode::CREATED, Json(SessionCreated { session_id }))
}

pub async fn get_params(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<SessionParams>> {
    let session = load_session(&state, &id).await?;
    Ok(Json(session.params))
}

/// Overwrite any subset of the four parameter controls.
pub async fn update_params(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<ParamsUpdate>,
) -> AppResult<Json<SessionParams>> {
    let mut session = load_session(&state, &id).await?;
    session.apply_params(update);
    let params = session.params;
    state.sessions.put(id, session).await;
    Ok(Json(params))
}

/// The refresh trigger: flips the session flag. The fetch itself runs on the
/// next dashboard render.
pub async fn request_refresh(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<RefreshAck>> {
    let mut session = load_session(&state, &id).await?;
    session.request_refresh();
    let message = format!(
        "Fetching predictions for {} using {} model on next render",
        session.params.region.label(),
        session.params.model_choice.label()
    );
    state.sessions.put(id, session).await;
    Ok(Json(RefreshAck {
        status: "scheduled",
        message,
    }))
}

/// One render pass: runs any pending fetch, then returns the current view.
pub async fn render_dashboard(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<DashboardView>> {
    let mut session = load_session(&state, &id).await?;
    let view = state.dashboard.render(&mut session).await;
    state.sessions.put(id, session).await;
    Ok(Json(view))
}

/// Download the prediction table as climate_predictions.csv
pub async fn export_csv(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> AppResult<impl IntoResponse> {
    let session = load_session(&state, &id).await?;
    let table = session.predictions.as_ref().ok_or(AppError::NoPredictions)?;
    let csv = predictions_to_csv(table)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        csv,
    ))
}

/// Placeholder save action: acknowledges without persisting anything.
pub async fn save_predictions(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<SaveAck>> {
    let session = load_session(&state, &id).await?;
    if session.predictions.is_none() {
        return Err(AppError::NoPredictions);
    }
    Ok(Json(SaveAck {
        status: "saved",
        message: "Data saved (simulation, connect a backend later)".to_string(),
    }))
}

async fn load_session(state: &AppState, id: &Uuid) -> AppResult<Session> {
    state
        .sessions
        .get(id)
        .await
        .ok_or(AppError::SessionNotFound)
}
