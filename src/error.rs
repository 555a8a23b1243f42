// Application error types and their HTTP mapping
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Weather API error: {0}")]
    WeatherApi(String),

    #[error("Weather API returned {actual} values for {variable}, expected {expected} daily values")]
    DataMismatch {
        variable: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("End date {end} precedes start date {start}")]
    EmptyRange { start: NaiveDate, end: NaiveDate },

    #[error("Session not found")]
    SessionNotFound,

    #[error("No predictions available, refresh first")]
    NoPredictions,

    #[error("CSV export error: {0}")]
    Csv(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            AppError::WeatherApi(_) => "WEATHER_API_ERROR",
            AppError::DataMismatch { .. } => "DATA_MISMATCH",
            AppError::EmptyRange { .. } => "EMPTY_DATE_RANGE",
            AppError::SessionNotFound => "SESSION_NOT_FOUND",
            AppError::NoPredictions => "NO_PREDICTIONS",
            AppError::Csv(_) => "CSV_EXPORT_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::WeatherApi(_) | AppError::DataMismatch { .. } => StatusCode::BAD_GATEWAY,
            AppError::EmptyRange { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::SessionNotFound | AppError::NoPredictions => StatusCode::NOT_FOUND,
            AppError::Csv(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {}", self);

        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.code(),
                message: self.to_string(),
            },
        };
        (self.status(), Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
