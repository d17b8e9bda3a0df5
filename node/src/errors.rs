// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use nutri_core::error::NutriError;
use thiserror::Error;

use crate::api::ErrorBody;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] NutriError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    pub fn status(&self) -> StatusCode {
        match self {
            EngineError::Core(e) => match e {
                NutriError::NotFound(_) => StatusCode::NOT_FOUND,
                NutriError::Conflict(_) => StatusCode::CONFLICT,
                NutriError::BadRequest(_) | NutriError::Validation(_) => StatusCode::BAD_REQUEST,
                NutriError::Io(_) | NutriError::Serde(_) | NutriError::Persistence(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            EngineError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

impl From<JsonRejection> for EngineError {
    fn from(e: JsonRejection) -> Self {
        EngineError::InvalidInput(e.body_text())
    }
}

impl From<PathRejection> for EngineError {
    fn from(e: PathRejection) -> Self {
        EngineError::InvalidInput(e.body_text())
    }
}
