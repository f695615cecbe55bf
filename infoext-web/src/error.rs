//! Erros da camada HTTP e o seu mapeamento para status.
//!
//! Entrada malformada vira 400 com a mensagem do problema. Qualquer falha
//! interna vira 500 com corpo genérico; a causa fica apenas no log.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use infoext_core::NlpError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Corpo JSON de erro.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("requisição inválida: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Nlp(#[from] NlpError),

    #[error("falha interna: {0}")]
    Internal(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, ApiError { code: "BAD_REQUEST", message })
            }
            other => {
                error!(error = %other, "falha ao atender requisição");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError { code: "INTERNAL_ERROR", message: "internal server error".to_string() },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
