//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.
//!
//! Todas las respuestas de error llevan un campo `detail`: un mensaje para
//! los 404/500, o una lista de errores por campo para los 422.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};
use validator::{ValidationError, ValidationErrors};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid request body: {message}")]
    InvalidBody { kind: &'static str, message: String },

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Un error de validación asociado a un campo del request
#[derive(Debug, Serialize, PartialEq)]
struct FieldError {
    loc: Vec<String>,
    msg: String,
    #[serde(rename = "type")]
    kind: String,
}

impl FieldError {
    fn new(loc: &[&str], msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|part| part.to_string()).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

/// Aplanar los errores de `validator`, ordenados por nombre de campo
fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                FieldError::new(&["body", field], msg, e.code.to_string())
            })
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Database(e) => {
                error!("❌ Error de base de datos: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, json!("Internal server error"))
            }

            AppError::Validation(e) => {
                warn!("Validation error: {}", e);
                (StatusCode::UNPROCESSABLE_ENTITY, json!(field_errors(&e)))
            }

            AppError::InvalidBody { kind, message } => {
                warn!("Invalid request body: {}", message);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!([FieldError::new(&["body"], message, kind)]),
                )
            }

            AppError::InvalidPath(message) => {
                warn!("Invalid path parameter: {}", message);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!([FieldError::new(&["path", "vehicle_id"], message, "int_parsing")]),
                )
            }

            AppError::NotFound(msg) => {
                warn!("Resource not found: {}", msg);
                (StatusCode::NOT_FOUND, json!(msg))
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "type_error",
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "body_error",
        };
        AppError::InvalidBody {
            kind,
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidPath(rejection.body_text())
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    let mut error = ValidationError::new("value_error");
    error.message = Some(message.into());

    let mut errors = ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str) -> AppError {
    AppError::NotFound(format!("{} not found", resource))
}
