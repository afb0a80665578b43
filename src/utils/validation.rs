//! Utilidades de validación
//!
//! Extractores de Axum que convierten los rechazos de `Json` y `Path` en
//! `AppError`, para que todos los errores de entrada salgan con el mismo
//! formato de respuesta.

use axum::extract::{FromRequest, FromRequestParts};
use validator::Validate;

use super::errors::{AppError, AppResult};

/// Body JSON cuyo rechazo se reporta como `AppError`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Parámetro de ruta cuyo rechazo se reporta como `AppError`
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Ejecutar las reglas de `validator` de un payload
pub fn validate_payload<T: Validate>(payload: &T) -> AppResult<()> {
    payload.validate()?;
    Ok(())
}
