//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El pool es el único estado compartido
//! entre requests.

use sqlx::SqlitePool;

use crate::database::DatabaseConnection;

#[derive(Clone, Debug)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl From<&DatabaseConnection> for AppState {
    fn from(db: &DatabaseConnection) -> Self {
        Self::new(db.pool().clone())
    }
}
