//! Configuración de conexión a SQLite
//!
//! Este módulo abre el pool de conexiones y prepara el schema de la tabla
//! `vehicles` al arrancar.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::DatabaseConfig;

const CREATE_VEHICLES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS vehicles (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        amp_number  TEXT NOT NULL,
        driver_name TEXT NOT NULL,
        status      TEXT NOT NULL DEFAULT '',
        position    TEXT NOT NULL DEFAULT '',
        cargo       TEXT NOT NULL DEFAULT '',
        alert       TEXT NOT NULL DEFAULT ''
    )
"#;

const CREATE_AMP_NUMBER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS ix_vehicles_amp_number ON vehicles (amp_number)";

/// Handle explícito a la base de datos, creado en `main` y compartido vía `AppState`
#[derive(Debug, Clone)]
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Abrir el pool y crear el schema si no existe
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = config
            .create_pool()
            .await
            .with_context(|| format!("could not open database at '{}'", config.url))?;

        run_migrations(&pool)
            .await
            .context("could not create the vehicles schema")?;

        info!("🗄️  Base de datos lista en {}", config.url);
        Ok(Self { pool })
    }

    /// Conexión desde `DATABASE_URL`
    pub async fn new_default() -> Result<Self> {
        Self::connect(&DatabaseConfig::from_env()?).await
    }

    /// Base de datos en memoria, aislada por instancia
    pub async fn in_memory() -> Result<Self> {
        Self::connect(&DatabaseConfig::in_memory()).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Cerrar el pool esperando a que se devuelvan las conexiones
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Crear la tabla de vehículos y su índice (idempotente)
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query(CREATE_VEHICLES_TABLE).execute(&mut *tx).await?;
    sqlx::query(CREATE_AMP_NUMBER_INDEX).execute(&mut *tx).await?;
    tx.commit().await
}
