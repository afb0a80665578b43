//! Router de la API
//!
//! Une las rutas de vehículos con el endpoint raíz y aplica las capas
//! de CORS y trazas HTTP.

pub mod vehicle_routes;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Construir el router completo con su estado
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(vehicle_routes::create_vehicle_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state)
}

/// Endpoint raíz, sirve también de health check
async fn root() -> Json<Value> {
    Json(json!({ "msg": "Port Operations DB API" }))
}
