//! Port Operations - registro de vehículos
//!
//! API HTTP (Axum) con CRUD sobre la tabla `vehicles` en SQLite.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
