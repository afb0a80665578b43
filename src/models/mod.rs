//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema SQLite.

pub mod vehicle;

pub use vehicle::{Vehicle, VehicleFields};
