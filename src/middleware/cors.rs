//! Middleware de CORS
//!
//! Cualquier origen, método y header, con credenciales. El origen de la
//! request se refleja en la respuesta porque `*` no es válido junto a
//! `Access-Control-Allow-Credentials`.

use tower_http::cors::CorsLayer;

/// Crear middleware de CORS permisivo
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
