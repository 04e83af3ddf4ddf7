use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes;

/// The whole service: stateless routes behind a CORS layer that admits any origin.
pub fn create_app() -> Router {
    routes::routes().layer(CorsLayer::permissive())
}
