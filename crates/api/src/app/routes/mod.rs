use axum::{routing::get, Router};

pub mod attribute_values;
pub mod attributes;
pub mod products;
pub mod system;

/// Router for all catalog endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/attributes", attributes::router())
        .nest("/attribute-values", attribute_values::router())
        .nest("/products", products::router())
}
