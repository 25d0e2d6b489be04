use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use vitrine_catalog::Product;
use vitrine_core::GlobalId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/:id", get(get_product))
        .route("/:id/attributes", put(assign_attributes))
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id = match GlobalId::decode_as::<Product>(&id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services.product(product_id) {
        Ok(Some(product)) => (StatusCode::OK, Json(dto::product_to_json(&product))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// Replace the product's attribute mapping from `{slug, value}` pairs.
pub async fn assign_attributes(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::AssignAttributesRequest>,
) -> axum::response::Response {
    let product_id = match GlobalId::decode_as::<Product>(&id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services.assign_product_attributes(product_id, body.attributes) {
        Ok(assignment) => (StatusCode::OK, Json(serde_json::json!({ "attributes": assignment }))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
