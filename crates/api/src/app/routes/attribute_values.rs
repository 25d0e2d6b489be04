use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::patch,
    Json, Router,
};

use vitrine_catalog::{AttributeValue, AttributeValueInput};
use vitrine_core::GlobalId;

use crate::app::routes::attributes::unresolved;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/:id", patch(update_attribute_value).delete(delete_attribute_value))
}

pub async fn update_attribute_value(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<AttributeValueInput>,
) -> axum::response::Response {
    let Ok(value_id) = GlobalId::decode_as::<AttributeValue>(&id) else {
        let errors = [unresolved("id", &id)];
        return (StatusCode::OK, Json(dto::errors_only_to_json("attributeValue", &errors))).into_response();
    };

    match services.update_attribute_value(value_id, body) {
        Ok(payload) => (StatusCode::OK, Json(dto::value_payload_to_json(&payload))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_attribute_value(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let Ok(value_id) = GlobalId::decode_as::<AttributeValue>(&id) else {
        let errors = [unresolved("id", &id)];
        return (StatusCode::OK, Json(dto::errors_only_to_json("attributeValue", &errors))).into_response();
    };

    match services.delete_attribute_value(value_id) {
        Ok(payload) => (StatusCode::OK, Json(dto::value_payload_to_json(&payload))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
