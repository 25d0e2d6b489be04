use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};

use vitrine_catalog::{
    Attribute, AttributeCreateInput, AttributeFilter, AttributeUpdateInput, AttributeValue,
    AttributeValueInput, Category, FieldError, Pagination,
};
use vitrine_core::GlobalId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_attributes).post(create_attribute))
        .route("/:id", patch(update_attribute).delete(delete_attribute))
        .route("/:id/values", post(create_attribute_value))
}

/// Field error for a global id that does not decode.
pub(crate) fn unresolved(field: &str, token: &str) -> FieldError {
    FieldError {
        field: field.to_string(),
        message: format!("Couldn't resolve to a node: {token}"),
    }
}

pub async fn list_attributes(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::AttributesQuery>,
) -> axum::response::Response {
    let mut filter = AttributeFilter::default();
    if let Some(token) = &query.id {
        match GlobalId::decode_as::<Attribute>(token) {
            Ok(id) => filter.id = Some(id),
            Err(e) => return errors::domain_error_to_response(e),
        }
    }
    if let Some(token) = &query.in_category {
        match GlobalId::decode_as::<Category>(token) {
            Ok(id) => filter.in_category = Some(id),
            Err(e) => return errors::domain_error_to_response(e),
        }
    }

    match services.attributes(filter, Pagination::new(query.limit, query.offset)) {
        Ok(page) => (StatusCode::OK, Json(dto::connection_to_json(&page))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_attribute(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<AttributeCreateInput>,
) -> axum::response::Response {
    match services.create_attribute(body) {
        Ok(payload) => (StatusCode::OK, Json(dto::attribute_payload_to_json(&payload))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_attribute(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateAttributeRequest>,
) -> axum::response::Response {
    let Ok(attribute_id) = GlobalId::decode_as::<Attribute>(&id) else {
        let errors = [unresolved("id", &id)];
        return (StatusCode::OK, Json(dto::errors_only_to_json("attribute", &errors))).into_response();
    };

    let mut remove_values = Vec::with_capacity(body.remove_values.len());
    let mut bad_ids = Vec::new();
    for token in &body.remove_values {
        match GlobalId::decode_as::<AttributeValue>(token) {
            Ok(value_id) => remove_values.push(value_id),
            Err(_) => bad_ids.push(unresolved("removeValues", token)),
        }
    }
    if !bad_ids.is_empty() {
        return (StatusCode::OK, Json(dto::errors_only_to_json("attribute", &bad_ids))).into_response();
    }

    let input = AttributeUpdateInput {
        name: body.name,
        add_values: body.add_values,
        remove_values,
    };
    match services.update_attribute(attribute_id, input) {
        Ok(payload) => (StatusCode::OK, Json(dto::attribute_payload_to_json(&payload))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_attribute(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let Ok(attribute_id) = GlobalId::decode_as::<Attribute>(&id) else {
        let errors = [unresolved("id", &id)];
        return (StatusCode::OK, Json(dto::errors_only_to_json("attribute", &errors))).into_response();
    };

    match services.delete_attribute(attribute_id) {
        Ok(payload) => (StatusCode::OK, Json(dto::attribute_payload_to_json(&payload))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_attribute_value(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<AttributeValueInput>,
) -> axum::response::Response {
    let Ok(attribute_id) = GlobalId::decode_as::<Attribute>(&id) else {
        let errors = [unresolved("attribute", &id)];
        return (StatusCode::OK, Json(dto::errors_only_to_json("attributeValue", &errors))).into_response();
    };

    match services.create_attribute_value(attribute_id, body) {
        Ok(payload) => (StatusCode::OK, Json(dto::value_payload_to_json(&payload))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
