use serde::Deserialize;
use serde_json::{Value as JsonValue, json};

use vitrine_catalog::{
    Attribute, AttributeConnection, AttributePayload, AttributeSlugInput, AttributeValue,
    AttributeValueInput, AttributeValuePayload, FieldError, Product,
};
use vitrine_core::{Entity, to_global_id};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttributeRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub add_values: Vec<AttributeValueInput>,
    /// Global ids of values to remove.
    #[serde(default)]
    pub remove_values: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributesQuery {
    pub in_category: Option<String>,
    pub id: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct AssignAttributesRequest {
    pub attributes: Vec<AttributeSlugInput>,
}

// -------------------------
// Response mapping
// -------------------------

pub fn value_to_json(value: &AttributeValue) -> JsonValue {
    json!({
        "id": to_global_id::<AttributeValue>(value.id()),
        "name": value.name(),
        "slug": value.slug().as_str(),
        "type": value.value_type().as_str(),
        "value": value.value(),
    })
}

pub fn attribute_to_json(attribute: &Attribute) -> JsonValue {
    json!({
        "id": to_global_id::<Attribute>(attribute.id()),
        "name": attribute.name(),
        "slug": attribute.slug().as_str(),
        "values": attribute.values().iter().map(value_to_json).collect::<Vec<_>>(),
    })
}

pub fn connection_to_json(page: &AttributeConnection) -> JsonValue {
    json!({
        "edges": page
            .edges
            .iter()
            .map(|a| json!({ "node": attribute_to_json(a) }))
            .collect::<Vec<_>>(),
        "total": page.total,
        "hasMore": page.has_more,
        "pagination": {
            "limit": page.pagination.limit,
            "offset": page.pagination.offset,
        },
    })
}

pub fn attribute_payload_to_json(payload: &AttributePayload) -> JsonValue {
    json!({
        "attribute": payload.attribute.as_ref().map(attribute_to_json),
        "errors": payload.errors,
    })
}

pub fn value_payload_to_json(payload: &AttributeValuePayload) -> JsonValue {
    json!({
        "attributeValue": payload.attribute_value.as_ref().map(value_to_json),
        "attribute": payload.attribute.as_ref().map(attribute_to_json),
        "errors": payload.errors,
    })
}

/// Payload for a mutation that failed before reaching the catalog (e.g. an
/// undecodable id). `object` names the payload's primary field.
pub fn errors_only_to_json(object: &'static str, errors: &[FieldError]) -> JsonValue {
    let mut body = json!({ "errors": errors });
    body[object] = JsonValue::Null;
    body
}

pub fn product_to_json(product: &Product) -> JsonValue {
    json!({
        "id": to_global_id::<Product>(product.id()),
        "name": product.name(),
        "productType": to_global_id::<vitrine_catalog::ProductType>(&product.product_type()),
        "category": to_global_id::<vitrine_catalog::Category>(&product.category()),
        "attributes": product.attributes(),
    })
}
