//! Attributes and the values they own.

use vitrine_core::{AttributeId, AttributeValueId, Entity, Slug};

use crate::value_type::{classify, AttributeValueType};

/// A named axis of product variation (e.g. "Color").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub(crate) id: AttributeId,
    pub(crate) name: String,
    pub(crate) slug: Slug,
    pub(crate) values: Vec<AttributeValue>,
}

impl Attribute {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            id: AttributeId::new(),
            name: name.to_string(),
            slug: Slug::from_name(name),
            values: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> AttributeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Owned values, in insertion order.
    pub fn values(&self) -> &[AttributeValue] {
        &self.values
    }

    pub fn value(&self, id: AttributeValueId) -> Option<&AttributeValue> {
        self.values.iter().find(|v| v.id == id)
    }

    pub fn value_by_slug(&self, slug: &Slug) -> Option<&AttributeValue> {
        self.values.iter().find(|v| &v.slug == slug)
    }

    pub(crate) fn rename(&mut self, name: &str) {
        self.name = name.to_string();
        self.slug = Slug::from_name(name);
    }

    pub(crate) fn push_value(&mut self, name: &str, raw: &str) -> &AttributeValue {
        let value = AttributeValue {
            id: AttributeValueId::new(),
            attribute_id: self.id,
            name: name.to_string(),
            slug: Slug::from_name(name),
            value: raw.to_string(),
        };
        self.values.push(value);
        &self.values[self.values.len() - 1]
    }
}

impl Entity for Attribute {
    type Id = AttributeId;
    const TYPE_NAME: &'static str = "Attribute";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// One concrete value on an attribute's axis (e.g. "Red").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeValue {
    pub(crate) id: AttributeValueId,
    pub(crate) attribute_id: AttributeId,
    pub(crate) name: String,
    pub(crate) slug: Slug,
    pub(crate) value: String,
}

impl AttributeValue {
    pub fn id_typed(&self) -> AttributeValueId {
        self.id
    }

    pub fn attribute_id(&self) -> AttributeId {
        self.attribute_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Raw value string as entered (e.g. `#FF69B4`).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Semantic type, recomputed from the raw value on every call.
    pub fn value_type(&self) -> AttributeValueType {
        classify(&self.value)
    }
}

impl Entity for AttributeValue {
    type Id = AttributeValueId;
    const TYPE_NAME: &'static str = "AttributeValue";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_attribute_derives_slug() {
        let attribute = Attribute::new("Example name");
        assert_eq!(attribute.slug().as_str(), "example-name");
        assert!(attribute.values().is_empty());
    }

    #[test]
    fn pushed_values_are_owned_and_typed() {
        let mut attribute = Attribute::new("Color");
        let pink_id = attribute.push_value("Pink", "#FF69B4").id_typed();

        let pink = attribute.value(pink_id).unwrap();
        assert_eq!(pink.attribute_id(), attribute.id_typed());
        assert_eq!(pink.slug().as_str(), "pink");
        assert_eq!(pink.value_type(), AttributeValueType::Color);
        assert_eq!(attribute.value_by_slug(&Slug::from_name("PINK")), Some(pink));
    }

    #[test]
    fn rename_rederives_slug() {
        let mut attribute = Attribute::new("Color");
        attribute.rename("Wings name");
        assert_eq!(attribute.name(), "Wings name");
        assert_eq!(attribute.slug().as_str(), "wings-name");
    }
}
