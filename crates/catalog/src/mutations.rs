//! Attribute and attribute-value mutations.
//!
//! Every mutation validates its whole input against the current catalog first
//! and only then applies it, so a payload with errors always means the catalog
//! is unchanged.

use serde::{Deserialize, Serialize};
use vitrine_core::{AttributeId, AttributeValueId, Slug};

use crate::attribute::{Attribute, AttributeValue};
use crate::catalog::Catalog;
use crate::validation::{
    self, ATTRIBUTE_SLUG_TAKEN, FieldError, MutationErrors, NAME_NOT_UNIQUE, VALUE_NAMES_NOT_UNIQUE,
    VALUE_NOT_OWNED,
};

/// Name and raw value of an attribute value to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValueInput {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeCreateInput {
    pub name: String,
    #[serde(default)]
    pub values: Vec<AttributeValueInput>,
}

/// Rename an attribute and/or add and remove values in one step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeUpdateInput {
    pub name: Option<String>,
    pub add_values: Vec<AttributeValueInput>,
    pub remove_values: Vec<AttributeValueId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePayload {
    pub attribute: Option<Attribute>,
    pub errors: Vec<FieldError>,
}

impl AttributePayload {
    fn ok(attribute: Attribute) -> Self {
        Self {
            attribute: Some(attribute),
            errors: Vec::new(),
        }
    }

    fn failed(errors: MutationErrors) -> Self {
        Self {
            attribute: None,
            errors: errors.into_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeValuePayload {
    pub attribute_value: Option<AttributeValue>,
    /// Owning attribute after the mutation.
    pub attribute: Option<Attribute>,
    pub errors: Vec<FieldError>,
}

impl AttributeValuePayload {
    fn ok(value: AttributeValue, attribute: Attribute) -> Self {
        Self {
            attribute_value: Some(value),
            attribute: Some(attribute),
            errors: Vec::new(),
        }
    }

    fn failed(errors: MutationErrors) -> Self {
        Self {
            attribute_value: None,
            attribute: None,
            errors: errors.into_vec(),
        }
    }
}

impl Catalog {
    fn slug_taken(&self, slug: &Slug, except: Option<AttributeId>) -> bool {
        self.attributes
            .iter()
            .any(|a| &a.slug == slug && Some(a.id) != except)
    }

    /// Value names are unique catalog-wide; value slugs within their attribute.
    fn value_name_taken(
        &self,
        attribute: &Attribute,
        name: &str,
        except: Option<AttributeValueId>,
    ) -> bool {
        let slug = Slug::from_name(name);
        self.values().any(|v| v.name == name && Some(v.id) != except)
            || attribute.values.iter().any(|v| v.slug == slug && Some(v.id) != except)
    }

    /// Position of a value as (attribute index, value index).
    fn locate_value(&self, id: AttributeValueId) -> Option<(usize, usize)> {
        self.attributes
            .iter()
            .enumerate()
            .find_map(|(a, attribute)| attribute.values.iter().position(|v| v.id == id).map(|v| (a, v)))
    }

    pub fn create_attribute(&mut self, input: AttributeCreateInput) -> AttributePayload {
        let mut errors = MutationErrors::default();
        validation::check_name("name", &input.name, &mut errors);
        if errors.is_empty() && self.slug_taken(&Slug::from_name(&input.name), None) {
            errors.add("slug", ATTRIBUTE_SLUG_TAKEN);
        }
        validation::check_value_names("values", &input.values, &mut errors);
        if !errors.is_empty() {
            return AttributePayload::failed(errors);
        }

        let mut attribute = Attribute::new(&input.name);
        for value in &input.values {
            attribute.push_value(&value.name, &value.value);
        }
        self.attributes.push(attribute.clone());
        AttributePayload::ok(attribute)
    }

    pub fn update_attribute(&mut self, id: AttributeId, input: AttributeUpdateInput) -> AttributePayload {
        let mut errors = MutationErrors::default();
        let Some(index) = self.attribute_index(id) else {
            errors.add("id", validation::unresolved::<Attribute>(&id));
            return AttributePayload::failed(errors);
        };

        if let Some(name) = &input.name {
            validation::check_name("name", name, &mut errors);
            if errors.is_empty() && self.slug_taken(&Slug::from_name(name), Some(id)) {
                errors.add("slug", ATTRIBUTE_SLUG_TAKEN);
            }
        }

        validation::check_value_names("addValues", &input.add_values, &mut errors);

        for value_id in &input.remove_values {
            match self.value(*value_id) {
                None => errors.add(
                    "removeValues",
                    validation::unresolved::<AttributeValue>(value_id),
                ),
                // Slugs are lowercase by construction.
                Some((owner, value)) if owner.id != id => {
                    errors.add(format!("removeValues:{}", value.slug), VALUE_NOT_OWNED)
                }
                Some(_) => {}
            }
        }

        let attribute = &self.attributes[index];
        let collides_with_kept = input.add_values.iter().any(|added| {
            let slug = Slug::from_name(&added.name);
            attribute
                .values
                .iter()
                .any(|v| v.slug == slug && !input.remove_values.contains(&v.id))
        });
        if collides_with_kept && !errors.has_field("addValues") {
            errors.add("addValues", VALUE_NAMES_NOT_UNIQUE);
        }

        if !errors.is_empty() {
            return AttributePayload::failed(errors);
        }

        let attribute = &mut self.attributes[index];
        if let Some(name) = &input.name {
            attribute.rename(name);
        }
        attribute.values.retain(|v| !input.remove_values.contains(&v.id));
        for value in &input.add_values {
            attribute.push_value(&value.name, &value.value);
        }
        let updated = attribute.clone();
        for value_id in &input.remove_values {
            self.forget_value(*value_id);
        }
        AttributePayload::ok(updated)
    }

    /// Delete an attribute together with every value it owns.
    pub fn delete_attribute(&mut self, id: AttributeId) -> AttributePayload {
        let Some(index) = self.attribute_index(id) else {
            let mut errors = MutationErrors::default();
            errors.add("id", validation::unresolved::<Attribute>(&id));
            return AttributePayload::failed(errors);
        };
        let removed = self.attributes.remove(index);
        self.forget_attribute(id);
        AttributePayload::ok(removed)
    }

    pub fn create_attribute_value(
        &mut self,
        attribute_id: AttributeId,
        input: AttributeValueInput,
    ) -> AttributeValuePayload {
        let mut errors = MutationErrors::default();
        let Some(index) = self.attribute_index(attribute_id) else {
            errors.add("attribute", validation::unresolved::<Attribute>(&attribute_id));
            return AttributeValuePayload::failed(errors);
        };

        validation::check_name("name", &input.name, &mut errors);
        if errors.is_empty() && self.value_name_taken(&self.attributes[index], &input.name, None) {
            errors.add("name", NAME_NOT_UNIQUE);
        }
        if !errors.is_empty() {
            return AttributeValuePayload::failed(errors);
        }

        let attribute = &mut self.attributes[index];
        let value = attribute.push_value(&input.name, &input.value).clone();
        AttributeValuePayload::ok(value, attribute.clone())
    }

    /// Rename a value and replace its raw string. Keeping the current name is
    /// not a collision.
    pub fn update_attribute_value(
        &mut self,
        id: AttributeValueId,
        input: AttributeValueInput,
    ) -> AttributeValuePayload {
        let mut errors = MutationErrors::default();
        let Some((index, position)) = self.locate_value(id) else {
            errors.add("id", validation::unresolved::<AttributeValue>(&id));
            return AttributeValuePayload::failed(errors);
        };

        validation::check_name("name", &input.name, &mut errors);
        if errors.is_empty() && self.value_name_taken(&self.attributes[index], &input.name, Some(id)) {
            errors.add("name", NAME_NOT_UNIQUE);
        }
        if !errors.is_empty() {
            return AttributeValuePayload::failed(errors);
        }

        let attribute = &mut self.attributes[index];
        let value = &mut attribute.values[position];
        value.name = input.name.clone();
        value.slug = Slug::from_name(&input.name);
        value.value = input.value;
        let updated = value.clone();
        AttributeValuePayload::ok(updated, attribute.clone())
    }

    pub fn delete_attribute_value(&mut self, id: AttributeValueId) -> AttributeValuePayload {
        let Some((index, position)) = self.locate_value(id) else {
            let mut errors = MutationErrors::default();
            errors.add("id", validation::unresolved::<AttributeValue>(&id));
            return AttributeValuePayload::failed(errors);
        };
        let attribute = &mut self.attributes[index];
        let removed = attribute.values.remove(position);
        let attribute = attribute.clone();
        self.forget_value(id);
        AttributeValuePayload::ok(removed, attribute)
    }
}
