//! Field-scoped validation errors collected by mutations.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use vitrine_core::{to_global_id, Entity, Slug};

use crate::mutations::AttributeValueInput;

pub const BLANK: &str = "This field cannot be blank.";
pub const ATTRIBUTE_SLUG_TAKEN: &str = "Attribute with this Slug already exists.";
pub const DUPLICATED_VALUE_NAMES: &str = "Duplicated AttributeValue names provided.";
pub const VALUE_NAMES_NOT_UNIQUE: &str = "Provided AttributeValue names are not unique.";
pub const NAME_NOT_UNIQUE: &str = "Provided name is not unique.";
pub const VALUE_NOT_OWNED: &str = "AttributeValue does not belong to this Attribute.";

/// One validation failure, keyed by the input field it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Errors collected over one mutation. Empty means the input is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationErrors(Vec<FieldError>);

impl MutationErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}

/// Message for an id that does not resolve to an existing entity.
pub fn unresolved<E>(id: &E::Id) -> String
where
    E: Entity,
    E::Id: Copy + Into<uuid::Uuid>,
{
    format!("Couldn't resolve to a node: {}", to_global_id::<E>(id))
}

/// A name must contain something that slugifies to a non-empty key.
pub fn check_name(field: &str, name: &str, errors: &mut MutationErrors) {
    if name.trim().is_empty() {
        errors.add(field, BLANK);
    } else if Slug::from_name(name).is_empty() {
        errors.add(format!("{field}:slug"), BLANK);
    }
}

/// Batch checks for values submitted together.
///
/// Exact duplicate names win over names that merely collide once slugified
/// (e.g. differ only by case); only one of the two is reported.
pub fn check_value_names(field: &str, values: &[AttributeValueInput], errors: &mut MutationErrors) {
    for value in values {
        check_name(&format!("{field}:name"), &value.name, errors);
    }

    let mut names = HashSet::new();
    if values.iter().any(|v| !names.insert(v.name.as_str())) {
        errors.add(field, DUPLICATED_VALUE_NAMES);
        return;
    }

    let mut slugs = HashSet::new();
    if values.iter().any(|v| !slugs.insert(Slug::from_name(&v.name))) {
        errors.add(field, VALUE_NAMES_NOT_UNIQUE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> AttributeValueInput {
        AttributeValueInput {
            name: name.to_string(),
            value: "#1231".to_string(),
        }
    }

    #[test]
    fn exact_duplicates_are_reported_once() {
        let mut errors = MutationErrors::default();
        check_value_names("values", &[input("Red color"), input("Red color")], &mut errors);
        assert_eq!(
            errors.into_vec(),
            vec![FieldError {
                field: "values".to_string(),
                message: DUPLICATED_VALUE_NAMES.to_string(),
            }]
        );
    }

    #[test]
    fn case_only_differences_collide() {
        let mut errors = MutationErrors::default();
        check_value_names("addValues", &[input("Red color"), input("red color")], &mut errors);
        let errors = errors.into_vec();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "addValues");
        assert_eq!(errors[0].message, VALUE_NAMES_NOT_UNIQUE);
    }

    #[test]
    fn distinct_names_pass() {
        let mut errors = MutationErrors::default();
        check_value_names("values", &[input("Red"), input("Blue")], &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn blank_names_are_field_errors() {
        let mut errors = MutationErrors::default();
        check_value_names("values", &[input("  "), input("!!")], &mut errors);
        assert!(errors.has_field("values:name"));
        assert!(errors.has_field("values:name:slug"));
    }
}
