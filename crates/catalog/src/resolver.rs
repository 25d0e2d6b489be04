//! Slug-based attribute assignment.
//!
//! Turns `{slug, value}` pairs into the attribute-id → value-id mapping stored
//! on products, creating attribute values that do not exist yet.

use serde::{Deserialize, Serialize};
use vitrine_core::{AttributeId, AttributeValueId, DomainError, DomainResult, ProductId, Slug};

use crate::catalog::Catalog;
use crate::product::AttributeAssignment;

/// One requested assignment: attribute slug plus value slug or free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSlugInput {
    pub slug: String,
    pub value: String,
}

/// Where attributes are looked up and values upserted.
pub trait AttributeValueSource {
    /// The attribute with this slug, if it is among `allowed`.
    fn allowed_attribute(&self, slug: &str, allowed: &[AttributeId]) -> Option<AttributeId>;

    /// Existing value of `attribute` whose slug matches `text` once slugified,
    /// or a newly created one named `text`. Idempotent per (attribute, slug).
    fn get_or_create_value(&mut self, attribute: AttributeId, text: &str) -> DomainResult<AttributeValueId>;
}

/// Resolve slug pairs into an attribute assignment.
///
/// All attribute slugs are checked before any value is created, so an
/// unknown slug fails the whole call with nothing persisted. Later entries
/// for the same attribute overwrite earlier ones.
pub fn attributes_to_hstore<S>(
    source: &mut S,
    entries: &[AttributeSlugInput],
    allowed: &[AttributeId],
) -> DomainResult<AttributeAssignment>
where
    S: AttributeValueSource + ?Sized,
{
    let resolved = entries
        .iter()
        .map(|entry| {
            let attribute = source.allowed_attribute(&entry.slug, allowed).ok_or_else(|| {
                DomainError::validation(format!("unknown attribute slug `{}`", entry.slug))
            })?;
            if Slug::from_name(&entry.value).is_empty() {
                return Err(DomainError::validation(format!(
                    "value `{}` for attribute `{}` has no usable slug",
                    entry.value, entry.slug
                )));
            }
            Ok((attribute, entry.value.as_str()))
        })
        .collect::<DomainResult<Vec<_>>>()?;

    let mut assignment = AttributeAssignment::new();
    for (attribute, text) in resolved {
        let value = source.get_or_create_value(attribute, text)?;
        assignment.insert(attribute.to_string(), value.to_string());
    }
    Ok(assignment)
}

impl AttributeValueSource for Catalog {
    fn allowed_attribute(&self, slug: &str, allowed: &[AttributeId]) -> Option<AttributeId> {
        self.attribute_by_slug(slug)
            .map(|a| a.id)
            .filter(|id| allowed.contains(id))
    }

    fn get_or_create_value(&mut self, attribute: AttributeId, text: &str) -> DomainResult<AttributeValueId> {
        let index = self
            .attribute_index(attribute)
            .ok_or(DomainError::not_found("attribute"))?;
        let attribute = &mut self.attributes[index];
        let slug = Slug::from_name(text);
        if let Some(existing) = attribute.value_by_slug(&slug) {
            return Ok(existing.id);
        }
        Ok(attribute.push_value(text, text).id)
    }
}

impl Catalog {
    /// Replace a product's attribute assignment from slug pairs.
    pub fn assign_product_attributes(
        &mut self,
        product: ProductId,
        entries: &[AttributeSlugInput],
    ) -> DomainResult<AttributeAssignment> {
        let allowed = self.allowed_attributes(product)?;
        let assignment = attributes_to_hstore(self, entries, &allowed)?;
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == product)
            .ok_or(DomainError::not_found("product"))?;
        product.attributes = assignment.clone();
        Ok(assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutations::{AttributeCreateInput, AttributeValueInput};

    fn entry(slug: &str, value: &str) -> AttributeSlugInput {
        AttributeSlugInput {
            slug: slug.to_string(),
            value: value.to_string(),
        }
    }

    /// A product whose type allows Color; Material exists but is not allowed.
    fn fixture() -> (Catalog, ProductId, AttributeId, AttributeId) {
        let mut catalog = Catalog::new();
        let mut create = |name: &str, values: &[&str]| {
            catalog
                .create_attribute(AttributeCreateInput {
                    name: name.to_string(),
                    values: values
                        .iter()
                        .map(|v| AttributeValueInput {
                            name: v.to_string(),
                            value: v.to_string(),
                        })
                        .collect(),
                })
                .attribute
                .unwrap()
                .id_typed()
        };
        let color = create("Color", &["Red", "Blue"]);
        let material = create("Material", &["Cotton"]);

        let category = catalog.add_category("Apparel", None).unwrap();
        let shirt = catalog.add_product_type("Shirt", vec![color], vec![]).unwrap();
        let product = catalog.add_product("Tee", shirt, category).unwrap();
        (catalog, product, color, material)
    }

    fn value_count(catalog: &Catalog) -> usize {
        catalog.values().count()
    }

    #[test]
    fn existing_value_is_reused() {
        let (mut catalog, product, color, _) = fixture();
        let allowed = catalog.allowed_attributes(product).unwrap();
        let red = catalog.attribute(color).unwrap().values()[0].id_typed();
        let before = value_count(&catalog);

        let ids = attributes_to_hstore(&mut catalog, &[entry("color", "red")], &allowed).unwrap();

        assert_eq!(ids.get(&color.to_string()), Some(&red.to_string()));
        assert_eq!(value_count(&catalog), before);
    }

    #[test]
    fn new_text_creates_one_slugified_value() {
        let (mut catalog, product, color, _) = fixture();
        let allowed = catalog.allowed_attributes(product).unwrap();
        let before = value_count(&catalog);

        let ids = attributes_to_hstore(&mut catalog, &[entry("color", "Space Grey")], &allowed).unwrap();

        let created = catalog
            .attribute(color)
            .unwrap()
            .value_by_slug(&Slug::from_name("space-grey"))
            .unwrap();
        assert_eq!(created.name(), "Space Grey");
        assert_eq!(ids[&color.to_string()], created.id_typed().to_string());
        assert_eq!(value_count(&catalog), before + 1);

        // Same text again resolves to the value just created.
        let again = attributes_to_hstore(&mut catalog, &[entry("color", "space grey")], &allowed).unwrap();
        assert_eq!(again, ids);
        assert_eq!(value_count(&catalog), before + 1);
    }

    #[test]
    fn unknown_or_disallowed_slug_fails_without_side_effects() {
        let (mut catalog, product, _, _) = fixture();
        let allowed = catalog.allowed_attributes(product).unwrap();
        let snapshot = catalog.clone();

        for bad in ["not-an-attribute", "material"] {
            let err = attributes_to_hstore(
                &mut catalog,
                &[entry("color", "Brand New"), entry(bad, "not-a-value")],
                &allowed,
            )
            .unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
        assert_eq!(catalog, snapshot);
    }

    #[test]
    fn value_text_without_a_slug_is_rejected_up_front() {
        let (mut catalog, product, _, _) = fixture();
        let allowed = catalog.allowed_attributes(product).unwrap();
        let snapshot = catalog.clone();

        let err = attributes_to_hstore(
            &mut catalog,
            &[entry("color", "Brand New"), entry("color", "!!!")],
            &allowed,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(catalog, snapshot);
    }

    #[test]
    fn later_entries_win_per_attribute() {
        let (mut catalog, product, color, _) = fixture();
        let allowed = catalog.allowed_attributes(product).unwrap();
        let blue = catalog.attribute(color).unwrap().values()[1].id_typed();

        let ids = attributes_to_hstore(
            &mut catalog,
            &[entry("color", "red"), entry("color", "blue")],
            &allowed,
        )
        .unwrap();

        assert_eq!(ids.len(), 1);
        assert_eq!(ids[&color.to_string()], blue.to_string());
    }

    #[test]
    fn assignment_is_stored_on_the_product() {
        let (mut catalog, product, color, _) = fixture();
        let ids = catalog
            .assign_product_attributes(product, &[entry("color", "Blue")])
            .unwrap();
        assert_eq!(catalog.product(product).unwrap().attributes(), &ids);
        assert!(ids.contains_key(&color.to_string()));

        // Deleting the chosen value clears it from the product.
        let blue: AttributeValueId = ids[&color.to_string()].parse().unwrap();
        catalog.delete_attribute_value(blue);
        assert!(catalog.product(product).unwrap().attributes().is_empty());
    }
}
