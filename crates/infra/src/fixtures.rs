//! JSON fixtures for preloading a catalog.
//!
//! Fixtures reference each other by slug (attributes, categories) or name
//! (product types) and are applied through the same domain operations the API
//! uses, so a fixture can never produce a catalog the API could not.

use std::path::Path;

use serde::Deserialize;
use tracing::info;
use vitrine_catalog::{AttributeCreateInput, AttributeSlugInput, Catalog};
use vitrine_core::AttributeId;

use crate::error::StoreError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Fixtures {
    #[serde(default)]
    pub attributes: Vec<AttributeCreateInput>,
    #[serde(default)]
    pub categories: Vec<CategoryFixture>,
    #[serde(default)]
    pub product_types: Vec<ProductTypeFixture>,
    #[serde(default)]
    pub products: Vec<ProductFixture>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CategoryFixture {
    pub name: String,
    /// Slug of an earlier category.
    #[serde(default)]
    pub parent: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductTypeFixture {
    pub name: String,
    /// Attribute slugs.
    #[serde(default)]
    pub product_attributes: Vec<String>,
    #[serde(default)]
    pub variant_attributes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductFixture {
    pub name: String,
    /// Product type name.
    pub product_type: String,
    /// Category slug.
    pub category: String,
    #[serde(default)]
    pub attributes: Vec<AttributeSlugInput>,
}

impl Fixtures {
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Build a fresh catalog from these fixtures.
    pub fn into_catalog(self) -> Result<Catalog, StoreError> {
        let mut catalog = Catalog::new();

        for input in self.attributes {
            let name = input.name.clone();
            let payload = catalog.create_attribute(input);
            if let Some(error) = payload.errors.first() {
                return Err(StoreError::Fixture(format!(
                    "attribute `{name}`: {}: {}",
                    error.field, error.message
                )));
            }
        }

        for category in self.categories {
            let parent = match &category.parent {
                Some(slug) => Some(
                    catalog
                        .category_by_slug(slug)
                        .map(|c| c.id_typed())
                        .ok_or_else(|| StoreError::Fixture(format!("unknown parent category `{slug}`")))?,
                ),
                None => None,
            };
            catalog.add_category(&category.name, parent)?;
        }

        for product_type in self.product_types {
            let product_attributes = attribute_ids(&catalog, &product_type.product_attributes)?;
            let variant_attributes = attribute_ids(&catalog, &product_type.variant_attributes)?;
            catalog.add_product_type(&product_type.name, product_attributes, variant_attributes)?;
        }

        for product in self.products {
            let product_type = catalog
                .product_type_by_name(&product.product_type)
                .map(|t| t.id_typed())
                .ok_or_else(|| StoreError::Fixture(format!("unknown product type `{}`", product.product_type)))?;
            let category = catalog
                .category_by_slug(&product.category)
                .map(|c| c.id_typed())
                .ok_or_else(|| StoreError::Fixture(format!("unknown category `{}`", product.category)))?;
            let id = catalog.add_product(&product.name, product_type, category)?;
            if !product.attributes.is_empty() {
                catalog.assign_product_attributes(id, &product.attributes)?;
            }
        }

        info!(
            attributes = catalog.attributes().len(),
            values = catalog.values().count(),
            categories = catalog.categories().len(),
            product_types = catalog.product_types().len(),
            products = catalog.products().len(),
            "catalog fixtures loaded"
        );
        Ok(catalog)
    }
}

fn attribute_ids(catalog: &Catalog, slugs: &[String]) -> Result<Vec<AttributeId>, StoreError> {
    slugs
        .iter()
        .map(|slug| {
            catalog
                .attribute_by_slug(slug)
                .map(|a| a.id_typed())
                .ok_or_else(|| StoreError::Fixture(format!("unknown attribute `{slug}`")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r##"{
        "attributes": [
            {"name": "Color", "values": [
                {"name": "Red", "value": "#FF0000"},
                {"name": "Pink", "value": "#FF69B4"}
            ]},
            {"name": "Size", "values": [{"name": "Small", "value": "S"}]}
        ],
        "categories": [
            {"name": "Apparel"},
            {"name": "T-shirts", "parent": "apparel"}
        ],
        "productTypes": [
            {"name": "Shirt", "productAttributes": ["color"], "variantAttributes": ["size"]}
        ],
        "products": [
            {"name": "Tee", "productType": "Shirt", "category": "t-shirts",
             "attributes": [{"slug": "color", "value": "pink"}]}
        ]
    }"##;

    #[test]
    fn builds_catalog_and_assigns_product_attributes() {
        let catalog = Fixtures::from_json(SAMPLE).unwrap().into_catalog().unwrap();

        assert_eq!(catalog.attributes().len(), 2);
        let shirts = catalog.category_by_slug("t-shirts").unwrap();
        assert_eq!(shirts.parent(), Some(catalog.category_by_slug("apparel").unwrap().id_typed()));

        let color = catalog.attribute_by_slug("color").unwrap();
        let pink = color.values().iter().find(|v| v.name() == "Pink").unwrap();
        let tee = &catalog.products()[0];
        assert_eq!(
            tee.attributes().get(&color.id_typed().to_string()),
            Some(&pink.id_typed().to_string())
        );
    }

    #[test]
    fn dangling_references_are_fixture_errors() {
        let json = r#"{"categories": [{"name": "Shirts", "parent": "nope"}]}"#;
        let err = Fixtures::from_json(json).unwrap().into_catalog().unwrap_err();
        assert!(matches!(err, StoreError::Fixture(_)));

        let json = r#"{"productTypes": [{"name": "Shirt", "productAttributes": ["nope"]}]}"#;
        let err = Fixtures::from_json(json).unwrap().into_catalog().unwrap_err();
        assert!(matches!(err, StoreError::Fixture(_)));
    }

    #[test]
    fn invalid_attribute_fixture_reports_field_error() {
        let json = r##"{"attributes": [{"name": "Color", "values": [
            {"name": "Red", "value": "#f00"}, {"name": "Red", "value": "#f00"}]}]}"##;
        let err = Fixtures::from_json(json).unwrap().into_catalog().unwrap_err();
        match err {
            StoreError::Fixture(msg) => assert!(msg.contains("Duplicated AttributeValue names")),
            other => panic!("expected fixture error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = Fixtures::from_json(r#"{"attribute": []}"#).unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[test]
    fn loads_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let fixtures = Fixtures::from_path(file.path()).unwrap();
        assert_eq!(fixtures.products.len(), 1);

        let missing = Fixtures::from_path(file.path().with_extension("missing")).unwrap_err();
        assert!(matches!(missing, StoreError::Io { .. }));
    }
}
