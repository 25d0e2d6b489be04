//! The catalog: every attribute, value, category, product type and product.
//!
//! `Catalog` is plain in-memory state with no IO. Storage adapters own one and
//! decide how access is serialized; every mutating method here validates
//! completely before it changes anything.

use vitrine_core::{
    AttributeId, AttributeValueId, CategoryId, DomainError, DomainResult, ProductId,
    ProductTypeId, Slug,
};

use crate::attribute::{Attribute, AttributeValue};
use crate::product::{AttributeAssignment, Category, Product, ProductType};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) categories: Vec<Category>,
    pub(crate) product_types: Vec<ProductType>,
    pub(crate) products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All attributes in creation order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, id: AttributeId) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.id == id)
    }

    pub fn attribute_by_slug(&self, slug: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.slug.as_str() == slug)
    }

    pub(crate) fn attribute_index(&self, id: AttributeId) -> Option<usize> {
        self.attributes.iter().position(|a| a.id == id)
    }

    /// Every attribute value across all attributes.
    pub fn values(&self) -> impl Iterator<Item = &AttributeValue> {
        self.attributes.iter().flat_map(|a| a.values.iter())
    }

    /// Look up a value together with its owning attribute.
    pub fn value(&self, id: AttributeValueId) -> Option<(&Attribute, &AttributeValue)> {
        self.attributes
            .iter()
            .find_map(|a| a.value(id).map(|v| (a, v)))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug.as_str() == slug)
    }

    pub fn product_types(&self) -> &[ProductType] {
        &self.product_types
    }

    pub fn product_type(&self, id: ProductTypeId) -> Option<&ProductType> {
        self.product_types.iter().find(|t| t.id == id)
    }

    pub fn product_type_by_name(&self, name: &str) -> Option<&ProductType> {
        self.product_types.iter().find(|t| t.name == name)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Attributes a product may carry: its type's product and variant attributes.
    pub fn allowed_attributes(&self, product: ProductId) -> DomainResult<Vec<AttributeId>> {
        let product = self.product(product).ok_or(DomainError::not_found("product"))?;
        let product_type = self
            .product_type(product.product_type)
            .ok_or_else(|| DomainError::invariant("product references an unknown product type"))?;
        let mut allowed = product_type.product_attributes.clone();
        allowed.extend(
            product_type
                .variant_attributes
                .iter()
                .filter(|a| !product_type.product_attributes.contains(*a)),
        );
        Ok(allowed)
    }

    /// Add a category node; `parent` must already exist.
    pub fn add_category(&mut self, name: &str, parent: Option<CategoryId>) -> DomainResult<CategoryId> {
        let slug = Slug::from_name(name);
        if slug.is_empty() {
            return Err(DomainError::validation("category name cannot be blank"));
        }
        if self.category_by_slug(slug.as_str()).is_some() {
            return Err(DomainError::conflict(format!("category slug `{slug}` already exists")));
        }
        if let Some(parent) = parent {
            if self.category(parent).is_none() {
                return Err(DomainError::not_found("category"));
            }
        }
        let id = CategoryId::new();
        self.categories.push(Category {
            id,
            name: name.to_string(),
            slug,
            parent,
        });
        Ok(id)
    }

    /// Add a product type over existing attributes.
    pub fn add_product_type(
        &mut self,
        name: &str,
        product_attributes: Vec<AttributeId>,
        variant_attributes: Vec<AttributeId>,
    ) -> DomainResult<ProductTypeId> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("product type name cannot be blank"));
        }
        if let Some(missing) = product_attributes
            .iter()
            .chain(variant_attributes.iter())
            .find(|a| self.attribute(**a).is_none())
        {
            return Err(DomainError::validation(format!("unknown attribute {missing}")));
        }
        let id = ProductTypeId::new();
        self.product_types.push(ProductType {
            id,
            name: name.to_string(),
            product_attributes,
            variant_attributes,
        });
        Ok(id)
    }

    /// Add a product with an empty attribute assignment.
    pub fn add_product(
        &mut self,
        name: &str,
        product_type: ProductTypeId,
        category: CategoryId,
    ) -> DomainResult<ProductId> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be blank"));
        }
        if self.product_type(product_type).is_none() {
            return Err(DomainError::not_found("product type"));
        }
        if self.category(category).is_none() {
            return Err(DomainError::not_found("category"));
        }
        let id = ProductId::new();
        self.products.push(Product {
            id,
            name: name.to_string(),
            product_type,
            category,
            attributes: AttributeAssignment::new(),
        });
        Ok(id)
    }

    /// Drop references to a deleted attribute from product types and products.
    pub(crate) fn forget_attribute(&mut self, attribute: AttributeId) {
        for product_type in &mut self.product_types {
            product_type.forget_attribute(attribute);
        }
        let key = attribute.to_string();
        for product in &mut self.products {
            product.attributes.remove(&key);
        }
    }

    /// Drop product assignments that point at a deleted value.
    pub(crate) fn forget_value(&mut self, value: AttributeValueId) {
        let value = value.to_string();
        for product in &mut self.products {
            product.attributes.retain(|_, v| *v != value);
        }
    }
}
