//! Categories, product types and products: the context attributes are used in.

use std::collections::BTreeMap;

use vitrine_core::{AttributeId, CategoryId, Entity, ProductId, ProductTypeId, Slug};

/// Sparse attribute-id → value-id mapping stored on a product.
///
/// Keys and values are identifier strings; the map is ordered so that
/// serialized forms are stable.
pub type AttributeAssignment = BTreeMap<String, String>;

/// Node of the category tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub(crate) id: CategoryId,
    pub(crate) name: String,
    pub(crate) slug: Slug,
    pub(crate) parent: Option<CategoryId>,
}

impl Category {
    pub fn id_typed(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn parent(&self) -> Option<CategoryId> {
        self.parent
    }
}

impl Entity for Category {
    type Id = CategoryId;
    const TYPE_NAME: &'static str = "Category";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Template for products: which attributes they (and their variants) carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductType {
    pub(crate) id: ProductTypeId,
    pub(crate) name: String,
    pub(crate) product_attributes: Vec<AttributeId>,
    pub(crate) variant_attributes: Vec<AttributeId>,
}

impl ProductType {
    pub fn id_typed(&self) -> ProductTypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product_attributes(&self) -> &[AttributeId] {
        &self.product_attributes
    }

    pub fn variant_attributes(&self) -> &[AttributeId] {
        &self.variant_attributes
    }

    /// Whether the attribute is used by this type or its variants.
    pub fn uses(&self, attribute: AttributeId) -> bool {
        self.product_attributes.contains(&attribute) || self.variant_attributes.contains(&attribute)
    }

    pub(crate) fn forget_attribute(&mut self, attribute: AttributeId) {
        self.product_attributes.retain(|a| *a != attribute);
        self.variant_attributes.retain(|a| *a != attribute);
    }
}

impl Entity for ProductType {
    type Id = ProductTypeId;
    const TYPE_NAME: &'static str = "ProductType";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub(crate) id: ProductId,
    pub(crate) name: String,
    pub(crate) product_type: ProductTypeId,
    pub(crate) category: CategoryId,
    pub(crate) attributes: AttributeAssignment,
}

impl Product {
    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product_type(&self) -> ProductTypeId {
        self.product_type
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    /// Chosen value per attribute.
    pub fn attributes(&self) -> &AttributeAssignment {
        &self.attributes
    }
}

impl Entity for Product {
    type Id = ProductId;
    const TYPE_NAME: &'static str = "Product";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
