//! Catalog service wiring: the store plus logging around each operation.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use vitrine_catalog::{
    AttributeAssignment, AttributeConnection, AttributeCreateInput, AttributeFilter,
    AttributePayload, AttributeSlugInput, AttributeUpdateInput, AttributeValueInput,
    AttributeValuePayload, Pagination, Product,
};
use vitrine_core::{AttributeId, AttributeValueId, DomainError, ProductId};
use vitrine_infra::{CatalogStore, InMemoryCatalogStore, StoreError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone)]
pub struct AppServices {
    store: Arc<InMemoryCatalogStore>,
}

fn log_outcome(operation: &'static str, errors: usize) {
    if errors == 0 {
        info!(operation, "catalog mutation applied");
    } else {
        debug!(operation, errors, "catalog mutation rejected");
    }
}

impl AppServices {
    pub fn new(store: Arc<InMemoryCatalogStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<InMemoryCatalogStore> {
        &self.store
    }

    pub fn attributes(
        &self,
        filter: AttributeFilter,
        pagination: Pagination,
    ) -> Result<AttributeConnection, StoreError> {
        self.store.read(|c| c.query_attributes(&filter, pagination))
    }

    pub fn create_attribute(&self, input: AttributeCreateInput) -> Result<AttributePayload, StoreError> {
        let payload = self.store.write(|c| c.create_attribute(input))?;
        log_outcome("attributeCreate", payload.errors.len());
        Ok(payload)
    }

    pub fn update_attribute(
        &self,
        id: AttributeId,
        input: AttributeUpdateInput,
    ) -> Result<AttributePayload, StoreError> {
        let payload = self.store.write(|c| c.update_attribute(id, input))?;
        log_outcome("attributeUpdate", payload.errors.len());
        Ok(payload)
    }

    pub fn delete_attribute(&self, id: AttributeId) -> Result<AttributePayload, StoreError> {
        let payload = self.store.write(|c| c.delete_attribute(id))?;
        if let Some(attribute) = &payload.attribute {
            info!(
                attribute = %attribute.slug(),
                values = attribute.values().len(),
                "attribute deleted with its values"
            );
        }
        Ok(payload)
    }

    pub fn create_attribute_value(
        &self,
        attribute: AttributeId,
        input: AttributeValueInput,
    ) -> Result<AttributeValuePayload, StoreError> {
        let payload = self.store.write(|c| c.create_attribute_value(attribute, input))?;
        log_outcome("attributeValueCreate", payload.errors.len());
        Ok(payload)
    }

    pub fn update_attribute_value(
        &self,
        id: AttributeValueId,
        input: AttributeValueInput,
    ) -> Result<AttributeValuePayload, StoreError> {
        let payload = self.store.write(|c| c.update_attribute_value(id, input))?;
        log_outcome("attributeValueUpdate", payload.errors.len());
        Ok(payload)
    }

    pub fn delete_attribute_value(&self, id: AttributeValueId) -> Result<AttributeValuePayload, StoreError> {
        let payload = self.store.write(|c| c.delete_attribute_value(id))?;
        log_outcome("attributeValueDelete", payload.errors.len());
        Ok(payload)
    }

    pub fn product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        self.store.read(|c| c.product(id).cloned())
    }

    /// Resolve slug pairs and store them as the product's attribute mapping.
    pub fn assign_product_attributes(
        &self,
        product: ProductId,
        entries: Vec<AttributeSlugInput>,
    ) -> Result<AttributeAssignment, ServiceError> {
        let assignment = self
            .store
            .write(|c| c.assign_product_attributes(product, &entries))?
            .inspect_err(|e| warn!(%product, "attribute assignment failed: {e}"))?;
        info!(%product, attributes = assignment.len(), "product attributes assigned");
        Ok(assignment)
    }
}
