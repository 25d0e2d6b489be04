//! Attribute catalog domain module.
//!
//! Business rules for attributes, their values and how products are assigned
//! values, implemented as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod attribute;
pub mod catalog;
pub mod mutations;
pub mod product;
pub mod query;
pub mod resolver;
pub mod validation;
pub mod value_type;

pub use attribute::{Attribute, AttributeValue};
pub use catalog::Catalog;
pub use mutations::{
    AttributeCreateInput, AttributePayload, AttributeUpdateInput, AttributeValueInput,
    AttributeValuePayload,
};
pub use product::{AttributeAssignment, Category, Product, ProductType};
pub use query::{AttributeConnection, AttributeFilter, Pagination};
pub use resolver::{attributes_to_hstore, AttributeSlugInput, AttributeValueSource};
pub use validation::{FieldError, MutationErrors};
pub use value_type::{classify, AttributeValueType};
