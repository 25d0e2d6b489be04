//! `vitrine-core`: catalog foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the opaque global-id codec, slugs and the domain error model.

pub mod entity;
pub mod error;
pub mod global_id;
pub mod id;
pub mod slug;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use global_id::{to_global_id, GlobalId};
pub use id::{AttributeId, AttributeValueId, CategoryId, ProductId, ProductTypeId};
pub use slug::{slugify, Slug};
pub use value_object::ValueObject;
