//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by value: two slugs spelling the
/// same text are the same slug, whatever entity they were derived from.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
