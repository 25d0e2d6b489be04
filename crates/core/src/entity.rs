//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Type name used when the identifier crosses the API boundary
    /// (see [`crate::GlobalId`]).
    const TYPE_NAME: &'static str;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
