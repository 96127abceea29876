//! Entity trait: stable identity across mutations.

/// Minimal interface shared by identified domain objects.
pub trait Entity {
    /// Strongly-typed identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Identifier of this entity.
    fn id(&self) -> &Self::Id;
}
