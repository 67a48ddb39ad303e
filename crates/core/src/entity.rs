//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity keeps its identity while its attributes change: a batch whose
/// allocations are reshuffled is still the same batch.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Two entities are the same entity iff their identifiers match,
    /// regardless of their current attributes.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
