//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is identified by its `Id`, not by its attribute values; state
/// may change over its lifetime while the identifier stays fixed.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
