//! Environment contract shared by the graph and grid variants.

use std::fmt;

use crate::core::types::Candidate;

/// Static description of a bounded space.
///
/// Implementations are immutable after construction: `candidates` returns the
/// same ordered list for a given position on every call and never names a
/// position the environment does not know.
pub trait Environment {
    type Position: Clone + PartialEq + fmt::Debug + fmt::Display;

    /// True if `position` belongs to the space.
    fn contains(&self, position: &Self::Position) -> bool;

    /// Ordered candidate moves from `position`.
    fn candidates(&self, position: &Self::Position) -> Vec<Candidate<Self::Position>>;

    /// Range check applied to bounded candidates before acceptance.
    fn is_in_bounds(&self, position: &Self::Position) -> bool;
}
