//! Leaf vocabulary shared by the graph model and the algorithms: vertex
//! identities, directedness markers, edge weights and error types.

use std::hash::Hash;

pub mod error;
pub mod marker;
pub mod weight;

pub use weight::Weight;

/// Identity of a vertex within a graph.
///
/// Any totally ordered, hashable and cheaply clonable value qualifies. The
/// total order determines the iteration order of vertices and neighbors,
/// which makes traversals deterministic.
pub trait Identity: Clone + Eq + Ord + Hash {}

impl<T: Clone + Eq + Ord + Hash> Identity for T {}
