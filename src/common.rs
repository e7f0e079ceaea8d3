//! Support structures shared by the algorithms.

mod disjoint_sets;

pub use disjoint_sets::DisjointSets;
