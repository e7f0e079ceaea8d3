//! Minimum spanning trees of undirected weighted graphs.
//!
//! Two independent constructions are provided: [Kruskal's
//! algorithm](kruskal) over sorted edges with a union-find partition, and
//! [Prim's algorithm](prim) with priority selection from a given root. On a
//! connected graph both produce spanning trees of equal total weight. On
//! disconnected input the result is an incomplete forest, not an error (and
//! Prim's covers only the root's component).

use crate::core::Weight;

mod kruskal;
mod prim;

pub use kruskal::kruskal;
pub use prim::prim;

/// Spanning tree (or forest) as a set of `(u, v, weight)` edges.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<I, W> {
    edges: Vec<(I, I, W)>,
}

impl<I, W: Weight> SpanningTree<I, W> {
    pub fn edges(&self) -> &[(I, I, W)] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn total_weight(&self) -> W {
        self.edges
            .iter()
            .fold(W::zero(), |total, (_, _, weight)| total + weight.clone())
    }
}
