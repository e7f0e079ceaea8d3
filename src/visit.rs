//! Breadth-first and depth-first traversal over a [`Graph`](crate::graph::Graph).
//!
//! All transient per-vertex state of a traversal (color, distance,
//! timestamps, parent) lives in the result structure of that run, never on
//! the graph itself. Every invocation therefore starts from fresh state and
//! independent runs cannot interfere, even on a shared `&Graph`.

use rustc_hash::FxHashMap;

use crate::core::Identity;

mod bfs;
mod dfs;

pub use bfs::{bfs, BfsTraversal};
pub use dfs::{classify_edges, dfs, DfsForest, EdgeClassification};

/// Color of a vertex during a traversal: unvisited, on the active path, or
/// completely processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Gray,
    Black,
}

/// Discovery or finish timestamp of a depth-first traversal. The global
/// clock starts at 1 and increases by one on every discovery and finish, so
/// timestamps form a strict total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(pub usize);

/// Walks parent pointers backward from `to` until `source`, then reverses.
///
/// Returns an empty path if the parent chain does not terminate at the
/// source, and a single-element path if `to` equals the source.
pub(crate) fn reconstruct_path<I: Identity>(pred: &FxHashMap<I, I>, source: &I, to: &I) -> Vec<I> {
    if to == source {
        return vec![source.clone()];
    }

    let mut path = vec![to.clone()];
    let mut curr = to;

    while let Some(parent) = pred.get(curr) {
        path.push(parent.clone());

        if parent == source {
            path.reverse();
            return path;
        }

        curr = parent;
    }

    Vec::new()
}
