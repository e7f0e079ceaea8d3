//! Single-source shortest paths.
//!
//! Three engines share one [relax](relax) operation and one result type:
//!
//! * [`bellman_ford`] — general graphs, negative weights allowed, detects
//!   negative cycles. Θ(V·E).
//! * [`dag_shortest_paths`] — acyclic graphs, one relaxation sweep in
//!   topological order. Θ(V+E).
//! * [`dijkstra`] — non-negative weights, priority selection. Θ((V+E) log V).
//!
//! On any input satisfying all three engines' preconditions simultaneously,
//! the engines agree on distances and parent-derived paths.
//!
//! # Examples
//!
//! ```
//! use arbor::{algo::dijkstra, graph::Graph};
//!
//! let mut graph = Graph::<&str, u32, _>::new_undirected();
//!
//! graph.extend_with_nodes(["Prague", "Vienna", "Munich", "Rome"]);
//! graph.extend_with_edges([
//!     ("Prague", "Vienna", 293),
//!     ("Prague", "Munich", 384),
//!     ("Vienna", "Munich", 402),
//!     ("Munich", "Rome", 932),
//!     ("Vienna", "Rome", 1140),
//! ]).unwrap();
//!
//! let paths = dijkstra(&graph, &"Prague").unwrap();
//! assert_eq!(paths.dist(&"Rome"), Some(&1316));
//! ```

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{Identity, Weight};

use super::toposort;

mod bellman_ford;
mod dag;
mod dijkstra;

pub use bellman_ford::bellman_ford;
pub use dag::dag_shortest_paths;
pub use dijkstra::dijkstra;

/// Shortest paths and their distances from a single source vertex.
#[derive(Debug)]
pub struct ShortestPaths<I, W> {
    source: I,
    dist: FxHashMap<I, W>,
    pred: FxHashMap<I, I>,
}

impl<I, W> ShortestPaths<I, W>
where
    I: Identity,
    W: Weight,
{
    /// Source vertex where the search was started.
    pub fn source(&self) -> &I {
        &self.source
    }

    /// Shortest-path distance from the source, or `None` for vertices the
    /// search did not reach.
    pub fn dist(&self, to: &I) -> Option<&W> {
        self.dist.get(to)
    }

    /// Shortest path from the source to `to` as (identity, distance) pairs.
    ///
    /// Empty when `to` is unreached; a single pair when `to` is the source
    /// itself.
    pub fn path(&self, to: &I) -> Vec<(I, W)> {
        if !self.dist.contains_key(to) {
            return Vec::new();
        }

        let mut path = Vec::new();
        let mut curr = to.clone();

        loop {
            path.push((curr.clone(), self.dist[&curr].clone()));

            if curr == self.source {
                break;
            }

            match self.pred.get(&curr) {
                Some(parent) => curr = parent.clone(),
                None => return Vec::new(),
            }
        }

        path.reverse();
        path
    }
}

/// The error encountered during a shortest-paths run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A negative cycle reachable from the source exists; no distance can
    /// be trusted.
    #[error("negative cycle encountered")]
    NegativeCycle,

    /// An edge with negative weight was encountered by an engine that
    /// requires non-negative weights.
    #[error("edge with negative weight encountered")]
    NegativeWeight,

    /// The graph is not acyclic, so relaxation in topological order is
    /// undefined.
    #[error("the graph contains a cycle")]
    Cycle,
}

impl From<toposort::Error> for Error {
    fn from(error: toposort::Error) -> Self {
        match error {
            toposort::Error::Cycle => Error::Cycle,
        }
    }
}

/// The relax operation shared by all engines: if the candidate edge
/// (u, v) with weight `weight` offers a shorter path to v, update v's
/// distance and parent. Returns the improved distance if an update occurred.
pub(crate) fn relax<I, W>(
    dist: &mut FxHashMap<I, W>,
    pred: &mut FxHashMap<I, I>,
    u: &I,
    v: &I,
    weight: &W,
) -> Option<W>
where
    I: Identity,
    W: Weight,
{
    // A vertex with no distance yet is at +inf; an edge out of it cannot
    // improve anything.
    let next = dist.get(u)?.clone() + weight.clone();

    let improved = match dist.get(v) {
        Some(current) => next < *current,
        None => true,
    };

    if improved {
        dist.insert(v.clone(), next.clone());
        pred.insert(v.clone(), u.clone());
        Some(next)
    } else {
        None
    }
}
