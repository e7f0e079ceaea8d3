//! Mutable graph model with the classic algorithm toolbox: breadth-first
//! and depth-first traversal with timestamping, edge classification,
//! topological sorting, strongly connected components, minimum spanning
//! trees (Kruskal, Prim) and single-source shortest paths (Bellman-Ford,
//! DAG relaxation, Dijkstra).
//!
//! All algorithms borrow the graph immutably and keep their transient
//! per-vertex state in their own result structures, so sequential analyses
//! over the same graph never interfere.
//!
//! # Examples
//!
//! ```
//! use arbor::{algo::toposort, graph::Graph};
//!
//! let mut graph = Graph::<&str>::new_directed();
//!
//! graph.extend_with_nodes(["shirt", "tie", "jacket", "belt"]);
//! graph.extend_with_edges([
//!     ("shirt", "tie"),
//!     ("shirt", "belt"),
//!     ("tie", "jacket"),
//!     ("belt", "jacket"),
//! ]).unwrap();
//!
//! let order = toposort(&graph).unwrap();
//! assert_eq!(order.first(), Some(&"shirt"));
//! assert_eq!(order.last(), Some(&"jacket"));
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod graph;
pub mod visit;

pub use graph::Graph;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        core::{
            marker::{Directed, Undirected},
            Weight,
        },
        graph::Graph,
        visit::{bfs, dfs},
    };
}
