//! Analyses derived from the traversal engine and the graph model.

pub mod mst;
pub mod scc;
pub mod shortest_paths;
pub mod toposort;

pub use mst::{kruskal, prim, SpanningTree};
pub use scc::scc;
pub use shortest_paths::{bellman_ford, dag_shortest_paths, dijkstra, ShortestPaths};
pub use toposort::toposort;
