//! Topological ordering of a directed acyclic graph.

use thiserror::Error;

use crate::{
    core::{marker::Directed, Identity},
    graph::Graph,
    visit::dfs,
};

/// The error encountered during a [`toposort`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The graph contains a cycle, witnessed by a back edge of the
    /// depth-first pass.
    #[error("the graph contains a cycle")]
    Cycle,
}

/// Orders all vertices by strictly decreasing depth-first finish timestamp,
/// so that every edge points from an earlier to a later position.
///
/// Fails with [`Error::Cycle`] exactly when the depth-first pass found a
/// back edge; no partial order is returned in that case.
pub fn toposort<I, E>(graph: &Graph<I, E, Directed>) -> Result<Vec<I>, Error>
where
    I: Identity,
{
    let forest = dfs(graph);

    if !forest.edge_classification().is_acyclic() {
        return Err(Error::Cycle);
    }

    Ok(forest.finish_order().iter().rev().cloned().collect())
}
