use rustc_hash::FxHashMap;

use crate::{
    algo::toposort::toposort,
    core::{marker::Directed, Identity, Weight},
    graph::Graph,
};

use super::{relax, Error, ShortestPaths};

/// Single-source shortest paths on a directed acyclic graph. Θ(V+E).
///
/// Computes a topological order via depth-first search and relaxes the
/// outgoing edges of every vertex strictly in that order, once. Correct
/// only because no edge can point backward in the order; a cyclic graph is
/// rejected with [`Error::Cycle`].
pub fn dag_shortest_paths<I, W>(
    graph: &Graph<I, W, Directed>,
    source: &I,
) -> Result<ShortestPaths<I, W>, Error>
where
    I: Identity,
    W: Weight,
{
    let order = toposort(graph)?;

    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();

    if graph.contains_node(source) {
        dist.insert(source.clone(), W::zero());
    }

    for u in &order {
        for v in graph.neighbors(u) {
            let weight = graph
                .weight(u, v)
                .expect("neighbor is backed by an edge");
            relax(&mut dist, &mut pred, u, v, weight);
        }
    }

    Ok(ShortestPaths {
        source: source.clone(),
        dist,
        pred,
    })
}
