use std::{cmp::Reverse, collections::BinaryHeap};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    core::{
        marker::EdgeType,
        weight::{Weight, Weighted},
        Identity,
    },
    graph::Graph,
};

use super::{relax, Error, ShortestPaths};

/// Single-source shortest paths with non-negative weights, by priority
/// selection. Θ((V+E) log V).
///
/// Instead of a decrease-key operation, a successful relaxation pushes the
/// neighbor again with its new key. Stale entries remaining in the queue
/// are harmless: they are skipped via the visited set on extraction. A
/// negative edge reachable from the source fails the run with
/// [`Error::NegativeWeight`].
pub fn dijkstra<I, W, Ty>(graph: &Graph<I, W, Ty>, source: &I) -> Result<ShortestPaths<I, W>, Error>
where
    I: Identity,
    W: Weight,
    Ty: EdgeType,
{
    let mut visited: FxHashSet<I> = FxHashSet::default();
    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();
    let mut queue = BinaryHeap::new();

    if graph.contains_node(source) {
        dist.insert(source.clone(), W::zero());
        queue.push(Reverse(Weighted(source.clone(), W::Ord::from(W::zero()))));
    }

    while let Some(Reverse(Weighted(vertex, _))) = queue.pop() {
        if !visited.insert(vertex.clone()) {
            // Stale entry superseded by an earlier, shorter extraction.
            continue;
        }

        for next in graph.neighbors(&vertex) {
            if visited.contains(next) {
                continue;
            }

            let weight = graph
                .weight(&vertex, next)
                .expect("neighbor is backed by an edge");

            // The unsignedness check short-circuits to a constant false for
            // unsigned weight types.
            if !W::is_unsigned() && *weight < W::zero() {
                return Err(Error::NegativeWeight);
            }

            if let Some(next_dist) = relax(&mut dist, &mut pred, &vertex, next, weight) {
                queue.push(Reverse(Weighted(next.clone(), next_dist.into())));
            }
        }
    }

    Ok(ShortestPaths {
        source: source.clone(),
        dist,
        pred,
    })
}
