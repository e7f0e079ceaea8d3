use std::{cmp::Reverse, collections::BinaryHeap};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    core::{
        marker::Undirected,
        weight::{Weight, Weighted},
        Identity,
    },
    graph::Graph,
};

use super::SpanningTree;

/// Builds a minimum spanning tree by growing it from `root`, repeatedly
/// extracting the vertex with the minimum key from a priority queue and
/// lowering the keys of its fringe neighbors. Θ(E log V).
///
/// Keys are only ever lowered, so instead of a decrease-key operation the
/// queue accumulates stale entries which are skipped on extraction. An
/// absent root produces an empty tree.
pub fn prim<I, W>(graph: &Graph<I, W, Undirected>, root: &I) -> SpanningTree<I, W>
where
    I: Identity,
    W: Weight,
{
    let mut key: FxHashMap<I, W> = FxHashMap::default();
    let mut pred: FxHashMap<I, I> = FxHashMap::default();
    let mut in_tree: FxHashSet<I> = FxHashSet::default();
    let mut queue = BinaryHeap::new();
    let mut edges = Vec::new();

    if !graph.contains_node(root) {
        return SpanningTree { edges };
    }

    key.insert(root.clone(), W::zero());
    queue.push(Reverse(Weighted(root.clone(), W::Ord::from(W::zero()))));

    while let Some(Reverse(Weighted(vertex, _))) = queue.pop() {
        if !in_tree.insert(vertex.clone()) {
            // Stale entry superseded by a lower key.
            continue;
        }

        if let Some(parent) = pred.get(&vertex) {
            let weight = key
                .get(&vertex)
                .cloned()
                .expect("extracted vertex has a key");
            edges.push((parent.clone(), vertex.clone(), weight));
        }

        for next in graph.neighbors(&vertex) {
            if in_tree.contains(next) {
                continue;
            }

            let Some(weight) = graph.weight(&vertex, next) else {
                continue;
            };

            let lower = match key.get(next) {
                Some(current) => weight < current,
                None => true,
            };

            if lower {
                key.insert(next.clone(), weight.clone());
                pred.insert(next.clone(), vertex.clone());
                queue.push(Reverse(Weighted(next.clone(), W::Ord::from(weight.clone()))));
            }
        }
    }

    SpanningTree { edges }
}
