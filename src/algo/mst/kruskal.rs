use crate::{
    common::DisjointSets,
    core::{marker::Undirected, Identity, Weight},
    graph::Graph,
};

use super::SpanningTree;

/// Builds a minimum spanning tree by scanning edges in ascending weight
/// order and joining endpoints that still belong to different sets of a
/// union-find partition. Θ(E log E), dominated by the sort.
///
/// Ties in weight are broken by endpoint identities, so the scan order is
/// stable across runs.
pub fn kruskal<I, W>(graph: &Graph<I, W, Undirected>) -> SpanningTree<I, W>
where
    I: Identity,
    W: Weight,
{
    let mut sets = DisjointSets::new();

    for vertex in graph.nodes() {
        sets.make_set(vertex.clone());
    }

    let mut edges: Vec<(I, I, W)> = graph
        .edges()
        .map(|(u, v, weight)| (u.clone(), v.clone(), weight.clone()))
        .collect();

    edges.sort_by(|(u1, v1, w1), (u2, v2, w2)| {
        W::Ord::from(w1.clone())
            .cmp(&W::Ord::from(w2.clone()))
            .then_with(|| (u1, v1).cmp(&(u2, v2)))
    });

    let mut tree = Vec::new();

    for (u, v, weight) in edges {
        if sets.union(&u, &v) {
            tree.push((u, v, weight));
        }
    }

    SpanningTree { edges: tree }
}
