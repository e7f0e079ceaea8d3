//! Strongly connected components via Kosaraju's algorithm.

use rustc_hash::FxHashSet;

use crate::{
    core::{marker::Directed, Identity},
    graph::Graph,
    visit::dfs,
};

/// Finds the strongly connected components of a directed graph.
///
/// Kosaraju's algorithm: a full depth-first pass determines the decreasing
/// finish-time order, then a second pass over the transpose graph collects
/// one component per still-unvisited vertex in that order. The returned
/// components partition the vertex set exactly once.
pub fn scc<I, E>(graph: &Graph<I, E, Directed>) -> Vec<Vec<I>>
where
    I: Identity,
    E: Clone,
{
    let forest = dfs(graph);
    let transposed = graph.transpose();

    let mut visited: FxHashSet<I> = FxHashSet::default();
    let mut components = Vec::new();

    for root in forest.finish_order().iter().rev() {
        if visited.contains(root) {
            continue;
        }

        let mut component = Vec::new();
        let mut stack = vec![root.clone()];
        visited.insert(root.clone());

        while let Some(vertex) = stack.pop() {
            for next in transposed.neighbors(&vertex) {
                if visited.insert(next.clone()) {
                    stack.push(next.clone());
                }
            }

            component.push(vertex);
        }

        components.push(component);
    }

    components
}
