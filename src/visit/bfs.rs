use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::{
    core::{
        marker::{Directed, EdgeType},
        Identity,
    },
    graph::Graph,
};

use super::reconstruct_path;

/// Runs a breadth-first search from `source`, visiting neighbors in
/// ascending identity order with a strict first-in-first-out queue.
///
/// Every reachable vertex ends up with its minimum edge-count distance from
/// the source and one shortest-path parent.
pub fn bfs<I, E, Ty>(graph: &Graph<I, E, Ty>, source: &I) -> BfsTraversal<I>
where
    I: Identity,
    Ty: EdgeType,
{
    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();
    let mut queue = VecDeque::new();

    if graph.contains_node(source) {
        dist.insert(source.clone(), 0);
        queue.push_back(source.clone());
    }

    while let Some(vertex) = queue.pop_front() {
        let vertex_dist = dist[&vertex];

        for next in graph.neighbors(&vertex) {
            if !dist.contains_key(next) {
                dist.insert(next.clone(), vertex_dist + 1);
                pred.insert(next.clone(), vertex.clone());
                queue.push_back(next.clone());
            }
        }
    }

    BfsTraversal {
        source: source.clone(),
        dist,
        pred,
    }
}

/// Distances and shortest-path parent tree produced by [`bfs`].
#[derive(Debug)]
pub struct BfsTraversal<I> {
    source: I,
    dist: FxHashMap<I, usize>,
    pred: FxHashMap<I, I>,
}

impl<I: Identity> BfsTraversal<I> {
    /// Source vertex where the search was started.
    pub fn source(&self) -> &I {
        &self.source
    }

    /// Minimum edge-count distance from the source, or `None` for vertices
    /// the search did not reach.
    pub fn dist(&self, to: &I) -> Option<usize> {
        self.dist.get(to).copied()
    }

    /// Shortest path from the source to `to`, empty if unreached and a
    /// single element if `to` is the source itself.
    pub fn path(&self, to: &I) -> Vec<I> {
        reconstruct_path(&self.pred, &self.source, to)
    }

    /// Extracts the breadth-first tree as a new directed graph containing
    /// all identities of the original graph and exactly the parent→child
    /// edges discovered by the search.
    pub fn tree<E, Ty>(&self, graph: &Graph<I, E, Ty>) -> Graph<I, (), Directed>
    where
        Ty: EdgeType,
    {
        let mut tree = Graph::new_directed();
        tree.extend_with_nodes(graph.nodes().cloned());

        for (child, parent) in &self.pred {
            tree.add_edge(parent, child, ())
                .expect("parent tree spans vertices of the traversed graph");
        }

        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The directed graph on {a..h} used throughout CLRS-style examples.
    fn sample() -> Graph<char> {
        let mut graph = Graph::new_directed();

        graph.extend_with_nodes('a'..='h');
        graph
            .extend_with_edges([
                ('a', 'b'),
                ('b', 'c'),
                ('b', 'e'),
                ('b', 'f'),
                ('c', 'd'),
                ('c', 'g'),
                ('d', 'c'),
                ('d', 'h'),
                ('e', 'a'),
                ('e', 'f'),
                ('f', 'g'),
                ('g', 'f'),
                ('g', 'h'),
                ('h', 'h'),
            ])
            .unwrap();

        graph
    }

    #[test]
    fn distances() {
        let graph = sample();
        let traversal = bfs(&graph, &'a');

        for (vertex, dist) in [
            ('a', 0),
            ('b', 1),
            ('c', 2),
            ('e', 2),
            ('f', 2),
            ('d', 3),
            ('g', 3),
            ('h', 4),
        ] {
            assert_eq!(traversal.dist(&vertex), Some(dist), "vertex {vertex}");
        }
    }

    #[test]
    fn path_reconstruction() {
        let graph = sample();
        let traversal = bfs(&graph, &'a');

        // With neighbors visited in ascending order, h is first reached
        // through d. The path has the minimum possible length 5.
        assert_eq!(traversal.path(&'h'), vec!['a', 'b', 'c', 'd', 'h']);
        assert_eq!(traversal.path(&'a'), vec!['a']);
    }

    #[test]
    fn unreached_vertex() {
        let mut graph = Graph::<u32>::new_directed();
        graph.extend_with_nodes([1, 2, 3]);
        graph.add_edge(&1, &2, ()).unwrap();

        let traversal = bfs(&graph, &1);

        assert_eq!(traversal.dist(&3), None);
        assert_eq!(traversal.path(&3), Vec::<u32>::new());
    }

    #[test]
    fn breadth_first_tree() {
        let graph = sample();
        let tree = bfs(&graph, &'a').tree(&graph);

        // All original identities, exactly the parent→child edges.
        assert_eq!(tree.node_count(), graph.node_count());
        assert_eq!(tree.edge_count(), 7);

        assert!(tree.neighbors(&'a').any(|n| *n == 'b'));
        assert!(tree.neighbors(&'c').any(|n| *n == 'd'));
        assert!(tree.neighbors(&'d').any(|n| *n == 'h'));
        // e is reached from b, not from a through the back edge e→a.
        assert!(tree.neighbors(&'b').any(|n| *n == 'e'));
    }

    #[test]
    fn bfs_from_absent_source() {
        let graph = Graph::<u32>::new_directed();
        let traversal = bfs(&graph, &7);

        assert_eq!(traversal.dist(&7), None);
        assert_eq!(traversal.path(&7), vec![7]);
    }
}
