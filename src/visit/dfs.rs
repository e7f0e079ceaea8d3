use rustc_hash::FxHashMap;

use crate::{
    core::{marker::EdgeType, Identity},
    graph::Graph,
};

use super::{Color, Time};

/// Runs a depth-first search over the whole graph, no source required.
///
/// Roots are taken in ascending identity order, so the traversal covers
/// every component and is fully deterministic. The recursion is restated as
/// an explicit stack of (vertex, neighbor cursor) frames, which bounds stack
/// usage on pathological graphs and makes the timestamping reproducible.
///
/// Every directed edge (u, v) is classified the moment it is inspected:
/// *tree* if v is white and becomes a child of u, *back* if v is gray (an
/// ancestor still on the active path — the witness of a cycle), *forward*
/// if v is black and was discovered after u, *cross* otherwise.
pub fn dfs<I, E, Ty>(graph: &Graph<I, E, Ty>) -> DfsForest<I>
where
    I: Identity,
    Ty: EdgeType,
{
    let mut color: FxHashMap<I, Color> = FxHashMap::default();
    let mut discovery = FxHashMap::default();
    let mut finish = FxHashMap::default();
    let mut pred = FxHashMap::default();
    let mut finish_order = Vec::with_capacity(graph.node_count());
    let mut edges = EdgeClassification::default();

    let mut clock = 0usize;
    let mut stack: Vec<Frame<I>> = Vec::new();

    for root in graph.nodes() {
        if color.contains_key(root) {
            continue;
        }

        clock += 1;
        color.insert(root.clone(), Color::Gray);
        discovery.insert(root.clone(), Time(clock));
        stack.push(Frame::new(root.clone(), graph));

        while let Some(frame) = stack.last_mut() {
            if let Some(next) = frame.advance() {
                let vertex = frame.vertex.clone();

                match color.get(&next).copied().unwrap_or(Color::White) {
                    Color::White => {
                        clock += 1;
                        color.insert(next.clone(), Color::Gray);
                        discovery.insert(next.clone(), Time(clock));
                        pred.insert(next.clone(), vertex.clone());
                        edges.tree.push((vertex, next.clone()));
                        stack.push(Frame::new(next, graph));
                    }
                    Color::Gray => {
                        edges.back.push((vertex, next));
                    }
                    Color::Black => {
                        if discovery[&vertex] < discovery[&next] {
                            edges.forward.push((vertex, next));
                        } else {
                            edges.cross.push((vertex, next));
                        }
                    }
                }
            } else {
                let vertex = frame.vertex.clone();
                stack.pop();

                clock += 1;
                color.insert(vertex.clone(), Color::Black);
                finish.insert(vertex.clone(), Time(clock));
                finish_order.push(vertex);
            }
        }
    }

    DfsForest {
        discovery,
        finish,
        pred,
        finish_order,
        edges,
    }
}

/// Runs a full depth-first search and returns only its edge classification.
///
/// The classification is the authoritative cycle detector for directed
/// graphs: the graph is acyclic if and only if no back edge exists.
pub fn classify_edges<I, E, Ty>(graph: &Graph<I, E, Ty>) -> EdgeClassification<I>
where
    I: Identity,
    Ty: EdgeType,
{
    dfs(graph).into_edge_classification()
}

struct Frame<I> {
    vertex: I,
    neighbors: Vec<I>,
    next: usize,
}

impl<I: Identity> Frame<I> {
    fn new<E, Ty: EdgeType>(vertex: I, graph: &Graph<I, E, Ty>) -> Self {
        let neighbors = graph.neighbors(&vertex).cloned().collect();

        Self {
            vertex,
            neighbors,
            next: 0,
        }
    }

    fn advance(&mut self) -> Option<I> {
        let next = self.neighbors.get(self.next).cloned()?;
        self.next += 1;
        Some(next)
    }
}

/// Timestamps, parent forest and edge classification of a complete
/// depth-first pass, produced by [`dfs`].
#[derive(Debug)]
pub struct DfsForest<I> {
    discovery: FxHashMap<I, Time>,
    finish: FxHashMap<I, Time>,
    pred: FxHashMap<I, I>,
    finish_order: Vec<I>,
    edges: EdgeClassification<I>,
}

impl<I: Identity> DfsForest<I> {
    pub fn discovery(&self, vertex: &I) -> Option<Time> {
        self.discovery.get(vertex).copied()
    }

    pub fn finish(&self, vertex: &I) -> Option<Time> {
        self.finish.get(vertex).copied()
    }

    /// Parent of a vertex in the depth-first forest, `None` for roots.
    pub fn parent(&self, vertex: &I) -> Option<&I> {
        self.pred.get(vertex)
    }

    /// All vertices in ascending order of their finish timestamp.
    pub fn finish_order(&self) -> &[I] {
        &self.finish_order
    }

    pub fn edge_classification(&self) -> &EdgeClassification<I> {
        &self.edges
    }

    pub fn into_edge_classification(self) -> EdgeClassification<I> {
        self.edges
    }
}

/// The four edge collections discovered by a depth-first pass.
///
/// Only the tree/back distinction is meaningful for undirected graphs;
/// forward and cross edges exist in directed graphs only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeClassification<I> {
    pub tree: Vec<(I, I)>,
    pub back: Vec<(I, I)>,
    pub forward: Vec<(I, I)>,
    pub cross: Vec<(I, I)>,
}

impl<I> Default for EdgeClassification<I> {
    fn default() -> Self {
        Self {
            tree: Vec::new(),
            back: Vec::new(),
            forward: Vec::new(),
            cross: Vec::new(),
        }
    }
}

impl<I> EdgeClassification<I> {
    pub fn is_acyclic(&self) -> bool {
        self.back.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;

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
    fn timestamps() {
        let graph = sample();
        let forest = dfs(&graph);

        // Roots in ascending identity order, neighbors in ascending
        // identity order, global clock starting at 1.
        for (vertex, discovery, finish) in [
            ('a', 1, 16),
            ('b', 2, 15),
            ('c', 3, 12),
            ('d', 4, 7),
            ('h', 5, 6),
            ('g', 8, 11),
            ('f', 9, 10),
            ('e', 13, 14),
        ] {
            assert_eq!(forest.discovery(&vertex), Some(Time(discovery)), "{vertex}");
            assert_eq!(forest.finish(&vertex), Some(Time(finish)), "{vertex}");
        }
    }

    #[test]
    fn parent_forest() {
        let graph = sample();
        let forest = dfs(&graph);

        assert_eq!(forest.parent(&'a'), None);
        assert_eq!(forest.parent(&'b'), Some(&'a'));
        assert_eq!(forest.parent(&'c'), Some(&'b'));
        assert_eq!(forest.parent(&'d'), Some(&'c'));
        assert_eq!(forest.parent(&'h'), Some(&'d'));
        assert_eq!(forest.parent(&'g'), Some(&'c'));
        assert_eq!(forest.parent(&'f'), Some(&'g'));
        assert_eq!(forest.parent(&'e'), Some(&'b'));
    }

    #[test]
    fn edge_classification() {
        let graph = sample();
        let edges = classify_edges(&graph);

        let as_set = |edges: &[(char, char)]| edges.iter().copied().collect::<BTreeSet<_>>();

        assert_eq!(edges.tree.len(), 7);
        assert_eq!(
            as_set(&edges.back),
            BTreeSet::from([('d', 'c'), ('e', 'a'), ('f', 'g'), ('h', 'h')])
        );
        assert_eq!(as_set(&edges.forward), BTreeSet::from([('b', 'f')]));
        assert_eq!(
            as_set(&edges.cross),
            BTreeSet::from([('e', 'f'), ('g', 'h')])
        );
        assert!(!edges.is_acyclic());
    }

    #[test]
    fn full_forest_covers_every_component() {
        let mut graph = Graph::<u32>::new_directed();
        graph.extend_with_nodes([1, 2, 3, 4]);
        graph.extend_with_edges([(1, 2), (3, 4)]).unwrap();

        let forest = dfs(&graph);

        for vertex in [1, 2, 3, 4] {
            assert!(forest.discovery(&vertex).is_some());
            assert!(forest.finish(&vertex).is_some());
        }
        assert_eq!(forest.parent(&3), None);
    }

    #[test]
    fn deep_path_does_not_overflow_stack() {
        let mut graph = Graph::<u32>::new_directed();
        let n = 100_000;

        graph.extend_with_nodes(0..n);
        graph.extend_with_edges((0..n - 1).map(|i| (i, i + 1))).unwrap();

        let forest = dfs(&graph);

        assert_eq!(forest.discovery(&0), Some(Time(1)));
        assert_eq!(forest.finish(&0), Some(Time(2 * n as usize)));
    }

    proptest! {
        #[test]
        fn discovery_precedes_finish_and_timestamps_are_distinct(
            edges in prop::collection::vec((0u8..12, 0u8..12), 0..50),
        ) {
            let mut graph = Graph::<u8>::new_directed();
            graph.extend_with_nodes(0..12);
            for (u, v) in edges {
                graph.add_edge(&u, &v, ()).unwrap();
            }

            let forest = dfs(&graph);

            let mut timestamps = BTreeSet::new();
            for vertex in graph.nodes() {
                let discovery = forest.discovery(vertex).unwrap();
                let finish = forest.finish(vertex).unwrap();

                prop_assert!(discovery < finish);
                timestamps.insert(discovery);
                timestamps.insert(finish);
            }

            // A strict total order: all 2|V| timestamps are distinct and
            // tightly fill 1..=2|V|.
            prop_assert_eq!(timestamps.len(), 2 * graph.node_count());
            prop_assert_eq!(timestamps.last(), Some(&Time(2 * graph.node_count())));
        }

        #[test]
        fn back_edge_iff_cycle(
            edges in prop::collection::vec((0u8..10, 0u8..10), 0..40),
        ) {
            let mut graph = Graph::<u8>::new_directed();
            graph.extend_with_nodes(0..10);
            for (u, v) in &edges {
                graph.add_edge(u, v, ()).unwrap();
            }

            // Independent oracle: indegree peeling (Kahn). The graph is
            // acyclic exactly when every vertex can be peeled.
            let mut indegree = vec![0usize; 10];
            for (_, v, _) in graph.edges() {
                indegree[*v as usize] += 1;
            }
            let mut ready: Vec<u8> = (0u8..10).filter(|v| indegree[*v as usize] == 0).collect();
            let mut peeled = 0;
            while let Some(u) = ready.pop() {
                peeled += 1;
                for v in graph.neighbors(&u) {
                    indegree[*v as usize] -= 1;
                    if indegree[*v as usize] == 0 {
                        ready.push(*v);
                    }
                }
            }
            let acyclic = peeled == graph.node_count();

            prop_assert_eq!(classify_edges(&graph).is_acyclic(), acyclic);
        }
    }
}
