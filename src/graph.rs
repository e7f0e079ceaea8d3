//! Mutable vertex/edge model that every algorithm in this crate operates on.
//!
//! A [`Graph`] owns a set of vertices keyed by an [identity](Identity) value,
//! an edge collection with an optional weight per edge, and an adjacency
//! mapping kept consistent with the edge collection: inserting an edge always
//! adds the forward adjacency and, when the graph is undirected, the reverse
//! adjacency as well.
//!
//! # Examples
//!
//! ```
//! use arbor::{graph::Graph, visit::bfs};
//!
//! let mut graph = Graph::<char>::new_directed();
//!
//! graph.extend_with_nodes('a'..='d');
//! graph.extend_with_edges([('a', 'b'), ('b', 'c'), ('a', 'c'), ('c', 'd')]).unwrap();
//!
//! let traversal = bfs(&graph, &'a');
//! assert_eq!(traversal.dist(&'d'), Some(2));
//! ```

use std::{
    collections::{BTreeMap, BTreeSet},
    marker::PhantomData,
};

use rustc_hash::FxHashMap;

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind},
    marker::{Directed, EdgeType, Undirected},
    Identity,
};

#[derive(Debug, Clone)]
pub struct Graph<I, E = (), Ty = Directed> {
    adj: BTreeMap<I, BTreeSet<I>>,
    edges: FxHashMap<(I, I), E>,
    ty: PhantomData<Ty>,
}

/// Anything that can be fed to [`Graph::extend_with_edges`]: `(u, v, weight)`
/// triples, or plain `(u, v)` pairs when the weight type has a default (which
/// in particular covers unweighted graphs with `E = ()`).
pub trait IntoEdgeTuple<I, E> {
    fn into_edge_tuple(self) -> (I, I, E);
}

impl<I, E> IntoEdgeTuple<I, E> for (I, I, E) {
    fn into_edge_tuple(self) -> (I, I, E) {
        self
    }
}

impl<I, E: Default> IntoEdgeTuple<I, E> for (I, I) {
    fn into_edge_tuple(self) -> (I, I, E) {
        (self.0, self.1, E::default())
    }
}

impl<I, E, Ty> Graph<I, E, Ty>
where
    I: Identity,
    Ty: EdgeType,
{
    pub fn new() -> Self {
        Self {
            adj: BTreeMap::new(),
            edges: FxHashMap::default(),
            ty: PhantomData,
        }
    }

    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    /// Adds a node with the given identity. Adding an already present
    /// identity is a no-op.
    pub fn add_node(&mut self, id: I) {
        self.adj.entry(id).or_default();
    }

    pub fn extend_with_nodes<It>(&mut self, iter: It)
    where
        It: IntoIterator<Item = I>,
    {
        for id in iter {
            self.add_node(id);
        }
    }

    /// Adds an edge between two already present nodes. Fails with a
    /// [missing endpoint](AddEdgeErrorKind) error, leaving the graph
    /// unmodified, if either identity has not been added.
    ///
    /// The adjacency mapping mirrors the edge: the forward direction always,
    /// the reverse direction too when the graph is undirected.
    pub fn add_edge(&mut self, u: &I, v: &I, weight: E) -> Result<(), AddEdgeError> {
        if !self.adj.contains_key(u) {
            return Err(AddEdgeError::new(AddEdgeErrorKind::SourceAbsent));
        }

        if !self.adj.contains_key(v) {
            return Err(AddEdgeError::new(AddEdgeErrorKind::DestinationAbsent));
        }

        self.edges.insert((u.clone(), v.clone()), weight);
        self.adj.entry(u.clone()).or_default().insert(v.clone());

        if !Ty::is_directed() {
            self.adj.entry(v.clone()).or_default().insert(u.clone());
        }

        Ok(())
    }

    pub fn extend_with_edges<T, It>(&mut self, iter: It) -> Result<(), AddEdgeError>
    where
        T: IntoEdgeTuple<I, E>,
        It: IntoIterator<Item = T>,
    {
        for edge in iter {
            let (u, v, weight) = edge.into_edge_tuple();
            self.add_edge(&u, &v, weight)?;
        }

        Ok(())
    }

    pub fn contains_node(&self, id: &I) -> bool {
        self.adj.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over all identities in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &I> {
        self.adj.keys()
    }

    /// Iterates over the neighbors of a node in ascending identity order.
    /// Empty for identities not present in the graph.
    pub fn neighbors<'a>(&'a self, id: &I) -> impl Iterator<Item = &'a I> {
        self.adj.get(id).into_iter().flatten()
    }

    /// Iterates over all edges in their insertion orientation, in no
    /// particular order.
    pub fn edges(&self) -> impl Iterator<Item = (&I, &I, &E)> {
        self.edges.iter().map(|((u, v), weight)| (u, v, weight))
    }

    /// Looks up the weight of an edge, trying both orientations regardless
    /// of the graph type.
    pub fn weight(&self, u: &I, v: &I) -> Option<&E> {
        self.edges
            .get(&(u.clone(), v.clone()))
            .or_else(|| self.edges.get(&(v.clone(), u.clone())))
    }
}

impl<I, E> Graph<I, E, Directed>
where
    I: Identity,
{
    pub fn new_directed() -> Self {
        Self::new()
    }

    /// Builds the transpose: the same vertex set with every edge reversed.
    pub fn transpose(&self) -> Self
    where
        E: Clone,
    {
        let mut transposed = Self::new();
        transposed.extend_with_nodes(self.nodes().cloned());

        for (u, v, weight) in self.edges() {
            transposed
                .add_edge(v, u, weight.clone())
                .expect("transpose preserves the vertex set");
        }

        transposed
    }
}

impl<I, E> Graph<I, E, Undirected>
where
    I: Identity,
{
    pub fn new_undirected() -> Self {
        Self::new()
    }
}

impl<I, E, Ty> Default for Graph<I, E, Ty>
where
    I: Identity,
    Ty: EdgeType,
{
    fn default() -> Self {
        Self::new()
    }
}
