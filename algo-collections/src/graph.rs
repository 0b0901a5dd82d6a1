//! Adjacency-list graph over the vertices `0..n`.

use crate::error::CollectionError;

/// Outgoing edge stored in an adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Target vertex
    pub to: usize,
    /// Edge weight; unweighted algorithms ignore it
    pub weight: i64,
}

/// A fully specified edge, as yielded by [`Graph::edges`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedEdge {
    /// Source vertex
    pub from: usize,
    /// Target vertex
    pub to: usize,
    /// Edge weight
    pub weight: i64,
}

/// A directed or undirected graph stored as adjacency lists.
///
/// Neighbours are kept in insertion order, and every traversal in this
/// workspace visits them in that order. An undirected edge is stored in
/// both endpoint lists but counted and enumerated once.
///
/// # Example
///
/// ```rust
/// use algo_collections::graph::Graph;
///
/// let mut g = Graph::undirected(3);
/// g.add_edge(0, 1, 4).unwrap();
/// g.add_edge(1, 2, 1).unwrap();
/// assert_eq!(g.edge_count(), 2);
/// assert_eq!(g.neighbors(1).len(), 2);
/// assert!(g.add_edge(0, 3, 1).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    directed: bool,
    edge_count: usize,
}

impl Graph {
    /// Creates a directed graph with `n` vertices and no edges.
    pub fn directed(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
            directed: true,
            edge_count: 0,
        }
    }

    /// Creates an undirected graph with `n` vertices and no edges.
    pub fn undirected(n: usize) -> Self {
        Self {
            directed: false,
            ..Self::directed(n)
        }
    }

    /// Builds a graph from `(from, to, weight)` triples.
    pub fn from_edges<I>(n: usize, directed: bool, edges: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        let mut graph = if directed {
            Self::directed(n)
        } else {
            Self::undirected(n)
        };
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Adds an edge. On an undirected graph the reverse edge is added too.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: i64) -> Result<(), CollectionError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        self.adjacency[from].push(Edge { to, weight });
        if !self.directed && from != to {
            self.adjacency[to].push(Edge { to: from, weight });
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Adds an edge of weight 1.
    pub fn add_unweighted_edge(&mut self, from: usize, to: usize) -> Result<(), CollectionError> {
        self.add_edge(from, to, 1)
    }

    /// Returns an error unless `vertex` names a vertex of this graph.
    pub fn check_vertex(&self, vertex: usize) -> Result<(), CollectionError> {
        if vertex < self.adjacency.len() {
            Ok(())
        } else {
            Err(CollectionError::VertexOutOfRange {
                vertex,
                len: self.adjacency.len(),
            })
        }
    }

    /// Outgoing edges of `vertex`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn neighbors(&self, vertex: usize) -> &[Edge] {
        &self.adjacency[vertex]
    }

    /// Every edge once. Undirected edges are reported with `from <= to`.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(from, edges)| {
                edges
                    .iter()
                    .filter(move |edge| self.directed || from <= edge.to)
                    .map(move |edge| WeightedEdge {
                        from,
                        to: edge.to,
                        weight: edge.weight,
                    })
            })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges added.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true for a directed graph.
    pub fn is_directed(&self) -> bool {
        self.directed
    }
}
