//! Minimum spanning trees and single-source shortest paths.

use algo_collections::{DisjointSet, Graph, MinHeap, WeightedEdge};

use crate::error::AlgoError;

/// Edges of a minimum spanning tree or forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    /// Chosen edges, in the order they were added
    pub edges: Vec<WeightedEdge>,
    pub total_weight: i64,
}

fn require_undirected(graph: &Graph) -> Result<(), AlgoError> {
    if graph.is_directed() {
        return Err(AlgoError::DirectedGraph);
    }
    Ok(())
}

/// Kruskal's algorithm: scan edges by ascending weight, keeping each one
/// that joins two different components.
///
/// On a disconnected graph the result is a minimum spanning forest.
/// Equal weights are taken in [`Graph::edges`] order. *O*(*E log E*) time.
///
/// ```
/// use algo_kit::collections::Graph;
/// use algo_kit::greedy::kruskal;
///
/// let graph = Graph::from_edges(4, false, [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)])
///     .unwrap();
/// assert_eq!(kruskal(&graph).unwrap().total_weight, 19);
/// ```
pub fn kruskal(graph: &Graph) -> Result<SpanningTree, AlgoError> {
    require_undirected(graph)?;

    let mut edges: Vec<WeightedEdge> = graph.edges().collect();
    edges.sort_by_key(|edge| edge.weight);

    let mut components = DisjointSet::new(graph.vertex_count());
    let mut tree = SpanningTree {
        edges: Vec::new(),
        total_weight: 0,
    };
    for edge in edges {
        if components.union(edge.from, edge.to) {
            tree.total_weight += edge.weight;
            tree.edges.push(edge);
            if components.set_count() == 1 {
                break;
            }
        }
    }

    tracing::debug!(
        edges = tree.edges.len(),
        weight = tree.total_weight,
        "kruskal finished"
    );
    Ok(tree)
}

/// Prim's algorithm: grow a tree from `start`, always adding the cheapest
/// edge leaving it.
///
/// Uses a [`MinHeap`] of candidate edges with lazy deletion, so stale
/// entries are skipped when popped. Spans only the component of `start`.
/// *O*(*E log E*) time.
pub fn prim(graph: &Graph, start: usize) -> Result<SpanningTree, AlgoError> {
    require_undirected(graph)?;
    graph.check_vertex(start)?;

    let mut in_tree = vec![false; graph.vertex_count()];
    let mut candidates = MinHeap::new();
    let mut tree = SpanningTree {
        edges: Vec::new(),
        total_weight: 0,
    };

    in_tree[start] = true;
    for edge in graph.neighbors(start) {
        candidates.push((edge.weight, edge.to, start));
    }

    while let Some((weight, to, from)) = candidates.pop() {
        if in_tree[to] {
            continue;
        }
        in_tree[to] = true;
        tree.total_weight += weight;
        tree.edges.push(WeightedEdge { from, to, weight });

        for edge in graph.neighbors(to) {
            if !in_tree[edge.to] {
                candidates.push((edge.weight, edge.to, to));
            }
        }
    }

    tracing::debug!(
        start,
        edges = tree.edges.len(),
        weight = tree.total_weight,
        "prim finished"
    );
    Ok(tree)
}

/// Result of [`dijkstra`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    pub source: usize,
    /// Shortest distance to each vertex, `None` if unreachable
    pub dist: Vec<Option<i64>>,
    /// Predecessor of each vertex on its shortest path
    pub prev: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Shortest distance to `target`.
    pub fn distance(&self, target: usize) -> Option<i64> {
        self.dist.get(target).copied().flatten()
    }

    /// Vertices on a shortest path from the source to `target`, both
    /// included. `None` if `target` is unreachable or out of range.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance(target)?;
        let mut path = vec![target];
        let mut current = target;
        while let Some(p) = self.prev[current] {
            path.push(p);
            current = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra's algorithm from `source`.
///
/// All edge weights must be non-negative; the first negative edge found is
/// reported as [`AlgoError::NegativeWeight`] before any search work.
/// *O*((*V* + *E*) log *V*) time with a binary heap.
///
/// ```
/// use algo_kit::collections::Graph;
/// use algo_kit::greedy::dijkstra;
///
/// let graph = Graph::from_edges(4, true, [(0, 1, 1), (1, 2, 2), (0, 2, 4)]).unwrap();
/// let paths = dijkstra(&graph, 0).unwrap();
/// assert_eq!(paths.dist, vec![Some(0), Some(1), Some(3), None]);
/// assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
/// ```
pub fn dijkstra(graph: &Graph, source: usize) -> Result<ShortestPaths, AlgoError> {
    graph.check_vertex(source)?;
    if let Some(edge) = graph.edges().find(|edge| edge.weight < 0) {
        tracing::warn!(
            from = edge.from,
            to = edge.to,
            weight = edge.weight,
            "dijkstra rejects negative edge weight"
        );
        return Err(AlgoError::NegativeWeight {
            from: edge.from,
            to: edge.to,
            weight: edge.weight,
        });
    }

    let n = graph.vertex_count();
    let mut dist: Vec<Option<i64>> = vec![None; n];
    let mut prev = vec![None; n];
    let mut settled = vec![false; n];
    let mut frontier = MinHeap::new();

    dist[source] = Some(0);
    frontier.push((0i64, source));

    while let Some((d, vertex)) = frontier.pop() {
        if settled[vertex] {
            continue;
        }
        settled[vertex] = true;

        for edge in graph.neighbors(vertex) {
            let candidate = d.saturating_add(edge.weight);
            if dist[edge.to].is_none_or(|known| candidate < known) {
                dist[edge.to] = Some(candidate);
                prev[edge.to] = Some(vertex);
                frontier.push((candidate, edge.to));
            }
        }
    }

    tracing::debug!(
        source,
        reached = settled.iter().filter(|&&s| s).count(),
        "dijkstra finished"
    );
    Ok(ShortestPaths { source, dist, prev })
}
