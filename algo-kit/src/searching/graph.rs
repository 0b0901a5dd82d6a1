//! Breadth-first and depth-first traversal over [`Graph`].
//!
//! Neighbours are visited in insertion order, so every traversal here is
//! deterministic. Edge weights are ignored.

use std::collections::VecDeque;

use algo_collections::Graph;

use crate::error::AlgoError;

/// Vertices reachable from `start`, in breadth-first order.
///
/// # Time Complexity
///
/// Takes *O*(*V* + *E*) time.
///
/// # Examples
///
/// ```
/// use algo_kit::collections::Graph;
/// use algo_kit::searching::bfs;
///
/// let graph = Graph::from_edges(4, false, [(0, 1, 1), (0, 2, 1), (1, 3, 1)]).unwrap();
/// assert_eq!(bfs(&graph, 0).unwrap(), vec![0, 1, 2, 3]);
/// ```
pub fn bfs(graph: &Graph, start: usize) -> Result<Vec<usize>, AlgoError> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut queue = VecDeque::from([start]);
    visited[start] = true;

    while let Some(vertex) = queue.pop_front() {
        order.push(vertex);
        for edge in graph.neighbors(vertex) {
            if !visited[edge.to] {
                visited[edge.to] = true;
                queue.push_back(edge.to);
            }
        }
    }

    tracing::debug!(start, visited = order.len(), "bfs finished");
    Ok(order)
}

/// Edge-count distance from `start` to every vertex, `None` if unreachable.
pub fn bfs_distances(graph: &Graph, start: usize) -> Result<Vec<Option<usize>>, AlgoError> {
    graph.check_vertex(start)?;

    let mut dist = vec![None; graph.vertex_count()];
    let mut queue = VecDeque::from([start]);
    dist[start] = Some(0);

    while let Some(vertex) = queue.pop_front() {
        let next = dist[vertex].map_or(0, |d| d + 1);
        for edge in graph.neighbors(vertex) {
            if dist[edge.to].is_none() {
                dist[edge.to] = Some(next);
                queue.push_back(edge.to);
            }
        }
    }

    Ok(dist)
}

/// A path from `from` to `to` with the fewest edges, both ends included.
///
/// Returns `Ok(None)` if `to` is unreachable.
pub fn shortest_path_unweighted(
    graph: &Graph,
    from: usize,
    to: usize,
) -> Result<Option<Vec<usize>>, AlgoError> {
    graph.check_vertex(from)?;
    graph.check_vertex(to)?;

    let mut parent: Vec<Option<usize>> = vec![None; graph.vertex_count()];
    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::from([from]);
    visited[from] = true;

    while let Some(vertex) = queue.pop_front() {
        if vertex == to {
            break;
        }
        for edge in graph.neighbors(vertex) {
            if !visited[edge.to] {
                visited[edge.to] = true;
                parent[edge.to] = Some(vertex);
                queue.push_back(edge.to);
            }
        }
    }

    if !visited[to] {
        return Ok(None);
    }

    let mut path = vec![to];
    let mut current = to;
    while let Some(p) = parent[current] {
        path.push(p);
        current = p;
    }
    path.reverse();
    Ok(Some(path))
}

/// Vertices reachable from `start`, in depth-first pre-order.
///
/// Uses an explicit stack of `(vertex, next neighbour index)` frames, so
/// the visiting order is identical to [`dfs_recursive`] while the call
/// stack stays flat on long paths.
pub fn dfs(graph: &Graph, start: usize) -> Result<Vec<usize>, AlgoError> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut order = vec![start];
    let mut stack = vec![(start, 0usize)];
    visited[start] = true;

    while let Some((vertex, cursor)) = stack.last_mut() {
        let Some(edge) = graph.neighbors(*vertex).get(*cursor) else {
            stack.pop();
            continue;
        };
        *cursor += 1;
        if !visited[edge.to] {
            visited[edge.to] = true;
            order.push(edge.to);
            stack.push((edge.to, 0));
        }
    }

    tracing::debug!(start, visited = order.len(), "dfs finished");
    Ok(order)
}

/// Recursive depth-first pre-order. Recursion depth can reach *V*; prefer
/// [`dfs`] on large graphs.
pub fn dfs_recursive(graph: &Graph, start: usize) -> Result<Vec<usize>, AlgoError> {
    fn visit(graph: &Graph, vertex: usize, visited: &mut [bool], order: &mut Vec<usize>) {
        visited[vertex] = true;
        order.push(vertex);
        for edge in graph.neighbors(vertex) {
            if !visited[edge.to] {
                visit(graph, edge.to, visited, order);
            }
        }
    }

    graph.check_vertex(start)?;
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    visit(graph, start, &mut visited, &mut order);
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algo_collections::CollectionError;

    fn sample() -> Graph {
        // 0 - 1 - 3
        // |   |
        // 2 - 4   5 (isolated)
        Graph::from_edges(
            6,
            false,
            [(0, 1, 1), (0, 2, 1), (1, 3, 1), (1, 4, 1), (2, 4, 1)],
        )
        .unwrap()
    }

    #[test]
    fn test_bfs_order() {
        assert_eq!(bfs(&sample(), 0).unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_dfs_order_matches_recursive() {
        let graph = sample();
        assert_eq!(dfs(&graph, 0).unwrap(), vec![0, 1, 3, 4, 2]);
        assert_eq!(dfs(&graph, 0).unwrap(), dfs_recursive(&graph, 0).unwrap());
        assert_eq!(dfs(&graph, 4).unwrap(), dfs_recursive(&graph, 4).unwrap());
    }

    #[test]
    fn test_isolated_vertex() {
        let graph = sample();
        assert_eq!(bfs(&graph, 5).unwrap(), vec![5]);
        assert_eq!(dfs(&graph, 5).unwrap(), vec![5]);
    }

    #[test]
    fn test_directed_edges_are_one_way() {
        let graph = Graph::from_edges(3, true, [(0, 1, 1), (2, 1, 1)]).unwrap();
        assert_eq!(bfs(&graph, 0).unwrap(), vec![0, 1]);
        assert_eq!(bfs(&graph, 1).unwrap(), vec![1]);
    }

    #[test]
    fn test_distances_and_shortest_path() {
        let graph = sample();
        assert_eq!(
            bfs_distances(&graph, 0).unwrap(),
            vec![Some(0), Some(1), Some(1), Some(2), Some(2), None]
        );
        assert_eq!(
            shortest_path_unweighted(&graph, 3, 2).unwrap(),
            Some(vec![3, 1, 0, 2])
        );
        assert_eq!(shortest_path_unweighted(&graph, 0, 5).unwrap(), None);
        assert_eq!(shortest_path_unweighted(&graph, 4, 4).unwrap(), Some(vec![4]));
    }

    #[test]
    fn test_out_of_range_start() {
        let err = bfs(&sample(), 9).unwrap_err();
        assert_eq!(
            err,
            AlgoError::Collection(CollectionError::VertexOutOfRange { vertex: 9, len: 6 })
        );
        assert!(dfs(&sample(), 6).is_err());
    }

    #[test]
    fn test_long_path_does_not_overflow_iterative_dfs() {
        let n = 200_000;
        let graph = Graph::from_edges(n, true, (0..n - 1).map(|v| (v, v + 1, 1))).unwrap();
        let order = dfs(&graph, 0).unwrap();
        assert_eq!(order.len(), n);
        assert_eq!(order.last(), Some(&(n - 1)));
    }
}
