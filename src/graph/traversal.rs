//! Breadth-first and depth-first traversal, plus cycle detection.
//!
//! Variables:
//!   visited[v] = whether v has been discovered
//!   Color      = White (unseen) | Gray (on the DFS stack) | Black (done)
//!
//! Equations:
//!   bfs / dfs                          O(V + E)
//!   directed cycle   <=> DFS reaches a Gray vertex
//!   undirected cycle <=> DFS reaches a visited vertex that is not the
//!                        parent it came from

use std::collections::VecDeque;

use super::adj_list::Graph;
use super::GraphError;

/// Vertices reachable from `start` in breadth-first order.
pub fn bfs(graph: &Graph, start: usize) -> Result<Vec<usize>, GraphError> {
    graph.check_vertex(start)?;
    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for e in graph.neighbours(node)? {
            if !visited[e.to] {
                visited[e.to] = true;
                queue.push_back(e.to);
            }
        }
    }
    Ok(order)
}

/// Vertices reachable from `start` in depth-first order, iterative.
/// Neighbours are pushed in reverse so the first neighbour is explored
/// first, matching the recursive order.
pub fn dfs(graph: &Graph, start: usize) -> Result<Vec<usize>, GraphError> {
    graph.check_vertex(start)?;
    let mut visited = vec![false; graph.vertex_count()];
    let mut stack = vec![start];
    let mut order = Vec::new();

    while let Some(node) = stack.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        order.push(node);
        for e in graph.neighbours(node)?.iter().rev() {
            if !visited[e.to] {
                stack.push(e.to);
            }
        }
    }
    Ok(order)
}

/// Recursive depth-first order from `start`.
pub fn dfs_recursive(graph: &Graph, start: usize) -> Result<Vec<usize>, GraphError> {
    fn visit(
        graph: &Graph,
        node: usize,
        visited: &mut [bool],
        out: &mut Vec<usize>,
    ) -> Result<(), GraphError> {
        visited[node] = true;
        out.push(node);
        for e in graph.neighbours(node)? {
            if !visited[e.to] {
                visit(graph, e.to, visited, out)?;
            }
        }
        Ok(())
    }

    graph.check_vertex(start)?;
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    visit(graph, start, &mut visited, &mut order)?;
    Ok(order)
}

#[derive(Clone, Copy, PartialEq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Whether a directed graph contains a cycle. Three-color DFS over every
/// component; a back edge lands on a Gray vertex.
pub fn has_cycle_directed(graph: &Graph) -> Result<bool, GraphError> {
    fn visit(graph: &Graph, node: usize, colors: &mut [Color]) -> Result<bool, GraphError> {
        colors[node] = Color::Gray;
        for e in graph.neighbours(node)? {
            match colors[e.to] {
                Color::Gray => return Ok(true),
                Color::White => {
                    if visit(graph, e.to, colors)? {
                        return Ok(true);
                    }
                }
                Color::Black => {}
            }
        }
        colors[node] = Color::Black;
        Ok(false)
    }

    let mut colors = vec![Color::White; graph.vertex_count()];
    for v in 0..graph.vertex_count() {
        if colors[v] == Color::White && visit(graph, v, &mut colors)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Whether an undirected graph contains a cycle. DFS that ignores the
/// edge back to the parent it arrived by.
pub fn has_cycle_undirected(graph: &Graph) -> Result<bool, GraphError> {
    fn visit(
        graph: &Graph,
        node: usize,
        parent: Option<usize>,
        visited: &mut [bool],
    ) -> Result<bool, GraphError> {
        visited[node] = true;
        for e in graph.neighbours(node)? {
            if !visited[e.to] {
                if visit(graph, e.to, Some(node), visited)? {
                    return Ok(true);
                }
            } else if Some(e.to) != parent {
                return Ok(true);
            }
        }
        Ok(false)
    }

    let mut visited = vec![false; graph.vertex_count()];
    for v in 0..graph.vertex_count() {
        if !visited[v] && visit(graph, v, None, &mut visited)? {
            return Ok(true);
        }
    }
    Ok(false)
}
