//! Topological ordering of a directed acyclic graph.
//!
//! Variables:
//!   indegree[v] = number of edges into v
//!
//! Equations:
//!   Kahn: repeatedly emit a vertex with indegree 0 and decrement its
//!         out-neighbours. |order| < V  =>  cycle.  O(V + E)
//!   DFS:  emit each vertex after its descendants, reverse at the end.

use std::collections::VecDeque;

use super::adj_list::Graph;
use super::GraphError;

/// Kahn's algorithm. Vertices with equal standing come out in index
/// order (the queue is seeded 0..V).
pub fn topological_sort(graph: &Graph) -> Result<Vec<usize>, GraphError> {
    let v = graph.vertex_count();
    let mut indegree = vec![0usize; v];
    for u in 0..v {
        for e in graph.neighbours(u)? {
            indegree[e.to] += 1;
        }
    }

    let mut queue: VecDeque<usize> = (0..v).filter(|&i| indegree[i] == 0).collect();
    let mut order = Vec::with_capacity(v);
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for e in graph.neighbours(u)? {
            indegree[e.to] -= 1;
            if indegree[e.to] == 0 {
                queue.push_back(e.to);
            }
        }
    }

    if order.len() < v {
        return Err(GraphError::CycleDetected);
    }
    Ok(order)
}

/// DFS-based ordering: post-order over every component, reversed.
pub fn topological_sort_dfs(graph: &Graph) -> Result<Vec<usize>, GraphError> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Unvisited,
        InProgress,
        Done,
    }

    fn visit(
        graph: &Graph,
        node: usize,
        marks: &mut [Mark],
        out: &mut Vec<usize>,
    ) -> Result<(), GraphError> {
        marks[node] = Mark::InProgress;
        for e in graph.neighbours(node)? {
            match marks[e.to] {
                Mark::InProgress => return Err(GraphError::CycleDetected),
                Mark::Unvisited => visit(graph, e.to, marks, out)?,
                Mark::Done => {}
            }
        }
        marks[node] = Mark::Done;
        out.push(node);
        Ok(())
    }

    let v = graph.vertex_count();
    let mut marks = vec![Mark::Unvisited; v];
    let mut order = Vec::with_capacity(v);
    for node in 0..v {
        if marks[node] == Mark::Unvisited {
            visit(graph, node, &mut marks, &mut order)?;
        }
    }
    order.reverse();
    Ok(order)
}
