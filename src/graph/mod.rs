use thiserror::Error;

pub mod adj_list;
pub mod invariant;
pub mod shortest_path;
pub mod spanning_tree;
pub mod topological_sort;
pub mod traversal;

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("vertex {vertex} out of bounds for graph with {len} vertices")]
    VertexOutOfBounds { vertex: usize, len: usize },
    #[error("negative-weight cycle reachable from source")]
    NegativeCycle,
    #[error("graph contains a cycle, no topological order exists")]
    CycleDetected,
}
