//! Weighted adjacency-list graph representation.
//!
//! Variables:
//!   V       = number of vertices, dense 0..V
//!   E       = number of stored edge records
//!   adj[u]  = Vec<Edge> of out-neighbours of vertex u
//!
//! Equations:
//!   add_edge(u, v, w):  adj[u].push((v, w)),  E += 1
//!                       undirected also adj[v].push((u, w)),  E += 2
//!   out_degree(u)    = |adj[u]|
//!   edges()          = directed: every record; undirected: u <= v once

use super::GraphError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub to: usize,
    pub weight: i64,
}

pub struct Graph {
    adj: Vec<Vec<Edge>>,
    directed: bool,
}

impl Graph {
    /// Empty directed graph with `v` vertices.
    pub fn directed(v: usize) -> Self {
        Self {
            adj: vec![Vec::new(); v],
            directed: true,
        }
    }

    /// Empty undirected graph with `v` vertices.
    pub fn undirected(v: usize) -> Self {
        Self {
            adj: vec![Vec::new(); v],
            directed: false,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        let records: usize = self.adj.iter().map(|n| n.len()).sum();
        if self.directed {
            records
        } else {
            records / 2
        }
    }

    /// Append a new vertex, returning its index.
    pub fn add_vertex(&mut self) -> usize {
        self.adj.push(Vec::new());
        self.adj.len() - 1
    }

    /// Add an edge u -> v (and v -> u when undirected).
    pub fn add_edge(&mut self, u: usize, v: usize, weight: i64) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adj[u].push(Edge { to: v, weight });
        if !self.directed && u != v {
            self.adj[v].push(Edge { to: u, weight });
        }
        Ok(())
    }

    pub fn has_edge(&self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.adj[u].iter().any(|e| e.to == v))
    }

    pub fn neighbours(&self, u: usize) -> Result<&[Edge], GraphError> {
        self.check_vertex(u)?;
        Ok(&self.adj[u])
    }

    pub fn out_degree(&self, u: usize) -> Result<usize, GraphError> {
        self.check_vertex(u)?;
        Ok(self.adj[u].len())
    }

    /// Every edge as (u, v, weight). Undirected edges appear once, with
    /// u <= v.
    pub fn edges(&self) -> Vec<(usize, usize, i64)> {
        let mut out = Vec::new();
        for (u, neighbours) in self.adj.iter().enumerate() {
            for e in neighbours {
                if self.directed || u <= e.to {
                    out.push((u, e.to, e.weight));
                }
            }
        }
        out
    }

    pub(crate) fn check_vertex(&self, v: usize) -> Result<(), GraphError> {
        if v < self.adj.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfBounds {
                vertex: v,
                len: self.adj.len(),
            })
        }
    }
}
