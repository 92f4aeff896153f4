//! Minimum spanning trees: Kruskal and Prim.
//!
//! Variables:
//!   DisjointSet - union-find with path compression and union by rank
//!
//! Equations:
//!   Kruskal: sort edges by weight, take an edge iff its endpoints are
//!            in different sets.  O(E log E)
//!   Prim:    grow one tree from `start`, always crossing the cheapest
//!            frontier edge.   O(E log E) with a binary heap
//!
//! On a disconnected graph Kruskal yields the minimum spanning forest;
//! Prim spans only the component of `start`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::adj_list::Graph;
use super::GraphError;

#[derive(Debug, PartialEq)]
pub struct SpanningTree {
    pub total_weight: i64,
    pub edges: Vec<(usize, usize, i64)>,
}

pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Representative of the set containing `x`, compressing the path.
    pub fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    /// Merge the sets of `a` and `b`. False when already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

/// Minimum spanning forest by Kruskal's algorithm.
pub fn kruskal(graph: &Graph) -> SpanningTree {
    let mut edges = graph.edges();
    edges.sort_by_key(|&(_, _, w)| w);

    let mut sets = DisjointSet::new(graph.vertex_count());
    let mut tree = SpanningTree {
        total_weight: 0,
        edges: Vec::new(),
    };
    for (u, v, w) in edges {
        if sets.union(u, v) {
            tree.total_weight += w;
            tree.edges.push((u, v, w));
        }
    }
    tree
}

/// Minimum spanning tree of the component containing `start`, by
/// Prim's algorithm.
pub fn prim(graph: &Graph, start: usize) -> Result<SpanningTree, GraphError> {
    graph.check_vertex(start)?;
    let mut in_tree = vec![false; graph.vertex_count()];
    let mut heap: BinaryHeap<Reverse<(i64, usize, usize)>> = BinaryHeap::new();
    let mut tree = SpanningTree {
        total_weight: 0,
        edges: Vec::new(),
    };

    in_tree[start] = true;
    for e in graph.neighbours(start)? {
        heap.push(Reverse((e.weight, start, e.to)));
    }

    while let Some(Reverse((w, from, to))) = heap.pop() {
        if in_tree[to] {
            continue;
        }
        in_tree[to] = true;
        tree.total_weight += w;
        tree.edges.push((from, to, w));
        for e in graph.neighbours(to)? {
            if !in_tree[e.to] {
                heap.push(Reverse((e.weight, to, e.to)));
            }
        }
    }
    Ok(tree)
}
