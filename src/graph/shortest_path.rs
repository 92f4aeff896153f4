//! Single-source and all-pairs shortest paths.
//!
//! Variables:
//!   dist[v] = Option<i64>, None while v is unreachable
//!   prev[v] = predecessor of v on one shortest path
//!
//! Equations:
//!   Dijkstra (non-negative weights):
//!     pop the open vertex with minimum dist, relax its out-edges
//!     O((V + E) log V) with a binary heap
//!
//!   Bellman-Ford (any weights):
//!     relax every edge V-1 times; a V-th relaxation that still
//!     improves => negative cycle. O(V * E)
//!
//!   Floyd-Warshall (all pairs):
//!     dist[i][j] = min(dist[i][j], dist[i][k] + dist[k][j]) over k
//!     O(V^3); dist[i][i] < 0 after the run => negative cycle

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::adj_list::Graph;
use super::GraphError;

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: i64,
    position: usize,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest distance from `start` to every vertex. Weights must be
/// non-negative.
pub fn dijkstra(graph: &Graph, start: usize) -> Result<Vec<Option<i64>>, GraphError> {
    Ok(dijkstra_with_prev(graph, start)?.0)
}

/// Shortest path from `start` to `goal` as (distance, vertex sequence),
/// None when `goal` is unreachable.
pub fn dijkstra_path(
    graph: &Graph,
    start: usize,
    goal: usize,
) -> Result<Option<(i64, Vec<usize>)>, GraphError> {
    graph.check_vertex(goal)?;
    let (dist, prev) = dijkstra_with_prev(graph, start)?;
    let Some(total) = dist[goal] else {
        return Ok(None);
    };
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(p) = prev[cur] {
        path.push(p);
        cur = p;
    }
    path.reverse();
    Ok(Some((total, path)))
}

fn dijkstra_with_prev(
    graph: &Graph,
    start: usize,
) -> Result<(Vec<Option<i64>>, Vec<Option<usize>>), GraphError> {
    graph.check_vertex(start)?;
    let mut dist: Vec<Option<i64>> = vec![None; graph.vertex_count()];
    let mut prev: Vec<Option<usize>> = vec![None; graph.vertex_count()];
    let mut heap = BinaryHeap::new();

    dist[start] = Some(0);
    heap.push(State {
        cost: 0,
        position: start,
    });

    while let Some(State { cost, position }) = heap.pop() {
        if dist[position].is_some_and(|d| cost > d) {
            continue;
        }

        for e in graph.neighbours(position)? {
            let next_cost = cost + e.weight;
            if dist[e.to].is_none_or(|d| next_cost < d) {
                dist[e.to] = Some(next_cost);
                prev[e.to] = Some(position);
                heap.push(State {
                    cost: next_cost,
                    position: e.to,
                });
            }
        }
    }
    Ok((dist, prev))
}

/// Shortest distance from `start` to every vertex, allowing negative
/// edge weights. Errors when a negative cycle is reachable.
pub fn bellman_ford(graph: &Graph, start: usize) -> Result<Vec<Option<i64>>, GraphError> {
    graph.check_vertex(start)?;
    let v = graph.vertex_count();
    let edges = graph.edges();
    let mut dist: Vec<Option<i64>> = vec![None; v];
    dist[start] = Some(0);

    let relax = |dist: &mut [Option<i64>], u: usize, w: usize, weight: i64| -> bool {
        let Some(du) = dist[u] else { return false };
        let candidate = du + weight;
        if dist[w].is_none_or(|dw| candidate < dw) {
            dist[w] = Some(candidate);
            true
        } else {
            false
        }
    };

    for _ in 1..v {
        let mut updated = false;
        for &(u, w, weight) in &edges {
            updated |= relax(&mut dist, u, w, weight);
            if !graph.is_directed() {
                updated |= relax(&mut dist, w, u, weight);
            }
        }
        if !updated {
            break;
        }
    }

    // pass V: any edge that still relaxes closes a negative cycle
    let improves = |u: usize, w: usize, weight: i64| {
        dist[u].is_some_and(|du| dist[w].is_none_or(|dw| du + weight < dw))
    };
    for &(u, w, weight) in &edges {
        if improves(u, w, weight) || (!graph.is_directed() && improves(w, u, weight)) {
            return Err(GraphError::NegativeCycle);
        }
    }

    Ok(dist)
}

/// All-pairs shortest distances. Errors when any negative cycle exists.
pub fn floyd_warshall(graph: &Graph) -> Result<Vec<Vec<Option<i64>>>, GraphError> {
    let v = graph.vertex_count();
    let mut dist: Vec<Vec<Option<i64>>> = vec![vec![None; v]; v];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for (u, w, weight) in graph.edges() {
        let keep_min = |slot: &mut Option<i64>| {
            if slot.is_none_or(|d| weight < d) {
                *slot = Some(weight);
            }
        };
        keep_min(&mut dist[u][w]);
        if !graph.is_directed() {
            keep_min(&mut dist[w][u]);
        }
    }

    for k in 0..v {
        for i in 0..v {
            let Some(dik) = dist[i][k] else { continue };
            for j in 0..v {
                let Some(dkj) = dist[k][j] else { continue };
                let candidate = dik + dkj;
                if dist[i][j].is_none_or(|d| candidate < d) {
                    dist[i][j] = Some(candidate);
                }
            }
        }
    }

    if (0..v).any(|i| dist[i][i].is_some_and(|d| d < 0)) {
        return Err(GraphError::NegativeCycle);
    }
    Ok(dist)
}
