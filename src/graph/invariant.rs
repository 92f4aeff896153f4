/// Defines invariants checkable on algorithm outputs
pub trait Invariant<T> {
    /// Checks if a value satisfies the invariant
    fn check(&self, value: &T) -> bool;
}

/// Shortest-path distances must be non-negative when every edge weight is
pub struct NonNegativeDistances;

impl Invariant<Vec<Option<i64>>> for NonNegativeDistances {
    fn check(&self, value: &Vec<Option<i64>>) -> bool {
        value.iter().flatten().all(|&d| d >= 0)
    }
}

/// A vector must be sorted in ascending order
pub struct Sorted;

impl Invariant<Vec<i64>> for Sorted {
    fn check(&self, value: &Vec<i64>) -> bool {
        value.windows(2).all(|w| w[0] <= w[1])
    }
}

/// A topological order must place every vertex before its successors
pub struct ValidTopologicalOrder {
    pub edges: Vec<(usize, usize)>,
}

impl Invariant<Vec<usize>> for ValidTopologicalOrder {
    fn check(&self, order: &Vec<usize>) -> bool {
        let mut position = vec![usize::MAX; order.len()];
        for (i, &v) in order.iter().enumerate() {
            if v >= position.len() {
                return false;
            }
            position[v] = i;
        }
        self.edges
            .iter()
            .all(|&(u, v)| match (position.get(u), position.get(v)) {
                (Some(&pu), Some(&pv)) => pu < pv,
                _ => false,
            })
    }
}
