//! Standalone runner that walks the computation map and exercises one
//! example from each category.

use anyhow::{anyhow, Result};

use algo_patterns::collections::counter::Counter;
use algo_patterns::computation_map::COMPUTATION_MAP;
use algo_patterns::graph::adj_list::Graph;
use algo_patterns::graph::invariant::{Invariant, NonNegativeDistances, Sorted};
use algo_patterns::graph::shortest_path::dijkstra;
use algo_patterns::graph::topological_sort::topological_sort;
use algo_patterns::graph::traversal::bfs;
use algo_patterns::patterns::backtracking::subsets;
use algo_patterns::patterns::binary_search::search_rotated;
use algo_patterns::patterns::dynamic_programming::coin_change;
use algo_patterns::patterns::merge_intervals::{merge_intervals, Interval};
use algo_patterns::patterns::sliding_window::max_sum_subarray;
use algo_patterns::patterns::two_pointers::pair_with_target_sum;
use algo_patterns::searching::binary_search::binary_search;
use algo_patterns::sorting::quick_sort::quick_sort;
use algo_patterns::structures::bst::Bst;
use algo_patterns::structures::heap::RunningMedian;

fn main() -> Result<()> {
    println!("=== Computation Map ===");
    for (path, comp_type, determinism) in COMPUTATION_MAP.iter() {
        println!("{:<40} | {:<25} | {}", path, comp_type, determinism);
    }

    println!("\n=== Sanity Check Examples ===");

    // Technique patterns
    {
        let pair = pair_with_target_sum(&[1, 2, 3, 4, 6], 6)
            .ok_or_else(|| anyhow!("expected a pair summing to 6"))?;
        println!("Two pointers example: {:?}", pair);

        let max_sum = max_sum_subarray(&[2, 1, 5, 1, 3, 2], 3)
            .ok_or_else(|| anyhow!("expected a window of size 3"))?;
        println!("Sliding window example: {}", max_sum);

        let merged = merge_intervals(&[
            Interval::new(1, 4),
            Interval::new(2, 5),
            Interval::new(7, 9),
        ]);
        println!("Merge intervals example: {:?}", merged);

        println!(
            "Rotated search example: {:?}",
            search_rotated(&[10, 15, 1, 3, 8], 15)
        );
        println!("Backtracking subsets example: {:?}", subsets(&[1, 2, 3]));
        println!("Coin change example: {:?}", coin_change(&[1, 2, 5], 11));
    }

    // Data structures
    {
        let bst = Bst::from_slice(&[5, 3, 8, 1, 4]);
        println!("BST inorder example: {:?}", bst.inorder());

        let mut median = RunningMedian::new();
        for v in [3, 1, 5, 4] {
            median.insert(v);
        }
        let m = median
            .median()
            .ok_or_else(|| anyhow!("median of a non-empty stream"))?;
        println!("Running median example: {}", m);
    }

    // Graph algorithms
    {
        let mut graph = Graph::directed(4);
        graph.add_edge(0, 1, 4)?;
        graph.add_edge(0, 2, 1)?;
        graph.add_edge(2, 1, 2)?;
        graph.add_edge(1, 3, 1)?;
        graph.add_edge(2, 3, 5)?;

        println!("BFS example: {:?}", bfs(&graph, 0)?);
        println!("Topological sort example: {:?}", topological_sort(&graph)?);

        let dist = dijkstra(&graph, 0)?;
        assert!(NonNegativeDistances.check(&dist));
        println!("Dijkstra example: {:?}", dist);
    }

    // Sorting and searching
    {
        let mut values = vec![9, 4, 7, 1, 3];
        quick_sort(&mut values);
        assert!(Sorted.check(&values));
        println!("Quick sort example: {:?}", values);
        println!("Binary search example: {:?}", binary_search(&values, &7));
    }

    // Collections
    {
        let counter: Counter<char> = "abracadabra".chars().collect();
        println!("Counter example: {:?}", counter.top_n(2));
    }

    Ok(())
}
