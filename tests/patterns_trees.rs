use algo_patterns::patterns::tree_bfs::{
    level_averages, level_order, level_order_successor, maximum_depth, minimum_depth,
    reverse_level_order, right_view, zigzag_level_order,
};
use algo_patterns::patterns::tree_dfs::{
    count_paths_for_sum, find_all_paths, has_path_sum, maximum_path_sum, path_with_sequence,
    sum_of_path_numbers, tree_diameter,
};
use algo_patterns::structures::binary_tree::{from_level_order, Tree};

fn sample_tree() -> Tree<i64> {
    // 12 at the root, then [7, 1], then [null, 4, 10, 5]
    from_level_order(&[
        Some(12),
        Some(7),
        Some(1),
        None,
        Some(4),
        Some(10),
        Some(5),
    ])
}

#[test]
fn level_order_groups_by_depth() {
    let tree = sample_tree();
    assert_eq!(
        level_order(&tree),
        vec![vec![12], vec![7, 1], vec![4, 10, 5]]
    );
    assert_eq!(
        reverse_level_order(&tree),
        vec![vec![4, 10, 5], vec![7, 1], vec![12]]
    );
    assert_eq!(
        zigzag_level_order(&tree),
        vec![vec![12], vec![1, 7], vec![4, 10, 5]]
    );
    assert!(level_order::<i64>(&None).is_empty());
}

#[test]
fn level_statistics_and_views() {
    let tree = sample_tree();
    assert_eq!(level_averages(&tree), vec![12.0, 4.0, 19.0 / 3.0]);
    assert_eq!(right_view(&tree), vec![12, 1, 5]);
    assert_eq!(level_order_successor(&tree, &7), Some(1));
    assert_eq!(level_order_successor(&tree, &1), Some(4));
    assert_eq!(level_order_successor(&tree, &5), None);
}

#[test]
fn depth_measurements() {
    let tree = sample_tree();
    assert_eq!(minimum_depth(&tree), 2);
    assert_eq!(maximum_depth(&tree), 3);

    let spine = from_level_order(&[Some(1), Some(2), None, Some(3)]);
    assert_eq!(minimum_depth(&spine), 3);
    assert_eq!(minimum_depth::<i64>(&None), 0);
}

#[test]
fn path_sum_queries() {
    let tree = sample_tree();
    assert!(has_path_sum(&tree, 23));
    assert!(!has_path_sum(&tree, 16));

    assert_eq!(
        find_all_paths(&tree, 23),
        vec![vec![12, 7, 4], vec![12, 1, 10]]
    );
    assert!(find_all_paths(&tree, 1).is_empty());
}

#[test]
fn path_numbers_sum_decimal_paths() {
    let tree = from_level_order(&[Some(1), Some(7), Some(9), None, None, Some(2), Some(9)]);
    assert_eq!(sum_of_path_numbers(&tree), 17 + 192 + 199);
}

#[test]
fn sequence_must_reach_a_leaf() {
    let tree = from_level_order(&[Some(1), Some(0), Some(1), None, Some(1), Some(6), Some(5)]);
    assert!(path_with_sequence(&tree, &[1, 0, 1]));
    assert!(path_with_sequence(&tree, &[1, 1, 6]));
    assert!(!path_with_sequence(&tree, &[1, 0, 7]));
    // prefix of a path does not count
    assert!(!path_with_sequence(&tree, &[1, 0]));
}

#[test]
fn counts_paths_from_any_start() {
    let tree = from_level_order(&[
        Some(12),
        Some(7),
        Some(1),
        None,
        Some(4),
        Some(10),
        Some(5),
    ]);
    assert_eq!(count_paths_for_sum(&tree, 11), 2);
    assert_eq!(count_paths_for_sum(&tree, 12), 1);
}

#[test]
fn diameter_counts_edges() {
    let tree = sample_tree();
    assert_eq!(tree_diameter(&tree), 4);
    assert_eq!(tree_diameter(&from_level_order(&[Some(1)])), 0);
    assert_eq!(tree_diameter::<i64>(&None), 0);
}

#[test]
fn maximum_path_sum_skips_negative_branches() {
    let tree = from_level_order(&[Some(1), Some(2), Some(3)]);
    assert_eq!(maximum_path_sum(&tree), Some(6));

    let negative = from_level_order(&[Some(-10), Some(9), Some(20), None, None, Some(15), Some(7)]);
    assert_eq!(maximum_path_sum(&negative), Some(42));

    assert_eq!(maximum_path_sum(&None), None);
}
