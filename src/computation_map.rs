/// Mapping of modules in src to type of computation
/// and whether deterministic or stochastic
pub const COMPUTATION_MAP: &[(&str, &str, &str)] = &[
    // Technique patterns
    ("patterns/two_pointers.rs", "Array scanning", "Deterministic"),
    ("patterns/sliding_window.rs", "Array scanning", "Deterministic"),
    (
        "patterns/fast_slow_pointers.rs",
        "Cycle detection",
        "Deterministic",
    ),
    (
        "patterns/merge_intervals.rs",
        "Interval processing",
        "Deterministic",
    ),
    ("patterns/cyclic_sort.rs", "In-place placement", "Deterministic"),
    (
        "patterns/list_reversal.rs",
        "Linked list rewiring",
        "Deterministic",
    ),
    ("patterns/tree_bfs.rs", "Tree traversal", "Deterministic"),
    ("patterns/tree_dfs.rs", "Tree traversal", "Deterministic"),
    ("patterns/binary_search.rs", "Search", "Deterministic"),
    (
        "patterns/backtracking.rs",
        "Combinatorial search",
        "Deterministic",
    ),
    (
        "patterns/dynamic_programming.rs",
        "DP computation",
        "Deterministic",
    ),
    ("patterns/greedy.rs", "Greedy selection", "Deterministic"),
    // Data structures
    (
        "structures/array.rs",
        "Data structure operations",
        "Deterministic",
    ),
    (
        "structures/linked_list.rs",
        "Data structure operations",
        "Deterministic",
    ),
    (
        "structures/doubly_linked_list.rs",
        "Data structure operations",
        "Deterministic",
    ),
    (
        "structures/circular_list.rs",
        "Data structure operations",
        "Deterministic",
    ),
    (
        "structures/stack.rs",
        "Data structure operations",
        "Deterministic",
    ),
    (
        "structures/queue.rs",
        "Data structure operations",
        "Deterministic",
    ),
    (
        "structures/deque.rs",
        "Data structure operations",
        "Deterministic",
    ),
    (
        "structures/binary_tree.rs",
        "Data structure operations",
        "Deterministic",
    ),
    ("structures/bst.rs", "Ordered set operations", "Deterministic"),
    ("structures/avl.rs", "Ordered set operations", "Deterministic"),
    (
        "structures/heap.rs",
        "Priority queue operations",
        "Deterministic",
    ),
    (
        "structures/hash_table.rs",
        "Data structure operations",
        "Deterministic",
    ),
    // Graph algorithms
    ("graph/adj_list.rs", "Graph representation", "Deterministic"),
    ("graph/traversal.rs", "Graph traversal", "Deterministic"),
    ("graph/shortest_path.rs", "Shortest path", "Deterministic"),
    (
        "graph/spanning_tree.rs",
        "Minimum spanning tree",
        "Deterministic",
    ),
    (
        "graph/topological_sort.rs",
        "Topological ordering",
        "Deterministic",
    ),
    ("graph/invariant.rs", "Invariant checking", "Deterministic"),
    // Sorting
    ("sorting/bubble_sort.rs", "Sorting", "Deterministic"),
    ("sorting/selection_sort.rs", "Sorting", "Deterministic"),
    ("sorting/insertion_sort.rs", "Sorting", "Deterministic"),
    ("sorting/merge_sort.rs", "Sorting", "Deterministic"),
    ("sorting/quick_sort.rs", "Sorting", "Deterministic"),
    ("sorting/heap_sort.rs", "Sorting", "Deterministic"),
    ("sorting/counting_sort.rs", "Sorting", "Deterministic"),
    ("sorting/radix_sort.rs", "Sorting", "Deterministic"),
    // Searching
    ("searching/linear_search.rs", "Search", "Deterministic"),
    ("searching/binary_search.rs", "Search", "Deterministic"),
    ("searching/jump_search.rs", "Search", "Deterministic"),
    (
        "searching/interpolation_search.rs",
        "Search",
        "Deterministic",
    ),
    ("searching/exponential_search.rs", "Search", "Deterministic"),
    // Collections
    ("collections/counter.rs", "Multiset operations", "Deterministic"),
    ("collections/grouping.rs", "Grouping", "Deterministic"),
    (
        "collections/ordered_map.rs",
        "Ordered map operations",
        "Deterministic",
    ),
    (
        "collections/heap_select.rs",
        "Bounded selection",
        "Deterministic",
    ),
];
