use std::collections::BinaryHeap;

use algo_patterns::collections::counter::Counter;
use algo_patterns::collections::grouping::{duplicate_groups, group_by, index_by};
use algo_patterns::collections::heap_select::{n_largest, n_smallest, push_pop_max};
use algo_patterns::collections::ordered_map::OrderedMap;

#[test]
fn counter_tracks_multiplicities() {
    let mut counter: Counter<char> = "mississippi".chars().collect();
    assert_eq!(counter.count(&'s'), 4);
    assert_eq!(counter.count(&'m'), 1);
    assert_eq!(counter.count(&'z'), 0);
    assert_eq!(counter.len(), 4);
    assert_eq!(counter.total(), 11);

    assert!(counter.remove(&'m'));
    assert!(!counter.remove(&'m'));
    assert_eq!(counter.count(&'m'), 0);
    assert_eq!(counter.len(), 3);

    counter.add_n('x', 3);
    assert_eq!(counter.count(&'x'), 3);
    counter.add_n('y', 0);
    assert_eq!(counter.count(&'y'), 0);
}

#[test]
fn counters_compare_by_counts() {
    let a: Counter<char> = "abab".chars().collect();
    let b: Counter<char> = "baba".chars().collect();
    assert_eq!(a, b);

    let mut c = b.clone();
    c.add('a');
    assert_ne!(a, c);
    assert_eq!(Counter::<char>::new(), Counter::new());
}

#[test]
fn most_common_breaks_ties_by_value() {
    let counter: Counter<&str> = ["b", "a", "b", "c", "a", "b"].into_iter().collect();
    assert_eq!(
        counter.most_common(),
        vec![(&"b", 3), (&"a", 2), (&"c", 1)]
    );
    assert_eq!(counter.top_n(2), vec![(&"b", 3), (&"a", 2)]);
    assert_eq!(counter.top_n(10).len(), 3);

    // equal counts come out in value order
    let tied: Counter<i64> = [3, 1, 2].into_iter().collect();
    assert_eq!(tied.most_common(), vec![(&1, 1), (&2, 1), (&3, 1)]);
}

#[test]
fn counter_set_operations() {
    let a: Counter<char> = "aab".chars().collect();
    let b: Counter<char> = "abc".chars().collect();

    let sum = a.union_add(&b);
    assert_eq!(sum.count(&'a'), 3);
    assert_eq!(sum.count(&'b'), 2);
    assert_eq!(sum.count(&'c'), 1);

    let diff = a.saturating_sub(&b);
    assert_eq!(diff.count(&'a'), 1);
    assert_eq!(diff.count(&'b'), 0);
    assert_eq!(diff.len(), 1);

    let mut elems = a.elements();
    elems.sort();
    assert_eq!(elems, vec!['a', 'a', 'b']);
}

#[test]
fn group_by_buckets_in_encounter_order() {
    let groups = group_by(["apple", "avocado", "banana", "blueberry", "cherry"], |w| {
        w.as_bytes()[0]
    });
    assert_eq!(groups[&b'a'], vec!["apple", "avocado"]);
    assert_eq!(groups[&b'b'], vec!["banana", "blueberry"]);
    assert_eq!(groups[&b'c'], vec!["cherry"]);
    assert_eq!(groups.len(), 3);
}

#[test]
fn index_by_keeps_the_last_item_per_key() {
    let index = index_by([(1, "one"), (2, "two"), (1, "uno")], |&(id, _)| id);
    assert_eq!(index[&1], (1, "uno"));
    assert_eq!(index[&2], (2, "two"));
}

#[test]
fn duplicate_groups_drop_singletons() {
    let files = vec![
        ("b.txt".to_string(), "hello".to_string()),
        ("a.txt".to_string(), "hello".to_string()),
        ("c.txt".to_string(), "world".to_string()),
        ("d.txt".to_string(), "hello".to_string()),
    ];
    assert_eq!(
        duplicate_groups(&files),
        vec![vec![
            "a.txt".to_string(),
            "b.txt".to_string(),
            "d.txt".to_string(),
        ]]
    );
    assert!(duplicate_groups(&[]).is_empty());
}

#[test]
fn ordered_map_preserves_insertion_order() {
    let mut map = OrderedMap::new();
    assert!(map.is_empty());
    assert_eq!(map.insert("a", 1), None);
    assert_eq!(map.insert("b", 2), None);
    assert_eq!(map.insert("c", 3), None);
    assert_eq!(map.insert("b", 20), Some(2));

    let keys: Vec<&&str> = map.keys().collect();
    assert_eq!(keys, vec![&"a", &"b", &"c"]);
    let entries: Vec<(&&str, &i64)> = map.iter().collect();
    assert_eq!(entries, vec![(&"a", &1), (&"b", &20), (&"c", &3)]);
}

#[test]
fn ordered_map_repositions_keys() {
    let mut map = OrderedMap::new();
    for (k, v) in [("a", 1), ("b", 2), ("c", 3)] {
        map.insert(k, v);
    }

    assert!(map.move_to_end(&"a"));
    assert_eq!(map.keys().collect::<Vec<_>>(), vec![&"b", &"c", &"a"]);
    assert!(map.move_to_front(&"c"));
    assert_eq!(map.keys().collect::<Vec<_>>(), vec![&"c", &"b", &"a"]);
    assert!(!map.move_to_end(&"missing"));

    assert_eq!(map.pop_front(), Some(("c", 3)));
    assert_eq!(map.pop_back(), Some(("a", 1)));
    assert_eq!(map.len(), 1);
    assert_eq!(map.remove(&"b"), Some(2));
    assert_eq!(map.pop_front(), None);
}

#[test]
fn bounded_selection() {
    let data = vec![5, 1, 9, 3, 7, 2, 8];
    assert_eq!(n_largest(3, data.clone()), vec![9, 8, 7]);
    assert_eq!(n_smallest(3, data.clone()), vec![1, 2, 3]);
    assert_eq!(n_largest(0, data.clone()), Vec::<i64>::new());
    assert_eq!(n_largest(100, data), vec![9, 8, 7, 5, 3, 2, 1]);
}

#[test]
fn push_pop_returns_the_larger_of_val_and_max() {
    let mut heap: BinaryHeap<i64> = [3, 8, 5].into_iter().collect();

    // 8 beats 4, so 8 comes out and 4 stays
    assert_eq!(push_pop_max(&mut heap, 4), 8);
    assert_eq!(heap.len(), 3);

    // 10 beats the current max and passes straight through
    assert_eq!(push_pop_max(&mut heap, 10), 10);
    assert_eq!(heap.len(), 3);

    assert_eq!(heap.into_sorted_vec(), vec![3, 4, 5]);

    let mut empty: BinaryHeap<i64> = BinaryHeap::new();
    assert_eq!(push_pop_max(&mut empty, 1), 1);
    assert!(empty.is_empty());
}
