use algo_patterns::structures::array::Array;
use algo_patterns::structures::avl::AvlTree;
use algo_patterns::structures::binary_tree::{
    self, from_level_order, inorder, inorder_iterative, level_order, mirror, postorder,
    postorder_iterative, preorder, preorder_iterative, TreeNode,
};
use algo_patterns::structures::bst::Bst;
use algo_patterns::structures::circular_list::CircularList;
use algo_patterns::structures::deque::{
    first_negative_per_window, is_palindrome, sliding_window_max, sliding_window_min, Deque,
};
use algo_patterns::structures::doubly_linked_list::DoublyLinkedList;
use algo_patterns::structures::hash_table::{polynomial_hash, HashTable};
use algo_patterns::structures::heap::{
    k_largest, k_smallest, merge_k_sorted, MaxHeap, MinHeap, RunningMedian,
};
use algo_patterns::structures::linked_list::LinkedList;
use algo_patterns::structures::queue::{
    first_non_repeating, generate_binary_numbers, interleave_halves, Queue,
};
use algo_patterns::structures::stack::{
    evaluate_postfix, infix_to_postfix, is_balanced, largest_rectangle, next_greater_elements,
    EvalError, Stack,
};

#[test]
fn array_respects_capacity() {
    let mut arr = Array::with_capacity(3);
    assert!(arr.push(1));
    assert!(arr.push(2));
    assert!(arr.push(3));
    assert!(!arr.push(4));
    assert!(arr.is_full());

    assert_eq!(arr.remove_at(1), Some(2));
    assert!(arr.insert_at(0, 9));
    assert_eq!(arr.as_slice(), &[9, 1, 3]);
    assert_eq!(arr.find(&3), Some(2));
    assert_eq!(arr.find(&7), None);

    assert!(arr.set(0, 5));
    assert_eq!(arr.get(0), Some(&5));
    assert!(!arr.set(10, 5));
}

#[test]
fn linked_list_end_operations() {
    let mut list = LinkedList::new();
    list.push_front(2);
    list.push_front(1);
    list.push_back(3);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
    assert_eq!(list.len(), 3);

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_back(), None);
    assert!(list.is_empty());
}

#[test]
fn linked_list_positional_operations() {
    let mut list = LinkedList::from_slice(&[1, 3, 4]);
    assert!(list.insert_at(1, 2));
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    assert!(!list.insert_at(9, 5));

    assert_eq!(list.remove_at(2), Some(3));
    assert_eq!(list.get(2), Some(&4));
    assert_eq!(list.find(&4), Some(2));
    assert!(list.remove_value(&1));
    assert!(!list.remove_value(&10));
    assert_eq!(list.to_vec(), vec![2, 4]);
}

#[test]
fn linked_list_reverse_middle_dedup() {
    let mut list = LinkedList::from_slice(&[1, 2, 3, 4, 5]);
    list.reverse();
    assert_eq!(list.to_vec(), vec![5, 4, 3, 2, 1]);
    assert_eq!(list.middle(), Some(&3));

    let mut runs = LinkedList::from_slice(&[1, 1, 2, 3, 3, 3]);
    runs.dedup_consecutive();
    assert_eq!(runs.to_vec(), vec![1, 2, 3]);
    assert_eq!(runs.len(), 3);
}

#[test]
fn linked_list_merge_sorted_lists() {
    let a = LinkedList::from_slice(&[1, 3, 5]);
    let b = LinkedList::from_slice(&[2, 3, 6]);
    let merged = LinkedList::merge_sorted(a, b);
    assert_eq!(merged.to_vec(), vec![1, 2, 3, 3, 5, 6]);
    assert_eq!(merged.len(), 6);
}

#[test]
fn doubly_linked_list_walks_both_ways() {
    let mut list = DoublyLinkedList::new();
    list.push_back(2);
    list.push_back(3);
    list.push_front(1);
    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));

    let forward: Vec<i32> = list.iter().copied().collect();
    assert_eq!(forward, vec![1, 2, 3]);
    let backward: Vec<i32> = list.iter_rev().copied().collect();
    assert_eq!(backward, vec![3, 2, 1]);

    assert!(list.insert_at(1, 9));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 9, 2, 3]);
    assert_eq!(list.remove_at(1), Some(9));
    assert_eq!(list.find(&2), Some(1));
    assert_eq!(list.rfind(&3), Some(2));

    list.reverse();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);

    assert_eq!(list.pop_front(), Some(3));
    assert_eq!(list.pop_back(), Some(1));
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_back(), None);
}

#[test]
fn circular_list_keeps_the_circle_closed() {
    let mut list = CircularList::new();
    list.push_back(10);
    list.push_back(20);
    list.push_back(30);
    list.push_front(5);
    assert_eq!(list.len(), 4);
    assert_eq!(list.front(), Some(&5));
    assert_eq!(list.back(), Some(&30));
    assert_eq!(list.to_vec(), vec![5, 10, 20, 30]);
    assert_eq!(list.find(&20), Some(2));
    assert_eq!(list.find(&99), None);

    assert!(list.insert_at(2, 15));
    assert!(!list.insert_at(9, 0));
    assert_eq!(list.to_vec(), vec![5, 10, 15, 20, 30]);

    assert_eq!(list.pop_front(), Some(5));
    assert_eq!(list.pop_back(), Some(30));
    assert_eq!(list.remove_at(1), Some(15));
    assert_eq!(list.to_vec(), vec![10, 20]);
    assert_eq!(list.get(1), Some(&20));
    assert_eq!(list.get(2), None);

    assert_eq!(list.pop_back(), Some(20));
    assert_eq!(list.pop_back(), Some(10));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[test]
fn circular_list_rotation() {
    let mut list: CircularList<i32> = (1..=4).collect();
    list.rotate();
    assert_eq!(list.to_vec(), vec![2, 3, 4, 1]);
    list.rotate();
    assert_eq!(list.to_vec(), vec![3, 4, 1, 2]);
    assert_eq!(list.front(), Some(&3));
    assert_eq!(list.back(), Some(&2));
}

#[test]
fn josephus_elimination_order() {
    let circle: CircularList<i32> = (1..=7).collect();
    assert_eq!(circle.josephus(3), vec![3, 6, 2, 7, 5, 1, 4]);

    let pair: CircularList<i32> = (1..=2).collect();
    assert_eq!(pair.josephus(1), vec![1, 2]);

    let none: CircularList<i32> = (1..=3).collect();
    assert!(none.josephus(0).is_empty());
    assert!(CircularList::<i32>::new().josephus(3).is_empty());
}

#[test]
fn stack_push_pop_peek() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.peek(), Some(&2));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), None);
    assert!(stack.is_empty());
}

#[test]
fn bracket_balancing() {
    assert!(is_balanced("{[()]}"));
    assert!(is_balanced("a(b)[c]"));
    assert!(!is_balanced("([)]"));
    assert!(!is_balanced("((("));
    assert!(is_balanced(""));
}

#[test]
fn postfix_evaluation() {
    assert_eq!(evaluate_postfix("2 3 4 * +"), Ok(14));
    assert_eq!(evaluate_postfix("5 1 2 + 4 * + 3 -"), Ok(14));
    assert_eq!(evaluate_postfix("4 0 /"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate_postfix("1 +"), Err(EvalError::MissingOperand('+')));
    assert_eq!(
        evaluate_postfix("1 2"),
        Err(EvalError::LeftoverOperands)
    );
}

#[test]
fn infix_conversion_feeds_evaluation() {
    assert_eq!(infix_to_postfix("2 + 3 * 4"), Ok("2 3 4 * +".to_string()));
    assert_eq!(
        infix_to_postfix("(2 + 3) * 4"),
        Ok("2 3 + 4 *".to_string())
    );
    assert_eq!(infix_to_postfix("10 + 2"), Ok("10 2 +".to_string()));
    assert!(infix_to_postfix("(1 + 2").is_err());

    let postfix = infix_to_postfix("3 + 4 * (2 - 1)").unwrap();
    assert_eq!(evaluate_postfix(&postfix), Ok(7));
}

#[test]
fn monotonic_stack_problems() {
    assert_eq!(
        next_greater_elements(&[4, 5, 2, 25]),
        vec![Some(5), Some(25), Some(25), None]
    );
    assert_eq!(
        next_greater_elements(&[13, 7, 6, 12]),
        vec![None, Some(12), Some(12), None]
    );

    assert_eq!(largest_rectangle(&[2, 1, 5, 6, 2, 3]), 10);
    assert_eq!(largest_rectangle(&[4, 4, 4]), 12);
    assert_eq!(largest_rectangle(&[]), 0);
}

#[test]
fn ring_queue_wraps() {
    let mut queue = Queue::with_capacity(3);
    assert!(queue.enqueue(1));
    assert!(queue.enqueue(2));
    assert!(queue.enqueue(3));
    assert!(!queue.enqueue(4));
    assert!(queue.is_full());

    assert_eq!(queue.dequeue(), Some(1));
    assert!(queue.enqueue(4));
    assert_eq!(queue.peek(), Some(&2));
    assert_eq!(queue.dequeue(), Some(2));
    assert_eq!(queue.dequeue(), Some(3));
    assert_eq!(queue.dequeue(), Some(4));
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn queue_applications() {
    assert_eq!(
        generate_binary_numbers(5),
        vec!["1", "10", "11", "100", "101"]
    );

    assert_eq!(
        first_non_repeating("aabc"),
        vec![Some('a'), None, Some('b'), Some('b')]
    );

    let mut q: std::collections::VecDeque<i32> = (1..=4).collect();
    interleave_halves(&mut q);
    assert_eq!(q.into_iter().collect::<Vec<_>>(), vec![1, 3, 2, 4]);
}

#[test]
fn ring_deque_both_ends() {
    let mut deque = Deque::with_capacity(3);
    assert!(deque.push_back(2));
    assert!(deque.push_front(1));
    assert!(deque.push_back(3));
    assert!(!deque.push_back(4));

    assert_eq!(deque.front(), Some(&1));
    assert_eq!(deque.back(), Some(&3));
    assert_eq!(deque.pop_front(), Some(1));
    assert_eq!(deque.pop_back(), Some(3));
    assert_eq!(deque.pop_back(), Some(2));
    assert_eq!(deque.pop_front(), None);
}

#[test]
fn deque_window_problems() {
    assert_eq!(
        sliding_window_max(&[1, 3, -1, -3, 5, 3, 6, 7], 3),
        vec![3, 3, 5, 5, 6, 7]
    );
    assert_eq!(
        sliding_window_min(&[1, 3, -1, -3, 5, 3, 6, 7], 3),
        vec![-1, -3, -3, -3, 3, 3]
    );
    assert!(sliding_window_max(&[1, 2], 3).is_empty());

    assert_eq!(
        first_negative_per_window(&[12, -1, -7, 8, -15, 30, 16, 28], 3),
        vec![Some(-1), Some(-1), Some(-7), Some(-15), Some(-15), None]
    );

    assert!(is_palindrome("A man, a plan, a canal: Panama"));
    assert!(!is_palindrome("hello"));
}

#[test]
fn binary_tree_traversals() {
    let tree = from_level_order(&[Some(1), Some(2), Some(3), Some(4), Some(5)]);
    assert_eq!(inorder(&tree), vec![4, 2, 5, 1, 3]);
    assert_eq!(preorder(&tree), vec![1, 2, 4, 5, 3]);
    assert_eq!(postorder(&tree), vec![4, 5, 2, 3, 1]);

    assert_eq!(inorder_iterative(&tree), inorder(&tree));
    assert_eq!(preorder_iterative(&tree), preorder(&tree));
    assert_eq!(postorder_iterative(&tree), postorder(&tree));

    assert_eq!(level_order(&tree), vec![vec![1], vec![2, 3], vec![4, 5]]);
}

#[test]
fn binary_tree_shape_queries() {
    let tree = from_level_order(&[Some(1), Some(2), Some(3), Some(4), Some(5)]);
    assert_eq!(binary_tree::height(&tree), 3);
    assert_eq!(binary_tree::size(&tree), 5);
    assert_eq!(binary_tree::count_leaves(&tree), 3);
    assert!(binary_tree::contains(&tree, &5));
    assert!(!binary_tree::contains(&tree, &9));

    let mut mirrored = from_level_order(&[Some(1), Some(2), Some(3)]);
    mirror(&mut mirrored);
    assert_eq!(inorder(&mirrored), vec![3, 1, 2]);

    let leaf = Some(TreeNode::leaf(7));
    assert_eq!(binary_tree::height(&leaf), 1);
    assert_eq!(binary_tree::height::<i64>(&None), 0);
}

#[test]
fn bst_ordering_operations() {
    let mut bst = Bst::new();
    for v in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
        assert!(bst.insert(v));
    }
    assert!(!bst.insert(6));
    assert_eq!(bst.len(), 9);

    assert!(bst.contains(&7));
    assert!(!bst.contains(&2));
    assert_eq!(bst.min(), Some(&1));
    assert_eq!(bst.max(), Some(&14));
    assert_eq!(
        bst.inorder(),
        vec![&1, &3, &4, &6, &7, &8, &10, &13, &14]
    );
    assert!(bst.is_valid());
}

#[test]
fn bst_remove_all_arities() {
    let mut bst = Bst::from_slice(&[8, 3, 10, 1, 6, 14, 4, 7, 13]);

    assert!(bst.remove(&3)); // two children, replaced by successor 4
    assert!(bst.remove(&1)); // leaf
    assert!(bst.remove(&10)); // one child
    assert!(!bst.remove(&99));

    assert_eq!(bst.inorder(), vec![&4, &6, &7, &8, &13, &14]);
    assert_eq!(bst.len(), 6);
    assert!(bst.is_valid());
}

#[test]
fn bst_queries() {
    let bst = Bst::from_slice(&[8, 3, 10, 1, 6, 14, 4, 7, 13]);
    assert_eq!(bst.range_query(&4, &10), vec![&4, &6, &7, &8, &10]);
    assert!(bst.range_query(&20, &30).is_empty());

    assert_eq!(bst.kth_smallest(1), Some(&1));
    assert_eq!(bst.kth_smallest(5), Some(&7));
    assert_eq!(bst.kth_smallest(10), None);

    assert_eq!(bst.lowest_common_ancestor(&1, &7), Some(&3));
    assert_eq!(bst.lowest_common_ancestor(&4, &7), Some(&6));
    assert_eq!(bst.lowest_common_ancestor(&1, &14), Some(&8));
    assert_eq!(bst.lowest_common_ancestor(&1, &99), None);
}

#[test]
fn avl_stays_balanced_under_inserts() {
    let mut tree = AvlTree::new();
    // ascending inserts would degenerate an unbalanced BST
    for v in 1..=100 {
        assert!(tree.insert(v));
        assert!(tree.is_balanced());
    }
    assert_eq!(tree.len(), 100);
    assert!(tree.height() <= 9);
    assert_eq!(tree.min(), Some(&1));
    assert_eq!(tree.max(), Some(&100));

    let values: Vec<i32> = tree.inorder().into_iter().copied().collect();
    assert_eq!(values, (1..=100).collect::<Vec<_>>());
}

#[test]
fn avl_stays_balanced_under_removals() {
    let mut tree = AvlTree::from_slice(&(1..=50).collect::<Vec<i32>>());
    for v in 1..=25 {
        assert!(tree.remove(&v));
        assert!(tree.is_balanced());
    }
    assert!(!tree.remove(&10));
    assert_eq!(tree.len(), 25);
    assert_eq!(tree.min(), Some(&26));
    assert!(tree.contains(&40));
}

#[test]
fn min_and_max_heaps() {
    let mut heap = MinHeap::from_vec(vec![5, 3, 8, 1, 9, 2]);
    assert_eq!(heap.peek(), Some(&1));
    assert_eq!(heap.pop(), Some(1));
    heap.push(0);
    assert_eq!(heap.into_sorted_vec(), vec![0, 2, 3, 5, 8, 9]);

    let mut max_heap = MaxHeap::new();
    for v in [5, 3, 8, 1] {
        max_heap.push(v);
    }
    assert_eq!(max_heap.peek(), Some(&8));
    assert_eq!(max_heap.pop(), Some(8));
    assert_eq!(max_heap.pop(), Some(5));
    assert_eq!(max_heap.len(), 2);
    assert_eq!(max_heap.into_sorted_vec(), vec![3, 1]);
}

#[test]
fn heap_selection_problems() {
    assert_eq!(k_largest(&[3, 1, 5, 12, 2, 11], 3), vec![12, 11, 5]);
    assert_eq!(k_smallest(&[3, 1, 5, 12, 2, 11], 3), vec![1, 2, 3]);
    assert_eq!(k_largest(&[1, 2], 5), vec![2, 1]);

    assert_eq!(
        merge_k_sorted(&[&[2, 6, 8], &[3, 6, 7], &[1, 3, 4]]),
        vec![1, 2, 3, 3, 4, 6, 6, 7, 8]
    );
    assert!(merge_k_sorted(&[]).is_empty());
}

#[test]
fn running_median_balances_halves() {
    let mut median = RunningMedian::new();
    assert_eq!(median.median(), None);

    median.insert(3);
    assert_eq!(median.median(), Some(3.0));
    median.insert(1);
    assert_eq!(median.median(), Some(2.0));
    median.insert(5);
    assert_eq!(median.median(), Some(3.0));
    median.insert(4);
    assert_eq!(median.median(), Some(3.5));
}

#[test]
fn hash_table_chains_and_resizes() {
    let mut table = HashTable::new();
    assert_eq!(table.insert("one", 1), None);
    assert_eq!(table.insert("one", 10), Some(1));
    assert_eq!(table.get(&"one"), Some(&10));
    assert!(table.contains_key(&"one"));
    assert_eq!(table.remove(&"one"), Some(10));
    assert_eq!(table.remove(&"one"), None);

    let mut big: HashTable<String, i32> = HashTable::new();
    let buckets_before = big.bucket_count();
    for i in 0..100 {
        big.insert(i.to_string(), i);
    }
    assert_eq!(big.len(), 100);
    assert!(big.bucket_count() > buckets_before);
    assert!(big.load_factor() <= 0.75);
    assert_eq!(big.get(&"42".to_string()), Some(&42));
}

#[test]
fn polynomial_hash_is_stable() {
    assert_eq!(polynomial_hash("abc"), polynomial_hash("abc"));
    assert_ne!(polynomial_hash("abc"), polynomial_hash("abd"));
    assert_eq!(polynomial_hash(""), 0);
}
