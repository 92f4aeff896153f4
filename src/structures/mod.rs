pub mod array;
pub mod avl;
pub mod binary_tree;
pub mod bst;
pub mod circular_list;
pub mod deque;
pub mod doubly_linked_list;
pub mod hash_table;
pub mod heap;
pub mod linked_list;
pub mod queue;
pub mod stack;
