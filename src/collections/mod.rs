pub mod counter;
pub mod grouping;
pub mod heap_select;
pub mod ordered_map;
