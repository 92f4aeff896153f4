/// O(N log N) expected, O(N^2) worst case. In place, not stable.
/// Middle element as pivot guards against sorted input.
pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let pivot = partition(arr);
    let (left, right) = arr.split_at_mut(pivot);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}

/// Lomuto partition. Returns the pivot's final index; everything left
/// of it is <= pivot, everything right is > pivot.
fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let last = arr.len() - 1;
    arr.swap(arr.len() / 2, last);
    let mut store = 0;
    for j in 0..last {
        if arr[j] <= arr[last] {
            arr.swap(store, j);
            store += 1;
        }
    }
    arr.swap(store, last);
    store
}
