/// O(N^2) worst case, O(N) on already-sorted input (early exit when a
/// pass makes no swap).
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let len = arr.len();
    for pass in 0..len {
        let mut swapped = false;
        for j in 1..len - pass {
            if arr[j - 1] > arr[j] {
                arr.swap(j - 1, j);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
