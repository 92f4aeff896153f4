//! LSD radix sort for u64, base 256.
//!
//! Equations:
//!   8 passes, one per byte, least significant first
//!   each pass is a stable counting sort on that byte
//!   total O(8 * (N + 256)) = O(N)

pub fn radix_sort(arr: &mut [u64]) {
    if arr.len() <= 1 {
        return;
    }
    let max = arr.iter().copied().max().unwrap_or(0);
    let mut buffer = vec![0u64; arr.len()];
    for byte in 0..8 {
        let shift = byte * 8;
        // all remaining bytes zero, nothing left to order
        if max >> shift == 0 && byte > 0 {
            break;
        }
        let mut counts = [0usize; 256];
        for &v in arr.iter() {
            counts[((v >> shift) & 0xff) as usize] += 1;
        }
        let mut positions = [0usize; 256];
        let mut running = 0;
        for (i, &c) in counts.iter().enumerate() {
            positions[i] = running;
            running += c;
        }
        for &v in arr.iter() {
            let digit = ((v >> shift) & 0xff) as usize;
            buffer[positions[digit]] = v;
            positions[digit] += 1;
        }
        arr.copy_from_slice(&buffer);
    }
}
