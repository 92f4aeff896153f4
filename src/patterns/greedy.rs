//! Greedy algorithms: locally optimal choices with a proof obligation.
//!
//! Each routine sorts (or scans) by the quantity that makes the greedy
//! choice safe: finish time for activities, value density for the
//! fractional knapsack, profit for job sequencing.

/// Maximum set of non-overlapping activities, chosen by earliest finish
/// time. Returns the selected (start, end) pairs in schedule order.
pub fn activity_selection(activities: &[(i64, i64)]) -> Vec<(i64, i64)> {
    if activities.is_empty() {
        return Vec::new();
    }
    let mut sorted = activities.to_vec();
    sorted.sort_by_key(|&(_, end)| end);

    let mut selected = vec![sorted[0]];
    let mut last_finish = sorted[0].1;
    for &(start, end) in &sorted[1..] {
        if start >= last_finish {
            selected.push((start, end));
            last_finish = end;
        }
    }
    selected
}

/// Fractional knapsack: items are (value, weight), any fraction may be
/// taken. Greedy on value per unit weight is optimal here.
pub fn fractional_knapsack(items: &[(f64, f64)], capacity: f64) -> f64 {
    let mut by_ratio: Vec<(f64, f64, f64)> = items
        .iter()
        .filter(|&&(_, w)| w > 0.0)
        .map(|&(v, w)| (v / w, v, w))
        .collect();
    by_ratio.sort_by(|a, b| b.0.total_cmp(&a.0));

    let mut total = 0.0;
    let mut remaining = capacity;
    for (ratio, value, weight) in by_ratio {
        if weight <= remaining {
            total += value;
            remaining -= weight;
        } else {
            total += ratio * remaining;
            break;
        }
    }
    total
}

/// Job sequencing with deadlines: jobs are (profit, deadline), each takes
/// one unit of time. Highest profit first, scheduled as late as its
/// deadline allows. Returns (total profit, scheduled jobs).
pub fn job_sequencing(jobs: &[(u64, usize)]) -> (u64, Vec<(u64, usize)>) {
    let mut sorted = jobs.to_vec();
    sorted.sort_by(|a, b| b.0.cmp(&a.0));

    let max_deadline = sorted.iter().map(|&(_, d)| d).max().unwrap_or(0);
    let mut slots: Vec<Option<(u64, usize)>> = vec![None; max_deadline];
    let mut total = 0;
    let mut scheduled = Vec::new();

    for &(profit, deadline) in &sorted {
        let latest = deadline.min(max_deadline);
        for slot in (0..latest).rev() {
            if slots[slot].is_none() {
                slots[slot] = Some((profit, deadline));
                total += profit;
                scheduled.push((profit, deadline));
                break;
            }
        }
    }
    (total, scheduled)
}

/// Minimum platforms so no train waits, given arrival and departure
/// times. Sweep both sorted lists; a train occupying a platform at
/// another's arrival time still counts.
pub fn minimum_platforms(arrivals: &[i64], departures: &[i64]) -> usize {
    let mut arrivals = arrivals.to_vec();
    let mut departures = departures.to_vec();
    arrivals.sort_unstable();
    departures.sort_unstable();

    let mut in_use: isize = 0;
    let mut best: isize = 0;
    let (mut i, mut j) = (0, 0);
    while i < arrivals.len() && j < departures.len() {
        if arrivals[i] <= departures[j] {
            in_use += 1;
            i += 1;
        } else {
            in_use -= 1;
            j += 1;
        }
        best = best.max(in_use);
    }
    best as usize
}

/// Starting index from which the circuit can be completed, if the total
/// gas covers the total cost. Deficit before the answer can never help a
/// later start, so restart after each failure.
pub fn gas_station(gas: &[i64], cost: &[i64]) -> Option<usize> {
    let mut total = 0;
    let mut tank = 0;
    let mut start = 0;
    for i in 0..gas.len() {
        let gain = gas[i] - cost[i];
        total += gain;
        tank += gain;
        if tank < 0 {
            start = i + 1;
            tank = 0;
        }
    }
    if total >= 0 && start < gas.len() {
        Some(start)
    } else {
        None
    }
}

/// Fewest candies so every child has more than any lower-rated neighbour.
/// Two passes: left-to-right fixes ascents, right-to-left fixes descents.
pub fn candy_distribution(ratings: &[i64]) -> u64 {
    let n = ratings.len();
    let mut candies = vec![1u64; n];
    for i in 1..n {
        if ratings[i] > ratings[i - 1] {
            candies[i] = candies[i - 1] + 1;
        }
    }
    for i in (0..n.saturating_sub(1)).rev() {
        if ratings[i] > ratings[i + 1] {
            candies[i] = candies[i].max(candies[i + 1] + 1);
        }
    }
    candies.iter().sum()
}

/// Whether the last index is reachable jumping at most `nums[i]` from i.
pub fn jump_game(nums: &[usize]) -> bool {
    let mut reach = 0;
    for (i, &step) in nums.iter().enumerate() {
        if i > reach {
            return false;
        }
        reach = reach.max(i + step);
    }
    true
}

/// Fewest jumps to the last index. None if unreachable.
pub fn jump_game_min_jumps(nums: &[usize]) -> Option<usize> {
    if nums.len() <= 1 {
        return Some(0);
    }
    let mut jumps = 0;
    let mut current_end = 0;
    let mut farthest = 0;
    for (i, &step) in nums.iter().enumerate().take(nums.len() - 1) {
        if i > farthest {
            return None;
        }
        farthest = farthest.max(i + step);
        if i == current_end {
            jumps += 1;
            current_end = farthest;
        }
    }
    if current_end >= nums.len() - 1 {
        Some(jumps)
    } else {
        None
    }
}

/// Minimum arrows to burst every balloon, balloons as (x_start, x_end).
/// Sort by end; one arrow at each chosen end covers every balloon
/// starting before it.
pub fn minimum_arrows(points: &[(i64, i64)]) -> usize {
    if points.is_empty() {
        return 0;
    }
    let mut sorted = points.to_vec();
    sorted.sort_by_key(|&(_, end)| end);

    let mut arrows = 1;
    let mut arrow_at = sorted[0].1;
    for &(start, end) in &sorted[1..] {
        if start > arrow_at {
            arrows += 1;
            arrow_at = end;
        }
    }
    arrows
}

/// Partition a string so no letter spans two parts; returns part lengths.
pub fn partition_labels(s: &str) -> Vec<usize> {
    let bytes = s.as_bytes();
    let mut last = [0usize; 256];
    for (i, &b) in bytes.iter().enumerate() {
        last[b as usize] = i;
    }

    let mut lengths = Vec::new();
    let mut start = 0;
    let mut end = 0;
    for (i, &b) in bytes.iter().enumerate() {
        end = end.max(last[b as usize]);
        if i == end {
            lengths.push(end - start + 1);
            start = i + 1;
        }
    }
    lengths
}

/// Smallest number (as a string) after deleting `k` digits. A digit
/// larger than its successor is never worth keeping: monotonic stack.
pub fn remove_k_digits(num: &str, k: usize) -> String {
    let mut stack: Vec<u8> = Vec::with_capacity(num.len());
    let mut to_remove = k;
    for &digit in num.as_bytes() {
        while to_remove > 0 && stack.last().is_some_and(|&top| top > digit) {
            stack.pop();
            to_remove -= 1;
        }
        stack.push(digit);
    }
    stack.truncate(stack.len().saturating_sub(to_remove));

    let trimmed: Vec<u8> = stack
        .into_iter()
        .skip_while(|&b| b == b'0')
        .collect();
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        String::from_utf8_lossy(&trimmed).into_owned()
    }
}
