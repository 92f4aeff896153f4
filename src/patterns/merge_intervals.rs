//! Overlapping intervals.
//!
//! Variables:
//!   [a.start, a.end]  - closed interval
//!
//! Equations:
//!   overlap(a, b)    iff  a.start <= b.end && b.start <= a.end
//!   merge(a, b)      = [min(start), max(end)]     (when overlapping)
//!   merged output    is sorted by start and pairwise disjoint

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// A job is an interval plus the CPU load it contributes while running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub start: i64,
    pub end: i64,
    pub load: i64,
}

impl Job {
    pub fn new(start: i64, end: i64, load: i64) -> Self {
        Self { start, end, load }
    }
}

/// Merge all overlapping intervals; output sorted and disjoint.
pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
    if intervals.len() < 2 {
        return intervals.to_vec();
    }
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|iv| iv.start);

    let mut merged = Vec::with_capacity(sorted.len());
    let mut current = sorted[0];
    for iv in &sorted[1..] {
        if iv.start <= current.end {
            current.end = current.end.max(iv.end);
        } else {
            merged.push(current);
            current = *iv;
        }
    }
    merged.push(current);
    merged
}

/// Insert `new` into a sorted, disjoint list, merging where needed.
/// Single pass, no re-sort.
pub fn insert_interval(intervals: &[Interval], new: Interval) -> Vec<Interval> {
    let mut result = Vec::with_capacity(intervals.len() + 1);
    let mut new = new;
    let mut i = 0;

    while i < intervals.len() && intervals[i].end < new.start {
        result.push(intervals[i]);
        i += 1;
    }
    while i < intervals.len() && intervals[i].start <= new.end {
        new.start = new.start.min(intervals[i].start);
        new.end = new.end.max(intervals[i].end);
        i += 1;
    }
    result.push(new);
    result.extend_from_slice(&intervals[i..]);
    result
}

/// Pairwise intersection of two sorted interval lists.
pub fn intervals_intersection(a: &[Interval], b: &[Interval]) -> Vec<Interval> {
    let mut result = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let start = a[i].start.max(b[j].start);
        let end = a[i].end.min(b[j].end);
        if start <= end {
            result.push(Interval::new(start, end));
        }
        // drop whichever interval finishes first
        if a[i].end < b[j].end {
            i += 1;
        } else {
            j += 1;
        }
    }
    result
}

/// Whether a person can attend all appointments (no two overlap).
pub fn can_attend_all(intervals: &[Interval]) -> bool {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|iv| iv.start);
    sorted.windows(2).all(|w| w[0].end <= w[1].start)
}

/// Minimum number of rooms to host all meetings. A min-heap of end times
/// holds the meetings running at the current start time.
pub fn min_meeting_rooms(intervals: &[Interval]) -> usize {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|iv| iv.start);

    let mut ends: BinaryHeap<Reverse<i64>> = BinaryHeap::new();
    let mut rooms = 0;
    for meeting in &sorted {
        while let Some(&Reverse(end)) = ends.peek() {
            if end > meeting.start {
                break;
            }
            ends.pop();
        }
        ends.push(Reverse(meeting.end));
        rooms = rooms.max(ends.len());
    }
    rooms
}

/// Maximum total load of jobs running at the same instant.
pub fn max_cpu_load(jobs: &[Job]) -> i64 {
    let mut sorted = jobs.to_vec();
    sorted.sort_by_key(|j| j.start);

    let mut running: BinaryHeap<Reverse<(i64, i64)>> = BinaryHeap::new();
    let mut current = 0;
    let mut best = 0;
    for job in &sorted {
        while let Some(&Reverse((end, load))) = running.peek() {
            if end > job.start {
                break;
            }
            current -= load;
            running.pop();
        }
        running.push(Reverse((job.end, job.load)));
        current += job.load;
        best = best.max(current);
    }
    best
}

/// Gaps common to every employee's schedule.
pub fn employee_free_time(schedules: &[Vec<Interval>]) -> Vec<Interval> {
    let all: Vec<Interval> = schedules.iter().flatten().copied().collect();
    let merged = merge_intervals(&all);
    merged
        .windows(2)
        .filter(|w| w[0].end < w[1].start)
        .map(|w| Interval::new(w[0].end, w[1].start))
        .collect()
}
