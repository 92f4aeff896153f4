use algo_patterns::patterns::binary_search::{
    bitonic_max_index, find_peak, find_range, min_in_rotated, next_letter, order_agnostic_search,
    rotation_count, search_bitonic, search_ceiling, search_floor, search_infinite,
    search_insert_position, search_rotated,
};
use algo_patterns::patterns::cyclic_sort::{
    cyclic_sort, find_all_duplicates, find_all_missing, find_corrupt_pair, find_duplicate,
    find_missing_number, first_k_missing_positive, smallest_missing_positive,
};
use algo_patterns::patterns::merge_intervals::{
    can_attend_all, employee_free_time, insert_interval, intervals_intersection, max_cpu_load,
    merge_intervals, min_meeting_rooms, Interval, Job,
};
use algo_patterns::patterns::sliding_window::{
    contains_permutation, fruits_into_baskets, longest_ones_after_replacement,
    longest_substring_k_distinct, longest_substring_no_repeat,
    longest_substring_with_replacement, max_sum_subarray, smallest_subarray_with_sum,
};
use algo_patterns::patterns::two_pointers::{
    backspace_compare, pair_with_target_sum, remove_duplicates, sorted_squares,
    triplet_sum_to_zero,
};

#[test]
fn pair_with_target_sum_finds_indices() {
    assert_eq!(pair_with_target_sum(&[1, 2, 3, 4, 6], 6), Some((1, 3)));
    assert_eq!(pair_with_target_sum(&[2, 5, 9, 11], 11), Some((0, 2)));
    assert_eq!(pair_with_target_sum(&[1, 2, 3], 100), None);
    assert_eq!(pair_with_target_sum(&[], 0), None);
}

#[test]
fn remove_duplicates_compacts_prefix() {
    let mut nums = [2, 3, 3, 3, 6, 9, 9];
    let k = remove_duplicates(&mut nums);
    assert_eq!(k, 4);
    assert_eq!(&nums[..k], &[2, 3, 6, 9]);

    let mut single = [5];
    assert_eq!(remove_duplicates(&mut single), 1);
}

#[test]
fn sorted_squares_handles_negatives() {
    assert_eq!(sorted_squares(&[-2, -1, 0, 2, 3]), vec![0, 1, 4, 4, 9]);
    assert_eq!(sorted_squares(&[-3, -1, 0, 1, 2]), vec![0, 1, 1, 4, 9]);
}

#[test]
fn triplet_sum_to_zero_finds_unique_triplets() {
    let triplets = triplet_sum_to_zero(&[-3, 0, 1, 2, -1, 1, -2]);
    assert_eq!(
        triplets,
        vec![[-3, 1, 2], [-2, 0, 2], [-2, 1, 1], [-1, 0, 1]]
    );
    assert!(triplet_sum_to_zero(&[1, 2, 3]).is_empty());
}

#[test]
fn backspace_compare_honors_deletes() {
    assert!(backspace_compare("xy#z", "xzz#"));
    assert!(!backspace_compare("xy#z", "xyz#"));
    assert!(backspace_compare("xp#", "xyz##"));
    assert!(backspace_compare("a##", "#"));
}

#[test]
fn max_sum_subarray_of_fixed_window() {
    assert_eq!(max_sum_subarray(&[2, 1, 5, 1, 3, 2], 3), Some(9));
    assert_eq!(max_sum_subarray(&[2, 3, 4, 1, 5], 2), Some(7));
    assert_eq!(max_sum_subarray(&[1, 2], 3), None);
}

#[test]
fn smallest_subarray_with_sum_shrinks_window() {
    assert_eq!(smallest_subarray_with_sum(&[2, 1, 5, 2, 3, 2], 7), 2);
    assert_eq!(smallest_subarray_with_sum(&[2, 1, 5, 2, 8], 7), 1);
    assert_eq!(smallest_subarray_with_sum(&[1, 1, 1], 100), 0);
}

#[test]
fn longest_substring_k_distinct_tracks_frequencies() {
    assert_eq!(longest_substring_k_distinct("araaci", 2), 4);
    assert_eq!(longest_substring_k_distinct("araaci", 1), 2);
    assert_eq!(longest_substring_k_distinct("cbbebi", 3), 5);
    assert_eq!(longest_substring_k_distinct("abc", 0), 0);
}

#[test]
fn fruits_into_baskets_limits_two_kinds() {
    assert_eq!(fruits_into_baskets(&[3, 3, 2, 1, 2, 1, 4]), 4);
    assert_eq!(fruits_into_baskets(&[1, 2, 1, 3, 3, 3, 4]), 4);
    assert_eq!(fruits_into_baskets(&[]), 0);
}

#[test]
fn longest_substring_no_repeat_slides_on_collision() {
    assert_eq!(longest_substring_no_repeat("aabccbb"), 3);
    assert_eq!(longest_substring_no_repeat("abbbb"), 2);
    assert_eq!(longest_substring_no_repeat("abcabcbb"), 3);
    assert_eq!(longest_substring_no_repeat(""), 0);
}

#[test]
fn replacement_windows() {
    assert_eq!(longest_substring_with_replacement("aabccbb", 2), 5);
    assert_eq!(longest_substring_with_replacement("abbcb", 1), 4);
    assert_eq!(
        longest_ones_after_replacement(&[0, 1, 1, 0, 0, 0, 1, 1, 0, 1, 1], 2),
        6
    );
    assert_eq!(
        longest_ones_after_replacement(&[0, 1, 0, 0, 1, 1, 0, 1, 1, 0, 0, 1, 1], 3),
        9
    );
}

#[test]
fn contains_permutation_checks_anagram_windows() {
    assert!(contains_permutation("oidbcaf", "abc"));
    assert!(!contains_permutation("odicf", "dc"));
    assert!(contains_permutation("bcdxabcdy", "bcdyabcdx"));
    assert!(contains_permutation("aaacb", "abc"));
}

#[test]
fn cyclic_sort_places_permutation() {
    let mut nums = [3, 1, 5, 4, 2];
    cyclic_sort(&mut nums);
    assert_eq!(nums, [1, 2, 3, 4, 5]);

    let mut reversed = [5, 4, 3, 2, 1];
    cyclic_sort(&mut reversed);
    assert_eq!(reversed, [1, 2, 3, 4, 5]);
}

#[test]
fn cyclic_sort_leaves_out_of_range_values_in_place() {
    let mut with_zero = [3, 0, 1];
    cyclic_sort(&mut with_zero);
    assert_eq!(with_zero, [1, 0, 3]);

    let mut with_negative = [-1, 2, 1];
    cyclic_sort(&mut with_negative);
    assert_eq!(with_negative, [1, 2, -1]);

    let mut too_big = [2, 9, 1];
    cyclic_sort(&mut too_big);
    assert_eq!(too_big, [1, 2, 9]);
}

#[test]
fn missing_number_family() {
    assert_eq!(find_missing_number(&mut [4, 0, 3, 1]), 2);
    assert_eq!(find_missing_number(&mut [0, 1, 2]), 3);

    let mut missing = find_all_missing(&mut [2, 3, 1, 8, 2, 3, 5, 1]);
    missing.sort_unstable();
    assert_eq!(missing, vec![4, 6, 7]);
}

#[test]
fn duplicate_family() {
    assert_eq!(find_duplicate(&mut [1, 4, 4, 3, 2]), Some(4));
    assert_eq!(find_duplicate(&mut [1, 2, 3]), None);

    let mut dups = find_all_duplicates(&mut [5, 4, 7, 2, 3, 5, 3]);
    dups.sort_unstable();
    assert_eq!(dups, vec![3, 5]);

    assert_eq!(find_corrupt_pair(&mut [3, 1, 2, 5, 2]), Some((2, 4)));
    assert_eq!(find_corrupt_pair(&mut [1, 2, 3]), None);
}

#[test]
fn missing_positive_family() {
    assert_eq!(smallest_missing_positive(&mut [-3, 1, 5, 4, 2]), 3);
    assert_eq!(smallest_missing_positive(&mut [3, -2, 0, 1, 2]), 4);
    assert_eq!(smallest_missing_positive(&mut [3, 2, 5, 1]), 4);

    assert_eq!(first_k_missing_positive(&mut [3, -1, 4, 5, 5], 3), vec![1, 2, 6]);
    assert_eq!(first_k_missing_positive(&mut [2, 3, 4], 3), vec![1, 5, 6]);
}

#[test]
fn merge_intervals_collapses_overlaps() {
    let merged = merge_intervals(&[
        Interval::new(1, 4),
        Interval::new(2, 5),
        Interval::new(7, 9),
    ]);
    assert_eq!(merged, vec![Interval::new(1, 5), Interval::new(7, 9)]);

    let touching = merge_intervals(&[Interval::new(1, 4), Interval::new(4, 6)]);
    assert_eq!(touching, vec![Interval::new(1, 6)]);

    assert!(merge_intervals(&[]).is_empty());
}

#[test]
fn insert_interval_keeps_order_without_resort() {
    let base = [Interval::new(1, 3), Interval::new(5, 7), Interval::new(8, 12)];
    assert_eq!(
        insert_interval(&base, Interval::new(4, 6)),
        vec![Interval::new(1, 3), Interval::new(4, 7), Interval::new(8, 12)]
    );
    assert_eq!(
        insert_interval(&base, Interval::new(4, 10)),
        vec![Interval::new(1, 3), Interval::new(4, 12)]
    );
}

#[test]
fn intervals_intersection_walks_both_lists() {
    let a = [Interval::new(1, 3), Interval::new(5, 6), Interval::new(7, 9)];
    let b = [Interval::new(2, 3), Interval::new(5, 7)];
    assert_eq!(
        intervals_intersection(&a, &b),
        vec![Interval::new(2, 3), Interval::new(5, 6), Interval::new(7, 7)]
    );
}

#[test]
fn meeting_room_counts() {
    assert!(can_attend_all(&[Interval::new(1, 4), Interval::new(5, 6)]));
    assert!(!can_attend_all(&[Interval::new(1, 4), Interval::new(2, 5)]));

    assert_eq!(
        min_meeting_rooms(&[
            Interval::new(1, 4),
            Interval::new(2, 5),
            Interval::new(7, 9),
        ]),
        2
    );
    assert_eq!(
        min_meeting_rooms(&[
            Interval::new(6, 7),
            Interval::new(2, 4),
            Interval::new(8, 12),
        ]),
        1
    );
}

#[test]
fn cpu_load_and_free_time() {
    let jobs = [
        Job::new(1, 4, 3),
        Job::new(2, 5, 4),
        Job::new(7, 9, 6),
    ];
    assert_eq!(max_cpu_load(&jobs), 7);

    let schedules = vec![
        vec![Interval::new(1, 3), Interval::new(5, 6)],
        vec![Interval::new(2, 3), Interval::new(6, 8)],
    ];
    assert_eq!(employee_free_time(&schedules), vec![Interval::new(3, 5)]);
}

#[test]
fn interval_serde_round_trip() {
    let interval = Interval::new(3, 9);
    let json = serde_json::to_string(&interval).unwrap();
    assert_eq!(json, r#"{"start":3,"end":9}"#);
    let back: Interval = serde_json::from_str(&json).unwrap();
    assert_eq!(back, interval);
}

#[test]
fn order_agnostic_search_handles_both_directions() {
    assert_eq!(order_agnostic_search(&[4, 6, 10], &10), Some(2));
    assert_eq!(order_agnostic_search(&[10, 6, 4], &10), Some(0));
    assert_eq!(order_agnostic_search(&[1, 2, 3, 4, 5, 6, 7], &5), Some(4));
    assert_eq!(order_agnostic_search::<i64>(&[], &1), None);
}

#[test]
fn ceiling_and_floor() {
    assert_eq!(search_ceiling(&[4, 6, 10], 6), Some(1));
    assert_eq!(search_ceiling(&[1, 3, 8, 10, 15], 12), Some(4));
    assert_eq!(search_ceiling(&[4, 6, 10], 17), None);

    assert_eq!(search_floor(&[4, 6, 10], 6), Some(1));
    assert_eq!(search_floor(&[1, 3, 8, 10, 15], 12), Some(3));
    assert_eq!(search_floor(&[4, 6, 10], 3), None);
}

#[test]
fn next_letter_wraps_around() {
    assert_eq!(next_letter(&['a', 'c', 'f', 'h'], 'f'), Some('h'));
    assert_eq!(next_letter(&['a', 'c', 'f', 'h'], 'b'), Some('c'));
    assert_eq!(next_letter(&['a', 'c', 'f', 'h'], 'm'), Some('a'));
}

#[test]
fn find_range_locates_both_ends() {
    assert_eq!(find_range(&[4, 6, 6, 6, 9], 6), Some((1, 3)));
    assert_eq!(find_range(&[1, 3, 8, 10, 15], 10), Some((3, 3)));
    assert_eq!(find_range(&[1, 3, 8], 12), None);
}

#[test]
fn search_infinite_expands_then_narrows() {
    let reader: &[i64] = &[4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30];
    assert_eq!(search_infinite(&reader, 16), Some(6));
    assert_eq!(search_infinite(&reader, 11), None);
    assert_eq!(search_infinite(&reader, 4), Some(0));
}

#[test]
fn rotated_and_bitonic_searches() {
    assert_eq!(find_peak(&[1, 3, 8, 12, 4, 2]), Some(3));

    assert_eq!(search_rotated(&[10, 15, 1, 3, 8], 15), Some(1));
    assert_eq!(search_rotated(&[4, 5, 7, 9, 10, -1, 2], 10), Some(4));
    assert_eq!(search_rotated(&[4, 5, 7, 9], 3), None);

    assert_eq!(rotation_count(&[10, 15, 1, 3, 8]), 2);
    assert_eq!(rotation_count(&[1, 3, 8, 10]), 0);
    assert_eq!(min_in_rotated(&[10, 15, 1, 3, 8]), Some(1));

    assert_eq!(bitonic_max_index(&[1, 3, 8, 12, 4, 2]), Some(3));
    assert_eq!(search_bitonic(&[1, 3, 8, 4, 3], 4), Some(3));
    assert_eq!(search_bitonic(&[3, 8, 3, 1], 8), Some(1));
    assert_eq!(search_bitonic(&[1, 3, 8, 12], 12), Some(3));
}

#[test]
fn search_insert_position_is_lower_bound() {
    assert_eq!(search_insert_position(&[1, 3, 5, 6], 5), 2);
    assert_eq!(search_insert_position(&[1, 3, 5, 6], 2), 1);
    assert_eq!(search_insert_position(&[1, 3, 5, 6], 7), 4);
    assert_eq!(search_insert_position(&[], 3), 0);
}
