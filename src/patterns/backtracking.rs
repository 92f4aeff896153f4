//! Backtracking: exhaustive search with undo.
//!
//! Each routine grows a partial candidate, recurses, and pops the choice
//! on the way out, so one scratch buffer serves the whole search tree.

/// All subsets of a set of distinct values.
pub fn subsets<T: Clone>(nums: &[T]) -> Vec<Vec<T>> {
    fn backtrack<T: Clone>(nums: &[T], start: usize, path: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
        out.push(path.clone());
        for i in start..nums.len() {
            path.push(nums[i].clone());
            backtrack(nums, i + 1, path, out);
            path.pop();
        }
    }
    let mut out = Vec::new();
    backtrack(nums, 0, &mut Vec::new(), &mut out);
    out
}

/// All distinct subsets of a multiset. Input is sorted first; equal
/// values are only branched on once per position.
pub fn subsets_with_duplicates(nums: &[i64]) -> Vec<Vec<i64>> {
    fn backtrack(nums: &[i64], start: usize, path: &mut Vec<i64>, out: &mut Vec<Vec<i64>>) {
        out.push(path.clone());
        for i in start..nums.len() {
            if i > start && nums[i] == nums[i - 1] {
                continue;
            }
            path.push(nums[i]);
            backtrack(nums, i + 1, path, out);
            path.pop();
        }
    }
    let mut nums = nums.to_vec();
    nums.sort_unstable();
    let mut out = Vec::new();
    backtrack(&nums, 0, &mut Vec::new(), &mut out);
    out
}

/// All orderings of a set of distinct values.
pub fn permutations<T: Clone + PartialEq>(nums: &[T]) -> Vec<Vec<T>> {
    fn backtrack<T: Clone + PartialEq>(
        nums: &[T],
        used: &mut Vec<bool>,
        path: &mut Vec<T>,
        out: &mut Vec<Vec<T>>,
    ) {
        if path.len() == nums.len() {
            out.push(path.clone());
            return;
        }
        for i in 0..nums.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            path.push(nums[i].clone());
            backtrack(nums, used, path, out);
            path.pop();
            used[i] = false;
        }
    }
    let mut out = Vec::new();
    backtrack(
        nums,
        &mut vec![false; nums.len()],
        &mut Vec::new(),
        &mut out,
    );
    out
}

/// All combinations (values reusable) summing to `target`.
pub fn combination_sum(candidates: &[i64], target: i64) -> Vec<Vec<i64>> {
    fn backtrack(
        candidates: &[i64],
        target: i64,
        start: usize,
        path: &mut Vec<i64>,
        out: &mut Vec<Vec<i64>>,
    ) {
        if target == 0 {
            out.push(path.clone());
            return;
        }
        for i in start..candidates.len() {
            if candidates[i] > target {
                continue;
            }
            path.push(candidates[i]);
            backtrack(candidates, target - candidates[i], i, path, out);
            path.pop();
        }
    }
    let mut out = Vec::new();
    backtrack(candidates, target, 0, &mut Vec::new(), &mut out);
    out
}

/// All placements of `n` non-attacking queens; each solution lists the
/// queen's column per row.
pub fn solve_n_queens(n: usize) -> Vec<Vec<usize>> {
    fn safe(cols: &[usize], row: usize, col: usize) -> bool {
        for (r, &c) in cols.iter().enumerate().take(row) {
            if c == col || r.abs_diff(row) == c.abs_diff(col) {
                return false;
            }
        }
        true
    }
    fn backtrack(n: usize, row: usize, cols: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if row == n {
            out.push(cols.clone());
            return;
        }
        for col in 0..n {
            if safe(cols, row, col) {
                cols.push(col);
                backtrack(n, row + 1, cols, out);
                cols.pop();
            }
        }
    }
    let mut out = Vec::new();
    backtrack(n, 0, &mut Vec::new(), &mut out);
    out
}

/// All well-formed strings of `n` pairs of parentheses.
pub fn generate_parentheses(n: usize) -> Vec<String> {
    fn backtrack(n: usize, open: usize, close: usize, current: &mut String, out: &mut Vec<String>) {
        if current.len() == 2 * n {
            out.push(current.clone());
            return;
        }
        if open < n {
            current.push('(');
            backtrack(n, open + 1, close, current, out);
            current.pop();
        }
        if close < open {
            current.push(')');
            backtrack(n, open, close + 1, current, out);
            current.pop();
        }
    }
    let mut out = Vec::new();
    backtrack(n, 0, 0, &mut String::new(), &mut out);
    out
}

/// Whether `word` can be traced through the grid moving between adjacent
/// cells, using each cell at most once.
pub fn word_search(board: &[Vec<char>], word: &str) -> bool {
    fn backtrack(
        board: &[Vec<char>],
        used: &mut Vec<Vec<bool>>,
        word: &[char],
        row: usize,
        col: usize,
        index: usize,
    ) -> bool {
        if board[row][col] != word[index] || used[row][col] {
            return false;
        }
        if index + 1 == word.len() {
            return true;
        }
        used[row][col] = true;
        let mut found = false;
        if row > 0 {
            found = found || backtrack(board, used, word, row - 1, col, index + 1);
        }
        if !found && row + 1 < board.len() {
            found = backtrack(board, used, word, row + 1, col, index + 1);
        }
        if !found && col > 0 {
            found = backtrack(board, used, word, row, col - 1, index + 1);
        }
        if !found && col + 1 < board[row].len() {
            found = backtrack(board, used, word, row, col + 1, index + 1);
        }
        used[row][col] = false;
        found
    }

    let word: Vec<char> = word.chars().collect();
    if word.is_empty() {
        return true;
    }
    let mut used: Vec<Vec<bool>> = board.iter().map(|r| vec![false; r.len()]).collect();
    for row in 0..board.len() {
        for col in 0..board[row].len() {
            if backtrack(board, &mut used, &word, row, col, 0) {
                return true;
            }
        }
    }
    false
}

const PHONE_KEYS: [&str; 8] = ["abc", "def", "ghi", "jkl", "mno", "pqrs", "tuv", "wxyz"];

/// All letter strings a digit string (2-9) could spell on a phone keypad.
pub fn letter_combinations(digits: &str) -> Vec<String> {
    fn backtrack(digits: &[u8], index: usize, current: &mut String, out: &mut Vec<String>) {
        if index == digits.len() {
            out.push(current.clone());
            return;
        }
        let key = (digits[index] - b'2') as usize;
        for c in PHONE_KEYS[key].chars() {
            current.push(c);
            backtrack(digits, index + 1, current, out);
            current.pop();
        }
    }
    if digits.is_empty() || digits.bytes().any(|b| !(b'2'..=b'9').contains(&b)) {
        return Vec::new();
    }
    let mut out = Vec::new();
    backtrack(digits.as_bytes(), 0, &mut String::new(), &mut out);
    out
}

/// All ways to split `s` so every piece is a palindrome.
pub fn palindrome_partitioning(s: &str) -> Vec<Vec<String>> {
    fn is_palindrome(s: &[char]) -> bool {
        let n = s.len();
        (0..n / 2).all(|i| s[i] == s[n - 1 - i])
    }
    fn backtrack(s: &[char], start: usize, path: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
        if start == s.len() {
            out.push(path.clone());
            return;
        }
        for end in start + 1..=s.len() {
            if is_palindrome(&s[start..end]) {
                path.push(s[start..end].iter().collect());
                backtrack(s, end, path, out);
                path.pop();
            }
        }
    }
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    backtrack(&chars, 0, &mut Vec::new(), &mut out);
    out
}
