//! Edit distance helpers over character slices.
//!
//! The comparator strips the shared prefix of two tokens before measuring the
//! remaining suffixes, so these functions take `&[char]` rather than `&str`
//! to avoid re-decoding UTF-8 for every pair.

use std::cmp::min;

/// Length (in characters) of the longest common prefix of two slices.
pub fn common_prefix_len(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

/// Levenshtein distance with early termination.
///
/// This is the minimum number of single-character insertions, deletions or
/// substitutions needed to turn `a` into `b`. Returns `None` as soon as the
/// distance is known to exceed `threshold`.
pub fn levenshtein_distance_threshold(a: &[char], b: &[char], threshold: usize) -> Option<usize> {
    if a.len().abs_diff(b.len()) > threshold {
        return None;
    }
    if a.is_empty() || b.is_empty() {
        let distance = a.len().max(b.len());
        return (distance <= threshold).then_some(distance);
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        let mut min_in_row = curr_row[0];

        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr_row[j + 1] = min(
                min(prev_row[j + 1] + 1, curr_row[j] + 1),
                prev_row[j] + cost,
            );
            min_in_row = min(min_in_row, curr_row[j + 1]);
        }

        // Every later row is at least this large.
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[b.len()];
    (distance <= threshold).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn distance(a: &str, b: &str) -> Option<usize> {
        levenshtein_distance_threshold(&chars(a), &chars(b), usize::MAX)
    }

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(common_prefix_len(&chars("running"), &chars("runs")), 3);
        assert_eq!(common_prefix_len(&chars("run"), &chars("run")), 3);
        assert_eq!(common_prefix_len(&chars("jump"), &chars("run")), 0);
        assert_eq!(common_prefix_len(&chars(""), &chars("run")), 0);
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(distance("", ""), Some(0));
        assert_eq!(distance("", "ab"), Some(2));
        assert_eq!(distance("ab", ""), Some(2));
        assert_eq!(distance("kitten", "sitting"), Some(3));
        assert_eq!(distance("ning", "s"), Some(4));
        assert_eq!(distance("ed", "ing"), Some(3));
    }

    #[test]
    fn test_levenshtein_distance_threshold() {
        let kitten = chars("kitten");
        let sitting = chars("sitting");
        assert_eq!(levenshtein_distance_threshold(&kitten, &sitting, 3), Some(3));
        assert_eq!(levenshtein_distance_threshold(&kitten, &sitting, 2), None);
        assert_eq!(levenshtein_distance_threshold(&chars("a"), &chars("abc"), 1), None);
        assert_eq!(levenshtein_distance_threshold(&chars(""), &chars("ab"), 2), Some(2));
        assert_eq!(levenshtein_distance_threshold(&chars("s"), &chars(""), 0), None);
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(distance("слово", "слова"), Some(1));
    }
}
