//! Levenshtein edit distance by tabulation.

use std::cmp;

/// Returns the Levenshtein distance between two strings.
///
/// The distance is the minimum number of single character insertions,
/// deletions and substitutions that transform one string into the other.
/// Fills the full (n + 1) x (m + 1) table in O(n * m) time and space.
///
/// ```
/// use avltree::dp::levenshtein_distance;
/// assert_eq!(levenshtein_distance("short", "ports"), 3);
/// ```
pub fn levenshtein_distance(source: &str, target: &str) -> usize {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();

    // distances[i][j] is the distance between the first i characters of
    // source and the first j characters of target
    let mut distances = vec![vec![0; target.len() + 1]; source.len() + 1];
    for (i, row) in distances.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, distance) in distances[0].iter_mut().enumerate() {
        *distance = j;
    }

    for i in 1..=source.len() {
        for j in 1..=target.len() {
            distances[i][j] = if source[i - 1] == target[j - 1] {
                distances[i - 1][j - 1]
            } else {
                1 + cmp::min(
                    distances[i - 1][j - 1],
                    cmp::min(distances[i - 1][j], distances[i][j - 1]),
                )
            };
        }
    }

    distances[source.len()][target.len()]
}
