//! Longest increasing subsequence by tabulation.

use std::cmp;

/// Returns the length of the longest strictly increasing subsequence.
///
/// Classic O(n^2) tabulation: for every position take the best subsequence
/// over all smaller values to the left and extend it by one.
///
/// ```
/// use avltree::dp::longest_increasing_subsequence_length;
/// assert_eq!(longest_increasing_subsequence_length(&[1, 3, 3, 2, 6]), 3);
/// assert_eq!(longest_increasing_subsequence_length::<i32>(&[]), 0);
/// ```
pub fn longest_increasing_subsequence_length<T: Ord>(values: &[T]) -> usize {
    // lengths[i] is the length of the longest increasing subsequence ending at i
    let mut lengths = vec![1; values.len()];
    for i in 1..values.len() {
        for j in 0..i {
            if values[j] < values[i] {
                lengths[i] = cmp::max(lengths[i], lengths[j] + 1);
            }
        }
    }
    lengths.into_iter().max().unwrap_or(0)
}
