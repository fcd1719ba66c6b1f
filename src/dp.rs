//! Dynamic programming algorithms.

pub mod edit_distance;
pub mod longest_increasing_subsequence;

// Re-export the algorithms with descriptive names
pub use edit_distance::levenshtein_distance;
pub use longest_increasing_subsequence::longest_increasing_subsequence_length;
