//! An ordered map and an ordered set implemented with an AVL tree.
//!
//! The map keeps its entries sorted by key and rebalances itself after every
//! insertion and removal, so lookup, insertion and removal all run in
//! O(log n) time. Formatting a map lists its entries in ascending key order.
//!
//! ```
//! use avltree::AvlTreeMap;
//!
//! let mut map = AvlTreeMap::new();
//! map.insert(5, "a");
//! map.insert(3, "b");
//! map.insert(8, "c");
//! map.insert(1, "d");
//! map.insert(4, "e");
//! assert_eq!(map.to_string(), "{1=d, 3=b, 4=e, 5=a, 8=c}");
//! assert_eq!(map.remove(&3), Some("b"));
//! assert_eq!(map.to_string(), "{1=d, 4=e, 5=a, 8=c}");
//! ```
//!
//! The [`dp`] module bundles two standalone dynamic programming algorithms,
//! a longest increasing subsequence and a Levenshtein edit distance.

mod map;
mod set;

pub mod dp;

pub use map::AvlTreeMap;
pub use set::AvlTreeSet;
