//! An ordered map implemented with an AVL tree.

use std::cmp::{self, Ordering};
use std::fmt;
use std::mem;

/// An ordered map implemented with an AVL tree.
///
/// Entries are kept sorted by key. Lookup, insertion and removal run in
/// O(log n) time; formatting the map lists all entries in ascending key order.
///
/// ```
/// use avltree::AvlTreeMap;
/// let mut map = AvlTreeMap::new();
/// map.insert(2, "two");
/// map.insert(1, "one");
/// map.insert(3, "three");
/// assert_eq!(map.get(&2), Some(&"two"));
/// assert_eq!(map.to_string(), "{1=one, 2=two, 3=three}");
/// map.remove(&2);
/// assert!(map.get(&2).is_none());
/// ```
#[derive(Clone)]
pub struct AvlTreeMap<K, V> {
    root: Link<K, V>,
    num_nodes: usize,
}

type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    height: usize,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Creates an empty map.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns a reference to the value corresponding to the key.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|node| &node.value)
    }

    /// Returns references to the key-value pair corresponding to the key.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.find(key).map(|node| (&node.key, &node.value))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Equal => return Some(&mut node.value),
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
            }
        }
        None
    }

    /// Returns true if the map contains a value for the given key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Inserts a key-value pair into the map.
    /// Returns the previous value if the map already had the key present.
    /// In that case the key itself is not updated.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let root = self.root.take();
        let (root, previous) = self.insert_node(root, key, value);
        self.root = Some(root);
        previous
    }

    /// Removes a key from the map.
    /// Returns the value at the key if the key was previously in the map.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let root = self.root.take();
        let (root, removed) = self.delete_node(root, key);
        self.root = root;
        debug_assert!(self.get(key).is_none());
        removed
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        let num_nodes = check_node(&self.root, None, None);
        assert_eq!(num_nodes, self.num_nodes);
    }

    fn find(&self, key: &K) -> Option<&Node<K, V>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Equal => return Some(node),
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        None
    }

    /// Inserts into the subtree and returns its rebalanced replacement
    /// together with the previous value at the key, if any.
    fn insert_node(&mut self, link: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, Option<V>) {
        match link {
            None => {
                self.num_nodes += 1;
                (Box::new(Node::new(key, value)), None)
            }
            Some(mut node) => match key.cmp(&node.key) {
                Ordering::Equal => {
                    let previous = mem::replace(&mut node.value, value);
                    (node, Some(previous))
                }
                Ordering::Less => {
                    let (left, previous) = self.insert_node(node.left.take(), key, value);
                    node.left = Some(left);
                    (Self::rebalance(node), previous)
                }
                Ordering::Greater => {
                    let (right, previous) = self.insert_node(node.right.take(), key, value);
                    node.right = Some(right);
                    (Self::rebalance(node), previous)
                }
            },
        }
    }

    /// Deletes from the subtree and returns its rebalanced replacement
    /// together with the removed value, if the key was present.
    fn delete_node(&mut self, link: Link<K, V>, key: &K) -> (Link<K, V>, Option<V>) {
        match link {
            None => (None, None),
            Some(mut node) => match key.cmp(&node.key) {
                Ordering::Less => {
                    let (left, removed) = self.delete_node(node.left.take(), key);
                    node.left = left;
                    (Some(Self::rebalance(node)), removed)
                }
                Ordering::Greater => {
                    let (right, removed) = self.delete_node(node.right.take(), key);
                    node.right = right;
                    (Some(Self::rebalance(node)), removed)
                }
                Ordering::Equal => {
                    debug_assert!(self.num_nodes >= 1);
                    self.num_nodes -= 1;
                    match (node.left.take(), node.right.take()) {
                        // Stem or leaf, promote the child (if any) into place
                        (child, None) | (None, child) => (child, Some(node.value)),
                        // Two children, relabel with the in-order successor
                        (Some(left), Some(right)) => {
                            let (right, successor) = Self::remove_min(right);
                            let successor = *successor;
                            node.key = successor.key;
                            let removed = mem::replace(&mut node.value, successor.value);
                            node.left = Some(left);
                            node.right = right;
                            (Some(Self::rebalance(node)), Some(removed))
                        }
                    }
                }
            },
        }
    }

    /// Unlinks the smallest node of the subtree.
    /// Returns the rebalanced remainder and the detached node.
    fn remove_min(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
        match node.left.take() {
            None => (node.right.take(), node),
            Some(left) => {
                let (left, min) = Self::remove_min(left);
                node.left = left;
                (Some(Self::rebalance(node)), min)
            }
        }
    }

    /// Restores the AVL condition (near balance) at the given node if necessary
    /// and updates its height.
    /// The resulting balance factor is -1, 0 or +1.
    /// The initial balance factor must not exceed +2 or -2,
    /// which always holds after a single update in one of the subtrees.
    fn rebalance(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        node.update_height();
        match node.balance_factor() {
            2 => {
                // Rebalance left
                let mut right = node.right.take().unwrap();
                if right.balance_factor() < 0 {
                    right = Self::rotate_right(right);
                }
                node.right = Some(right);
                Self::rotate_left(node)
            }
            -2 => {
                // Rebalance right
                let mut left = node.left.take().unwrap();
                if left.balance_factor() > 0 {
                    left = Self::rotate_left(left);
                }
                node.left = Some(left);
                Self::rotate_right(node)
            }
            balance => {
                debug_assert!(balance.abs() <= 1);
                node
            }
        }
    }

    fn rotate_left(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let mut new_root = node.right.take().unwrap();
        node.right = new_root.left.take();
        node.update_height();
        new_root.left = Some(node);
        new_root.update_height();
        new_root
    }

    fn rotate_right(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let mut new_root = node.left.take().unwrap();
        node.left = new_root.right.take();
        node.update_height();
        new_root.right = Some(node);
        new_root.update_height();
        new_root
    }
}

impl<K, V> AvlTreeMap<K, V> {
    /// Returns true if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Clears the map, deallocating all memory.
    pub fn clear(&mut self) {
        self.root = None;
        self.num_nodes = 0;
    }

    /// Returns the height of the tree.
    /// An empty tree has height zero, a single node height one.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn height(&self) -> usize {
        height(&self.root)
    }
}

impl<K: Ord, V> Default for AvlTreeMap<K, V> {
    /// Creates an empty map.
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for AvlTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        fmt_node(&self.root, f, &mut first)?;
        write!(f, "}}")
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AvlTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut entries = f.debug_map();
        debug_node(&self.root, &mut entries);
        entries.finish()
    }
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + cmp::max(height(&self.left), height(&self.right));
    }

    fn balance_factor(&self) -> isize {
        height(&self.right) as isize - height(&self.left) as isize
    }
}

fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// In order traversal writing `key=value` for every node.
fn fmt_node<K: fmt::Display, V: fmt::Display>(
    link: &Link<K, V>,
    f: &mut fmt::Formatter,
    first: &mut bool,
) -> fmt::Result {
    if let Some(node) = link {
        fmt_node(&node.left, f, first)?;
        if *first {
            *first = false;
        } else {
            write!(f, ", ")?;
        }
        write!(f, "{}={}", node.key, node.value)?;
        fmt_node(&node.right, f, first)?;
    }
    Ok(())
}

fn debug_node<K: fmt::Debug, V: fmt::Debug>(link: &Link<K, V>, entries: &mut fmt::DebugMap) {
    if let Some(node) = link {
        debug_node(&node.left, entries);
        entries.entry(&node.key, &node.value);
        debug_node(&node.right, entries);
    }
}

/// Checks a subtree against the search tree order within the given bounds,
/// the cached heights and the AVL condition.
/// Returns the number of nodes in the subtree.
#[cfg(any(test, feature = "consistency_check"))]
fn check_node<K: Ord, V>(link: &Link<K, V>, lower: Option<&K>, upper: Option<&K>) -> usize {
    match link {
        None => 0,
        Some(node) => {
            // Check search tree order
            if let Some(lower) = lower {
                assert!(*lower < node.key);
            }
            if let Some(upper) = upper {
                assert!(node.key < *upper);
            }

            // Check height
            let left_height = height(&node.left);
            let right_height = height(&node.right);
            assert_eq!(node.height, 1 + cmp::max(left_height, right_height));

            // Check AVL condition (near balance)
            assert!(left_height <= right_height + 1);
            assert!(right_height <= left_height + 1);

            let num_left = check_node(&node.left, lower, Some(&node.key));
            let num_right = check_node(&node.right, Some(&node.key), upper);
            num_left + num_right + 1
        }
    }
}
