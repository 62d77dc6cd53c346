//! Sorted singly-linked list
//!
//! The chain is kept in non-increasing key order, so the maximum is always the
//! head. Inserting walks past every node whose key is at least the new key,
//! which places equal keys after the ones already present.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `insert`        | O(n)       |
//! | `maximum`       | O(1)       |
//! | `extract_max`   | O(1)       |
//! | `increment_key` | O(n)       |
//! | `get_value`     | O(n)       |
//!
//! `increment_key` unlinks the target node and inserts the raised key through
//! the normal `insert` path. The element usually lands at a different index.
//!
//! # Example
//!
//! ```rust
//! use priority_containers::PriorityContainer;
//! use priority_containers::sorted_list::SortedList;
//!
//! let mut list: SortedList<i32> = [5, 3, 9, 1].into_iter().collect();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![9, 5, 3, 1]);
//!
//! list.increment_key(3, 7).unwrap();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![9, 7, 5, 3]);
//! ```

use std::fmt;

use crate::chain::{Chain, ListIter};
use crate::traits::{check_increase, empty, ContainerError, PriorityContainer};

/// A priority container over a chain sorted largest-first
#[derive(Clone)]
pub struct SortedList<K: Ord> {
    chain: Chain<K>,
}

impl<K: Ord> SortedList<K> {
    /// Iterates over the keys from head to tail (largest first)
    pub fn iter(&self) -> ListIter<'_, K> {
        self.chain.iter()
    }

    /// Removes every key
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Returns true if traversal order is non-increasing
    pub fn is_sorted(&self) -> bool {
        self.chain
            .iter()
            .zip(self.chain.iter().skip(1))
            .all(|(a, b)| a >= b)
    }
}

impl<K: Ord> PriorityContainer<K> for SortedList<K> {
    fn new() -> Self {
        Self { chain: Chain::new() }
    }

    fn len(&self) -> usize {
        self.chain.len()
    }

    fn insert(&mut self, key: K) {
        // Nodes not smaller than `key` form a prefix of the chain
        let position = self.chain.iter().take_while(|&k| *k >= key).count();
        self.chain.insert_at(position, key);
    }

    fn maximum(&self) -> Result<&K, ContainerError> {
        self.chain.front().ok_or_else(empty)
    }

    fn extract_max(&mut self) -> Result<K, ContainerError> {
        self.chain.pop_front().ok_or_else(empty)
    }

    fn increment_key(&mut self, index: usize, new_key: K) -> Result<(), ContainerError> {
        check_increase(index, self.chain.get(index)?, &new_key)?;

        self.chain.remove_at(index)?;
        self.insert(new_key);
        log::trace!("relocated key from index {}", index);
        Ok(())
    }

    fn get_value(&self, index: usize) -> Result<&K, ContainerError> {
        self.chain.get(index)
    }
}

impl<K: Ord> Default for SortedList<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + fmt::Debug> fmt::Debug for SortedList<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedList")
            .field("chain", &self.chain)
            .finish()
    }
}

impl<K: Ord> Extend<K> for SortedList<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for SortedList<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
