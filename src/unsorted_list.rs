//! Unsorted singly-linked list
//!
//! New keys are pushed at the head and no order is kept, so finding the
//! maximum means scanning the whole chain.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `insert`        | O(1)       |
//! | `maximum`       | O(n)       |
//! | `extract_max`   | O(n)       |
//! | `increment_key` | O(n)       |
//! | `get_value`     | O(n)       |
//!
//! When several nodes tie for the maximum, `extract_max` removes the one
//! closest to the head.

use std::fmt;

use crate::chain::{Chain, ListIter};
use crate::traits::{check_increase, empty, ContainerError, PriorityContainer};

/// A priority container over an unordered chain of nodes
#[derive(Clone)]
pub struct UnsortedList<K: Ord> {
    chain: Chain<K>,
}

impl<K: Ord> UnsortedList<K> {
    /// Iterates over the keys from head to tail
    pub fn iter(&self) -> ListIter<'_, K> {
        self.chain.iter()
    }

    /// Removes every key
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Position and key of the first maximal node in traversal order
    fn max_entry(&self) -> Option<(usize, &K)> {
        let mut best: Option<(usize, &K)> = None;
        for (index, key) in self.chain.iter().enumerate() {
            let better = match best {
                Some((_, current)) => key > current,
                None => true,
            };
            if better {
                best = Some((index, key));
            }
        }
        best
    }
}

impl<K: Ord> PriorityContainer<K> for UnsortedList<K> {
    fn new() -> Self {
        Self { chain: Chain::new() }
    }

    fn len(&self) -> usize {
        self.chain.len()
    }

    fn insert(&mut self, key: K) {
        self.chain.push_front(key);
    }

    fn maximum(&self) -> Result<&K, ContainerError> {
        self.max_entry().map(|(_, key)| key).ok_or_else(empty)
    }

    fn extract_max(&mut self) -> Result<K, ContainerError> {
        let (index, _) = self.max_entry().ok_or_else(empty)?;
        self.chain.remove_at(index)
    }

    fn increment_key(&mut self, index: usize, new_key: K) -> Result<(), ContainerError> {
        let slot = self.chain.get_mut(index)?;
        check_increase(index, slot, &new_key)?;
        *slot = new_key;
        Ok(())
    }

    fn get_value(&self, index: usize) -> Result<&K, ContainerError> {
        self.chain.get(index)
    }
}

impl<K: Ord> Default for UnsortedList<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + fmt::Debug> fmt::Debug for UnsortedList<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnsortedList")
            .field("chain", &self.chain)
            .finish()
    }
}

impl<K: Ord> Extend<K> for UnsortedList<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for UnsortedList<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
