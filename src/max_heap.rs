//! Array-backed binary max-heap
//!
//! Keys live in a `Vec` in heap order: the key at slot `i` is never larger than
//! the key at its parent slot `(i - 1) / 2`, so slot 0 holds the maximum.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `insert`        | O(log n)   |
//! | `maximum`       | O(1)       |
//! | `extract_max`   | O(log n)   |
//! | `increment_key` | O(log n)   |
//! | `get_value`     | O(1)       |
//!
//! # Index stability
//!
//! Indices are array slots. `extract_max` moves the last slot to the root and
//! sifts it down, and `increment_key` sifts the raised key up, so a slot
//! index stops referring to the same key after any mutation.
//!
//! # Example
//!
//! ```rust
//! use priority_containers::PriorityContainer;
//! use priority_containers::max_heap::MaxHeap;
//!
//! let mut heap: MaxHeap<i32> = [5, 3, 9, 1].into_iter().collect();
//! assert_eq!(heap.extract_max(), Ok(9));
//!
//! let slot = heap.iter().position(|&k| k == 1).unwrap();
//! heap.increment_key(slot, 20).unwrap();
//! assert_eq!(heap.maximum(), Ok(&20));
//! ```

use crate::traits::{check_increase, check_index, empty, ContainerError, PriorityContainer};

/// A binary max-heap over a dense array
#[derive(Debug, Clone)]
pub struct MaxHeap<K: Ord> {
    /// Keys in heap order
    data: Vec<K>,
}

impl<K: Ord> PriorityContainer<K> for MaxHeap<K> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    // Appends the real key and sifts it up. Equivalent to appending a minimal
    // placeholder and raising it, without needing a minimum value for `K`.
    fn insert(&mut self, key: K) {
        self.data.push(key);
        self.sift_up(self.data.len() - 1);
    }

    fn maximum(&self) -> Result<&K, ContainerError> {
        self.data.first().ok_or_else(empty)
    }

    fn extract_max(&mut self) -> Result<K, ContainerError> {
        if self.data.is_empty() {
            return Err(empty());
        }

        let max = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(max)
    }

    fn increment_key(&mut self, index: usize, new_key: K) -> Result<(), ContainerError> {
        check_index(index, self.data.len())?;
        check_increase(index, &self.data[index], &new_key)?;

        self.data[index] = new_key;
        self.sift_up(index);
        Ok(())
    }

    fn get_value(&self, index: usize) -> Result<&K, ContainerError> {
        check_index(index, self.data.len())?;
        Ok(&self.data[index])
    }
}

impl<K: Ord> MaxHeap<K> {
    /// Returns the keys in slot order
    pub fn as_slice(&self) -> &[K] {
        &self.data
    }

    /// Iterates over the keys in slot order (not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.data.iter()
    }

    /// Removes every key
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns true if every non-root slot is no larger than its parent
    pub fn is_valid_heap(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[i] <= self.data[(i - 1) / 2])
    }

    /// Move key at index up while its parent is smaller
    fn sift_up(&mut self, mut index: usize) {
        let mut moves = 0usize;
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[parent] < self.data[index] {
                self.data.swap(index, parent);
                index = parent;
                moves += 1;
            } else {
                break;
            }
        }
        log::trace!("sift_up settled at slot {} after {} swaps", index, moves);
    }

    /// Move key at index down while a child is larger
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < len && self.data[left] > self.data[largest] {
                largest = left;
            }
            if right < len && self.data[right] > self.data[largest] {
                largest = right;
            }

            if largest != index {
                self.data.swap(index, largest);
                index = largest;
            } else {
                break;
            }
        }
        log::trace!("sift_down settled at slot {}", index);
    }
}

impl<K: Ord> Default for MaxHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Extend<K> for MaxHeap<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for MaxHeap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
