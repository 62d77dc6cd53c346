//! Common trait for the priority containers
//!
//! [`PriorityContainer`] is the single contract shared by
//! [`MaxHeap`](crate::max_heap::MaxHeap),
//! [`UnsortedList`](crate::unsorted_list::UnsortedList) and
//! [`SortedList`](crate::sorted_list::SortedList). Code that compares the
//! three structures (benchmarks, conformance tests) depends only on this trait.
//!
//! # Index semantics
//!
//! `increment_key` and `get_value` address elements by position: slot `i` of
//! the heap array, or the `i`-th node reached by walking a list from its head.
//! A position is NOT a stable identity. Any mutating call (including
//! `increment_key` itself) may move elements, so an index is only meaningful
//! until the next mutation.

use thiserror::Error;

/// Error type for container operations
///
/// A failed call never mutates the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// `maximum` or `extract_max` was called on an empty container
    #[error("container is empty")]
    EmptyContainer,
    /// The index does not address a live element
    #[error("index {index} is out of range for container of length {len}")]
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// The container length at the time of the call
        len: usize,
    },
    /// `increment_key` was asked to lower a key
    #[error("new key is smaller than the current key at index {index}")]
    MonotonicityViolation {
        /// Position of the element whose key would have decreased
        index: usize,
    },
}

/// Checks `index` against `len`, producing the uniform out-of-range error.
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), ContainerError> {
    if index < len {
        Ok(())
    } else {
        Err(out_of_range(index, len))
    }
}

/// The out-of-range error, logged once at the point it is raised.
pub(crate) fn out_of_range(index: usize, len: usize) -> ContainerError {
    log::debug!("rejected index {} (len {})", index, len);
    ContainerError::IndexOutOfRange { index, len }
}

/// Checks that `new_key` does not lower `current`.
pub(crate) fn check_increase<K: Ord>(
    index: usize,
    current: &K,
    new_key: &K,
) -> Result<(), ContainerError> {
    if new_key < current {
        log::debug!("rejected key decrease at index {}", index);
        Err(ContainerError::MonotonicityViolation { index })
    } else {
        Ok(())
    }
}

/// The empty-container error, logged once at the point it is raised.
pub(crate) fn empty() -> ContainerError {
    log::debug!("operation on empty container");
    ContainerError::EmptyContainer
}

/// Max-priority container with increase-key support
///
/// Keys are compared with `Ord`; the largest key is the maximum. Duplicate
/// keys are allowed.
///
/// # Example
///
/// ```rust
/// use priority_containers::{ContainerError, PriorityContainer};
/// use priority_containers::max_heap::MaxHeap;
///
/// let mut heap = MaxHeap::new();
/// heap.insert(5);
/// heap.insert(3);
/// heap.insert(9);
///
/// assert_eq!(heap.maximum(), Ok(&9));
/// assert_eq!(heap.extract_max(), Ok(9));
/// assert_eq!(heap.maximum(), Ok(&5));
/// assert_eq!(
///     heap.increment_key(0, 1),
///     Err(ContainerError::MonotonicityViolation { index: 0 })
/// );
/// ```
pub trait PriorityContainer<K: Ord> {
    /// Creates a new empty container
    fn new() -> Self
    where
        Self: Sized;

    /// Returns the number of live elements
    fn len(&self) -> usize;

    /// Returns true if the container holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a key
    ///
    /// # Time Complexity
    /// - MaxHeap: O(log n)
    /// - UnsortedList: O(1)
    /// - SortedList: O(n)
    fn insert(&mut self, key: K);

    /// Returns the largest key without removing it
    ///
    /// # Errors
    /// `ContainerError::EmptyContainer` if there is nothing to return.
    ///
    /// # Time Complexity
    /// O(1) for MaxHeap and SortedList, O(n) for UnsortedList.
    fn maximum(&self) -> Result<&K, ContainerError>;

    /// Removes and returns the largest key
    ///
    /// When several keys tie for the maximum, exactly one of them is removed.
    ///
    /// # Errors
    /// `ContainerError::EmptyContainer` if there is nothing to remove.
    ///
    /// # Time Complexity
    /// - MaxHeap: O(log n)
    /// - UnsortedList: O(n)
    /// - SortedList: O(1)
    fn extract_max(&mut self) -> Result<K, ContainerError>;

    /// Raises the key at `index` to `new_key`
    ///
    /// Setting a key equal to its current value is allowed. The element may
    /// move as a result, so `index` is stale once this returns.
    ///
    /// # Errors
    /// - `ContainerError::IndexOutOfRange` if `index >= len()`
    /// - `ContainerError::MonotonicityViolation` if `new_key` is smaller than
    ///   the current key
    ///
    /// # Time Complexity
    /// O(log n) for MaxHeap, O(n) for both lists.
    fn increment_key(&mut self, index: usize, new_key: K) -> Result<(), ContainerError>;

    /// Returns the key at `index`
    ///
    /// # Errors
    /// `ContainerError::IndexOutOfRange` if `index >= len()`.
    fn get_value(&self, index: usize) -> Result<&K, ContainerError>;

    /// Extracts every key, largest first
    fn into_sorted_vec(mut self) -> Vec<K>
    where
        Self: Sized,
    {
        let mut out = Vec::with_capacity(self.len());
        while let Ok(key) = self.extract_max() {
            out.push(key);
        }
        out
    }
}
