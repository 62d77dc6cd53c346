//! Priority Containers for Rust
//!
//! Three interchangeable backings for a max-priority queue, each encoding a
//! different complexity trade-off. All of them implement [`PriorityContainer`]
//! so they can be swapped behind one interface and compared head to head.
//!
//! # Variants
//!
//! | Operation       | [`MaxHeap`] | [`UnsortedList`] | [`SortedList`] |
//! |-----------------|-------------|------------------|----------------|
//! | `insert`        | O(log n)    | O(1)             | O(n)           |
//! | `maximum`       | O(1)        | O(n)             | O(1)           |
//! | `extract_max`   | O(log n)    | O(n)             | O(1)           |
//! | `increment_key` | O(log n)    | O(n)             | O(n)           |
//! | `get_value`     | O(1)        | O(n)             | O(n)           |
//!
//! Keys only ever increase through `increment_key`; lowering a key is
//! rejected with [`ContainerError::MonotonicityViolation`].
//!
//! # Example
//!
//! ```rust
//! use priority_containers::PriorityContainer;
//! use priority_containers::unsorted_list::UnsortedList;
//!
//! let mut list = UnsortedList::new();
//! list.insert(5);
//! list.insert(3);
//! list.insert(9);
//! list.insert(1);
//!
//! assert_eq!(list.maximum(), Ok(&9));
//! assert_eq!(list.extract_max(), Ok(9));
//! assert_eq!(list.maximum(), Ok(&5));
//! ```

mod chain;
pub mod kind;
pub mod max_heap;
pub mod sorted_list;
pub mod traits;
pub mod unsorted_list;

// Re-exports for convenience
pub use chain::ListIter;
pub use kind::{ContainerKind, UnknownKind};
pub use max_heap::MaxHeap;
pub use sorted_list::SortedList;
pub use traits::{ContainerError, PriorityContainer};
pub use unsorted_list::UnsortedList;
