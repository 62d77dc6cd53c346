//! Runtime selection of a container variant
//!
//! Comparison harnesses iterate over every variant and need to build each one
//! behind the shared trait. [`ContainerKind`] names the variants and builds a
//! boxed [`PriorityContainer`].
//!
//! ```rust
//! use priority_containers::ContainerKind;
//!
//! for kind in ContainerKind::ALL {
//!     let mut container = kind.build::<u32>();
//!     container.insert(4);
//!     container.insert(11);
//!     assert_eq!(container.extract_max(), Ok(11), "{}", kind);
//! }
//!
//! assert_eq!("sorted".parse::<ContainerKind>(), Ok(ContainerKind::SortedList));
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::max_heap::MaxHeap;
use crate::sorted_list::SortedList;
use crate::traits::PriorityContainer;
use crate::unsorted_list::UnsortedList;

/// One of the three container variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// [`MaxHeap`]
    MaxHeap,
    /// [`UnsortedList`]
    UnsortedList,
    /// [`SortedList`]
    SortedList,
}

impl ContainerKind {
    /// Every variant, in reporting order
    pub const ALL: [ContainerKind; 3] = [
        ContainerKind::MaxHeap,
        ContainerKind::UnsortedList,
        ContainerKind::SortedList,
    ];

    /// Human-readable name used in reports
    pub fn name(self) -> &'static str {
        match self {
            ContainerKind::MaxHeap => "Max Heap",
            ContainerKind::UnsortedList => "Unsorted List",
            ContainerKind::SortedList => "Sorted List",
        }
    }

    /// Short identifier, suitable for benchmark ids and command lines
    pub fn slug(self) -> &'static str {
        match self {
            ContainerKind::MaxHeap => "heap",
            ContainerKind::UnsortedList => "unsorted",
            ContainerKind::SortedList => "sorted",
        }
    }

    /// Creates an empty container of this variant
    pub fn build<K: Ord + 'static>(self) -> Box<dyn PriorityContainer<K>> {
        match self {
            ContainerKind::MaxHeap => Box::new(MaxHeap::<K>::new()),
            ContainerKind::UnsortedList => Box::new(UnsortedList::<K>::new()),
            ContainerKind::SortedList => Box::new(SortedList::<K>::new()),
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no container variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown container kind `{0}`")]
pub struct UnknownKind(pub String);

impl FromStr for ContainerKind {
    type Err = UnknownKind;

    /// Accepts either the slug or the display name, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ContainerKind::ALL
            .into_iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(s) || kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ContainerError;

    #[test]
    fn test_parse_names_and_slugs() {
        for kind in ContainerKind::ALL {
            assert_eq!(kind.slug().parse::<ContainerKind>(), Ok(kind));
            assert_eq!(kind.name().parse::<ContainerKind>(), Ok(kind));
            assert_eq!(kind.name().to_uppercase().parse::<ContainerKind>(), Ok(kind));
        }
        assert_eq!(
            "fibonacci".parse::<ContainerKind>(),
            Err(UnknownKind("fibonacci".to_string()))
        );
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(ContainerKind::UnsortedList.to_string(), "Unsorted List");
    }

    #[test]
    fn test_boxed_containers_share_contract() {
        for kind in ContainerKind::ALL {
            let mut container = kind.build::<i64>();
            assert_eq!(container.maximum(), Err(ContainerError::EmptyContainer));

            for key in [5, 3, 9, 1] {
                container.insert(key);
            }
            assert_eq!(container.len(), 4, "{}", kind);
            assert_eq!(container.maximum(), Ok(&9), "{}", kind);
            assert_eq!(container.extract_max(), Ok(9), "{}", kind);
            assert_eq!(container.maximum(), Ok(&5), "{}", kind);
        }
    }
}
