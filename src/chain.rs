//! Owning singly-linked chain shared by the list containers
//!
//! Every node exclusively owns its successor through `Option<Box<Node>>`, and
//! the chain owns the head link. Positions are found by walking from the head
//! on every call; nothing caches a node address.

use std::fmt;

use crate::traits::{out_of_range, ContainerError};

type Link<K> = Option<Box<Node<K>>>;

struct Node<K> {
    key: K,
    next: Link<K>,
}

/// A singly-linked chain of keys with a tracked length
pub(crate) struct Chain<K> {
    head: Link<K>,
    len: usize,
}

impl<K> Chain<K> {
    pub(crate) fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn front(&self) -> Option<&K> {
        self.head.as_ref().map(|node| &node.key)
    }

    pub(crate) fn push_front(&mut self, key: K) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { key, next }));
        self.len += 1;
    }

    pub(crate) fn pop_front(&mut self) -> Option<K> {
        self.head.take().map(|node| {
            let Node { key, next } = *node;
            self.head = next;
            self.len -= 1;
            key
        })
    }

    /// Returns the link that holds position `index` (the tail link when
    /// `index == len`).
    fn link_at_mut(&mut self, index: usize) -> &mut Link<K> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => break,
            }
        }
        cursor
    }

    /// Splices `key` in so that it becomes position `index`.
    pub(crate) fn insert_at(&mut self, index: usize, key: K) {
        debug_assert!(index <= self.len);
        let link = self.link_at_mut(index);
        let next = link.take();
        *link = Some(Box::new(Node { key, next }));
        self.len += 1;
    }

    /// Unlinks the node at `index` and returns its key.
    ///
    /// The walk stops at the tail, so an index past the end finds an empty
    /// link and nothing is unlinked.
    pub(crate) fn remove_at(&mut self, index: usize) -> Result<K, ContainerError> {
        let len = self.len;
        let link = self.link_at_mut(index);
        let node = link.take().ok_or_else(|| out_of_range(index, len))?;
        let Node { key, next } = *node;
        *link = next;
        self.len -= 1;
        Ok(key)
    }

    pub(crate) fn get(&self, index: usize) -> Result<&K, ContainerError> {
        self.iter()
            .nth(index)
            .ok_or_else(|| out_of_range(index, self.len))
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Result<&mut K, ContainerError> {
        let len = self.len;
        self.link_at_mut(index)
            .as_mut()
            .map(|node| &mut node.key)
            .ok_or_else(|| out_of_range(index, len))
    }

    pub(crate) fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    pub(crate) fn iter(&self) -> ListIter<'_, K> {
        ListIter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

// Dropping a long chain recursively through `Box` would use one stack frame
// per node.
impl<K> Drop for Chain<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: Clone> Clone for Chain<K> {
    fn clone(&self) -> Self {
        let keys: Vec<K> = self.iter().cloned().collect();
        let mut chain = Self::new();
        for key in keys.into_iter().rev() {
            chain.push_front(key);
        }
        chain
    }
}

impl<K: fmt::Debug> fmt::Debug for Chain<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over a list's keys in traversal order, head first
pub struct ListIter<'a, K> {
    next: Option<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iterator for ListIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.key
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for ListIter<'_, K> {}
