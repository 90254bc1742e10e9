//! Singly-linked list that owns its nodes.
//!
//! Every node is boxed and exclusively owns its successor. The list holds the
//! head link and a cached length; there is no tail pointer, so operations
//! that touch the back of the list walk the whole chain.
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `len`, `is_empty`, `front`, `push_front`, `pop_front` | O(1) |
//! | `last`, `push_back`, `pop_back` | O(n), full traversal |
//! | `get`, `insert_at`, `remove_at` | O(i), walks to the position |
//! | `contains`, `index_of`, `position` | O(n) scan |
//! | `clear`, drop | O(n), iterative release |
//!
//! # Failure Modes
//!
//! Emptiness and position checks run before any node is allocated or
//! unlinked, so a failed call leaves the list exactly as it was.
//!
//! - [`NoSuchElement`]: `front`, `last`, `pop_front`, `pop_back` on an empty
//!   list.
//! - [`IndexOutOfBounds`]: `get` / `remove_at` with `index >= len`.
//! - [`InsertError`]: `insert_at` with `index > len`. Hands the value back.
//!
//! [`index_of`](SList::index_of) is a query, not a precondition: it reports
//! absence with the [`NOT_FOUND`] sentinel instead of an error.
//!
//! # Example
//!
//! ```
//! use nexus_slist::SList;
//!
//! let mut list = SList::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_front(0);
//! assert_eq!(list.to_string(), "[0, 1, 2]");
//!
//! list.insert_at(5, 1).unwrap();
//! assert_eq!(list.to_string(), "[0, 5, 1, 2]");
//!
//! assert_eq!(list.remove_at(2), Ok(1));
//! assert_eq!(list.index_of(&2), 2);
//! assert_eq!(list.pop_back(), Ok(2));
//! assert_eq!(list.to_string(), "[0, 5]");
//! ```

use core::fmt;

use log::{debug, trace};

use crate::error::{IndexOutOfBounds, InsertError, NoSuchElement};
use crate::iter::{Iter, IterMut};
use crate::node::{Link, Node};

/// Returned by [`SList::index_of`] when no element matches.
pub const NOT_FOUND: isize = -1;

/// A singly-linked list with positional access.
///
/// Positions are 0-based offsets from the head. `len()` is cached and always
/// equals the number of nodes reachable from the head.
///
/// # Example
///
/// ```
/// use nexus_slist::{IndexOutOfBounds, SList};
///
/// let list: SList<&str> = ["a", "b", "c"].into_iter().collect();
/// assert_eq!(list.get(1), Ok(&"b"));
/// assert_eq!(list.get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
/// ```
pub struct SList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for SList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SList<T> {
    /// Creates an empty list. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every element and resets the list to empty.
    ///
    /// Calling this on an empty list is a no-op.
    pub fn clear(&mut self) {
        let released = release(self.head.take());
        trace!("clear: released {released} nodes");
        self.len = 0;
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElement`] if the list is empty.
    #[inline]
    pub fn front(&self) -> Result<&T, NoSuchElement> {
        match self.head.as_deref() {
            Some(node) => Ok(&node.value),
            None => Err(no_such_element("front")),
        }
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElement`] if the list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, NoSuchElement> {
        match self.head.as_deref_mut() {
            Some(node) => Ok(&mut node.value),
            None => Err(no_such_element("front_mut")),
        }
    }

    /// Returns a reference to the last element. O(n).
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElement`] if the list is empty.
    pub fn last(&self) -> Result<&T, NoSuchElement> {
        let Some(mut node) = self.head.as_deref() else {
            return Err(no_such_element("last"));
        };
        while let Some(next) = node.next.as_deref() {
            node = next;
        }
        Ok(&node.value)
    }

    /// Returns a mutable reference to the last element. O(n).
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElement`] if the list is empty.
    pub fn last_mut(&mut self) -> Result<&mut T, NoSuchElement> {
        if self.is_empty() {
            return Err(no_such_element("last_mut"));
        }
        let index = self.len - 1;
        Ok(&mut self.node_mut(index).value)
    }

    /// Returns a reference to the element at `index`. O(index).
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        if index >= self.len {
            return Err(out_of_bounds("get", index, self.len));
        }
        Ok(&self.node(index).value)
    }

    /// Returns a mutable reference to the element at `index`. O(index).
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        if index >= self.len {
            return Err(out_of_bounds("get_mut", index, self.len));
        }
        Ok(&mut self.node_mut(index).value)
    }

    // ========================================================================
    // Insert
    // ========================================================================

    /// Inserts a value at the head. O(1).
    #[inline]
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Node::with_next(value, next));
        self.len += 1;
    }

    /// Appends a value after the last element. O(n).
    pub fn push_back(&mut self, value: T) {
        let len = self.len;
        *self.link_at(len) = Some(Node::new(value));
        self.len += 1;
    }

    /// Inserts a value so that it ends up at position `index`.
    ///
    /// The element previously at `index` and everything after it shift one
    /// position towards the tail. `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError`] carrying `value` back if `index > len`.
    pub fn insert_at(&mut self, value: T, index: usize) -> Result<(), InsertError<T>> {
        if index > self.len {
            debug!(
                "insert_at: index {index} out of bounds for length {}",
                self.len
            );
            return Err(InsertError {
                value,
                index,
                len: self.len,
            });
        }

        if index == 0 {
            self.push_front(value);
            return Ok(());
        }

        let prev = self.node_mut(index - 1);
        let next = prev.next.take();
        prev.next = Some(Node::with_next(value, next));
        self.len += 1;
        Ok(())
    }

    // ========================================================================
    // Remove
    // ========================================================================

    /// Removes and returns the first element. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElement`] if the list is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T, NoSuchElement> {
        self.unlink_front().ok_or_else(|| no_such_element("pop_front"))
    }

    /// Removes and returns the last element. O(n).
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElement`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<T, NoSuchElement> {
        self.unlink_back().ok_or_else(|| no_such_element("pop_back"))
    }

    /// Removes and returns the element at `index`.
    ///
    /// Elements after `index` shift one position towards the head.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let len = self.len;
        if index >= len {
            return Err(out_of_bounds("remove_at", index, len));
        }

        let value = if index == 0 {
            self.unlink_front()
        } else if index == len - 1 {
            self.unlink_back()
        } else {
            self.unlink_after(index - 1)
        };
        value.ok_or_else(|| out_of_bounds("remove_at", index, len))
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Returns `true` if some element equals `value`. O(n).
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Returns the position of the first element equal to `value`.
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Returns the position of the first element equal to `value`, or
    /// [`NOT_FOUND`] if there is none.
    ///
    /// Unlike [`get`](Self::get), absence is not an error.
    ///
    /// ```
    /// use nexus_slist::{NOT_FOUND, SList};
    ///
    /// let list: SList<u64> = [4, 2, 4].into_iter().collect();
    /// assert_eq!(list.index_of(&4), 0);
    /// assert_eq!(list.index_of(&9), NOT_FOUND);
    /// ```
    pub fn index_of(&self, value: &T) -> isize
    where
        T: PartialEq,
    {
        self.position(value).map_or(NOT_FOUND, |index| index as isize)
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to elements, head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.head, self.len)
    }

    /// Returns an iterator over mutable references to elements, head to tail.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.head, self.len)
    }

    // ========================================================================
    // Internal traversal
    // ========================================================================

    /// Walks to the node at `index`. Caller guarantees `index < len`.
    fn node(&self, index: usize) -> &Node<T> {
        debug_assert!(index < self.len, "node index past end");
        let mut node = self.head.as_deref();
        for _ in 0..index {
            node = node.and_then(|n| n.next.as_deref());
        }
        match node {
            Some(node) => node,
            None => unreachable!("chain shorter than len"),
        }
    }

    /// Walks to the node at `index`. Caller guarantees `index < len`.
    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        debug_assert!(index < self.len, "node index past end");
        let mut node = self.head.as_deref_mut();
        for _ in 0..index {
            node = node.and_then(|n| n.next.as_deref_mut());
        }
        match node {
            Some(node) => node,
            None => unreachable!("chain shorter than len"),
        }
    }

    /// Returns the link that holds position `index`. Caller guarantees
    /// `index <= len`; `index == len` yields the terminal (empty) link.
    fn link_at(&mut self, index: usize) -> &mut Link<T> {
        debug_assert!(index <= self.len, "link index past end");
        let mut link = &mut self.head;
        for _ in 0..index {
            link = match link {
                Some(node) => &mut node.next,
                None => unreachable!("chain shorter than len"),
            };
        }
        link
    }

    fn unlink_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    fn unlink_back(&mut self) -> Option<T> {
        match self.len {
            0 => None,
            1 => self.unlink_front(),
            len => self.unlink_after(len - 2),
        }
    }

    /// Splices out the successor of the node at `index`.
    fn unlink_after(&mut self, index: usize) -> Option<T> {
        let prev = self.node_mut(index);
        let node = prev.next.take()?;
        let Node { value, next } = *node;
        prev.next = next;
        self.len -= 1;
        Some(value)
    }
}

/// Drops a chain one node at a time so long lists don't recurse through
/// `Box` destructors. Returns the number of nodes released.
fn release<T>(mut link: Link<T>) -> usize {
    let mut released = 0;
    while let Some(mut node) = link {
        link = node.next.take();
        released += 1;
    }
    released
}

#[cold]
fn no_such_element(op: &'static str) -> NoSuchElement {
    debug!("{op}: list is empty");
    NoSuchElement
}

#[cold]
fn out_of_bounds(op: &'static str, index: usize, len: usize) -> IndexOutOfBounds {
    debug!("{op}: index {index} out of bounds for length {len}");
    IndexOutOfBounds { index, len }
}

impl<T> Drop for SList<T> {
    fn drop(&mut self) {
        release(self.head.take());
    }
}

// =============================================================================
// Trait impls
// =============================================================================

impl<T: Clone> Clone for SList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SList<T> {}

impl<T: fmt::Debug> fmt::Debug for SList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders `[a, b, c]`, or `[]` when empty.
impl<T: fmt::Display> fmt::Display for SList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        f.write_str("]")
    }
}

impl<T> Extend<T> for SList<T> {
    /// Appends in iteration order. Walks to the tail once.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let len = self.len;
        let mut link = self.link_at(len);
        let mut added = 0;
        for value in iter {
            link = &mut link.insert(Node::new(value)).next;
            added += 1;
        }
        self.len += added;
    }
}

impl<T> FromIterator<T> for SList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a SList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn values(list: &SList<u64>) -> Vec<u64> {
        list.iter().copied().collect()
    }

    /// Counts drops so tests can check every node is released exactly once.
    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn new_list_is_empty() {
        let list: SList<u64> = SList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), Err(NoSuchElement));
        assert_eq!(list.last(), Err(NoSuchElement));
        assert_eq!(list.to_string(), "[]");
    }

    #[test]
    fn push_front_prepends() {
        let mut list = SList::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);

        assert_eq!(list.len(), 3);
        assert_eq!(values(&list), vec![3, 2, 1]);
        assert_eq!(list.front(), Ok(&3));
        assert_eq!(list.last(), Ok(&1));
    }

    #[test]
    fn push_back_appends() {
        let mut list = SList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        assert_eq!(list.len(), 3);
        assert_eq!(values(&list), vec![1, 2, 3]);
        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.last(), Ok(&3));
    }

    #[test]
    fn push_back_on_empty_becomes_head() {
        let mut list = SList::new();
        list.push_back(7);
        assert_eq!(list.front(), Ok(&7));
        assert_eq!(list.last(), Ok(&7));
    }

    #[test]
    fn get_each_position() {
        let list: SList<u64> = (10..15).collect();
        for i in 0..5 {
            assert_eq!(list.get(i), Ok(&(10 + i as u64)));
        }
        assert_eq!(list.get(5), Err(IndexOutOfBounds { index: 5, len: 5 }));
    }

    #[test]
    fn get_on_empty() {
        let list: SList<u64> = SList::new();
        assert_eq!(list.get(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    }

    #[test]
    fn mutable_accessors() {
        let mut list: SList<u64> = (1..=3).collect();

        *list.front_mut().unwrap() = 10;
        *list.get_mut(1).unwrap() = 20;
        *list.last_mut().unwrap() = 30;

        assert_eq!(values(&list), vec![10, 20, 30]);
        assert_eq!(list.get_mut(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    }

    #[test]
    fn mutable_accessors_on_empty() {
        let mut list: SList<u64> = SList::new();
        assert_eq!(list.front_mut(), Err(NoSuchElement));
        assert_eq!(list.last_mut(), Err(NoSuchElement));
    }

    #[test]
    fn insert_at_head() {
        let mut list: SList<u64> = (1..=2).collect();
        list.insert_at(0, 0).unwrap();
        assert_eq!(values(&list), vec![0, 1, 2]);
    }

    #[test]
    fn insert_at_middle() {
        let mut list: SList<u64> = [1, 3].into_iter().collect();
        list.insert_at(2, 1).unwrap();
        assert_eq!(values(&list), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut list: SList<u64> = (1..=2).collect();
        list.insert_at(3, 2).unwrap();
        assert_eq!(values(&list), vec![1, 2, 3]);
        assert_eq!(list.last(), Ok(&3));
    }

    #[test]
    fn insert_at_into_empty() {
        let mut list = SList::new();
        list.insert_at(42, 0).unwrap();
        assert_eq!(values(&list), vec![42]);
    }

    #[test]
    fn insert_at_past_len_returns_value() {
        let mut list: SList<u64> = (1..=2).collect();
        let err = list.insert_at(9, 3).unwrap_err();

        assert_eq!(err.bound(), IndexOutOfBounds { index: 3, len: 2 });
        assert_eq!(err.into_inner(), 9);
        assert_eq!(values(&list), vec![1, 2]);
    }

    #[test]
    fn pop_front_drains_in_order() {
        let mut list: SList<u64> = (1..=3).collect();
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_front(), Ok(3));
        assert_eq!(list.pop_front(), Err(NoSuchElement));
        assert!(list.is_empty());
    }

    #[test]
    fn pop_back_drains_in_reverse() {
        let mut list: SList<u64> = (1..=3).collect();
        assert_eq!(list.pop_back(), Ok(3));
        assert_eq!(list.last(), Ok(&2));
        assert_eq!(list.pop_back(), Ok(2));
        assert_eq!(list.pop_back(), Ok(1));
        assert_eq!(list.pop_back(), Err(NoSuchElement));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn remove_at_head_middle_tail() {
        let mut list: SList<u64> = (0..5).collect();

        assert_eq!(list.remove_at(0), Ok(0));
        assert_eq!(values(&list), vec![1, 2, 3, 4]);

        assert_eq!(list.remove_at(3), Ok(4));
        assert_eq!(values(&list), vec![1, 2, 3]);

        assert_eq!(list.remove_at(1), Ok(2));
        assert_eq!(values(&list), vec![1, 3]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_at_out_of_bounds_leaves_list() {
        let mut list: SList<u64> = (0..3).collect();
        assert_eq!(
            list.remove_at(3),
            Err(IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(values(&list), vec![0, 1, 2]);
    }

    #[test]
    fn remove_at_single_element() {
        let mut list = SList::new();
        list.push_back(5u64);
        assert_eq!(list.remove_at(0), Ok(5));
        assert!(list.is_empty());
        assert_eq!(list.front(), Err(NoSuchElement));
    }

    #[test]
    fn contains_and_index_of() {
        let list: SList<u64> = [3, 1, 4, 1, 5].into_iter().collect();

        assert!(list.contains(&4));
        assert!(!list.contains(&9));

        assert_eq!(list.index_of(&1), 1);
        assert_eq!(list.index_of(&5), 4);
        assert_eq!(list.index_of(&9), NOT_FOUND);
        assert_eq!(list.position(&3), Some(0));
        assert_eq!(list.position(&9), None);
    }

    #[test]
    fn index_of_on_empty() {
        let list: SList<u64> = SList::new();
        assert_eq!(list.index_of(&0), -1);
        assert!(!list.contains(&0));
    }

    #[test]
    fn clear_resets() {
        let mut list: SList<u64> = (0..10).collect();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "[]");

        list.clear();
        assert_eq!(list.len(), 0);

        list.push_back(1);
        assert_eq!(values(&list), vec![1]);
    }

    #[test]
    fn clear_drops_every_node_once() {
        let drops = Rc::new(Cell::new(0));
        let mut list = SList::new();
        for _ in 0..8 {
            list.push_back(DropCounter(drops.clone()));
        }

        list.clear();
        assert_eq!(drops.get(), 8);

        drop(list);
        assert_eq!(drops.get(), 8);
    }

    #[test]
    fn drop_releases_every_node_once() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut list = SList::new();
            for _ in 0..5 {
                list.push_front(DropCounter(drops.clone()));
            }
            let removed = list.remove_at(2).ok();
            assert!(removed.is_some());
            drop(removed);
            assert_eq!(drops.get(), 1);
        }
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn long_list_drops_without_overflow() {
        let mut list = SList::new();
        for i in 0..200_000u64 {
            list.push_front(i);
        }
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[test]
    fn display_format() {
        let mut list = SList::new();
        assert_eq!(list.to_string(), "[]");
        list.push_back("a");
        assert_eq!(list.to_string(), "[a]");
        list.push_back("b");
        list.push_back("c");
        assert_eq!(list.to_string(), "[a, b, c]");
    }

    #[test]
    fn debug_format() {
        let list: SList<&str> = ["x", "y"].into_iter().collect();
        assert_eq!(format!("{list:?}"), r#"["x", "y"]"#);
    }

    #[test]
    fn extend_appends_after_existing() {
        let mut list: SList<u64> = (1..=2).collect();
        list.extend([3, 4, 5]);
        assert_eq!(values(&list), vec![1, 2, 3, 4, 5]);
        assert_eq!(list.len(), 5);

        list.extend(core::iter::empty());
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn clone_is_deep() {
        let mut a: SList<u64> = (1..=3).collect();
        let b = a.clone();
        *a.front_mut().unwrap() = 100;

        assert_eq!(values(&b), vec![1, 2, 3]);
        assert_ne!(a, b);
    }

    #[test]
    fn equality_is_elementwise() {
        let a: SList<u64> = (1..=3).collect();
        let b: SList<u64> = (1..=3).collect();
        let c: SList<u64> = (1..=2).collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(SList::<u64>::new(), SList::default());
    }

    #[test]
    fn scenario_from_mixed_operations() {
        let mut list = SList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_front(0);
        assert_eq!(list.to_string(), "[0, 1, 2]");
        assert_eq!(list.len(), 3);

        list.insert_at(5, 1).unwrap();
        assert_eq!(list.to_string(), "[0, 5, 1, 2]");

        assert_eq!(list.remove_at(2), Ok(1));
        assert_eq!(list.to_string(), "[0, 5, 2]");

        assert_eq!(list.index_of(&2), 2);

        assert_eq!(list.pop_back(), Ok(2));
        assert_eq!(list.to_string(), "[0, 5]");
    }
}
