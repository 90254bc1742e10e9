//! Borrowing iterators over [`SList`](crate::SList).
//!
//! Both iterators hold a borrow of the list for their whole lifetime, so the
//! chain cannot be mutated structurally while one is alive.

use core::iter::FusedIterator;

use crate::node::{Link, Node};

/// Iterator over shared references to elements, head to tail.
///
/// Created by [`SList::iter`](crate::SList::iter).
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(head: &'a Link<T>, len: usize) -> Self {
        Self {
            next: head.as_deref(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Iterator over mutable references to elements, head to tail.
///
/// Created by [`SList::iter_mut`](crate::SList::iter_mut).
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    #[inline]
    pub(crate) fn new(head: &'a mut Link<T>, len: usize) -> Self {
        Self {
            next: head.as_deref_mut(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = node.next.as_deref_mut();
        self.remaining -= 1;
        Some(&mut node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
