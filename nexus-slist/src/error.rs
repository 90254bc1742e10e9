// nexus-slist/src/error.rs

//! Error types for list operations.

use core::fmt;

/// The operation needs at least one element but the list is empty.
///
/// Returned by [`front`](crate::SList::front), [`last`](crate::SList::last),
/// [`pop_front`](crate::SList::pop_front) and
/// [`pop_back`](crate::SList::pop_back).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSuchElement;

impl fmt::Display for NoSuchElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "list is empty")
    }
}

impl std::error::Error for NoSuchElement {}

/// A position fell outside the range accepted by the operation.
///
/// Reads and removals accept `index < len`; insertion accepts `index <= len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The rejected position.
    pub index: usize,
    /// Length of the list when the position was rejected.
    pub len: usize,
}

impl fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of bounds for list of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexOutOfBounds {}

/// Error returned by [`insert_at`](crate::SList::insert_at) when the position
/// is past the end of the list.
///
/// Carries the value that could not be inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertError<T> {
    /// The value that was not inserted.
    pub value: T,
    /// The rejected position.
    pub index: usize,
    /// Length of the list when the position was rejected.
    pub len: usize,
}

impl<T> InsertError<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Returns the bounds violation without the value.
    pub fn bound(&self) -> IndexOutOfBounds {
        IndexOutOfBounds {
            index: self.index,
            len: self.len,
        }
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot insert at index {} into list of length {}",
            self.index, self.len
        )
    }
}

impl<T: fmt::Debug> std::error::Error for InsertError<T> {}

impl<T> From<InsertError<T>> for IndexOutOfBounds {
    fn from(err: InsertError<T>) -> Self {
        err.bound()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(NoSuchElement.to_string(), "list is empty");
        assert_eq!(
            IndexOutOfBounds { index: 4, len: 3 }.to_string(),
            "index 4 out of bounds for list of length 3"
        );

        let err = InsertError {
            value: "x",
            index: 5,
            len: 2,
        };
        assert_eq!(err.to_string(), "cannot insert at index 5 into list of length 2");
    }

    #[test]
    fn insert_error_hands_value_back() {
        let err = InsertError {
            value: String::from("kept"),
            index: 3,
            len: 1,
        };
        assert_eq!(err.bound(), IndexOutOfBounds { index: 3, len: 1 });
        assert_eq!(err.into_inner(), "kept");
    }

    #[test]
    fn insert_error_converts_to_bound() {
        let err = InsertError {
            value: 7u64,
            index: 9,
            len: 0,
        };
        let bound: IndexOutOfBounds = err.into();
        assert_eq!(bound, IndexOutOfBounds { index: 9, len: 0 });
    }
}
