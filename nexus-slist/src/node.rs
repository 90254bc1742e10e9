//! Chain link owned by [`SList`](crate::SList).

/// Owning link to the next node, `None` at the end of the chain.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single element and exclusive ownership of its successor.
///
/// Never handed out by the list; users only see `&T` / `&mut T`.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Creates a terminal node.
    #[inline]
    pub(crate) fn new(value: T) -> Box<Self> {
        Box::new(Self { value, next: None })
    }

    /// Creates a node that takes ownership of `next`. Used when splicing.
    #[inline]
    pub(crate) fn with_next(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }
}
