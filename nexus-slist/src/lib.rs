//! Owning singly-linked list with positional access.
//!
//! [`SList`] is a chain of boxed nodes reachable from a head link, plus a
//! cached length. Each node exclusively owns its successor, so dropping or
//! clearing the list releases every node exactly once.
//!
//! # Quick Start
//!
//! ```
//! use nexus_slist::{NoSuchElement, SList};
//!
//! let mut list: SList<u64> = SList::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_front(0);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(1), Ok(&1));
//! assert_eq!(list.to_string(), "[0, 1, 2]");
//!
//! list.clear();
//! assert_eq!(list.pop_front(), Err(NoSuchElement));
//! ```
//!
//! # Positions
//!
//! Positions are contiguous 0-based offsets from the head. Reads and
//! removals accept `index < len`; [`SList::insert_at`] also accepts
//! `index == len`, which appends.
//!
//! ```
//! use nexus_slist::{IndexOutOfBounds, SList};
//!
//! let mut list: SList<char> = "ac".chars().collect();
//! list.insert_at('b', 1).unwrap();
//! list.insert_at('d', 3).unwrap();
//! assert_eq!(list.to_string(), "[a, b, c, d]");
//!
//! assert!(list.insert_at('z', 9).is_err());
//! assert_eq!(list.remove_at(4), Err(IndexOutOfBounds { index: 4, len: 4 }));
//! ```
//!
//! # Absence vs Failure
//!
//! Accessors that need an element fail with [`NoSuchElement`] or
//! [`IndexOutOfBounds`]. [`SList::index_of`] is a query and returns
//! [`NOT_FOUND`] (`-1`) instead; [`SList::position`] is the `Option` form.
//!
//! # Performance
//!
//! No tail pointer is kept. `last`, `push_back` and `pop_back` walk the
//! chain and are O(n); front operations are O(1).
//!
//! # Logging
//!
//! Rejected calls are reported at `debug` level through the [`log`] facade,
//! and `clear` reports how many nodes it released at `trace` level. The
//! crate never installs a logger.

#![warn(missing_docs)]

pub mod error;
pub mod iter;
pub mod list;

mod node;

pub use error::{IndexOutOfBounds, InsertError, NoSuchElement};
pub use iter::{Iter, IterMut};
pub use list::{NOT_FOUND, SList};
