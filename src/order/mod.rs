//! The access-ordering substrate.
//!
//! Both eviction policies are built on one structure:
//! - [`OrderedMap`] - a key/value map with an explicit, mutable traversal
//!   order and O(1) move-to-end / pop-from-end operations
//! - [`End`] - names the two ends of that order (oldest, newest)

mod ordered_map;

pub use ordered_map::{End, Keys, OrderedMap};
