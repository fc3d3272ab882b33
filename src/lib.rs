//! # ordered-index
//!
//! A self-balancing ordered key-value index for Rust.
//!
//! ## Overview
//!
//! This crate provides [`OrderedIndex`](crate::index::OrderedIndex), an
//! ordered map built on an AVL tree. It keeps entries in ascending key
//! order at all times and rebalances itself after every insertion, so
//! lookups and inserts stay logarithmic no matter how skewed the input is.
//!
//! - **Insert-or-update**: inserting an existing key overwrites its value
//!   in place; keys are always unique.
//! - **Point lookup**: absence is an ordinary `None`, never an error.
//! - **Sorted enumeration**: iteration yields entries in ascending key
//!   order, independent of insertion order.
//!
//! There is intentionally no removal operation: the index models
//! append-only collections (registries, order books, catalogs) whose
//! entries are only ever added or updated.
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/Deserialize support for [`OrderedIndex`](crate::index::OrderedIndex).
//!   Serialization produces a plain map in ascending key order;
//!   deserialization rebuilds the index by replaying insertions.
//!
//! ## Example
//!
//! ```rust
//! use ordered_index::index::OrderedIndex;
//!
//! let mut index = OrderedIndex::new();
//! index.insert(30, "thirty");
//! index.insert(10, "ten");
//! index.insert(20, "twenty");
//!
//! assert_eq!(index.get(&20), Some(&"twenty"));
//!
//! // Enumeration is always in ascending key order
//! let keys: Vec<&i32> = index.keys().collect();
//! assert_eq!(keys, vec![&10, &20, &30]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use ordered_index::prelude::*;
/// ```
pub mod prelude {
    pub use crate::index::*;
}

pub mod index;
