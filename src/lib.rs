//! # enumerable-set
//!
//! A set that can be enumerated and indexed as cheaply as it can be queried.
//!
//! ## Overview
//!
//! [`EnumerableSet`](collections::EnumerableSet) stores unique values in a
//! dense `Vec` alongside a hash index from each value to its position. This
//! gives:
//!
//! - **O(1) membership**: `contains`
//! - **O(1) mutation**: `add` and `remove` (swap-and-pop, no shifting)
//! - **O(1) positional access**: `get(index)`
//! - **O(n) enumeration**: `enumerate`, `iter`, `as_slice`
//!
//! Enumeration follows insertion order only until the first removal.
//!
//! ## Feature Flags
//!
//! - `fxhash`: index map hashes with `rustc_hash::FxBuildHasher`
//! - `ahash`: index map hashes with `ahash::RandomState`
//! - `serde`: `Serialize`/`Deserialize` as a sequence
//! - `full`: Enable `serde` and `fxhash`
//!
//! ## Example
//!
//! ```rust
//! use enumerable_set::prelude::*;
//!
//! let mut set = EnumerableSet::new();
//! set.add("alice");
//! set.add("bob");
//!
//! assert!(set.contains("alice"));
//! assert_eq!(set.len(), 2);
//! assert!(matches!(set.get(5), Err(OutOfBoundsError { index: 5, .. })));
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
/// use enumerable_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collections::*;
}

pub mod collections;
