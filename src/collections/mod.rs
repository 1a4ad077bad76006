//! Mutable collections with positional enumeration.
//!
//! - [`EnumerableSet`]: unique values with O(1) `add`, `remove`, `contains`
//!   and `get`, plus enumeration of every member
//!
//! # Ordering
//!
//! Values are stored densely in the order they were added until the first
//! removal. Removal moves the last value into the vacated slot
//! (swap-and-pop), so after any removal the enumeration order is only
//! guaranteed to hold the current members, not their insertion order.
//!
//! # Examples
//!
//! ```rust
//! use enumerable_set::collections::EnumerableSet;
//!
//! let mut set = EnumerableSet::new();
//! assert!(set.add("alice"));
//! assert!(set.add("bob"));
//! assert!(set.add("carol"));
//! assert!(!set.add("alice")); // already a member
//!
//! assert!(set.remove("alice"));
//! assert_eq!(set.len(), 2);
//!
//! // "carol" was last, so it now fills the slot "alice" left behind
//! assert_eq!(set.get(0), Ok(&"carol"));
//! assert_eq!(set.get(1), Ok(&"bob"));
//! assert!(set.get(2).is_err());
//! ```

// =============================================================================
// Hasher Type Alias
// =============================================================================

/// Hasher used by the index map when none is given explicitly.
///
/// When the `fxhash` feature is enabled, this is `rustc_hash::FxBuildHasher`,
/// which is fast but not resistant to collision attacks.
///
/// When only the `ahash` feature is enabled, this is `ahash::RandomState`.
///
/// Otherwise (default), this is `std::collections::hash_map::RandomState`.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

mod enumerable_set;
mod error;

pub use enumerable_set::EnumerableSet;
pub use enumerable_set::EnumerableSetIntoIterator;
pub use enumerable_set::EnumerableSetIterator;
pub use error::OutOfBoundsError;
