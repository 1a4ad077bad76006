//! Enumerable set with constant-time removal.
//!
//! This module provides [`EnumerableSet`], a mutable set that keeps its
//! members in a dense `Vec` next to a hash index from each member to its
//! position.
//!
//! # Overview
//!
//! `EnumerableSet` supports:
//! - O(1) `contains`, `add`, `remove` through the index map
//! - O(1) positional access (`get`) through the dense `Vec`
//! - O(n) enumeration of every member
//!
//! # Time Complexity
//!
//! | Operation      | Complexity          |
//! |----------------|---------------------|
//! | `contains`     | O(1) expected       |
//! | `add`          | O(1) amortized      |
//! | `remove`       | O(1) expected       |
//! | `get`          | O(1)                |
//! | `position`     | O(1) expected       |
//! | `len`          | O(1)                |
//! | `enumerate`    | O(n)                |
//! | `clear`        | O(n)                |
//! | `retain`       | O(n)                |
//!
//! # Removal
//!
//! Removing a member overwrites its slot with the last member and pops the
//! tail (swap-and-pop), then repairs the moved member's index entry. Nothing
//! is shifted, so removal stays O(1), but the enumeration order after a
//! removal is unspecified.
//!
//! ```text
//!   values:   [A, B, C, D]        remove(B)        [A, D, C]
//!   positions: A=1 B=2 C=3 D=4   ───────────►      A=1 D=2 C=3
//! ```
//!
//! When the removed member is already last, only the pop happens.
//!
//! # Examples
//!
//! ```rust
//! use enumerable_set::collections::EnumerableSet;
//!
//! let mut set = EnumerableSet::new();
//! assert!(set.add(10));
//! assert!(set.add(20));
//! assert!(!set.add(10));
//! assert_eq!(set.len(), 2);
//!
//! assert!(set.remove(&10));
//! assert!(!set.remove(&10));
//! assert_eq!(set.enumerate(), vec![20]);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::num::NonZeroUsize;
use std::ops::Index;

use super::DefaultHashBuilder;
use super::error::OutOfBoundsError;

/// A set of unique values supporting O(1) membership, insertion, removal and
/// positional access.
///
/// Members live in a dense `Vec` (no gaps, length equals cardinality) and a
/// hash map records each member's 1-based position in that `Vec`. A value is a
/// member iff it is a key of the map.
///
/// The enumeration order is insertion order until the first removal and
/// unspecified afterwards.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Clone`, `Eq` and `Hash` for
///   mutation; each member is held once in each container.
/// * `S` - The hasher of the index map. Defaults to [`DefaultHashBuilder`].
///
/// # Examples
///
/// ```rust
/// use enumerable_set::collections::EnumerableSet;
///
/// let mut accounts = EnumerableSet::new();
/// accounts.add("0xa11ce".to_string());
/// accounts.add("0xb0b".to_string());
///
/// assert!(accounts.contains("0xb0b"));
/// for index in 0..accounts.len() {
///     assert!(accounts.get(index).is_ok());
/// }
/// ```
#[derive(Clone)]
pub struct EnumerableSet<T, S = DefaultHashBuilder> {
    values: Vec<T>,
    positions: HashMap<T, NonZeroUsize, S>,
}

static_assertions::assert_impl_all!(EnumerableSet<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(EnumerableSet<String>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(EnumerableSet<std::rc::Rc<i32>>: Send, Sync);

/// Converts a 0-based index into the 1-based position stored in the index map.
#[inline]
const fn position_of(index: usize) -> NonZeroUsize {
    NonZeroUsize::MIN.saturating_add(index)
}

/// Converts a stored 1-based position back into a 0-based index.
#[inline]
const fn index_of(position: NonZeroUsize) -> usize {
    position.get() - 1
}

// =============================================================================
// Construction with the default hasher
// =============================================================================

impl<T: Clone + Eq + Hash> EnumerableSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable_set::collections::EnumerableSet;
    ///
    /// let set: EnumerableSet<u64> = EnumerableSet::new();
    /// assert!(set.is_empty());
    /// assert!(set.enumerate().is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for at least `capacity` members.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

// =============================================================================
// Queries that need no hashing
// =============================================================================

impl<T, S> EnumerableSet<T, S> {
    /// Creates an empty set whose index map uses `hasher`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable_set::collections::EnumerableSet;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let mut set = EnumerableSet::with_hasher(RandomState::new());
    /// set.add(1);
    /// assert!(set.contains(&1));
    /// ```
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            values: Vec::new(),
            positions: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty set with room for at least `capacity` members whose
    /// index map uses `hasher`.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of members (the set's length).
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable_set::collections::EnumerableSet;
    ///
    /// let mut set = EnumerableSet::new();
    /// assert_eq!(set.len(), 0);
    /// set.add('a');
    /// set.add('a');
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the set has no members.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of members the set can hold without reallocating
    /// its value storage.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Returns the member stored at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] if `index >= self.len()`. The index is
    /// never clamped.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable_set::collections::{EnumerableSet, OutOfBoundsError};
    ///
    /// let mut set = EnumerableSet::new();
    /// set.add("a");
    /// set.add("b");
    ///
    /// assert_eq!(set.get(1), Ok(&"b"));
    /// assert_eq!(set.get(2), Err(OutOfBoundsError { index: 2, length: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, OutOfBoundsError> {
        OutOfBoundsError::check(index, self.values.len())?;
        Ok(&self.values[index])
    }

    /// Returns the first member in enumeration order.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.values.first()
    }

    /// Returns the last member in enumeration order. This is the member a
    /// removal would move.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.values.last()
    }

    /// Returns every member as a read-only slice in enumeration order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Returns an iterator over the members in enumeration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable_set::collections::EnumerableSet;
    ///
    /// let set = EnumerableSet::from([3, 1, 2]);
    /// let collected: Vec<&i32> = set.iter().collect();
    /// assert_eq!(collected, vec![&3, &1, &2]);
    /// ```
    #[inline]
    pub fn iter(&self) -> EnumerableSetIterator<'_, T> {
        EnumerableSetIterator {
            inner: self.values.iter(),
        }
    }

    /// Returns a snapshot of every member in enumeration order.
    ///
    /// The returned `Vec` is a copy; mutating it does not affect the set.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable_set::collections::EnumerableSet;
    ///
    /// let mut set = EnumerableSet::from([1, 2, 3]);
    /// let mut snapshot = set.enumerate();
    /// snapshot.clear();
    ///
    /// assert_eq!(set.len(), 3);
    ///
    /// set.remove(&1);
    /// assert_eq!(set.enumerate(), vec![3, 2]);
    /// ```
    #[must_use]
    pub fn enumerate(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values.clone()
    }

    /// Consumes the set, returning its members in enumeration order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Returns a reference to the index map's hasher.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.positions.hasher()
    }

    /// Removes every member.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.values.clear();
        self.positions.clear();
    }
}

// =============================================================================
// Membership and mutation
// =============================================================================

impl<T: Clone + Eq + Hash, S: BuildHasher> EnumerableSet<T, S> {
    /// Returns `true` if `value` is a member.
    ///
    /// The value may be any borrowed form of the element type, so a set of
    /// `String` can be queried with `&str`.
    ///
    /// # Complexity
    ///
    /// O(1) expected
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable_set::collections::EnumerableSet;
    ///
    /// let mut set = EnumerableSet::new();
    /// set.add("hello".to_string());
    ///
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(value)
    }

    /// Returns the current 0-based index of `value`, or `None` if it is not
    /// a member.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable_set::collections::EnumerableSet;
    ///
    /// let mut set = EnumerableSet::from(['a', 'b', 'c']);
    /// assert_eq!(set.position(&'b'), Some(1));
    ///
    /// set.remove(&'a');
    /// assert_eq!(set.position(&'c'), Some(0));
    /// assert_eq!(set.position(&'a'), None);
    /// ```
    #[must_use]
    pub fn position<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.get(value).copied().map(index_of)
    }

    /// Adds `value` to the set.
    ///
    /// Returns `true` if `value` was not a member and has been appended at
    /// index `len() - 1`, `false` if it was already a member (the set is left
    /// unchanged).
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable_set::collections::EnumerableSet;
    ///
    /// let mut set = EnumerableSet::new();
    /// assert!(set.add(42));
    /// assert!(!set.add(42));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        match self.positions.entry(value) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                let position = position_of(self.values.len());
                self.values.push(entry.key().clone());
                entry.insert(position);
                true
            }
        }
    }

    /// Removes `value` from the set.
    ///
    /// Returns `true` if `value` was a member, `false` otherwise (the set is
    /// left unchanged). The last member moves into the vacated slot.
    ///
    /// # Complexity
    ///
    /// O(1) expected
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable_set::collections::EnumerableSet;
    ///
    /// let mut set = EnumerableSet::from(["a", "b", "c"]);
    /// assert!(set.remove("a"));
    /// assert!(!set.remove("a"));
    ///
    /// // "c" was last and now sits where "a" was
    /// assert_eq!(set.enumerate(), vec!["c", "b"]);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes `value` from the set and returns the stored member, or `None`
    /// if it was not a member.
    ///
    /// Uses the same swap-and-pop strategy as [`remove`](Self::remove).
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = self.positions.remove(value)?;
        Some(self.detach(position))
    }

    /// Removes and returns the member stored at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable_set::collections::EnumerableSet;
    ///
    /// let mut set = EnumerableSet::from([10, 20, 30]);
    /// assert_eq!(set.remove_index(0), Ok(10));
    /// assert_eq!(set.enumerate(), vec![30, 20]);
    /// assert!(set.remove_index(2).is_err());
    /// ```
    pub fn remove_index(&mut self, index: usize) -> Result<T, OutOfBoundsError> {
        OutOfBoundsError::check(index, self.values.len())?;
        self.positions.remove(&self.values[index]);
        Ok(self.detach(position_of(index)))
    }

    /// Takes the member at `position` out of the value storage. Its index map
    /// entry must already be gone.
    fn detach(&mut self, position: NonZeroUsize) -> T {
        let removed_index = index_of(position);
        let last_index = self.values.len() - 1;

        if removed_index != last_index
            && let Some(moved) = self.positions.get_mut(&self.values[last_index])
        {
            *moved = position;
        }

        self.values.swap_remove(removed_index)
    }

    /// Adds every value yielded by `values`, returning how many were newly
    /// inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable_set::collections::EnumerableSet;
    ///
    /// let mut set = EnumerableSet::from([1, 2]);
    /// assert_eq!(set.add_all([2, 3, 4, 4]), 2);
    /// assert_eq!(set.len(), 4);
    /// ```
    pub fn add_all<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .map(|value| usize::from(self.add(value)))
            .sum()
    }

    /// Removes every value yielded by `values`, returning how many were
    /// members.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable_set::collections::EnumerableSet;
    ///
    /// let mut set = EnumerableSet::from([1, 2, 3]);
    /// assert_eq!(set.remove_all(&[1, 3, 5]), 2);
    /// assert_eq!(set.enumerate(), vec![2]);
    /// ```
    pub fn remove_all<'a, Q, I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        values
            .into_iter()
            .map(|value| usize::from(self.remove(value)))
            .sum()
    }

    /// Keeps only the members for which `keep` returns `true`.
    ///
    /// Each member is visited exactly once. Rejected members are removed
    /// with swap-and-pop, so the survivors' order may change.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable_set::collections::EnumerableSet;
    ///
    /// let mut set: EnumerableSet<i32> = (1..=6).collect();
    /// set.retain(|value| value % 2 == 0);
    ///
    /// let mut remaining = set.enumerate();
    /// remaining.sort_unstable();
    /// assert_eq!(remaining, vec![2, 4, 6]);
    /// ```
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut index = 0;
        while index < self.values.len() {
            if keep(&self.values[index]) {
                index += 1;
            } else {
                // The former last member lands at `index` and is visited next.
                self.positions.remove(&self.values[index]);
                self.detach(position_of(index));
            }
        }
    }

    /// Reserves room for at least `additional` more members.
    pub fn reserve(&mut self, additional: usize) {
        self.values.reserve(additional);
        self.positions.reserve(additional);
    }

    /// Shrinks both containers as close to the current length as possible.
    pub fn shrink_to_fit(&mut self) {
        self.values.shrink_to_fit();
        self.positions.shrink_to_fit();
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A borrowing iterator over the members of an [`EnumerableSet`] in
/// enumeration order.
#[derive(Clone)]
pub struct EnumerableSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for EnumerableSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for EnumerableSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for EnumerableSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for EnumerableSetIterator<'_, T> {}

/// An owning iterator over the members of an [`EnumerableSet`] in
/// enumeration order.
pub struct EnumerableSetIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for EnumerableSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for EnumerableSetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for EnumerableSetIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for EnumerableSetIntoIterator<T> {}

impl<T, S> IntoIterator for EnumerableSet<T, S> {
    type Item = T;
    type IntoIter = EnumerableSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        EnumerableSetIntoIterator {
            inner: self.values.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a EnumerableSet<T, S> {
    type Item = &'a T;
    type IntoIter = EnumerableSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard trait implementations
// =============================================================================

impl<T, S: Default> Default for EnumerableSet<T, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: Clone + Eq + Hash, S: BuildHasher + Default> FromIterator<T> for EnumerableSet<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.add_all(iter);
        set
    }
}

impl<T: Clone + Eq + Hash, const N: usize> From<[T; N]> for EnumerableSet<T> {
    fn from(values: [T; N]) -> Self {
        let mut set = Self::with_capacity(N);
        set.add_all(values);
        set
    }
}

impl<T: Clone + Eq + Hash, S: BuildHasher> Extend<T> for EnumerableSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, T: Copy + Eq + Hash + 'a, S: BuildHasher> Extend<&'a T> for EnumerableSet<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.add_all(iter.into_iter().copied());
    }
}

impl<T, S> Index<usize> for EnumerableSet<T, S> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

/// Two sets are equal when they have the same members, in any order.
impl<T, S1, S2> PartialEq<EnumerableSet<T, S2>> for EnumerableSet<T, S1>
where
    T: Eq + Hash,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &EnumerableSet<T, S2>) -> bool {
        self.len() == other.len()
            && other
                .values
                .iter()
                .all(|value| self.positions.contains_key(value))
    }
}

impl<T: Eq + Hash, S: BuildHasher> Eq for EnumerableSet<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for EnumerableSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.values.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for EnumerableSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for value in &self.values {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S> serde::Serialize for EnumerableSet<T, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in &self.values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct EnumerableSetVisitor<T, S> {
    marker: std::marker::PhantomData<(T, S)>,
}

#[cfg(feature = "serde")]
impl<T, S> EnumerableSetVisitor<T, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for EnumerableSetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    type Value = EnumerableSet<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut set = EnumerableSet::with_capacity_and_hasher(capacity, S::default());
        // Duplicates collapse; the first occurrence fixes the position.
        while let Some(value) = seq.next_element()? {
            set.add(value);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for EnumerableSet<T, S>
where
    T: serde::Deserialize<'de> + Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(EnumerableSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
