//! Error types for enumerable collections.
//!
//! Membership outcomes ("already present", "not present") are reported as
//! `bool` and never appear here. The only failure a collection surfaces is a
//! positional access outside `0..len()`.

/// Represents an access to a position that does not hold a value.
///
/// Returned by [`EnumerableSet::get`](super::EnumerableSet::get) and
/// [`EnumerableSet::remove_index`](super::EnumerableSet::remove_index) when
/// `index >= length`.
///
/// # Examples
///
/// ```rust
/// use enumerable_set::collections::OutOfBoundsError;
///
/// let error = OutOfBoundsError { index: 3, length: 2 };
/// assert_eq!(
///     format!("{}", error),
///     "index 3 out of bounds for enumerable set of length 2"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfBoundsError {
    /// The requested position.
    pub index: usize,
    /// The number of values stored when the access was attempted.
    pub length: usize,
}

impl OutOfBoundsError {
    /// Returns `Ok(())` if `index` addresses a value in a collection of `length`.
    #[inline]
    pub(crate) const fn check(index: usize, length: usize) -> Result<(), Self> {
        if index < length {
            Ok(())
        } else {
            Err(Self { index, length })
        }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "index {} out of bounds for enumerable set of length {}",
            self.index, self.length
        )
    }
}

impl std::error::Error for OutOfBoundsError {}
