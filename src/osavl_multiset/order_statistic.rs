use core::ops::Index;

use super::OSAvlMultiset;
use crate::Rank;

impl<T: Ord> OSAvlMultiset<T> {
    /// Returns the element at position `rank` in sorted order.
    ///
    /// The rank is zero-based; equal elements occupy consecutive ranks.
    /// Returns `None` if `rank >= len()` — an out-of-range rank is checked
    /// up front, never descended into.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlMultiset;
    ///
    /// let set = OSAvlMultiset::from([30, 10, 20, 20]);
    /// assert_eq!(set.get_by_rank(0), Some(&10));
    /// assert_eq!(set.get_by_rank(2), Some(&20));
    /// assert!(set.get_by_rank(4).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&T> {
        self.raw.select(rank)
    }

    /// Returns the zero-based rank of the first occurrence of `value` — the
    /// number of strictly smaller elements — or `None` if the value is not
    /// present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlMultiset;
    ///
    /// let set = OSAvlMultiset::from([10, 20, 20, 30]);
    ///
    /// assert_eq!(set.rank_of(&20), Some(1));
    /// assert_eq!(set.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of(&self, value: &T) -> Option<usize> {
        self.raw.rank_of(value)
    }
}

/// Indexes into the multiset by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use osavl_tree::{OSAvlMultiset, Rank};
///
/// let set = OSAvlMultiset::from([10, 20, 30]);
/// assert_eq!(set[Rank(1)], 20);
/// ```
impl<T: Ord> Index<Rank> for OSAvlMultiset<T> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).expect("rank out of bounds")
    }
}
