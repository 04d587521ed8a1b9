use core::fmt;

use crate::raw::RawAvlTree;

mod capacity;
mod order_statistic;

/// An ordered multiset based on an AVL tree with subtree-size augmentation.
///
/// Unlike `BTreeSet`, inserting an element equal to one already present adds
/// a second occurrence instead of replacing it; [`remove`](Self::remove)
/// drops exactly one occurrence. Every operation is O(log n) in the number
/// of stored elements, including the order-statistic queries
/// [`get_by_rank`](Self::get_by_rank) and [`rank_of`](Self::rank_of).
///
/// It is a logic error for an element to be modified in such a way that its
/// ordering relative to any other element, as determined by the [`Ord`]
/// trait, changes while it is in the multiset. This is normally only
/// possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe
/// code. The behavior resulting from such a logic error is not specified,
/// but will be encapsulated to the `OSAvlMultiset` that observed it and not
/// result in undefined behavior.
///
/// There is deliberately no iterator API; ranked access covers ordered
/// retrieval, and anything walking all elements can do so through
/// consecutive ranks.
///
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
///
/// # Examples
///
/// ```
/// use osavl_tree::OSAvlMultiset;
///
/// let mut laps = OSAvlMultiset::new();
///
/// // Record some lap times; repeats are kept.
/// laps.insert(81);
/// laps.insert(79);
/// laps.insert(81);
/// laps.insert(85);
///
/// assert_eq!(laps.len(), 4);
/// assert!(laps.contains(&79));
///
/// // Median lap (rank 1 of 4 = second-fastest).
/// assert_eq!(laps.get_by_rank(1), Some(&81));
///
/// // Scratch one of the 81s.
/// assert!(laps.remove(&81));
/// assert_eq!(laps.len(), 3);
/// ```
///
/// An `OSAvlMultiset` with a known list of elements can be initialized from
/// an array:
///
/// ```
/// use osavl_tree::OSAvlMultiset;
///
/// let set = OSAvlMultiset::from([1, 2, 2, 3]);
/// assert_eq!(set.len(), 4);
/// ```
#[derive(Clone)]
pub struct OSAvlMultiset<T> {
    raw: RawAvlTree<T>,
}

impl<T> OSAvlMultiset<T> {
    /// Makes a new, empty `OSAvlMultiset`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlMultiset;
    ///
    /// let mut set: OSAvlMultiset<i32> = OSAvlMultiset::new();
    /// set.insert(1);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            raw: RawAvlTree::new(),
        }
    }

    /// Returns the number of elements in the multiset, counting duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlMultiset;
    ///
    /// let set = OSAvlMultiset::from([1, 1, 1]);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the multiset contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlMultiset;
    ///
    /// let mut set = OSAvlMultiset::new();
    /// assert!(set.is_empty());
    /// set.insert(1);
    /// assert!(!set.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the multiset, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlMultiset;
    ///
    /// let mut set = OSAvlMultiset::from([1, 2, 3]);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }
}

impl<T: Ord> OSAvlMultiset<T> {
    /// Adds a value to the multiset.
    ///
    /// Always succeeds; if equal values are already present, the new one is
    /// stored alongside them (after them in rank order).
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlMultiset;
    ///
    /// let mut set = OSAvlMultiset::new();
    /// set.insert(2);
    /// set.insert(2);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) {
        self.raw.insert(value);
    }

    /// Removes one occurrence of `value` from the multiset. Returns whether
    /// such an element was present.
    ///
    /// Removing an absent value is a harmless no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlMultiset;
    ///
    /// let mut set = OSAvlMultiset::from([2, 2]);
    /// assert!(set.remove(&2));
    /// assert!(set.remove(&2));
    /// assert!(!set.remove(&2));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.raw.remove(value)
    }

    /// Returns `true` if the multiset contains an element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlMultiset;
    ///
    /// let set = OSAvlMultiset::from([1, 2, 3]);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&4));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.raw.contains(value)
    }

    /// Returns a reference to the smallest element, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlMultiset;
    ///
    /// let set = OSAvlMultiset::from([3, 1, 2]);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.raw.select(0)
    }

    /// Returns a reference to the largest element, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlMultiset;
    ///
    /// let set = OSAvlMultiset::from([3, 1, 2]);
    /// assert_eq!(set.last(), Some(&3));
    /// ```
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        let len = self.raw.len();
        self.raw.select(len.checked_sub(1)?)
    }
}

impl<T> Default for OSAvlMultiset<T> {
    /// Creates an empty `OSAvlMultiset`.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for OSAvlMultiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        self.raw.for_each_in_order(&mut |value| {
            list.entry(value);
        });
        list.finish()
    }
}

impl<T: Ord> FromIterator<T> for OSAvlMultiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for OSAvlMultiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for OSAvlMultiset<T> {
    /// Converts a `[T; N]` into an `OSAvlMultiset<T>`.
    ///
    /// ```
    /// use osavl_tree::OSAvlMultiset;
    ///
    /// let set = OSAvlMultiset::from([3, 1, 2]);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}
