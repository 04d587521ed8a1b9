use super::OSAvlMultiset;
use crate::raw::RawAvlTree;

impl<T> OSAvlMultiset<T> {
    /// Creates an empty multiset with node storage for at least `capacity`
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlMultiset;
    ///
    /// let set: OSAvlMultiset<i32> = OSAvlMultiset::with_capacity(16);
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OSAvlMultiset {
            raw: RawAvlTree::with_capacity(capacity),
        }
    }

    /// Returns the number of elements the multiset can hold without
    /// reallocating node storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSAvlMultiset;
    ///
    /// let set: OSAvlMultiset<i32> = OSAvlMultiset::with_capacity(32);
    /// assert_eq!(set.capacity(), 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
