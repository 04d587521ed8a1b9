/// A zero-based rank into the sorted order of a multiset.
///
/// Rank 0 is the smallest element; equal elements occupy consecutive ranks.
///
/// # Examples
///
/// ```
/// use osavl_tree::{OSAvlMultiset, Rank};
///
/// let mut set = OSAvlMultiset::new();
/// set.insert(20);
/// set.insert(10);
///
/// assert_eq!(set[Rank(0)], 10);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
