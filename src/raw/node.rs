use super::handle::Handle;
use super::size::Size;

/// A single tree node: the stored value, two owned child links, and the two
/// augmentations the algorithms maintain on every mutation path.
///
/// `height` is the longest node count down to a leaf (a lone leaf is 1).
/// An AVL tree over at most `Handle::MAX` elements is well under 64 levels
/// tall, so `u8` has plenty of headroom.
#[derive(Clone)]
pub(crate) struct AvlNode<T> {
    pub(crate) value: T,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
    pub(crate) height: u8,
    pub(crate) size: Size,
}

impl<T> AvlNode<T> {
    /// Creates a detached leaf node.
    pub(crate) const fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
            size: Size::ONE,
        }
    }
}
