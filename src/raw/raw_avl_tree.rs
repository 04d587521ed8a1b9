use core::cmp::Ordering;

use super::arena::Arena;
use super::handle::Handle;
use super::node::AvlNode;
use super::size::Size;

/// The height-balanced, size-augmented search tree backing `OSAvlMultiset`.
///
/// Structure is classic AVL: every node's child subtrees differ in height by
/// at most one, and every node records its subtree element count. Both
/// fields are repaired bottom-up by [`rebalance`](Self::rebalance) on every
/// path a mutation touches, which is what keeps insert, remove, and rank
/// queries logarithmic.
///
/// Equal values are allowed. Insertion routes them into the right subtree,
/// so the in-order sequence is non-decreasing and duplicates occupy
/// consecutive ranks.
#[derive(Clone)]
pub(crate) struct RawAvlTree<T> {
    /// Arena storing all tree nodes; children are linked by handle.
    nodes: Arena<AvlNode<T>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

impl<T> RawAvlTree<T> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` elements.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of elements in the tree. Every live arena slot is
    /// exactly one linked node, so the arena's count is the tree's.
    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree contains no elements.
    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the capacity of the tree.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Drops all elements, keeping the allocation.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Calls `f` on every element, in ascending order.
    pub(crate) fn for_each_in_order<'a, F: FnMut(&'a T)>(&'a self, f: &mut F) {
        self.visit_in_order(self.root, f);
    }

    fn visit_in_order<'a, F: FnMut(&'a T)>(&'a self, node: Option<Handle>, f: &mut F) {
        if let Some(handle) = node {
            let node = self.nodes.get(handle);
            self.visit_in_order(node.left, f);
            f(&node.value);
            self.visit_in_order(node.right, f);
        }
    }

    // ─── Augmentation helpers ────────────────────────────────────────────

    /// Height of a possibly-absent subtree (0 for an absent child).
    fn subtree_height(&self, node: Option<Handle>) -> u8 {
        node.map_or(0, |handle| self.nodes.get(handle).height)
    }

    /// Element count of a possibly-absent subtree.
    fn subtree_size(&self, node: Option<Handle>) -> usize {
        node.map_or(0, |handle| self.nodes.get(handle).size.to_usize())
    }

    /// `height(right) - height(left)`; +2 means right-heavy, -2 left-heavy.
    fn balance_factor(&self, handle: Handle) -> i16 {
        let node = self.nodes.get(handle);
        i16::from(self.subtree_height(node.right)) - i16::from(self.subtree_height(node.left))
    }

    /// Recomputes a node's height and size from its (already correct)
    /// children.
    fn refresh(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let (left, right) = (node.left, node.right);
        let height = 1 + self.subtree_height(left).max(self.subtree_height(right));
        let size = Size::from_usize(1 + self.subtree_size(left) + self.subtree_size(right));
        let node = self.nodes.get_mut(handle);
        node.height = height;
        node.size = size;
    }

    // ─── Rotations & rebalancing ─────────────────────────────────────────

    /// Promotes the right child over `handle`; returns the new subtree root.
    fn rotate_left(&mut self, handle: Handle) -> Handle {
        let pivot = self
            .nodes
            .get(handle)
            .right
            .expect("`RawAvlTree::rotate_left()` - node has no right child!");
        let transfer = self.nodes.get(pivot).left;
        self.nodes.get_mut(handle).right = transfer;
        self.nodes.get_mut(pivot).left = Some(handle);
        // Demoted node first; the promoted node's fields depend on it.
        self.refresh(handle);
        self.refresh(pivot);
        pivot
    }

    /// Promotes the left child over `handle`; returns the new subtree root.
    fn rotate_right(&mut self, handle: Handle) -> Handle {
        let pivot = self
            .nodes
            .get(handle)
            .left
            .expect("`RawAvlTree::rotate_right()` - node has no left child!");
        let transfer = self.nodes.get(pivot).right;
        self.nodes.get_mut(handle).left = transfer;
        self.nodes.get_mut(pivot).right = Some(handle);
        self.refresh(handle);
        self.refresh(pivot);
        pivot
    }

    /// Repairs `handle`'s augmentations and, if a child height change pushed
    /// its balance factor to ±2, restores balance with one or two rotations.
    /// Returns the (possibly different) subtree root.
    fn rebalance(&mut self, handle: Handle) -> Handle {
        self.refresh(handle);
        match self.balance_factor(handle) {
            2 => {
                let right = self
                    .nodes
                    .get(handle)
                    .right
                    .expect("`RawAvlTree::rebalance()` - right-heavy node has no right child!");
                if self.balance_factor(right) < 0 {
                    let new_right = self.rotate_right(right);
                    self.nodes.get_mut(handle).right = Some(new_right);
                }
                self.rotate_left(handle)
            }
            -2 => {
                let left = self
                    .nodes
                    .get(handle)
                    .left
                    .expect("`RawAvlTree::rebalance()` - left-heavy node has no left child!");
                if self.balance_factor(left) > 0 {
                    let new_left = self.rotate_left(left);
                    self.nodes.get_mut(handle).left = Some(new_left);
                }
                self.rotate_right(handle)
            }
            _ => handle,
        }
    }
}

impl<T: Ord> RawAvlTree<T> {
    /// Inserts `value`, keeping any equal elements already present.
    pub(crate) fn insert(&mut self, value: T) {
        let root = self.root;
        self.root = Some(self.insert_at(root, value));
    }

    fn insert_at(&mut self, node: Option<Handle>, value: T) -> Handle {
        let Some(handle) = node else {
            return self.nodes.alloc(AvlNode::new(value));
        };
        // Equal values go right, so duplicates sit after their peers.
        if value < self.nodes.get(handle).value {
            let left = self.nodes.get(handle).left;
            let new_left = self.insert_at(left, value);
            self.nodes.get_mut(handle).left = Some(new_left);
        } else {
            let right = self.nodes.get(handle).right;
            let new_right = self.insert_at(right, value);
            self.nodes.get_mut(handle).right = Some(new_right);
        }
        self.rebalance(handle)
    }

    /// Removes one element equal to `value`. Returns false (and changes
    /// nothing) if no such element exists.
    pub(crate) fn remove(&mut self, value: &T) -> bool {
        let root = self.root;
        let (new_root, removed) = self.remove_at(root, value);
        self.root = new_root;
        removed
    }

    fn remove_at(&mut self, node: Option<Handle>, value: &T) -> (Option<Handle>, bool) {
        let Some(handle) = node else {
            return (None, false);
        };
        match value.cmp(&self.nodes.get(handle).value) {
            Ordering::Less => {
                let left = self.nodes.get(handle).left;
                let (new_left, removed) = self.remove_at(left, value);
                if !removed {
                    return (Some(handle), false);
                }
                self.nodes.get_mut(handle).left = new_left;
                (Some(self.rebalance(handle)), true)
            }
            Ordering::Greater => {
                let right = self.nodes.get(handle).right;
                let (new_right, removed) = self.remove_at(right, value);
                if !removed {
                    return (Some(handle), false);
                }
                self.nodes.get_mut(handle).right = new_right;
                (Some(self.rebalance(handle)), true)
            }
            Ordering::Equal => {
                // Capture both children before the slot is released; all
                // relinking below goes through live handles only.
                let node = self.nodes.get(handle);
                let (left, right) = (node.left, node.right);

                let Some(right) = right else {
                    // No right child: splice the left subtree into place.
                    self.nodes.free(handle);
                    return (left, true);
                };

                // Replace the node with its in-order successor: detach the
                // minimum of the right subtree and relink it over the
                // captured children, then release the removed node's slot.
                let (successor, remainder) = self.detach_min(right);
                let succ = self.nodes.get_mut(successor);
                succ.left = left;
                succ.right = remainder;
                self.nodes.free(handle);
                (Some(self.rebalance(successor)), true)
            }
        }
    }

    /// Unlinks the minimum node of the subtree at `handle`. Returns the
    /// detached node (its links are stale until the caller relinks it) and
    /// the rebalanced remainder of the subtree.
    fn detach_min(&mut self, handle: Handle) -> (Handle, Option<Handle>) {
        let Some(left) = self.nodes.get(handle).left else {
            return (handle, self.nodes.get(handle).right);
        };
        let (min, new_left) = self.detach_min(left);
        self.nodes.get_mut(handle).left = new_left;
        (min, Some(self.rebalance(handle)))
    }

    /// Returns the element at zero-based `rank`, or `None` if out of range.
    ///
    /// The bounds check up front is deliberate: with it, the descent below
    /// can rely on the size invariant and never runs off an absent child.
    pub(crate) fn select(&self, rank: usize) -> Option<&T> {
        if rank >= self.len() {
            return None;
        }
        let mut current = self.root?;
        let mut remaining = rank;
        loop {
            let node = self.nodes.get(current);
            let left_size = self.subtree_size(node.left);
            match remaining.cmp(&left_size) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => {
                    current = node.left.expect("`RawAvlTree::select()` - size invariant violated!");
                }
                Ordering::Greater => {
                    remaining -= left_size + 1;
                    current = node.right.expect("`RawAvlTree::select()` - size invariant violated!");
                }
            }
        }
    }

    /// Returns the rank of the first element equal to `value`, i.e. the
    /// number of strictly smaller elements, or `None` if absent.
    pub(crate) fn rank_of(&self, value: &T) -> Option<usize> {
        let mut current = self.root;
        let mut rank = 0;
        let mut found = false;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if node.value < *value {
                rank += self.subtree_size(node.left) + 1;
                current = node.right;
            } else {
                found |= node.value == *value;
                current = node.left;
            }
        }
        found.then_some(rank)
    }

    /// Returns true if some element equals `value`.
    pub(crate) fn contains(&self, value: &T) -> bool {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }
}
