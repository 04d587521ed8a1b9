//! Order-statistic AVL multiset for Rust.
//!
//! This crate provides [`OSAvlMultiset`], an ordered multiset (duplicate
//! elements allowed) with O(log n) order-statistic operations on top of the
//! usual insert/remove/contains:
//!
//! - [`get_by_rank`](OSAvlMultiset::get_by_rank) - Get the element at a given sorted position
//! - [`rank_of`](OSAvlMultiset::rank_of) - Get the sorted position of an element
//! - Indexing by [`Rank`] - e.g., `set[Rank(0)]` for the smallest element
//!
//! # Example
//!
//! ```
//! use osavl_tree::{OSAvlMultiset, Rank};
//!
//! let mut times = OSAvlMultiset::new();
//! times.insert(95);
//! times.insert(87);
//! times.insert(95); // duplicates are kept
//!
//! assert_eq!(times.len(), 3);
//! assert_eq!(times.get_by_rank(0), Some(&87));
//! assert_eq!(times[Rank(2)], 95);
//!
//! // Remove exactly one of the two 95s.
//! assert!(times.remove(&95));
//! assert_eq!(times.len(), 2);
//! assert_eq!(times.rank_of(&95), Some(1));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Multiset semantics** - Equal elements are all retained; `remove` drops one occurrence
//! - **O(log n) rank operations** - Efficient order-statistic queries via subtree size augmentation
//! - **No unsafe code** - Nodes live in an arena and reference each other by index
//!
//! # Implementation
//!
//! The multiset is a height-balanced (AVL) binary search tree in which every
//! node also records the size of its subtree. Rank queries descend by
//! comparing the target rank against left-subtree sizes, so they never touch
//! more than one root-to-leaf path. Nodes are stored in an arena and linked
//! by integer handles; removal detaches and relinks whole nodes instead of
//! aliasing freed storage.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod order_statistic;
mod raw;

pub mod osavl_multiset;

pub use order_statistic::Rank;
pub use osavl_multiset::OSAvlMultiset;
