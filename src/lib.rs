//! segtree - a generic range-aggregate index.
//!
//! # Quick Start
//!
//! ```
//! use segtree::{Min, SegmentTree};
//!
//! let mut tree = SegmentTree::new(&[5, 3, 8, 1, 9, 2], Min);
//! assert_eq!(tree.query(0, 5), Ok(1));
//!
//! tree.set(3, 20).unwrap();
//! assert_eq!(tree.query(0, 5), Ok(2));
//! assert!(tree.query(3, 1).is_err());
//! ```
//!
//! Any associative `Fn(&E, &E) -> E` works as a merger, including
//! non-commutative ones; ranges are always merged left to right.
//!
//! ```
//! use segtree::SegmentTree;
//!
//! let words: Vec<String> = "the quick brown fox".split(' ').map(String::from).collect();
//! let tree = SegmentTree::from_vec(words, |a: &String, b: &String| format!("{a} {b}"));
//! assert_eq!(tree.query(1, 2).unwrap(), "quick brown");
//! ```

pub mod error;
pub mod merger;
pub mod tree;

pub use error::OutOfRange;
pub use merger::Max;
pub use merger::Merger;
pub use merger::Min;
pub use merger::Sum;
pub use tree::SegmentTree;
