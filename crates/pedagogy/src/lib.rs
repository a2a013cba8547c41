//! Educational range-aggregate implementations.
//!
//! These are the textbook alternatives to the recursive segment tree in the
//! `segtree` crate. They exist to be compared against, not to be used:
//!
//! | Implementation | Query | Update | Needs identity |
//! |----------------|-------|--------|----------------|
//! | `NaiveFold` | O(n) | O(1) | no |
//! | `BottomUpTree` | O(log n) | O(log n) | yes |
//!
//! Both implement [`RangeFold`], so a test can drive the same operations
//! through either and compare answers.
//!
//! # Example
//!
//! ```
//! use pedagogy::naive::NaiveFold;
//! use pedagogy::range_fold::RangeFold;
//!
//! let mut naive = NaiveFold::new(vec![5, 3, 8, 1], |a: &i32, b: &i32| *a.min(b));
//! assert_eq!(naive.fold(0, 3), Some(1));
//! naive.assign(3, 20);
//! assert_eq!(naive.fold(0, 3), Some(3));
//! ```

pub mod bottom_up;
pub mod naive;
pub mod range_fold;

pub use bottom_up::BottomUpTree;
pub use naive::NaiveFold;
pub use range_fold::RangeFold;
