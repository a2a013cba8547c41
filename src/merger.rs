//! Merge functions that combine two aggregates into one.
//!
//! A merger must be associative:
//! `merge(a, merge(b, c)) == merge(merge(a, b), c)`.
//! It need not be commutative. The tree always calls it as
//! `merge(left, right)` with `left` covering the lower positions.

use std::ops::Add;

/// Combines two adjacent aggregates.
pub trait Merger<E> {
    /// Merge the aggregate of a left range with that of the range right after it.
    fn merge(&self, left: &E, right: &E) -> E;
}

impl<E, F> Merger<E> for F
where
    F: Fn(&E, &E) -> E,
{
    fn merge(&self, left: &E, right: &E) -> E {
        return self(left, right);
    }
}

/// Sum of the range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sum;

impl<E> Merger<E> for Sum
where
    E: Clone + Add<Output = E>,
{
    fn merge(&self, left: &E, right: &E) -> E {
        return left.clone() + right.clone();
    }
}

/// Smallest element of the range. Ties keep the leftmost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Min;

impl<E: Clone + Ord> Merger<E> for Min {
    fn merge(&self, left: &E, right: &E) -> E {
        if right < left {
            return right.clone();
        }
        return left.clone();
    }
}

/// Largest element of the range. Ties keep the leftmost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Max;

impl<E: Clone + Ord> Merger<E> for Max {
    fn merge(&self, left: &E, right: &E) -> E {
        if right > left {
            return right.clone();
        }
        return left.clone();
    }
}
