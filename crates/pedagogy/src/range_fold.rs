//! The interface shared by every reference implementation in this crate.
//!
//! It is deliberately smaller than the production index: enough to drive the
//! same operation sequence through two structures and compare the answers.

/// An ordered sequence that can fold any contiguous range.
pub trait RangeFold<T: Clone> {
    /// Number of elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// Aggregate of positions `left..=right`, or `None` if the range is
    /// reversed or runs past the end.
    fn fold(&self, left: usize, right: usize) -> Option<T>;

    /// Replace one element, returning the old value.
    fn assign(&mut self, index: usize, item: T) -> Option<T>;

    /// Replace every element in `left..=right`. Returns `false` and changes
    /// nothing if the range is invalid.
    fn assign_range(&mut self, left: usize, right: usize, item: T) -> bool {
        if left > right || right >= self.len() {
            return false;
        }
        for i in left..=right {
            self.assign(i, item.clone());
        }
        return true;
    }
}
