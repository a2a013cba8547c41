//! Linear-scan fold.
//!
//! Every query walks the range and merges left to right, so it is O(n) per
//! call but obviously correct. Property tests use it as the oracle.

use crate::range_fold::RangeFold;

pub struct NaiveFold<T, F> {
    items: Vec<T>,
    op: F,
}

impl<T, F> NaiveFold<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    pub fn new(items: Vec<T>, op: F) -> Self {
        return NaiveFold { items, op };
    }

    pub fn as_slice(&self) -> &[T] {
        return &self.items;
    }
}

impl<T, F> RangeFold<T> for NaiveFold<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    fn len(&self) -> usize {
        return self.items.len();
    }

    fn fold(&self, left: usize, right: usize) -> Option<T> {
        if left > right || right >= self.items.len() {
            return None;
        }
        let mut acc = self.items[left].clone();
        for item in &self.items[left + 1..=right] {
            acc = (self.op)(&acc, item);
        }
        return Some(acc);
    }

    fn assign(&mut self, index: usize, item: T) -> Option<T> {
        let slot = self.items.get_mut(index)?;
        return Some(std::mem::replace(slot, item));
    }
}
