//! Iterative bottom-up segment tree.
//!
//! Leaves live at `size..size + n` where `size` is `n` rounded up to a power
//! of two, and node `k` covers its children `2k` and `2k + 1`. Padding leaves
//! hold the identity, so unlike the recursive tree this one needs a monoid.
//!
//! Queries climb from both ends of the half-open range toward the root,
//! keeping separate left and right accumulators so order is preserved.

use crate::range_fold::RangeFold;

pub struct BottomUpTree<T, F> {
    len: usize,
    size: usize,
    log: usize,
    nodes: Vec<T>,
    identity: T,
    op: F,
}

impl<T, F> BottomUpTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    pub fn new(items: &[T], op: F, identity: T) -> Self {
        let len = items.len();
        let size = len.next_power_of_two();
        let log = size.trailing_zeros() as usize;
        let mut nodes = vec![identity.clone(); 2 * size];
        nodes[size..size + len].clone_from_slice(items);

        let mut tree = BottomUpTree { len, size, log, nodes, identity, op };
        for k in (1..size).rev() {
            tree.update(k);
        }
        return tree;
    }

    /// Aggregate of the whole sequence.
    pub fn all(&self) -> T {
        if self.len == 0 {
            return self.identity.clone();
        }
        return self.nodes[1].clone();
    }

    fn update(&mut self, k: usize) {
        self.nodes[k] = (self.op)(&self.nodes[2 * k], &self.nodes[2 * k + 1]);
    }
}

impl<T, F> RangeFold<T> for BottomUpTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    fn len(&self) -> usize {
        return self.len;
    }

    fn fold(&self, left: usize, right: usize) -> Option<T> {
        if left > right || right >= self.len {
            return None;
        }
        let mut acc_l = self.identity.clone();
        let mut acc_r = self.identity.clone();
        let mut l = left + self.size;
        let mut r = right + 1 + self.size;

        while l < r {
            if l & 1 == 1 {
                acc_l = (self.op)(&acc_l, &self.nodes[l]);
                l += 1;
            }
            if r & 1 == 1 {
                r -= 1;
                acc_r = (self.op)(&self.nodes[r], &acc_r);
            }
            l >>= 1;
            r >>= 1;
        }
        return Some((self.op)(&acc_l, &acc_r));
    }

    fn assign(&mut self, index: usize, item: T) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let p = index + self.size;
        let previous = std::mem::replace(&mut self.nodes[p], item);
        for i in 1..=self.log {
            self.update(p >> i);
        }
        return Some(previous);
    }
}
