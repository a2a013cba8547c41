//! Range-aggregate index over a fixed-length sequence.
//!
//! The tree is implicit: node `i` has children `2i + 1` and `2i + 2`, and the
//! range a node covers is never stored. Every traversal recomputes it from the
//! root by splitting `[l, r]` at `l + (r - l) / 2`, left half inclusive of the
//! midpoint. Build, query, and both update paths must share that rule or the
//! slots they visit stop lining up.
//!
//! ```
//! use segtree::{SegmentTree, Sum};
//!
//! let mut tree = SegmentTree::new(&[-2, 0, 3, -5, 2, -1], Sum);
//! assert_eq!(tree.query(0, 2), Ok(1));
//! assert_eq!(tree.set(4, 10), Ok(2));
//! assert_eq!(tree.query(0, 5), Ok(6));
//! ```

use std::fmt;
use std::ops::Bound;
use std::ops::RangeBounds;

use smallvec::SmallVec;
use tracing::debug;
use tracing::trace;

use crate::error::OutOfRange;
use crate::merger::Merger;

/// Slots allocated per element. Enough for any shape the halving build produces.
const SLOTS_PER_ELEMENT: usize = 4;

/// A segment tree answering `merge` aggregates over contiguous ranges.
#[derive(Clone, Debug)]
pub struct SegmentTree<E, M> {
    /// Backing copy of the sequence; `data.len()` never changes.
    data: Vec<E>,
    /// Implicit binary tree. Only slots on the build path are `Some`.
    tree: Vec<Option<E>>,
    merger: M,
}

fn left_child(node: usize) -> usize {
    return 2 * node + 1;
}

fn right_child(node: usize) -> usize {
    return 2 * node + 2;
}

fn midpoint(l: usize, r: usize) -> usize {
    return l + (r - l) / 2;
}

impl<E: Clone, M: Merger<E>> SegmentTree<E, M> {
    /// Build a tree over a copy of `items`. Runs in O(n).
    pub fn new(items: &[E], merger: M) -> Self {
        return Self::from_vec(items.to_vec(), merger);
    }

    /// Build a tree over everything `items` yields.
    pub fn from_iter_with<I>(items: I, merger: M) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        return Self::from_vec(items.into_iter().collect(), merger);
    }

    /// Build a tree that takes ownership of `data`.
    ///
    /// An empty `data` gives an empty tree on which every positional call
    /// returns [`OutOfRange`].
    pub fn from_vec(data: Vec<E>, merger: M) -> Self {
        let len = data.len();
        let mut seg = SegmentTree {
            data,
            tree: vec![None; SLOTS_PER_ELEMENT * len],
            merger,
        };
        if len > 0 {
            seg.build(0, 0, len - 1);
        }
        debug!(len, slots = seg.tree.len(), "built segment tree");
        return seg;
    }

    fn build(&mut self, node: usize, l: usize, r: usize) {
        if l == r {
            self.tree[node] = Some(self.data[l].clone());
            return;
        }

        let mid = midpoint(l, r);
        self.build(left_child(node), l, mid);
        self.build(right_child(node), mid + 1, r);
        self.pull(node);
    }

    /// Recompute an internal node from its two children.
    fn pull(&mut self, node: usize) {
        let merged = self
            .merger
            .merge(self.slot(left_child(node)), self.slot(right_child(node)));
        self.tree[node] = Some(merged);
    }

    fn slot(&self, node: usize) -> &E {
        return self.tree[node]
            .as_ref()
            .expect("slot on the build path is populated");
    }

    /// Aggregate of `data[left..=right]`, merged left to right. Runs in O(log n).
    pub fn query(&self, left: usize, right: usize) -> Result<E, OutOfRange> {
        self.check_range(left, right)?;
        return Ok(self.query_node(0, 0, self.len() - 1, left, right));
    }

    fn query_node(&self, node: usize, l: usize, r: usize, query_l: usize, query_r: usize) -> E {
        if l == query_l && r == query_r {
            return self.slot(node).clone();
        }

        let mid = midpoint(l, r);
        if query_l >= mid + 1 {
            return self.query_node(right_child(node), mid + 1, r, query_l, query_r);
        }
        if query_r <= mid {
            return self.query_node(left_child(node), l, mid, query_l, query_r);
        }

        let left = self.query_node(left_child(node), l, mid, query_l, mid);
        let right = self.query_node(right_child(node), mid + 1, r, mid + 1, query_r);
        return self.merger.merge(&left, &right);
    }

    /// Same as [`query`](Self::query), taking any Rust range.
    ///
    /// Empty ranges have no aggregate and are rejected.
    pub fn query_range<R: RangeBounds<usize>>(&self, range: R) -> Result<E, OutOfRange> {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        };
        if start >= end {
            return Err(OutOfRange::Range {
                left: start,
                right: end.saturating_sub(1),
                len,
            });
        }
        return self.query(start, end - 1);
    }

    /// Replace the element at `index`, returning the old one. Runs in O(log n).
    pub fn set(&mut self, index: usize, item: E) -> Result<E, OutOfRange> {
        self.check_index(index)?;
        let previous = std::mem::replace(&mut self.data[index], item);

        // Walk down to the leaf, then re-merge the ancestors on the way back.
        let mut path: SmallVec<[usize; 64]> = SmallVec::new();
        let (mut node, mut l, mut r) = (0, 0, self.len() - 1);
        while l != r {
            path.push(node);
            let mid = midpoint(l, r);
            if index >= mid + 1 {
                node = right_child(node);
                l = mid + 1;
            } else {
                node = left_child(node);
                r = mid;
            }
        }

        self.tree[node] = Some(self.data[index].clone());
        for &ancestor in path.iter().rev() {
            self.pull(ancestor);
        }
        return Ok(previous);
    }

    /// Assign `item` to every position in `[left, right]`.
    ///
    /// Eager: touches each covered leaf once and every ancestor of those
    /// leaves, so it costs O(k + log n) for a range of k elements.
    pub fn batch_set(&mut self, left: usize, right: usize, item: E) -> Result<(), OutOfRange> {
        self.check_range(left, right)?;
        trace!(left, right, "assigning range");

        for slot in &mut self.data[left..=right] {
            *slot = item.clone();
        }
        self.rebuild_span(0, 0, self.len() - 1, left, right);
        return Ok(());
    }

    /// Refresh every slot whose range intersects `[span_l, span_r]`,
    /// which must lie inside `[l, r]`.
    fn rebuild_span(&mut self, node: usize, l: usize, r: usize, span_l: usize, span_r: usize) {
        if l == r {
            self.tree[node] = Some(self.data[l].clone());
            return;
        }

        let mid = midpoint(l, r);
        if span_l <= mid {
            self.rebuild_span(left_child(node), l, mid, span_l, span_r.min(mid));
        }
        if span_r > mid {
            self.rebuild_span(right_child(node), mid + 1, r, span_l.max(mid + 1), span_r);
        }
        self.pull(node);
    }
}

impl<E, M> SegmentTree<E, M> {
    /// Number of elements in the sequence.
    pub fn len(&self) -> usize {
        return self.data.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.data.is_empty();
    }

    /// Raw element at `index`, not an aggregate.
    pub fn get(&self, index: usize) -> Result<&E, OutOfRange> {
        self.check_index(index)?;
        return Ok(&self.data[index]);
    }

    /// Aggregate over the whole sequence, `None` when empty.
    pub fn total(&self) -> Option<&E> {
        return self.tree.first().and_then(Option::as_ref);
    }

    pub fn as_slice(&self) -> &[E] {
        return &self.data;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        return self.data.iter();
    }

    pub fn merger(&self) -> &M {
        return &self.merger;
    }

    /// Drop the tree and hand back the sequence.
    pub fn into_vec(self) -> Vec<E> {
        return self.data;
    }

    fn check_index(&self, index: usize) -> Result<(), OutOfRange> {
        let len = self.len();
        if index >= len {
            return Err(OutOfRange::Index { index, len });
        }
        return Ok(());
    }

    fn check_range(&self, left: usize, right: usize) -> Result<(), OutOfRange> {
        let len = self.len();
        if left > right || right >= len {
            return Err(OutOfRange::Range { left, right, len });
        }
        return Ok(());
    }
}

impl<E: fmt::Display, M> SegmentTree<E, M> {
    /// Every slot of the tree buffer, `null` where unused.
    pub fn render(&self) -> String {
        return self.to_string();
    }
}

impl<E: fmt::Display, M> fmt::Display for SegmentTree<E, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, slot) in self.tree.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match slot {
                Some(item) => write!(f, "{item}")?,
                None => f.write_str("null")?,
            }
        }
        return f.write_str("]");
    }
}

impl<'a, E, M> IntoIterator for &'a SegmentTree<E, M> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        return self.data.iter();
    }
}
