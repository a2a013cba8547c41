//! Worked scenarios and bounds handling through the public API.

use segtree::Max;
use segtree::Min;
use segtree::OutOfRange;
use segtree::SegmentTree;
use segtree::Sum;

// =============================================================================
// Worked examples
// =============================================================================

#[test]
fn sum_scenario() {
    let mut tree = SegmentTree::new(&[-2, 0, 3, -5, 2, -1], Sum);
    assert_eq!(tree.query(0, 2), Ok(1));
    assert_eq!(tree.query(2, 5), Ok(-1));
    assert_eq!(tree.query(0, 5), Ok(-3));

    assert_eq!(tree.set(4, 10), Ok(2));
    assert_eq!(tree.query(0, 5), Ok(6));
    assert_eq!(tree.query(4, 4), Ok(10));
}

#[test]
fn min_scenario() {
    let mut tree = SegmentTree::new(&[5, 3, 8, 1, 9, 2], Min);
    assert_eq!(tree.query(0, 5), Ok(1));

    assert_eq!(tree.set(3, 20), Ok(1));
    assert_eq!(tree.query(0, 5), Ok(2));
}

#[test]
fn max_with_closure_and_stock_merger_agree() {
    let items = [4, 9, 1, 7, 7, 3, 8];
    let stock = SegmentTree::new(&items, Max);
    let closure = SegmentTree::new(&items, |a: &i32, b: &i32| *a.max(b));
    for l in 0..items.len() {
        for r in l..items.len() {
            assert_eq!(stock.query(l, r), closure.query(l, r));
        }
    }
}

#[test]
fn gcd_merger() {
    fn gcd(a: &u64, b: &u64) -> u64 {
        let (mut a, mut b) = (*a, *b);
        while b != 0 {
            (a, b) = (b, a % b);
        }
        return a;
    }

    let mut tree = SegmentTree::new(&[12, 18, 24, 36, 7], gcd);
    assert_eq!(tree.query(0, 3), Ok(6));
    assert_eq!(tree.query(0, 4), Ok(1));
    tree.set(4, 30).unwrap();
    assert_eq!(tree.query(0, 4), Ok(6));
}

// =============================================================================
// Bounds
// =============================================================================

#[test]
fn bounds_rejection_leaves_tree_unchanged() {
    let mut tree = SegmentTree::new(&[-2, 0, 3, -5, 2, -1], Sum);
    let n = tree.len();
    let before: Vec<_> = (0..n).map(|i| tree.query(i, n - 1)).collect();

    // usize::MAX is where a -1 index lands.
    assert_eq!(tree.get(usize::MAX), Err(OutOfRange::Index { index: usize::MAX, len: n }));
    assert_eq!(tree.get(n), Err(OutOfRange::Index { index: n, len: n }));
    assert_eq!(
        tree.query(usize::MAX, 0),
        Err(OutOfRange::Range { left: usize::MAX, right: 0, len: n })
    );
    assert_eq!(tree.query(0, n), Err(OutOfRange::Range { left: 0, right: n, len: n }));
    assert_eq!(tree.query(3, 1), Err(OutOfRange::Range { left: 3, right: 1, len: n }));
    assert_eq!(tree.set(n, 100), Err(OutOfRange::Index { index: n, len: n }));
    assert_eq!(tree.set(usize::MAX, 100), Err(OutOfRange::Index { index: usize::MAX, len: n }));
    assert!(tree.batch_set(0, n, 100).is_err());

    let after: Vec<_> = (0..n).map(|i| tree.query(i, n - 1)).collect();
    assert_eq!(before, after);
    assert_eq!(tree.as_slice(), &[-2, 0, 3, -5, 2, -1]);
}

#[test]
fn error_messages() {
    let tree = SegmentTree::new(&[1, 2, 3], Sum);
    let err = tree.query(2, 5).unwrap_err();
    assert_eq!(err.to_string(), "range [2, 5] is out of range for length 3");
    let err = tree.get(3).unwrap_err();
    assert_eq!(err.to_string(), "index 3 is out of range for length 3");
}

// =============================================================================
// Updates
// =============================================================================

#[test]
fn idempotent_reset() {
    let mut tree = SegmentTree::new(&[5, 3, 8, 1, 9, 2], Sum);
    let n = tree.len();
    let snapshot = tree.render();
    for i in 0..n {
        let current = *tree.get(i).unwrap();
        assert_eq!(tree.set(i, current), Ok(current));
    }
    assert_eq!(tree.render(), snapshot);
}

#[test]
fn batch_set_matches_point_sets() {
    let items: Vec<i64> = (0..37).map(|i| (i * 7919) % 101 - 50).collect();
    let mut batched = SegmentTree::new(&items, Sum);
    let mut pointwise = SegmentTree::new(&items, Sum);

    batched.batch_set(5, 29, -3).unwrap();
    for i in 5..=29 {
        pointwise.set(i, -3).unwrap();
    }

    assert_eq!(batched.render(), pointwise.render());
    assert_eq!(batched.query(0, 36), pointwise.query(0, 36));
}

#[test]
fn render_after_update() {
    let mut tree = SegmentTree::new(&[1, 2, 3], Sum);
    assert_eq!(
        tree.render(),
        "[6, 3, 3, 1, 2, null, null, null, null, null, null, null]"
    );
    tree.set(0, 10).unwrap();
    assert_eq!(
        tree.render(),
        "[15, 12, 3, 10, 2, null, null, null, null, null, null, null]"
    );
}
