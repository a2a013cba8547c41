use segtree::OutOfRange;
use segtree::SegmentTree;
use segtree::Sum;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), OutOfRange> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let nums = [-2, 0, 3, -5, 2, -1];
    let mut tree = SegmentTree::new(&nums, Sum);
    println!("{tree}");

    println!("{}", tree.query(0, 2)?);
    println!("{}", tree.query(2, 5)?);
    println!("{}", tree.query(0, 5)?);

    let previous = tree.set(4, 10)?;
    info!(index = 4, previous, "replaced element");
    println!("{}", tree.query(0, 5)?);

    return Ok(());
}
