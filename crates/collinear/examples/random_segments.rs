//! Sample a point set with a few planted lines and print the maximal segments.
//!
//! Usage:
//!   cargo run -p collinear --example random_segments -- [n] [seed]
//!
//! Debug-level events from the detector are printed to stderr.

use collinear::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<(), CollinearError> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    let mut args = std::env::args().skip(1);
    let n: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(200);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(7);

    let base = random_points(n, Bounds::default(), ReplayToken { seed, index: 0 })
        .unwrap_or_default();
    let points = with_planted_line(&base, Point::new(1000, 1000), (250, 125), 7)
        .and_then(|pts| with_planted_line(&pts, Point::new(20000, 300), (0, 900), 4))
        .unwrap_or(base);

    let fast = FastCollinearPoints::new(&points)?;
    tracing::info!(
        points = points.len(),
        segments = fast.number_of_segments(),
        "detected"
    );
    for segment in fast.segments() {
        println!("{segment}");
    }
    Ok(())
}
