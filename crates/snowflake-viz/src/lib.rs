//! Sampling, rendering and visualization around the snowflake tour.

use rand::SeedableRng;
use rand::rngs::StdRng;
use snowflake_tour::{BoundingRegion, ExploreStats, FnVisitor, Point, TourError, Triangle};
use thiserror::Error;
use tracing::info;

pub mod config;
pub mod draw;
pub mod playback;
pub mod render;
pub mod sampling;

pub use config::{ConfigError, TourConfig};
pub use draw::{ScreenMapping, draw_path, draw_region, triangle_color};
pub use playback::TourPlayback;
pub use render::render_text;
pub use sampling::{sample_count, sample_points};

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tour(#[from] TourError),
}

/// A sampled point set and the tour through it.
#[derive(Debug, Clone)]
pub struct TourRun {
    pub region: BoundingRegion,
    pub sampled: usize,
    pub tour: Vec<Point>,
    /// Leaf triangle of each tour stop, in tour order.
    pub leaves: Vec<Triangle>,
    pub stats: ExploreStats,
}

/// Samples points as configured and orders them into a tour.
#[tracing::instrument(skip_all, fields(seed = config.seed))]
pub fn run(config: &TourConfig) -> Result<TourRun, RunError> {
    let region = config.region()?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let count = sample_count(&mut rng, config.max_points);
    let points = sample_points(&mut rng, count, &region, config.precision);
    let sampled = points.len();

    let mut tour = Vec::with_capacity(sampled);
    let mut leaves = Vec::with_capacity(sampled);
    let mut visitor = FnVisitor::new(|triangle: &Triangle, point: Point| {
        leaves.push(*triangle);
        tour.push(point);
    });
    let stats = config
        .explorer()
        .explore(region.root_zone(points), &mut visitor)?;

    info!(
        points = sampled,
        depth = stats.max_depth_reached,
        "tour complete"
    );

    Ok(TourRun {
        region,
        sampled,
        tour,
        leaves,
        stats,
    })
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_target(false)
        .init();
}
