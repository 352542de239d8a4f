//! Approximate point tours from a recursive snowflake subdivision.
//!
//! A bounding triangle is split in two through the midpoint of its `AC`
//! edge, and every point goes to the child whose centroid is nearer. Repeating
//! this until each triangle holds at most one point and reading the
//! single-point triangles off depth-first yields a tour in which nearby
//! points tend to be adjacent, much like a space-filling curve ordering.
//!
//! # Example
//!
//! ```
//! use snowflake_tour::{BoundingRegion, Point};
//!
//! let region = BoundingRegion::square(10.0);
//! let points = vec![Point::new(9.0, 1.0), Point::new(1.0, 8.0), Point::new(8.0, 2.0)];
//!
//! let tour = region.tour(points);
//! assert_eq!(tour.len(), 3);
//! ```
//!
//! # Architecture
//!
//! - [`Triangle`] and the free functions in [`point`]: geometric primitives
//! - [`Zone`]: a triangle with the points it currently owns
//! - [`Split`]: the fixed splitting rule
//! - [`Explorer`] / [`explode`]: the depth-first traversal
//! - [`ZoneVisitor`]: receives leaves in tour order

mod bounds;
mod error;
mod explorer;
pub mod point;
mod split;
mod triangle;
mod visitor;
mod zone;

pub use bounds::BoundingRegion;
pub use error::{TourError, TourResult};
pub use explorer::{ExploreStats, Explorer, explode};
pub use point::{Point, average, centroid, distance, midpoint, tour_length};
pub use split::{Split, split};
pub use triangle::Triangle;
pub use visitor::{CollectingVisitor, FnVisitor, ZoneVisitor};
pub use zone::{Occupancy, Zone};
