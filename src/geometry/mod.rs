//! Geometric primitives for the shatter pipeline
//!
//! Provides uniform seed point sampling over an oversized working space,
//! convex polygon operations, and bounded Voronoi cell construction.

/// Convex polygon operations used by cell construction and compositing
pub mod polygon;
/// Seed point generation and working space derivation
pub mod sampler;
/// Bounded Voronoi tessellation built on a Delaunay triangulation
pub mod voronoi;

pub use sampler::{WorkingSpace, sample_points};
pub use voronoi::tessellate;
