//! Voronoi shatter effect for raster images
//!
//! The pipeline partitions the image plane into irregular polygonal shards via
//! a Voronoi tessellation, then independently displaces, scales and rotates
//! each shard to simulate a fractured glass look, with configurable gap lines
//! between shards.

#![forbid(unsafe_code)]

/// Shard transforms, parameters and raster compositing
pub mod effect;
/// Seed point sampling, polygon primitives and Voronoi construction
pub mod geometry;
/// Input/output operations, CLI and error handling
pub mod io;

pub use effect::pipeline::fracture_image;
pub use io::error::{FractureError, Result};
