//! Shard transforms, parameters and raster compositing

/// Raster compositing of transformed shards onto the output surface
pub mod compositor;
/// Effect parameter snapshot and validation
pub mod parameters;
/// Full sample-tessellate-transform-composite pipeline
pub mod pipeline;
/// Deterministic per-shard state and coordinate transforms
pub mod shard;

pub use compositor::composite;
pub use parameters::FractureParameters;
pub use shard::{CellTransform, JitterTransform, ShardState};
