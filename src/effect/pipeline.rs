//! Full sample-tessellate-transform-composite pipeline
//!
//! One synchronous unit of work per invocation: the tessellation and its
//! inputs are recomputed wholesale rather than incrementally patched, so
//! repeated calls are idempotent and nothing is shared between renders.

use crate::effect::compositor::composite;
use crate::effect::parameters::FractureParameters;
use crate::geometry::{sample_points, tessellate};
use crate::io::error::Result;
use image::RgbaImage;
use rand::{SeedableRng, rngs::StdRng};

/// Render the shatter effect over a decoded source image
///
/// The seed drives shard layout only; per-shard displacement is a
/// deterministic function of the cell index, so re-rendering with the same
/// seed and parameters reproduces the surface exactly.
///
/// # Errors
///
/// Returns an error when the parameters fail validation. Tessellation of
/// sampled points cannot fail for finite inputs.
pub fn fracture_image(
    source: &RgbaImage,
    params: &FractureParameters,
    seed: u64,
) -> Result<RgbaImage> {
    params.validate()?;

    let mut rng = StdRng::seed_from_u64(seed);
    let (points, space) = sample_points(
        source.width(),
        source.height(),
        params.shard_count,
        params.elongation_x,
        params.elongation_y,
        &mut rng,
    );

    let cells = tessellate(&points, &space)?;

    Ok(composite(source, params, &points, &cells, &space))
}
