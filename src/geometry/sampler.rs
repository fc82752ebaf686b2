//! Seed point generation in a rotation-tolerant working space
//!
//! Points are sampled over a square sized to the image diagonal plus a buffer,
//! compressed per axis by the elongation factors. Stretching the compressed
//! space back out during drawing produces anisotropic cells, and the oversized
//! square guarantees full coverage under any global rotation.

use crate::io::configuration::{OVERSAMPLING_FACTOR, WORKING_SPACE_BUFFER};
use rand::{Rng, rngs::StdRng};

/// Coordinate space in which seed points and the tessellation are computed
///
/// Sized as `1.5 x diagonal(image) / elongation` per axis, large enough that
/// any rotation of the anisotropically stretched tessellation still covers
/// the visible image.
#[derive(Debug, Clone, Copy)]
pub struct WorkingSpace {
    /// Horizontal extent of the sampling rectangle
    pub effective_width: f64,
    /// Vertical extent of the sampling rectangle
    pub effective_height: f64,
}

impl WorkingSpace {
    /// Derive the working space for an image and elongation pair
    pub fn new(width: u32, height: u32, elongation_x: f64, elongation_y: f64) -> Self {
        let w = f64::from(width);
        let h = f64::from(height);
        let diagonal = w.hypot(h);
        let space_size = diagonal * WORKING_SPACE_BUFFER;
        Self {
            effective_width: space_size / elongation_x,
            effective_height: space_size / elongation_y,
        }
    }

    /// Center of the sampling rectangle
    pub const fn center(&self) -> [f64; 2] {
        [self.effective_width / 2.0, self.effective_height / 2.0]
    }
}

/// Draw uniform seed points for the tessellation
///
/// The requested shard count is oversampled by a fixed factor so the number
/// of cells visible inside the image roughly matches user intent despite most
/// of the working space lying off-screen. A `shard_count` of zero yields an
/// empty set, which downstream renders as an unmodified image.
pub fn sample_points(
    width: u32,
    height: u32,
    shard_count: u32,
    elongation_x: f64,
    elongation_y: f64,
    rng: &mut StdRng,
) -> (Vec<[f64; 2]>, WorkingSpace) {
    let space = WorkingSpace::new(width, height, elongation_x, elongation_y);

    let count = (f64::from(shard_count) * OVERSAMPLING_FACTOR).floor() as usize;
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        points.push([
            rng.random::<f64>() * space.effective_width,
            rng.random::<f64>() * space.effective_height,
        ]);
    }

    (points, space)
}
