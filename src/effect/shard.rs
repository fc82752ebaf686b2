//! Deterministic per-shard state and coordinate transforms
//!
//! Shard perturbations are derived from trigonometric functions of the cell
//! index rather than a stateful generator, so the same index under the same
//! parameters always yields bit-identical state. This keeps renders
//! reproducible while scrubbing downstream controls: adjusting intensity,
//! stability or scatter never reshuffles which shard moves where.

use crate::effect::parameters::FractureParameters;
use crate::geometry::sampler::WorkingSpace;
use crate::io::configuration::{
    JITTER_OFFSET_BOOST, JITTER_SCALE_STEP, SEED_FOLD_MAGNITUDE, SHARD_SEED_STRIDE,
};

/// Fold a value into `[0, 1)` the way a hash would
///
/// Flooring rather than truncating keeps negative inputs inside the unit
/// interval.
fn unit_fract(value: f64) -> f64 {
    value - value.floor()
}

/// Derived perturbation of a single shard
///
/// A pure function of the cell index and the current parameters; no entropy,
/// no cross-shard dependency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShardState {
    /// Whether the shard renders undisplaced
    pub is_stable: bool,
    /// Uniform scale applied around the shard's seed point
    pub scale: f64,
    /// Screen-space offset of the shard's image content
    pub translation: [f64; 2],
    /// Per-shard rotation jitter in radians
    pub scatter_rotation: f64,
}

impl ShardState {
    /// Derive the state of shard `index` under the given parameters
    pub fn derive(index: usize, params: &FractureParameters) -> Self {
        let seed = index as f64 * SHARD_SEED_STRIDE;
        let rand1 = unit_fract(seed.sin() * SEED_FOLD_MAGNITUDE);
        let rand2 = unit_fract(seed.cos() * SEED_FOLD_MAGNITUDE);
        let rand3 = (seed * 0.5).sin().abs();

        let is_stable = rand3 < params.stability / 100.0;
        let scatter_rotation = (seed * 2.0).sin() * params.scatter.to_radians();

        let scale = (rand1 * JITTER_SCALE_STEP).mul_add(params.intensity, 1.0);
        let translation = [
            (rand1 - 0.5) * params.intensity * JITTER_OFFSET_BOOST,
            (rand2 - 0.5) * params.intensity * JITTER_OFFSET_BOOST,
        ];

        Self {
            is_stable,
            scale,
            translation,
            scatter_rotation,
        }
    }
}

/// Map from working space to output image space
///
/// Recenter on the working space center, stretch per axis by the elongation
/// factors, rotate by the global rotation, then translate to the image
/// center. Scaling precedes rotation; the two do not commute. Both the clip
/// polygon and the gap stroke run through this same map so they always
/// coincide exactly.
#[derive(Debug, Clone, Copy)]
pub struct CellTransform {
    space_center: [f64; 2],
    image_center: [f64; 2],
    elongation: [f64; 2],
    rotation_cos: f64,
    rotation_sin: f64,
}

impl CellTransform {
    /// Build the map for the current parameters, working space and image size
    pub fn new(
        params: &FractureParameters,
        space: &WorkingSpace,
        image_width: u32,
        image_height: u32,
    ) -> Self {
        let rotation = params.rotation.to_radians();
        Self {
            space_center: space.center(),
            image_center: [f64::from(image_width) / 2.0, f64::from(image_height) / 2.0],
            elongation: [params.elongation_x, params.elongation_y],
            rotation_cos: rotation.cos(),
            rotation_sin: rotation.sin(),
        }
    }

    /// Transform a working-space point into image space
    pub fn apply(&self, point: [f64; 2]) -> [f64; 2] {
        let scaled_x = (point[0] - self.space_center[0]) * self.elongation[0];
        let scaled_y = (point[1] - self.space_center[1]) * self.elongation[1];

        let rotated_x = scaled_x * self.rotation_cos - scaled_y * self.rotation_sin;
        let rotated_y = scaled_x * self.rotation_sin + scaled_y * self.rotation_cos;

        [
            rotated_x + self.image_center[0],
            rotated_y + self.image_center[1],
        ]
    }
}

/// Shard-local jitter applied to the image content beneath the clip polygon
///
/// Composes, around the shard's transformed seed point: rotate by the scatter
/// jitter, scale uniformly, then offset by the translation. The clip polygon
/// itself is never jittered, so the shard appears to slide and turn within
/// its own cell boundary.
#[derive(Debug, Clone, Copy)]
pub struct JitterTransform {
    center: [f64; 2],
    translation: [f64; 2],
    scale: f64,
    rotation_cos: f64,
    rotation_sin: f64,
}

impl JitterTransform {
    /// Build the jitter map for a shard pivoting on its seed screen position
    pub fn new(state: &ShardState, center: [f64; 2]) -> Self {
        Self {
            center,
            translation: state.translation,
            scale: state.scale,
            rotation_cos: state.scatter_rotation.cos(),
            rotation_sin: state.scatter_rotation.sin(),
        }
    }

    /// Map an output pixel position back to the source image position
    ///
    /// The compositor samples the source through this inverse so each covered
    /// pixel shows where the jittered image content lands.
    pub fn unapply(&self, point: [f64; 2]) -> [f64; 2] {
        let offset_x = point[0] - self.center[0];
        let offset_y = point[1] - self.center[1];

        let rotated_x = (offset_x * self.rotation_cos + offset_y * self.rotation_sin) / self.scale;
        let rotated_y = (-offset_x * self.rotation_sin + offset_y * self.rotation_cos) / self.scale;

        [
            rotated_x + self.center[0] - self.translation[0],
            rotated_y + self.center[1] - self.translation[1],
        ]
    }
}
