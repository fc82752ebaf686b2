//! Effect parameter snapshot and validation

use crate::io::configuration::{
    DEFAULT_ELONGATION, DEFAULT_GAP, DEFAULT_INTENSITY, DEFAULT_ROTATION, DEFAULT_SCATTER,
    DEFAULT_SHARD_COUNT, DEFAULT_STABILITY,
};
use crate::io::error::{Result, invalid_parameter};
use image::Rgba;

/// Immutable parameter snapshot consumed once per render pass
#[derive(Debug, Clone)]
pub struct FractureParameters {
    /// Approximate number of shards visible inside the image
    pub shard_count: u32,
    /// Displacement strength; zero leaves unstable shards in place
    pub intensity: f64,
    /// Stroke width of the gap lines between displaced shards, in pixels
    pub gap: f64,
    /// Percentage chance in `[0, 100]` that a shard stays undisplaced
    pub stability: f64,
    /// Horizontal stretch factor applied to the tessellation
    pub elongation_x: f64,
    /// Vertical stretch factor applied to the tessellation
    pub elongation_y: f64,
    /// Global rotation of the tessellation in degrees, `[0, 360)`
    pub rotation: f64,
    /// Maximum per-shard rotation jitter in degrees, `[0, 180]`
    pub scatter: f64,
    /// Color of the gap strokes
    pub gap_color: Rgba<u8>,
}

impl Default for FractureParameters {
    fn default() -> Self {
        Self {
            shard_count: DEFAULT_SHARD_COUNT,
            intensity: DEFAULT_INTENSITY,
            gap: DEFAULT_GAP,
            stability: DEFAULT_STABILITY,
            elongation_x: DEFAULT_ELONGATION,
            elongation_y: DEFAULT_ELONGATION,
            rotation: DEFAULT_ROTATION,
            scatter: DEFAULT_SCATTER,
            gap_color: Rgba([0, 0, 0, 255]),
        }
    }
}

impl FractureParameters {
    /// Check that every field lies in its documented range
    ///
    /// # Errors
    ///
    /// Returns [`crate::FractureError::InvalidParameter`] naming the first
    /// field that is non-finite or out of range.
    pub fn validate(&self) -> Result<()> {
        if !self.intensity.is_finite() || self.intensity < 0.0 {
            return Err(invalid_parameter(
                "intensity",
                &self.intensity,
                &"must be a finite value >= 0",
            ));
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(invalid_parameter(
                "gap",
                &self.gap,
                &"must be a finite value >= 0",
            ));
        }
        if !self.stability.is_finite() || !(0.0..=100.0).contains(&self.stability) {
            return Err(invalid_parameter(
                "stability",
                &self.stability,
                &"must lie in [0, 100]",
            ));
        }
        if !self.elongation_x.is_finite() || self.elongation_x <= 0.0 {
            return Err(invalid_parameter(
                "elongation_x",
                &self.elongation_x,
                &"must be a finite value > 0",
            ));
        }
        if !self.elongation_y.is_finite() || self.elongation_y <= 0.0 {
            return Err(invalid_parameter(
                "elongation_y",
                &self.elongation_y,
                &"must be a finite value > 0",
            ));
        }
        if !self.rotation.is_finite() || !(0.0..360.0).contains(&self.rotation) {
            return Err(invalid_parameter(
                "rotation",
                &self.rotation,
                &"must lie in [0, 360)",
            ));
        }
        if !self.scatter.is_finite() || !(0.0..=180.0).contains(&self.scatter) {
            return Err(invalid_parameter(
                "scatter",
                &self.scatter,
                &"must lie in [0, 180]",
            ));
        }
        Ok(())
    }
}

/// Parse a `#rrggbb` hex string into an opaque color
///
/// The leading `#` is optional.
///
/// # Errors
///
/// Returns [`crate::FractureError::InvalidParameter`] when the input is not
/// six hexadecimal digits.
pub fn parse_hex_color(input: &str) -> Result<Rgba<u8>> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid_parameter(
            "gap_color",
            &input,
            &"expected a color of the form #rrggbb",
        ));
    }

    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0)
    };

    Ok(Rgba([channel(0..2), channel(2..4), channel(4..6), 255]))
}
