//! Pipeline constants and runtime configuration defaults

// Empirical constants tuned for visual density; the working space square is
// sized off the image diagonal and most of it lies outside the visible frame,
// so the requested shard count is oversampled to compensate.
/// Working space side length as a multiple of the image diagonal
pub const WORKING_SPACE_BUFFER: f64 = 1.5;
/// Seed point multiplier compensating for off-screen working space area
pub const OVERSAMPLING_FACTOR: f64 = 2.5;

// Per-shard pseudo-random derivation
/// Stride multiplied into the cell index to derive the per-shard seed
pub const SHARD_SEED_STRIDE: f64 = 1337.0;
/// Magnitude used to fold a trigonometric value into a unit scalar
pub const SEED_FOLD_MAGNITUDE: f64 = 10_000.0;
/// Per-unit-intensity contribution of the shard scale jitter
pub const JITTER_SCALE_STEP: f64 = 0.02;
/// Per-unit-intensity contribution of the shard offset jitter, in pixels
pub const JITTER_OFFSET_BOOST: f64 = 15.0;

// Output settings
/// JPEG encoding quality for exported surfaces
pub const JPEG_QUALITY: u8 = 90;
/// Suffix added to output filenames in batch mode
pub const OUTPUT_SUFFIX: &str = "_fractured";
/// File name used for the share attachment and the download fallback
pub const SHARE_FILE_NAME: &str = "fractured-image.jpg";
/// Title attached to share requests
pub const SHARE_TITLE: &str = "Fractured Image";
/// Descriptive text attached to share requests
pub const SHARE_TEXT: &str = "Check out this fractured image!";

/// Image extensions accepted when scanning a directory target
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

// Default values for configurable parameters, matching an untouched control
// panel: zero shards passes the source image through unmodified.
/// Default shard count
pub const DEFAULT_SHARD_COUNT: u32 = 0;
/// Default displacement intensity
pub const DEFAULT_INTENSITY: f64 = 0.0;
/// Default gap stroke width
pub const DEFAULT_GAP: f64 = 0.0;
/// Default stability percentage
pub const DEFAULT_STABILITY: f64 = 100.0;
/// Default per-axis elongation
pub const DEFAULT_ELONGATION: f64 = 1.0;
/// Default global rotation in degrees
pub const DEFAULT_ROTATION: f64 = 0.0;
/// Default scatter range in degrees
pub const DEFAULT_SCATTER: f64 = 0.0;
/// Default gap stroke color
pub const DEFAULT_GAP_COLOR: &str = "#000000";
