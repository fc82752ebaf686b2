//! JPEG export with share-sheet fallback
//!
//! The composited surface is encoded once and either handed to a platform
//! share target or written straight to disk. Share failures are recovered
//! locally: a rejected, cancelled or unavailable share silently falls back to
//! the download path, so export never surfaces a share error to the caller.

use crate::io::configuration::{JPEG_QUALITY, SHARE_FILE_NAME, SHARE_TEXT, SHARE_TITLE};
use crate::io::error::{FractureError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage, RgbaImage};
use std::fmt;
use std::path::{Path, PathBuf};

/// Why a share attempt did not complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareError {
    /// No share capability exists, or it does not accept file attachments
    Unavailable,
    /// The user dismissed the share action
    Cancelled,
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "share capability unavailable"),
            Self::Cancelled => write!(f, "share cancelled by user"),
        }
    }
}

/// Packaged JPEG attachment handed to a share target
#[derive(Debug, Clone, Copy)]
pub struct ShareRequest<'a> {
    /// Suggested attachment file name
    pub file_name: &'a str,
    /// Share sheet title
    pub title: &'a str,
    /// Descriptive text accompanying the attachment
    pub text: &'a str,
    /// Encoded JPEG bytes
    pub bytes: &'a [u8],
}

/// Destination capable of receiving a packaged share request
pub trait ShareTarget {
    /// Present the request to the user
    ///
    /// # Errors
    ///
    /// Returns a [`ShareError`] when the capability is missing or the user
    /// cancels; the exporter recovers by falling back to a file download.
    fn share(&self, request: &ShareRequest<'_>) -> std::result::Result<(), ShareError>;
}

// JPEG has no alpha channel; drop it rather than blending, matching a canvas
// toDataURL('image/jpeg') export of an opaque surface.
fn flatten_alpha(surface: &RgbaImage) -> RgbImage {
    let mut rgb = RgbImage::new(surface.width(), surface.height());
    for (x, y, pixel) in surface.enumerate_pixels() {
        let [r, g, b, _] = pixel.0;
        rgb.put_pixel(x, y, Rgb([r, g, b]));
    }
    rgb
}

/// Encode the surface as JPEG bytes at the export quality
///
/// # Errors
///
/// Returns [`FractureError::ImageExport`] when encoding fails.
pub fn encode_jpeg(surface: &RgbaImage) -> Result<Vec<u8>> {
    let rgb = flatten_alpha(surface);
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(|source| FractureError::ImageExport {
            path: PathBuf::from(SHARE_FILE_NAME),
            source,
        })?;
    Ok(bytes)
}

/// Encode the surface and write it to `path`, creating parent directories
///
/// # Errors
///
/// Returns an error when encoding fails or the file cannot be written.
pub fn write_jpeg(surface: &RgbaImage, path: &Path) -> Result<()> {
    let bytes = encode_jpeg(surface)?;
    write_bytes(&bytes, path)
}

/// Export the surface, preferring the share target when one is present
///
/// Returns the path of the written file, or `None` when the share target
/// accepted the request and nothing touched the filesystem. Share failures
/// never propagate; they trigger the download fallback into `download_dir`
/// under the canonical attachment name.
///
/// # Errors
///
/// Returns an error when encoding fails or the fallback file cannot be
/// written.
pub fn export(
    surface: &RgbaImage,
    target: Option<&dyn ShareTarget>,
    download_dir: &Path,
) -> Result<Option<PathBuf>> {
    let bytes = encode_jpeg(surface)?;

    if let Some(target) = target {
        let request = ShareRequest {
            file_name: SHARE_FILE_NAME,
            title: SHARE_TITLE,
            text: SHARE_TEXT,
            bytes: &bytes,
        };
        if target.share(&request).is_ok() {
            return Ok(None);
        }
        // Cancelled or unavailable: fall through to the download path
    }

    let path = download_dir.join(SHARE_FILE_NAME);
    write_bytes(&bytes, &path)?;
    Ok(Some(path))
}

fn write_bytes(bytes: &[u8], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| FractureError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }
    std::fs::write(path, bytes).map_err(|source| FractureError::FileSystem {
        path: path.to_path_buf(),
        operation: "write image",
        source,
    })
}
