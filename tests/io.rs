//! Validates JPEG export, the share fallback contract and error reporting

use fracture::FractureError;
use fracture::io::export::{ShareError, ShareRequest, ShareTarget, encode_jpeg, export, write_jpeg};
use image::{Rgba, RgbaImage};
use std::cell::RefCell;

fn test_surface() -> RgbaImage {
    RgbaImage::from_fn(32, 24, |x, y| {
        Rgba([(x * 8) as u8, (y * 10) as u8, 128, 255])
    })
}

/// Share target that always refuses, driving the download fallback
struct UnavailableTarget;

impl ShareTarget for UnavailableTarget {
    fn share(&self, _request: &ShareRequest<'_>) -> Result<(), ShareError> {
        Err(ShareError::Unavailable)
    }
}

/// Share target that accepts and records what it was handed
#[derive(Default)]
struct RecordingTarget {
    seen: RefCell<Vec<(String, String, usize)>>,
}

impl ShareTarget for RecordingTarget {
    fn share(&self, request: &ShareRequest<'_>) -> Result<(), ShareError> {
        self.seen.borrow_mut().push((
            request.file_name.to_string(),
            request.title.to_string(),
            request.bytes.len(),
        ));
        Ok(())
    }
}

#[test]
fn test_encode_jpeg_produces_decodable_bytes() {
    let surface = test_surface();
    let bytes = encode_jpeg(&surface).unwrap();

    // JPEG start-of-image marker
    assert_eq!(bytes.first(), Some(&0xff));
    assert_eq!(bytes.get(1), Some(&0xd8));

    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.width(), surface.width());
    assert_eq!(decoded.height(), surface.height());
}

#[test]
fn test_write_jpeg_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("out.jpg");

    write_jpeg(&test_surface(), &path).unwrap();
    assert!(path.is_file());

    let decoded = image::open(&path).unwrap();
    assert_eq!(decoded.width(), 32);
}

#[test]
fn test_export_prefers_share_target() {
    let dir = tempfile::tempdir().unwrap();
    let target = RecordingTarget::default();

    let written = export(&test_surface(), Some(&target), dir.path()).unwrap();
    assert!(written.is_none(), "accepted share must not touch the disk");
    assert!(!dir.path().join("fractured-image.jpg").exists());

    let seen = target.seen.borrow();
    let (file_name, title, byte_count) = seen.first().unwrap();
    assert_eq!(file_name, "fractured-image.jpg");
    assert_eq!(title, "Fractured Image");
    assert!(*byte_count > 0);
}

#[test]
fn test_export_falls_back_to_download() {
    // A rejected share capability must silently become a download, never an
    // error
    let dir = tempfile::tempdir().unwrap();

    let written = export(&test_surface(), Some(&UnavailableTarget), dir.path())
        .unwrap()
        .unwrap();
    assert_eq!(
        written.file_name().unwrap().to_string_lossy(),
        "fractured-image.jpg"
    );
    assert!(written.is_file());
}

#[test]
fn test_export_without_target_downloads() {
    let dir = tempfile::tempdir().unwrap();

    let written = export(&test_surface(), None, dir.path()).unwrap().unwrap();
    assert_eq!(written, dir.path().join("fractured-image.jpg"));
}

#[test]
fn test_error_messages_name_the_parameter() {
    let err = fracture::io::error::invalid_parameter("stability", &150.0, &"must lie in [0, 100]");
    let FractureError::InvalidParameter { parameter, .. } = &err else {
        unreachable!("expected InvalidParameter");
    };
    assert_eq!(*parameter, "stability");
    assert!(err.to_string().contains("stability"));
}
