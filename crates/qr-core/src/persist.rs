//! Writing base64 image payloads to disk

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::DynamicImage;
use tracing::info;

use crate::error::Result;
use crate::options::OutputFormat;

/// Decode a base64 image payload and write it to `path` as `format`.
///
/// The payload may be in any format the image decoder recognizes; it is
/// re-encoded, so e.g. a JPEG payload can be saved as PNG. An existing file
/// at `path` is overwritten.
pub fn save_qr_base64_to_file(
    base64: &str,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = STANDARD.decode(base64.trim())?;
    let mut img = image::load_from_memory(&bytes)?;

    if !format.supports_alpha() && img.color().has_alpha() {
        img = DynamicImage::ImageRgb8(img.to_rgb8());
    }

    img.save_with_format(path, format.into())?;
    info!("Saved QR image to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCategory, QrError};
    use crate::{text_to_qr_base64, QrOptions};
    use tempfile::TempDir;

    #[test]
    fn test_save_png() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hello.png");

        let b64 = text_to_qr_base64("Hello, World!", &QrOptions::default()).unwrap();
        save_qr_base64_to_file(&b64, &path, OutputFormat::Png).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Png);
    }

    #[test]
    fn test_reencodes_to_requested_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("from_png.jpg");

        let b64 = text_to_qr_base64("re-encode", &QrOptions::default()).unwrap();
        save_qr_base64_to_file(&b64, &path, OutputFormat::Jpeg).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("qr.png");
        std::fs::write(&path, b"old contents").unwrap();

        let b64 = text_to_qr_base64("new", &QrOptions::default()).unwrap();
        save_qr_base64_to_file(&b64, &path, OutputFormat::Png).unwrap();

        assert!(image::open(&path).is_ok());
    }

    #[test]
    fn test_malformed_base64() {
        let temp_dir = TempDir::new().unwrap();
        let err = save_qr_base64_to_file("***", temp_dir.path().join("x.png"), OutputFormat::Png)
            .unwrap_err();
        assert!(matches!(err, QrError::Base64(_)));
        assert_eq!(err.category(), ErrorCategory::Processing);
    }

    #[test]
    fn test_not_an_image() {
        let temp_dir = TempDir::new().unwrap();
        let payload = STANDARD.encode(b"definitely not an image");
        let err = save_qr_base64_to_file(&payload, temp_dir.path().join("x.png"), OutputFormat::Png)
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Processing);
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("qr.png");

        let b64 = text_to_qr_base64("io", &QrOptions::default()).unwrap();
        let err = save_qr_base64_to_file(&b64, &path, OutputFormat::Png).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Io);
    }
}
