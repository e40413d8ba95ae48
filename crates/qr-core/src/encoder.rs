//! Text to QR image encoding
//!
//! Symbol construction is done by the `qrcode` crate and serialization by
//! `image`; this module validates the request, rasterizes the module
//! matrix with the requested style, and base64-encodes the result.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageBuffer, RgbImage};
use qrcode::QrCode;
use tracing::debug;

use crate::error::{QrError, Result};
use crate::options::{OutputFormat, QrOptions};

/// Largest image side we will produce (the JPEG format limit)
pub const MAX_IMAGE_DIMENSION: u32 = 65_535;

/// Largest total pixel count we will allocate (128 Mi pixels, 384 MiB as RGB8)
pub const MAX_IMAGE_PIXELS: u64 = 1 << 27;

/// Render `text` as a QR code and return the image bytes in `options.format`,
/// base64-encoded with the standard alphabet.
pub fn text_to_qr_base64(text: &str, options: &QrOptions) -> Result<String> {
    let bytes = text_to_qr_bytes(text, options)?;
    Ok(STANDARD.encode(bytes))
}

/// Render `text` as a QR code and return the raw image bytes in `options.format`
pub fn text_to_qr_bytes(text: &str, options: &QrOptions) -> Result<Vec<u8>> {
    let img = render_qr(text, options)?;
    encode_image(&img, options.format)
}

/// Build the QR symbol for `text` and rasterize it.
///
/// The symbol uses the smallest version that fits `text` at the requested
/// error-correction level.
pub fn render_qr(text: &str, options: &QrOptions) -> Result<RgbImage> {
    if text.trim().is_empty() {
        return Err(QrError::EmptyText);
    }
    if options.box_size == 0 {
        return Err(QrError::InvalidParameter(
            "box_size must be at least 1".to_string(),
        ));
    }

    let code = QrCode::with_error_correction_level(text, options.error_correction.into())?;
    let modules = code.width() as u32;
    let side = image_side(modules, options.border, options.box_size)?;

    debug!(
        "Rendering QR version {:?} ({} modules) at {}x{} px",
        code.version(),
        modules,
        side,
        side
    );

    let fill = options.fill_color.to_rgb();
    let mut img: RgbImage = ImageBuffer::from_pixel(side, side, options.back_color.to_rgb());

    let colors = code.to_colors();
    let offset = options.border * options.box_size;
    for (i, color) in colors.iter().enumerate() {
        if *color != qrcode::Color::Dark {
            continue;
        }
        let x = (i as u32 % modules) * options.box_size + offset;
        let y = (i as u32 / modules) * options.box_size + offset;
        for dy in 0..options.box_size {
            for dx in 0..options.box_size {
                img.put_pixel(x + dx, y + dy, fill);
            }
        }
    }

    Ok(img)
}

/// Serialize an RGB image in the given format
pub fn encode_image(img: &RgbImage, format: OutputFormat) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, format.into())?;
    Ok(buffer.into_inner())
}

/// Pixel side of the rendered image: `(modules + 2 * border) * box_size`.
///
/// Rejected before allocation when the side or the total pixel count is
/// over budget.
fn image_side(modules: u32, border: u32, box_size: u32) -> Result<u32> {
    let side = border
        .checked_mul(2)
        .and_then(|b| b.checked_add(modules))
        .and_then(|m| m.checked_mul(box_size))
        .filter(|side| *side <= MAX_IMAGE_DIMENSION)
        .ok_or_else(|| {
            QrError::InvalidParameter(format!(
                "image side exceeds {} px (box_size={}, border={})",
                MAX_IMAGE_DIMENSION, box_size, border
            ))
        })?;

    u64::from(side)
        .checked_mul(u64::from(side))
        .filter(|pixels| *pixels <= MAX_IMAGE_PIXELS)
        .map(|_| side)
        .ok_or_else(|| {
            QrError::InvalidParameter(format!(
                "image of {}x{} px exceeds the {} pixel budget (box_size={}, border={})",
                side, side, MAX_IMAGE_PIXELS, box_size, border
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::error::ErrorCategory;
    use crate::options::ErrorCorrection;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn decode(b64: &str) -> Vec<u8> {
        STANDARD.decode(b64).unwrap()
    }

    #[test]
    fn test_hello_world_is_png() {
        let b64 = text_to_qr_base64("Hello, World!", &QrOptions::default()).unwrap();
        let bytes = decode(&b64);
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_output_matches_requested_format() {
        for (format, expected) in [
            (OutputFormat::Png, image::ImageFormat::Png),
            (OutputFormat::Jpeg, image::ImageFormat::Jpeg),
            (OutputFormat::Gif, image::ImageFormat::Gif),
            (OutputFormat::Bmp, image::ImageFormat::Bmp),
            (OutputFormat::WebP, image::ImageFormat::WebP),
        ] {
            let opts = QrOptions::default().with_format(format);
            let bytes = decode(&text_to_qr_base64("https://www.example.com", &opts).unwrap());
            assert_eq!(image::guess_format(&bytes).unwrap(), expected);
            assert!(image::load_from_memory(&bytes).is_ok());
        }
    }

    #[test]
    fn test_unicode_text() {
        let b64 = text_to_qr_base64("你好，世界！这是一个QR码测试", &QrOptions::default()).unwrap();
        assert!(image::load_from_memory(&decode(&b64)).is_ok());
    }

    #[test]
    fn test_deterministic() {
        let opts = QrOptions::default()
            .with_box_size(15)
            .with_border(2)
            .with_fill_color(Color::new(0, 0, 139))
            .with_back_color(Color::new(211, 211, 211));
        let a = text_to_qr_base64("Custom Style QR Code", &opts).unwrap();
        let b = text_to_qr_base64("Custom Style QR Code", &opts).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_blank_text_is_input_error() {
        for text in ["", "   ", "\n\t"] {
            let err = text_to_qr_base64(text, &QrOptions::default()).unwrap_err();
            assert!(matches!(err, QrError::EmptyText));
            assert_eq!(err.category(), ErrorCategory::InvalidInput);
        }
    }

    #[test]
    fn test_zero_box_size_rejected() {
        let opts = QrOptions::default().with_box_size(0);
        let err = render_qr("hi", &opts).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_oversized_image_rejected() {
        let opts = QrOptions::default().with_box_size(10_000);
        let err = render_qr("hi", &opts).unwrap_err();
        assert!(matches!(err, QrError::InvalidParameter(_)));
    }

    #[test]
    fn test_pixel_budget() {
        // 63 000 px fits under the side limit but not the pixel budget
        let err = image_side(21, 0, 3000).unwrap_err();
        assert!(matches!(err, QrError::InvalidParameter(_)));
        assert!(err.to_string().contains("pixel budget"));

        // Largest symbol at the tool's largest box_size and border
        assert_eq!(image_side(177, 20, 50).unwrap(), 10_850);
    }

    #[test]
    fn test_over_budget_render_is_input_error() {
        let opts = QrOptions::default().with_box_size(3000).with_border(0);
        let err = render_qr("hi", &opts).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_data_too_long_is_processing_error() {
        let text = "x".repeat(8000);
        let opts = QrOptions::default().with_error_correction(ErrorCorrection::H);
        let err = render_qr(&text, &opts).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Processing);
    }

    #[test]
    fn test_image_geometry() {
        let opts = QrOptions::default().with_box_size(3).with_border(2);
        let img = render_qr("geometry", &opts).unwrap();
        let modules = QrCode::with_error_correction_level("geometry", qrcode::EcLevel::M)
            .unwrap()
            .width() as u32;
        assert_eq!(img.width(), (modules + 4) * 3);
        assert_eq!(img.height(), img.width());
        // Quiet zone
        assert_eq!(*img.get_pixel(0, 0), Color::WHITE.to_rgb());
        // Top-left finder pattern starts with a dark module
        assert_eq!(*img.get_pixel(6, 6), Color::BLACK.to_rgb());
    }

    #[test]
    fn test_no_border_starts_with_fill() {
        let red = Color::new(255, 0, 0);
        let opts = QrOptions::default()
            .with_box_size(1)
            .with_border(0)
            .with_fill_color(red);
        let img = render_qr("edge", &opts).unwrap();
        assert_eq!(*img.get_pixel(0, 0), red.to_rgb());
    }

    #[test]
    fn test_higher_error_correction_never_shrinks() {
        let low = render_qr("capacity check", &QrOptions::default().with_error_correction(ErrorCorrection::L))
            .unwrap();
        let high = render_qr("capacity check", &QrOptions::default().with_error_correction(ErrorCorrection::H))
            .unwrap();
        assert!(high.width() >= low.width());
    }
}
