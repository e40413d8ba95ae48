//! # qr-core
//!
//! QR code rendering for the QR Code MCP server:
//! - Text to QR image, returned as base64 (PNG, JPEG, GIF, BMP, WebP)
//! - Data URL formatting for embedding in markup
//! - Saving base64 image payloads to files
//!
//! Symbol construction is delegated to the `qrcode` crate and raster
//! serialization to `image`.

pub mod color;
pub mod data_url;
pub mod encoder;
pub mod error;
pub mod options;
pub mod persist;

pub use color::Color;
pub use data_url::get_data_url;
pub use encoder::{
    encode_image, render_qr, text_to_qr_base64, text_to_qr_bytes, MAX_IMAGE_DIMENSION,
    MAX_IMAGE_PIXELS,
};
pub use error::{ErrorCategory, QrError, Result};
pub use options::{ErrorCorrection, OutputFormat, QrOptions};
pub use persist::save_qr_base64_to_file;
