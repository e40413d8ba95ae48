//! Error types for qr-core

use thiserror::Error;

/// Result type alias for QR operations
pub type Result<T> = std::result::Result<T, QrError>;

/// Broad classification of a [`QrError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller supplied bad input; retrying with the same input will fail again
    InvalidInput,
    /// The QR, image, or base64 library rejected the data
    Processing,
    /// Reading or writing the filesystem failed
    Io,
}

/// QR error types
#[derive(Error, Debug)]
pub enum QrError {
    #[error("Input text cannot be empty")]
    EmptyText,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("Image processing failed: {0}")]
    Image(image::ImageError),

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QrError {
    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyText
            | Self::InvalidParameter(_)
            | Self::InvalidColor(_)
            | Self::UnsupportedFormat(_) => ErrorCategory::InvalidInput,
            Self::Encode(_) | Self::Image(_) | Self::Base64(_) => ErrorCategory::Processing,
            Self::Io(_) => ErrorCategory::Io,
        }
    }

    /// Whether the error was caused by caller input
    pub fn is_invalid_input(&self) -> bool {
        self.category() == ErrorCategory::InvalidInput
    }
}

impl From<image::ImageError> for QrError {
    fn from(err: image::ImageError) -> Self {
        // The image crate wraps filesystem failures; surface those as IO.
        match err {
            image::ImageError::IoError(io) => Self::Io(io),
            other => Self::Image(other),
        }
    }
}
