//! QR rendering options

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::QrError;

/// QR error-correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorCorrection {
    /// ~7% of codewords can be restored
    L,
    /// ~15% of codewords can be restored
    #[default]
    M,
    /// ~25% of codewords can be restored
    Q,
    /// ~30% of codewords can be restored
    H,
}

impl From<ErrorCorrection> for qrcode::EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => qrcode::EcLevel::L,
            ErrorCorrection::M => qrcode::EcLevel::M,
            ErrorCorrection::Q => qrcode::EcLevel::Q,
            ErrorCorrection::H => qrcode::EcLevel::H,
        }
    }
}

impl FromStr for ErrorCorrection {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(QrError::InvalidParameter(format!(
                "unknown error correction level: {}",
                s
            ))),
        }
    }
}

/// Raster formats a QR image can be serialized to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
    Gif,
    Bmp,
    WebP,
}

impl OutputFormat {
    /// Canonical uppercase tag, e.g. `PNG`
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Gif => "GIF",
            Self::Bmp => "BMP",
            Self::WebP => "WEBP",
        }
    }

    /// MIME type, e.g. `image/png`
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
            Self::WebP => "image/webp",
        }
    }

    /// Whether the encoder can store an alpha channel
    pub fn supports_alpha(&self) -> bool {
        !matches!(self, Self::Jpeg | Self::Bmp)
    }
}

impl From<OutputFormat> for image::ImageFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::Jpeg => image::ImageFormat::Jpeg,
            OutputFormat::Gif => image::ImageFormat::Gif,
            OutputFormat::Bmp => image::ImageFormat::Bmp,
            OutputFormat::WebP => image::ImageFormat::WebP,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PNG" => Ok(Self::Png),
            "JPEG" | "JPG" => Ok(Self::Jpeg),
            "GIF" => Ok(Self::Gif),
            "BMP" => Ok(Self::Bmp),
            "WEBP" => Ok(Self::WebP),
            _ => Err(QrError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl AsRef<str> for OutputFormat {
    fn as_ref(&self) -> &str {
        self.tag()
    }
}

/// Style and output parameters for a QR image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrOptions {
    pub error_correction: ErrorCorrection,
    /// Pixel width/height of one module
    pub box_size: u32,
    /// Quiet zone width, in modules
    pub border: u32,
    pub fill_color: Color,
    pub back_color: Color,
    pub format: OutputFormat,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::M,
            box_size: 10,
            border: 4,
            fill_color: Color::BLACK,
            back_color: Color::WHITE,
            format: OutputFormat::Png,
        }
    }
}

impl QrOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error_correction(mut self, level: ErrorCorrection) -> Self {
        self.error_correction = level;
        self
    }

    pub fn with_box_size(mut self, box_size: u32) -> Self {
        self.box_size = box_size;
        self
    }

    pub fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_back_color(mut self, color: Color) -> Self {
        self.back_color = color;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = QrOptions::default();
        assert_eq!(opts.error_correction, ErrorCorrection::M);
        assert_eq!(opts.box_size, 10);
        assert_eq!(opts.border, 4);
        assert_eq!(opts.fill_color, Color::BLACK);
        assert_eq!(opts.back_color, Color::WHITE);
        assert_eq!(opts.format, OutputFormat::Png);
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("png".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert_eq!("JPG".parse::<OutputFormat>().unwrap(), OutputFormat::Jpeg);
        assert_eq!("jpeg".parse::<OutputFormat>().unwrap(), OutputFormat::Jpeg);
        assert!("tiff".parse::<OutputFormat>().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_format_mime_matches_tag() {
        for format in [
            OutputFormat::Png,
            OutputFormat::Jpeg,
            OutputFormat::Gif,
            OutputFormat::Bmp,
            OutputFormat::WebP,
        ] {
            assert_eq!(
                format.mime_type(),
                format!("image/{}", format.tag().to_lowercase())
            );
        }
    }

    #[test]
    fn test_error_correction_parsing() {
        assert_eq!("h".parse::<ErrorCorrection>().unwrap(), ErrorCorrection::H);
        assert!("X".parse::<ErrorCorrection>().is_err());
    }
}
