//! Data URL formatting

/// Wrap a base64 image payload as `data:image/<format>;base64,<payload>`.
///
/// `format` is an image format tag such as `"PNG"` or an
/// [`OutputFormat`](crate::OutputFormat); it is lowercased. The payload is
/// not validated.
pub fn get_data_url(base64: &str, format: impl AsRef<str>) -> String {
    let mime_type = format!("image/{}", format.as_ref().to_lowercase());
    format!("data:{};base64,{}", mime_type, base64)
}
