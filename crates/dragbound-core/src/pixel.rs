//! Parsing of inline CSS pixel lengths such as `"12px"`.

use crate::error::PixelError;

const PIXEL_SUFFIX: &str = "px";

/// Parse a CSS length that must end in `px`.
///
/// Whitespace around the value and around the number is ignored. Unit-less
/// numbers are rejected with [`PixelError::MissingSuffix`].
pub fn parse_pixel(style_value: &str) -> Result<f64, PixelError> {
    let trimmed = style_value.trim();
    if trimmed.is_empty() {
        return Err(PixelError::Empty);
    }

    let number = trimmed
        .strip_suffix(PIXEL_SUFFIX)
        .ok_or_else(|| PixelError::MissingSuffix(style_value.to_string()))?
        .trim();
    if number.is_empty() {
        return Err(PixelError::Empty);
    }

    let value: f64 = number
        .parse()
        .map_err(|_| PixelError::Invalid(style_value.to_string()))?;
    if !value.is_finite() {
        return Err(PixelError::NonFinite(style_value.to_string()));
    }
    Ok(value)
}

/// Read a pixel length, falling back to `0.0` for anything unreadable.
///
/// An unset inline offset is an empty string, so this treats "no offset"
/// as zero offset.
pub fn trim_pixel(style_value: &str) -> f64 {
    match parse_pixel(style_value) {
        Ok(value) => value,
        Err(e) => {
            log::trace!("Pixel value falls back to 0: {}", e);
            0.0
        }
    }
}
