//! Hex color helpers shared by the stores and the render pipeline.

use rand::Rng;

use crate::error::{ChartError, ChartResult};

/// Parses a `#rrggbb` string into normalized RGB channels.
pub fn parse_hex_color(text: &str) -> ChartResult<(f64, f64, f64)> {
    let digits = text
        .strip_prefix('#')
        .ok_or_else(|| ChartError::InvalidData(format!("color `{text}` must start with `#`")))?;
    if digits.len() != 6 || !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(ChartError::InvalidData(format!(
            "color `{text}` must be `#` followed by 6 hex digits"
        )));
    }

    let value = u32::from_str_radix(digits, 16)
        .map_err(|err| ChartError::InvalidData(format!("color `{text}`: {err}")))?;
    Ok((
        f64::from((value >> 16) & 0xff) / 255.0,
        f64::from((value >> 8) & 0xff) / 255.0,
        f64::from(value & 0xff) / 255.0,
    ))
}

/// Formats a packed 24-bit RGB value as `#rrggbb`.
#[must_use]
pub fn format_hex_color(rgb: u32) -> String {
    format!("#{:06x}", rgb & 0xff_ff_ff)
}

/// Random `#rrggbb` color, uniform over the full 24-bit range.
#[must_use]
pub fn random_hex_color() -> String {
    format_hex_color(rand::rng().random_range(0..=0xff_ff_ffu32))
}
