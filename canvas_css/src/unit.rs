// Copyright 2026 the Canvas CSS Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion of length, weight, angle, and percentage tokens into canonical
//! numeric units (pixels, integer weight, degrees, fraction).
//!
//! These routines follow the CSS error model rather than Rust's: a token that
//! matches no grammar yields `NaN` (or `None` for angles), never a panic. The
//! shorthand parsers treat the non-finite result as the failure signal.

use style_primitives::tables;

/// The reference font size, in pixels, against which relative units resolve
/// when no other base is in play.
pub const DEFAULT_BASE_SIZE: f32 = 16.0;

/// Resolves a CSS length token to pixels.
///
/// Absolute units (`px`, `pt`, `pc`, `in`, `cm`, `mm`, `q`) convert directly.
/// `%`, `em`, `rem`, `ex`, and `ch` resolve relative to `base_size`
/// (percentages are divided by 100 first). Named sizes (`xx-small` through
/// `xx-large`, `smaller`, `larger`, `medium`, `normal`) resolve through the
/// size multiplier table applied to `base_size`.
///
/// Returns `f32::NAN` for anything unrecognized.
///
/// ```
/// use canvas_css::{DEFAULT_BASE_SIZE, parse_size};
///
/// assert_eq!(parse_size("12pt", DEFAULT_BASE_SIZE), 16.0);
/// assert_eq!(parse_size("2em", 10.0), 20.0);
/// assert_eq!(parse_size("50%", 200.0), 100.0);
/// assert!(parse_size("5pixels", DEFAULT_BASE_SIZE).is_nan());
/// ```
pub fn parse_size(token: &str, base_size: f32) -> f32 {
    let token = token.trim();
    if let Some(multiplier) = tables::size_multiplier(token) {
        return multiplier * base_size;
    }
    let Some((value, unit)) = split_number_unit(token) else {
        return f32::NAN;
    };
    match unit {
        "px" => value,
        "pt" => value / 0.75,
        "pc" => value * 16.0,
        "in" => value * 96.0,
        "cm" => value * 96.0 / 2.54,
        "mm" => value * 96.0 / 25.4,
        "q" => value * 96.0 / 25.4 / 4.0,
        "%" => value / 100.0 * base_size,
        "em" | "rem" | "ex" | "ch" => value * base_size,
        _ => f32::NAN,
    }
}

/// Resolves a CSS `font-weight` token to a numeric weight.
///
/// Accepts a bare integer in `[1, 1000]` or one of the named weights
/// (`normal`, `bold`, `bolder`, `lighter`). Returns `f32::NAN` otherwise.
pub(crate) fn parse_weight(token: &str) -> f32 {
    let token = token.trim();
    if let Some(value) = tables::weight(token) {
        return f32::from(value);
    }
    match token.parse::<u32>() {
        Ok(value) if (1..=1000).contains(&value) => value as f32,
        _ => f32::NAN,
    }
}

/// Resolves a CSS angle token to degrees.
///
/// `deg` passes through; `grad`, `rad`, and `turn` convert. Returns `None`
/// when the token matches no angle grammar. The suffixes are tried longest
/// first so `grad` is not misread as a `rad` value.
pub(crate) fn parse_angle(token: &str) -> Option<f32> {
    let token = token.trim();
    if let Some(number) = token.strip_suffix("grad") {
        return number.trim().parse::<f32>().ok().map(|g| g * 360.0 / 400.0);
    }
    if let Some(number) = token.strip_suffix("deg") {
        return number.trim().parse::<f32>().ok();
    }
    if let Some(number) = token.strip_suffix("rad") {
        return number.trim().parse::<f32>().ok().map(f32::to_degrees);
    }
    if let Some(number) = token.strip_suffix("turn") {
        return number.trim().parse::<f32>().ok().map(|t| t * 360.0);
    }
    None
}

/// Resolves a percentage token to a fraction.
///
/// The token must be an optionally-signed 1–3 digit integer followed by `%`;
/// the result is that integer divided by 100. Returns `f32::NAN` otherwise.
pub(crate) fn parse_percentage(token: &str) -> f32 {
    let token = token.trim();
    let Some(body) = token.strip_suffix('%') else {
        return f32::NAN;
    };
    let (sign, digits) = match body.as_bytes().first() {
        Some(b'-') => (-1.0, &body[1..]),
        Some(b'+') => (1.0, &body[1..]),
        _ => (1.0, body),
    };
    if digits.is_empty() || digits.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return f32::NAN;
    }
    match digits.parse::<u32>() {
        Ok(value) => sign * value as f32 / 100.0,
        Err(_) => f32::NAN,
    }
}

/// Splits a token into its leading signed number and trailing unit.
///
/// The numeric part may carry a sign (drop-shadow offsets are negative
/// lengths); the remainder of the token is returned verbatim as the unit.
pub(crate) fn split_number_unit(token: &str) -> Option<(f32, &str)> {
    let bytes = token.as_bytes();
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos = 1;
    }
    let digits_start = pos;
    while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
        pos += 1;
    }
    if pos == digits_start {
        return None;
    }
    let value = token[..pos].parse::<f32>().ok()?;
    Some((value, &token[pos..]))
}

#[cfg(test)]
mod tests {
    use super::{parse_angle, parse_percentage, parse_size, parse_weight, split_number_unit};

    #[test]
    fn absolute_units_convert_to_pixels() {
        assert_eq!(parse_size("16px", 16.0), 16.0);
        assert_eq!(parse_size("12pt", 16.0), 16.0);
        assert_eq!(parse_size("1pc", 16.0), 16.0);
        assert_eq!(parse_size("1in", 16.0), 96.0);
        assert!((parse_size("2.54cm", 16.0) - 96.0).abs() < 1e-3);
        assert!((parse_size("25.4mm", 16.0) - 96.0).abs() < 1e-3);
        assert!((parse_size("101.6q", 16.0) - 96.0).abs() < 1e-3);
    }

    #[test]
    fn relative_units_scale_the_base() {
        assert_eq!(parse_size("2em", 10.0), 20.0);
        assert_eq!(parse_size("2rem", 10.0), 20.0);
        assert_eq!(parse_size("50%", 200.0), 100.0);
        assert_eq!(parse_size("1.5ex", 10.0), 15.0);
        assert_eq!(parse_size("3ch", 10.0), 30.0);
    }

    #[test]
    fn named_sizes_use_the_multiplier_table() {
        assert_eq!(parse_size("medium", 16.0), 16.0);
        assert_eq!(parse_size("xx-large", 16.0), 32.0);
        assert!((parse_size("normal", 10.0) - 12.0).abs() < 1e-4);
    }

    #[test]
    fn unrecognized_sizes_are_nan() {
        assert!(parse_size("16", 16.0).is_nan());
        assert!(parse_size("16vmin", 16.0).is_nan());
        assert!(parse_size("big", 16.0).is_nan());
        assert!(parse_size("", 16.0).is_nan());
    }

    #[test]
    fn weights_accept_integers_and_names() {
        assert_eq!(parse_weight("1"), 1.0);
        assert_eq!(parse_weight("400"), 400.0);
        assert_eq!(parse_weight("1000"), 1000.0);
        assert_eq!(parse_weight("bold"), 700.0);
        assert_eq!(parse_weight("lighter"), 300.0);
        assert!(parse_weight("0").is_nan());
        assert!(parse_weight("1001").is_nan());
        assert!(parse_weight("heavy").is_nan());
    }

    #[test]
    fn angles_convert_to_degrees() {
        assert_eq!(parse_angle("90deg"), Some(90.0));
        assert_eq!(parse_angle("200grad"), Some(180.0));
        assert_eq!(parse_angle("0.5turn"), Some(180.0));
        let rad = parse_angle("3.1415927rad").unwrap();
        assert!((rad - 180.0).abs() < 1e-3);
        assert_eq!(parse_angle("90"), None);
        assert_eq!(parse_angle("90degrees"), None);
    }

    #[test]
    fn percentages_take_one_to_three_signed_digits() {
        assert_eq!(parse_percentage("150%"), 1.5);
        assert_eq!(parse_percentage("-20%"), -0.2);
        assert_eq!(parse_percentage("+5%"), 0.05);
        assert!(parse_percentage("1000%").is_nan());
        assert!(parse_percentage("1.5%").is_nan());
        assert!(parse_percentage("%").is_nan());
        assert!(parse_percentage("50").is_nan());
    }

    #[test]
    fn number_unit_split_keeps_the_sign() {
        assert_eq!(split_number_unit("-2px"), Some((-2.0, "px")));
        assert_eq!(split_number_unit("16px"), Some((16.0, "px")));
        assert_eq!(split_number_unit("px"), None);
    }
}
