// Copyright 2026 the Canvas CSS Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS `font` shorthand parsing.
//!
//! The shorthand bundles style, variant, weight, stretch, size, line-height,
//! and the family list into one string. Tokens before the size are classified
//! against an ordered sequence of keyword grammars (style, then small-caps,
//! then stretch, then weight) with last-wins semantics per field; the first
//! size-like token ends that phase and everything after it is the family
//! list.

use core::fmt;

use smallvec::SmallVec;
use style_primitives::{Split, Tag, strip_matching_quotes, tables};

use crate::cache;
use crate::unit::{DEFAULT_BASE_SIZE, parse_size, parse_weight, split_number_unit};

/// Slope of the font: the `font-style` part of the shorthand.
///
/// The shorthand grammar admits only the bare keywords; `oblique <angle>` is
/// not part of it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStyle {
    /// `normal`.
    #[default]
    Normal,
    /// `italic`.
    Italic,
    /// `oblique`.
    Oblique,
}

impl FontStyle {
    /// Parses a `font-style` keyword.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "normal" => Self::Normal,
            "italic" => Self::Italic,
            "oblique" => Self::Oblique,
            _ => return None,
        })
    }

    /// Returns the CSS keyword for this style.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Oblique => "oblique",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `font-variant` part of the shorthand.
///
/// Only `small-caps` may appear in the shorthand; the full `font-variant`
/// grammar is handled by [`crate::parse_variant`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontVariantCaps {
    /// `normal`.
    #[default]
    Normal,
    /// `small-caps`.
    SmallCaps,
}

impl FontVariantCaps {
    /// Returns the CSS keyword for this variant.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::SmallCaps => "small-caps",
        }
    }
}

impl fmt::Display for FontVariantCaps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `font-stretch` part of the shorthand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStretch {
    /// `ultra-condensed`.
    UltraCondensed,
    /// `extra-condensed`.
    ExtraCondensed,
    /// `condensed`.
    Condensed,
    /// `semi-condensed`.
    SemiCondensed,
    /// `normal`.
    #[default]
    Normal,
    /// `semi-expanded`.
    SemiExpanded,
    /// `expanded`.
    Expanded,
    /// `extra-expanded`.
    ExtraExpanded,
    /// `ultra-expanded`.
    UltraExpanded,
}

impl FontStretch {
    /// Parses a `font-stretch` keyword.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "ultra-condensed" => Self::UltraCondensed,
            "extra-condensed" => Self::ExtraCondensed,
            "condensed" => Self::Condensed,
            "semi-condensed" => Self::SemiCondensed,
            "normal" => Self::Normal,
            "semi-expanded" => Self::SemiExpanded,
            "expanded" => Self::Expanded,
            "extra-expanded" => Self::ExtraExpanded,
            "ultra-expanded" => Self::UltraExpanded,
            _ => return None,
        })
    }

    /// Returns the CSS keyword for this stretch.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UltraCondensed => "ultra-condensed",
            Self::ExtraCondensed => "extra-condensed",
            Self::Condensed => "condensed",
            Self::SemiCondensed => "semi-condensed",
            Self::Normal => "normal",
            Self::SemiExpanded => "semi-expanded",
            Self::Expanded => "expanded",
            Self::ExtraExpanded => "extra-expanded",
            Self::UltraExpanded => "ultra-expanded",
        }
    }
}

impl fmt::Display for FontStretch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised while parsing a `font` shorthand string.
///
/// These never cross the public boundary: [`parse_font`] converts every one
/// into a warning plus a cached `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FontParseError {
    /// The input was empty or whitespace-only.
    MalformedInput,
    /// A token before the size matched none of the attribute grammars.
    UnrecognizedToken(String),
    /// A resolved size, line-height, or weight was not a positive finite
    /// number. Carries the offending field name.
    InvalidNumericField(&'static str),
    /// No tokens remained after the size to form a family list.
    MissingFontFamily,
    /// No token ever matched the size grammar.
    MissingSize,
}

impl fmt::Display for FontParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput => f.write_str("font shorthand must be a non-empty string"),
            Self::UnrecognizedToken(token) => write!(f, "unrecognized font attribute {token:?}"),
            Self::InvalidNumericField(field) => write!(f, "invalid numeric value for font {field}"),
            Self::MissingFontFamily => f.write_str("no font family specified"),
            Self::MissingSize => f.write_str("no font size specified"),
        }
    }
}

impl core::error::Error for FontParseError {}

/// A successfully parsed `font` shorthand.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedFont {
    /// Font slope.
    pub style: FontStyle,
    /// Caps variant.
    pub variant: FontVariantCaps,
    /// Numeric weight in `[1, 1000]`.
    pub weight: f32,
    /// Stretch keyword.
    pub stretch: FontStretch,
    /// Font size in pixels. Positive and finite.
    pub size: f32,
    /// Line height in pixels. Positive and finite.
    pub line_height: f32,
    /// Ordered family list with surrounding quotes stripped. Never empty.
    pub family: Vec<String>,
    /// OpenType features to enable, derived solely from the variant.
    pub features: SmallVec<[Tag; 4]>,
    /// A normalized string that reparses to an equivalent value.
    pub canonical: String,
}

/// Parses a CSS `font` shorthand string.
///
/// Results (including failures) are memoized process-wide by the raw input
/// string. A malformed input is reported once through [`tracing::warn!`] and
/// returns `None` for the lifetime of the process.
///
/// ```
/// let font = canvas_css::parse_font("16px sans-serif").unwrap();
/// assert_eq!(font.size, 16.0);
/// assert_eq!(font.line_height, 19.2);
/// assert_eq!(font.weight, 400.0);
/// assert_eq!(font.family, ["sans-serif"]);
///
/// assert!(canvas_css::parse_font("just words").is_none());
/// ```
pub fn parse_font(raw: &str) -> Option<ParsedFont> {
    cache::font_entry(raw, || match parse_uncached(raw) {
        Ok(font) => Some(font),
        Err(error) => {
            tracing::warn!(input = raw, %error, "invalid font shorthand");
            None
        }
    })
}

fn parse_uncached(raw: &str) -> Result<ParsedFont, FontParseError> {
    if raw.trim().is_empty() {
        return Err(FontParseError::MalformedInput);
    }
    // A `<size>/<line-height>` pair may arrive with whitespace around the
    // slash; fuse it back into one token before splitting.
    let fused = fuse_slash(raw);
    let tokens: Vec<&str> = Split::whitespace(&fused).collect();

    let mut style = FontStyle::Normal;
    let mut variant = FontVariantCaps::Normal;
    let mut stretch = FontStretch::Normal;
    let mut weight_token = "normal";
    let mut size_token = None;
    let mut line_height_token = None;
    let mut family_start = tokens.len();

    for (index, token) in tokens.iter().copied().enumerate() {
        // Ordered classification; `normal` always lands on style first.
        if let Some(parsed) = FontStyle::parse(token) {
            style = parsed;
            continue;
        }
        if token == FontVariantCaps::SmallCaps.as_str() {
            variant = FontVariantCaps::SmallCaps;
            continue;
        }
        if let Some(parsed) = FontStretch::parse(token) {
            stretch = parsed;
            continue;
        }
        if is_weight_token(token) {
            weight_token = token;
            continue;
        }
        if let Some((size, line_height)) = match_size(token) {
            size_token = Some(size);
            line_height_token = line_height;
            family_start = index + 1;
            break;
        }
        return Err(FontParseError::UnrecognizedToken(token.to_owned()));
    }

    let Some(size_token) = size_token else {
        return Err(FontParseError::MissingSize);
    };

    let size = parse_size(size_token, DEFAULT_BASE_SIZE);

    // A missing line-height defaults to 1.2em; a bare number is an em factor.
    let with_em;
    let line_height_token = match line_height_token {
        None => "1.2em",
        Some(token) if is_bare_number(token) => {
            with_em = format!("{token}em");
            &with_em
        }
        Some(token) => token,
    };
    let line_height = parse_size(line_height_token, size);
    let weight = parse_weight(weight_token);

    for (field, value) in [("size", size), ("line-height", line_height), ("weight", weight)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(FontParseError::InvalidNumericField(field));
        }
    }

    let family: Vec<String> = match tokens.get(family_start..) {
        Some(rest) if !rest.is_empty() => {
            let joined = rest.join(" ");
            Split::on(&joined, b',')
                .map(|entry| strip_matching_quotes(entry.trim()).to_owned())
                .filter(|entry| !entry.is_empty())
                .collect()
        }
        _ => Vec::new(),
    };
    if family.is_empty() {
        return Err(FontParseError::MissingFontFamily);
    }

    let mut features = SmallVec::new();
    if variant == FontVariantCaps::SmallCaps {
        if let Some(tags) = tables::variant_features(variant.as_str()) {
            features.extend(tags.iter().filter_map(|name| Tag::parse(name)));
        }
    }

    let canonical = build_canonical(style, variant, weight_token, stretch, size, line_height, &family);

    Ok(ParsedFont {
        style,
        variant,
        weight,
        stretch,
        size,
        line_height,
        family,
        features,
        canonical,
    })
}

/// Reconstructs the normalized shorthand string.
///
/// Each attribute keyword is emitted only when its token differs from every
/// previously emitted attribute token, so that an all-`normal` prefix
/// collapses to a single `normal`.
fn build_canonical(
    style: FontStyle,
    variant: FontVariantCaps,
    weight_token: &str,
    stretch: FontStretch,
    size: f32,
    line_height: f32,
    family: &[String],
) -> String {
    let style_s = style.as_str();
    let variant_s = variant.as_str();
    let stretch_s = stretch.as_str();

    let mut parts: Vec<String> = vec![style_s.to_owned()];
    if variant_s != style_s {
        parts.push(variant_s.to_owned());
    }
    if weight_token != style_s && weight_token != variant_s {
        parts.push(weight_token.to_owned());
    }
    if stretch_s != style_s && stretch_s != variant_s && stretch_s != weight_token {
        parts.push(stretch_s.to_owned());
    }
    parts.push(format!("{size}px/{line_height}px"));
    let families: Vec<String> = family
        .iter()
        .map(|name| {
            if name.contains(char::is_whitespace) {
                format!("\"{name}\"")
            } else {
                name.clone()
            }
        })
        .collect();
    parts.push(families.join(", "));
    parts.join(" ")
}

fn fuse_slash(raw: &str) -> String {
    match raw.find('/') {
        Some(index) => {
            let head = raw[..index].trim_end();
            let tail = raw[index + 1..].trim_start();
            format!("{head}/{tail}")
        }
        None => raw.to_owned(),
    }
}

fn is_weight_token(token: &str) -> bool {
    if tables::weight(token).is_some() {
        return true;
    }
    matches!(token.parse::<u32>(), Ok(value) if (1..=1000).contains(&value))
}

/// Matches the size grammar, optionally carrying a `/line-height` suffix.
fn match_size(token: &str) -> Option<(&str, Option<&str>)> {
    let (size, line_height) = match token.split_once('/') {
        Some((size, line_height)) => (size, Some(line_height)),
        None => (token, None),
    };
    is_size_pattern(size).then_some((size, line_height))
}

fn is_size_pattern(token: &str) -> bool {
    // `normal` is a line-height value, not a font size.
    if token != "normal" && tables::size_multiplier(token).is_some() {
        return true;
    }
    if !matches!(token.as_bytes().first(), Some(b) if b.is_ascii_digit() || *b == b'.') {
        return false;
    }
    match split_number_unit(token) {
        Some((_, unit)) => matches!(
            unit,
            "px" | "pt" | "pc" | "in" | "cm" | "mm" | "q" | "%" | "em" | "rem" | "ex" | "ch"
        ),
        None => false,
    }
}

fn is_bare_number(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}
