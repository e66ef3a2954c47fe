// Copyright 2026 the Canvas CSS Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS `filter` function-list parsing.
//!
//! The list is scanned for `name(args)` invocations; each of the nine
//! supported kinds validates its arguments through the unit converter.
//! Invalid invocations are silently dropped from both the result map and the
//! canonical string. This parser never raises an error and is never cached.

use core::fmt;

use hashbrown::HashMap;

use crate::unit::{DEFAULT_BASE_SIZE, parse_angle, parse_percentage, parse_size};

/// The supported filter function kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// `blur(<length>)`.
    Blur,
    /// `brightness(<percentage>)`.
    Brightness,
    /// `contrast(<percentage>)`.
    Contrast,
    /// `drop-shadow(<length> <length> <length> <color>)`.
    DropShadow,
    /// `grayscale(<percentage>)`.
    Grayscale,
    /// `hue-rotate(<angle>)`.
    HueRotate,
    /// `invert(<percentage>)`.
    Invert,
    /// `opacity(<percentage>)`.
    Opacity,
    /// `saturate(<percentage>)`.
    Saturate,
    /// `sepia(<percentage>)`.
    Sepia,
}

impl FilterKind {
    /// Parses a filter function name.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "blur" => Self::Blur,
            "brightness" => Self::Brightness,
            "contrast" => Self::Contrast,
            "drop-shadow" => Self::DropShadow,
            "grayscale" => Self::Grayscale,
            "hue-rotate" => Self::HueRotate,
            "invert" => Self::Invert,
            "opacity" => Self::Opacity,
            "saturate" => Self::Saturate,
            "sepia" => Self::Sepia,
            _ => return None,
        })
    }

    /// Returns the CSS function name for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blur => "blur",
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
            Self::DropShadow => "drop-shadow",
            Self::Grayscale => "grayscale",
            Self::HueRotate => "hue-rotate",
            Self::Invert => "invert",
            Self::Opacity => "opacity",
            Self::Saturate => "saturate",
            Self::Sepia => "sepia",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resolved parameter of one filter function.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterOp {
    /// The single numeric argument of every kind except drop-shadow:
    /// pixels for blur, degrees for hue-rotate, a fraction for the rest.
    Amount(f32),
    /// The drop-shadow parameters.
    Shadow {
        /// Horizontal offset in pixels.
        dx: f32,
        /// Vertical offset in pixels.
        dy: f32,
        /// Blur radius in pixels.
        blur: f32,
        /// The color expression, single-spaced.
        color: String,
    },
}

/// A parsed `filter` function list.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedFilter {
    /// The filters that validated, keyed by kind. Every numeric value in
    /// here is finite.
    pub filters: HashMap<FilterKind, FilterOp>,
    /// Space-joined reconstruction of the valid filters in original order,
    /// or the literal `none`.
    pub canonical: String,
}

/// Parses a CSS `filter` function list.
///
/// Returns `None` when no filter validates and the input is not `none`.
///
/// ```
/// use canvas_css::{FilterKind, FilterOp, parse_filter};
///
/// let parsed = parse_filter("blur(5px) hue-rotate(90deg)").unwrap();
/// assert_eq!(parsed.filters[&FilterKind::Blur], FilterOp::Amount(5.0));
/// assert_eq!(parsed.filters[&FilterKind::HueRotate], FilterOp::Amount(90.0));
/// assert_eq!(parsed.canonical, "blur(5px) hue-rotate(90deg)");
///
/// assert_eq!(parse_filter("none").unwrap().canonical, "none");
/// assert!(parse_filter("blur(5pixels)").is_none());
/// ```
pub fn parse_filter(raw: &str) -> Option<ParsedFilter> {
    if raw.trim() == "none" {
        return Some(ParsedFilter {
            filters: HashMap::new(),
            canonical: "none".to_owned(),
        });
    }

    let mut filters = HashMap::new();
    let mut canonical: Vec<String> = Vec::new();

    for (name, args) in Invocations::new(raw) {
        let Some(kind) = FilterKind::parse(name) else {
            continue;
        };
        match kind {
            FilterKind::DropShadow => {
                let tokens: Vec<&str> = args.split_whitespace().collect();
                if tokens.len() < 4 {
                    continue;
                }
                let dx = parse_size(tokens[0], DEFAULT_BASE_SIZE);
                let dy = parse_size(tokens[1], DEFAULT_BASE_SIZE);
                let blur = parse_size(tokens[2], DEFAULT_BASE_SIZE);
                if !(dx.is_finite() && dy.is_finite() && blur.is_finite()) {
                    continue;
                }
                let color = tokens[3..].join(" ");
                canonical.push(format!(
                    "drop-shadow({} {} {} {})",
                    tokens[0],
                    tokens[1],
                    tokens[2],
                    compact(&color)
                ));
                filters.insert(kind, FilterOp::Shadow { dx, dy, blur, color });
            }
            _ => {
                let arg = args.trim();
                let amount = match kind {
                    FilterKind::Blur => parse_size(arg, DEFAULT_BASE_SIZE),
                    FilterKind::HueRotate => parse_angle(arg).unwrap_or(f32::NAN),
                    _ => parse_percentage(arg),
                };
                if !amount.is_finite() {
                    continue;
                }
                canonical.push(format!("{kind}({arg})"));
                filters.insert(kind, FilterOp::Amount(amount));
            }
        }
    }

    if filters.is_empty() {
        return None;
    }
    Some(ParsedFilter {
        filters,
        canonical: canonical.join(" "),
    })
}

/// Removes every space from a color expression (`rgba(0, 0, 0, .5)` becomes
/// `rgba(0,0,0,.5)`).
fn compact(color: &str) -> String {
    color.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Iterator over `name(args)` invocations in a filter list.
///
/// Arguments may contain nested balanced parentheses so that color functions
/// inside drop-shadow survive extraction.
struct Invocations<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Invocations<'a> {
    fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }
}

impl<'a> Iterator for Invocations<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.source.as_bytes();
        let len = bytes.len();
        let mut pos = self.pos;
        loop {
            while pos < len && !bytes[pos].is_ascii_alphabetic() {
                pos += 1;
            }
            if pos >= len {
                self.pos = pos;
                return None;
            }
            let name_start = pos;
            while pos < len && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'-') {
                pos += 1;
            }
            let name_end = pos;
            if pos >= len || bytes[pos] != b'(' {
                continue;
            }
            let args_start = pos + 1;
            pos += 1;
            let mut depth = 1_usize;
            while pos < len && depth > 0 {
                match bytes[pos] {
                    b'(' => depth += 1,
                    b')' => depth -= 1,
                    _ => {}
                }
                pos += 1;
            }
            if depth > 0 {
                // Unterminated invocation; nothing further can match.
                self.pos = len;
                return None;
            }
            self.pos = pos;
            return Some((
                &self.source[name_start..name_end],
                &self.source[args_start..pos - 1],
            ));
        }
    }
}
