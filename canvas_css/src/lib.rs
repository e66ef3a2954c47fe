// Copyright 2026 the Canvas CSS Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS shorthand parsing for canvas-style 2D drawing APIs.
//!
//! Callers of a canvas-like API set fonts and filters with the same textual
//! syntax browsers accept (`ctx.font = "italic bold 16px/1.4 serif"`), but a
//! typography backend needs discrete fields: a numeric pixel size, a numeric
//! weight, resolved OpenType feature tags, resolved filter parameters. This
//! crate interprets the three shorthand grammars involved and produces those
//! normalized values:
//!
//! - [`parse_font`] — the `font` shorthand (style, variant, weight, stretch,
//!   size, line-height, family list).
//! - [`parse_variant`] — the `font-variant` shorthand, decoded into OpenType
//!   feature toggles.
//! - [`parse_filter`] — a `filter` function list (blur, brightness, contrast,
//!   drop-shadow, grayscale, hue-rotate, invert, opacity, saturate, sepia).
//!
//! Font and variant results are memoized in process-wide caches keyed by the
//! raw input string, so repeated assignments of the same shorthand never
//! re-parse. A malformed font shorthand is reported once through
//! [`tracing::warn!`] and yields `None` from then on.
//!
//! ## Example
//!
//! ```
//! let font = canvas_css::parse_font("italic bold 16px/1.4 'Avenir Next', sans-serif").unwrap();
//! assert_eq!(font.size, 16.0);
//! assert_eq!(font.line_height, 22.4);
//! assert_eq!(font.weight, 700.0);
//! assert_eq!(font.family, ["Avenir Next", "sans-serif"]);
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

mod cache;
mod filter;
mod font;
mod unit;
mod variant;

pub use style_primitives::{Setting, Tag};

pub use filter::{FilterKind, FilterOp, ParsedFilter, parse_filter};
pub use font::{
    FontParseError, FontStretch, FontStyle, FontVariantCaps, ParsedFont, parse_font,
};
pub use unit::{DEFAULT_BASE_SIZE, parse_size};
pub use variant::{ParsedVariant, VariantFeatures, parse_variant};
