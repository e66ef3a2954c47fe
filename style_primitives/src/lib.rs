// Copyright 2026 the Canvas CSS Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fundamental style vocabulary for CSS shorthand parsing.
//!
//! This crate is a lightweight, `no_std`-friendly leaf layer shared by the
//! shorthand parsers in `canvas_css`. It holds the small, typed concepts the
//! parsers consume but do not own: the 4-byte OpenType [`Tag`], the read-only
//! lookup tables mapping CSS keywords to numeric weights, size multipliers,
//! and OpenType feature lists, and a field splitter that treats quoted
//! substrings as atomic.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for
//!   forward compatibility.
//!
//! ## Example
//!
//! ```
//! use style_primitives::{Split, Tag, tables};
//!
//! let tag = Tag::parse("smcp").unwrap();
//! assert_eq!(tag.to_bytes(), *b"smcp");
//!
//! let fields: Vec<_> = Split::whitespace("bold 16px 'Iowan Old Style'").collect();
//! assert_eq!(fields, ["bold", "16px", "'Iowan Old Style'"]);
//!
//! assert_eq!(tables::weight("bold"), Some(700));
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
#![no_std]

mod split;
mod tag;

pub mod tables;

pub use split::{Split, strip_matching_quotes};
pub use tag::{Setting, Tag};
