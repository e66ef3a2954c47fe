// Copyright 2026 the Canvas CSS Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::fmt::Write as _;

/// A 4-byte OpenType feature tag such as `smcp` or `ss03`.
///
/// Tags here only ever come from keyword tables or from template
/// substitution, so the sole constructor is [`parse`](Self::parse) and the
/// stored bytes are always printable ASCII.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Tag([u8; 4]);

impl Tag {
    /// Parses a tag from a 4-character ASCII string.
    ///
    /// Accepts printable ASCII and spaces; anything else, or any other
    /// length, is rejected.
    ///
    /// ```
    /// use style_primitives::Tag;
    ///
    /// assert_eq!(Tag::parse("liga").map(Tag::to_bytes), Some(*b"liga"));
    /// assert_eq!(Tag::parse("toolong"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.as_bytes() {
            [a, b, c, d] if s.bytes().all(|b| b == b' ' || b.is_ascii_graphic()) => {
                Some(Self([*a, *b, *c, *d]))
            }
            _ => None,
        }
    }

    /// Returns the tag's bytes in text order.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Always ASCII, so char-by-char is lossless.
        for byte in self.0 {
            f.write_char(byte as char)?;
        }
        Ok(())
    }
}

/// A feature selection carrying a numeric argument, such as the alternate
/// index picked by `stylistic(2)`.
///
/// Plain on/off toggles are a bare [`Tag`]; a `Setting` is only produced
/// when the argument must travel with the tag.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Setting {
    /// The feature tag.
    pub tag: Tag,
    /// The argument, already clamped by whatever decoded it.
    pub value: u32,
}

impl Setting {
    /// Bundles a tag with its argument.
    pub const fn new(tag: Tag, value: u32) -> Self {
        Self { tag, value }
    }
}

#[cfg(test)]
mod tests {
    use super::{Setting, Tag};

    #[test]
    fn tag_round_trips_through_bytes() {
        let tag = Tag::parse("ss03").unwrap();
        assert_eq!(tag.to_bytes(), *b"ss03");
        assert_eq!(Tag::parse("ss03"), Some(tag));
    }

    #[test]
    fn tag_rejects_wrong_length_and_non_ascii() {
        assert_eq!(Tag::parse("abc"), None);
        assert_eq!(Tag::parse("abcde"), None);
        assert_eq!(Tag::parse("ab\u{e9}"), None);
    }

    #[test]
    fn tag_displays_as_its_source_text() {
        extern crate alloc;
        use alloc::string::ToString;

        assert_eq!(Tag::parse("cv07").unwrap().to_string(), "cv07");
    }

    #[test]
    fn setting_carries_tag_and_argument() {
        let setting = Setting::new(Tag::parse("salt").unwrap(), 4);
        assert_eq!(setting.tag, Tag::parse("salt").unwrap());
        assert_eq!(setting.value, 4);
    }
}
