// Copyright 2026 the Canvas CSS Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quote-aware field splitting for shorthand strings.

/// Iterator over the fields of a shorthand string.
///
/// Fields are separated either by runs of ASCII whitespace or by a single
/// delimiter byte, but `'...'` and `"..."` quoted substrings are treated as
/// atomic: separators inside them do not split. Quote characters are kept in
/// the yielded fields; see [`strip_matching_quotes`].
///
/// ```
/// use style_primitives::Split;
///
/// let fields: Vec<_> = Split::on("Arial, 'Goudy, Old Style', serif", b',').collect();
/// assert_eq!(fields, ["Arial", " 'Goudy, Old Style'", " serif"]);
/// ```
#[derive(Clone, Debug)]
pub struct Split<'a> {
    source: &'a [u8],
    len: usize,
    pos: usize,
    delimiter: Option<u8>,
}

impl<'a> Split<'a> {
    /// Splits on runs of ASCII whitespace.
    pub fn whitespace(source: &'a str) -> Self {
        Self {
            source: source.as_bytes(),
            len: source.len(),
            pos: 0,
            delimiter: None,
        }
    }

    /// Splits on a single delimiter byte.
    ///
    /// The delimiter must be ASCII so that field boundaries stay on UTF-8
    /// character boundaries.
    pub fn on(source: &'a str, delimiter: u8) -> Self {
        debug_assert!(delimiter.is_ascii(), "delimiter must be ASCII");
        Self {
            source: source.as_bytes(),
            len: source.len(),
            pos: 0,
            delimiter: Some(delimiter),
        }
    }

    fn is_separator(&self, byte: u8) -> bool {
        match self.delimiter {
            Some(delimiter) => byte == delimiter,
            None => byte.is_ascii_whitespace(),
        }
    }
}

impl<'a> Iterator for Split<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let mut pos = self.pos;
        while pos < self.len && self.is_separator(self.source[pos]) {
            pos += 1;
        }
        if pos >= self.len {
            self.pos = pos;
            return None;
        }
        let start = pos;
        let mut quote: Option<u8> = None;
        while pos < self.len {
            let byte = self.source[pos];
            match quote {
                Some(q) if byte == q => quote = None,
                Some(_) => {}
                None if matches!(byte, b'"' | b'\'') => quote = Some(byte),
                None if self.is_separator(byte) => break,
                None => {}
            }
            pos += 1;
        }
        self.pos = pos;
        core::str::from_utf8(self.source.get(start..pos)?).ok()
    }
}

/// Strips one pair of surrounding matching quote characters, if present.
///
/// ```
/// use style_primitives::strip_matching_quotes;
///
/// assert_eq!(strip_matching_quotes("'Avenir Next'"), "Avenir Next");
/// assert_eq!(strip_matching_quotes("\"Avenir Next\""), "Avenir Next");
/// assert_eq!(strip_matching_quotes("'mismatched\""), "'mismatched\"");
/// assert_eq!(strip_matching_quotes("plain"), "plain");
/// ```
pub fn strip_matching_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 && matches!(bytes[0], b'"' | b'\'') && bytes[bytes.len() - 1] == bytes[0] {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::vec::Vec;

    use super::{Split, strip_matching_quotes};

    #[test]
    fn whitespace_split_keeps_quoted_runs_atomic() {
        let fields: Vec<_> = Split::whitespace("italic 12px 'Times New Roman'").collect();
        assert_eq!(fields, ["italic", "12px", "'Times New Roman'"]);
    }

    #[test]
    fn whitespace_split_collapses_runs() {
        let fields: Vec<_> = Split::whitespace("  a \t b  ").collect();
        assert_eq!(fields, ["a", "b"]);
    }

    #[test]
    fn delimiter_split_respects_quotes() {
        let fields: Vec<_> = Split::on("\"a, b\",c", b',').collect();
        assert_eq!(fields, ["\"a, b\"", "c"]);
    }

    #[test]
    fn unterminated_quote_consumes_rest() {
        let fields: Vec<_> = Split::whitespace("'open rest of string").collect();
        assert_eq!(fields, ["'open rest of string"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(Split::whitespace("").count(), 0);
        assert_eq!(Split::on("   ", b',').count(), 1);
    }

    #[test]
    fn strip_quotes_only_when_matching() {
        assert_eq!(strip_matching_quotes("''"), "");
        assert_eq!(strip_matching_quotes("'"), "'");
    }
}
