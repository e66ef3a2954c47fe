// Copyright 2026 the Canvas CSS Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS `font-variant` shorthand decoding.
//!
//! The shorthand is a space-separated list of keywords (`small-caps`,
//! `tabular-nums`, ...) and parameterized alternates (`styleset(3)`,
//! `stylistic(2)`). Each recognized keyword contributes OpenType feature
//! toggles through the variant table; everything else is ignored. This
//! decoder never fails: the worst case is the `normal` sentinel.

use smallvec::SmallVec;
use style_primitives::{Setting, Split, Tag, tables};

use crate::cache;

/// OpenType feature toggles accumulated from a `font-variant` value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariantFeatures {
    /// Features to enable.
    pub on: SmallVec<[Tag; 4]>,
    /// Features to disable.
    pub off: SmallVec<[Tag; 4]>,
    /// Numeric overrides for parameterized features (for example a
    /// stylistic alternate index).
    pub overrides: SmallVec<[Setting; 2]>,
}

/// A decoded `font-variant` shorthand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedVariant {
    /// The space-joined recognized tokens, or the literal `normal`.
    pub variant: String,
    /// The accumulated feature toggles. Empty when `variant` is `normal`.
    pub features: VariantFeatures,
}

impl ParsedVariant {
    /// The sentinel for `normal` (or unrecognizable) input.
    pub(crate) fn normal() -> Self {
        Self {
            variant: "normal".to_owned(),
            features: VariantFeatures::default(),
        }
    }
}

/// Decodes a CSS `font-variant` shorthand string.
///
/// Results are memoized process-wide by the raw input string.
///
/// ```
/// use canvas_css::{Tag, parse_variant};
///
/// let variant = parse_variant("small-caps tabular-nums");
/// assert_eq!(variant.variant, "small-caps tabular-nums");
/// assert!(variant.features.on.contains(&Tag::parse("smcp").unwrap()));
/// assert!(variant.features.on.contains(&Tag::parse("tnum").unwrap()));
///
/// assert_eq!(parse_variant("normal").variant, "normal");
/// ```
pub fn parse_variant(raw: &str) -> ParsedVariant {
    cache::variant_entry(raw, || decode(raw))
}

fn decode(raw: &str) -> ParsedVariant {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "normal" {
        return ParsedVariant::normal();
    }

    let mut variants: Vec<String> = Vec::new();
    let mut features = VariantFeatures::default();

    // First pass: plain keywords, in order of appearance.
    for token in Split::whitespace(raw) {
        let Some(tags) = tables::variant_features(token) else {
            continue;
        };
        for name in tags {
            match name.strip_prefix('-') {
                Some(disabled) => features.off.extend(Tag::parse(disabled)),
                None => features.on.extend(Tag::parse(name)),
            }
        }
        variants.push(token.to_owned());
    }

    // Second pass: `keyword(digits)` alternates, in order of appearance.
    for token in Split::whitespace(raw) {
        let Some((keyword, value)) = match_alternate(token) else {
            continue;
        };
        let Some(pattern) = tables::alternate_pattern(keyword) else {
            continue;
        };
        let value = value.min(99);
        let mut parts = pattern.split_whitespace();
        let Some(tag_template) = parts.next() else {
            continue;
        };
        let tag_text = tag_template.replace("##", &format!("{value:02}"));
        let Some(tag) = Tag::parse(&tag_text) else {
            continue;
        };
        match parts.next() {
            // A `#` placeholder caps the value at 9 and carries it alongside
            // the tag; otherwise the substituted tag is a plain toggle.
            Some(_) => features.overrides.push(Setting::new(tag, value.min(9))),
            None => features.on.push(tag),
        }
        variants.push(format!("{keyword}({value})"));
    }

    if variants.is_empty() {
        return ParsedVariant::normal();
    }
    ParsedVariant {
        variant: variants.join(" "),
        features,
    }
}

/// Matches `<keyword>(<digits>)` and returns the keyword and its value.
fn match_alternate(token: &str) -> Option<(&str, u32)> {
    let (keyword, rest) = token.split_once('(')?;
    let digits = rest.strip_suffix(')')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((keyword, digits.parse::<u32>().ok()?))
}

#[cfg(test)]
mod tests {
    use super::{ParsedVariant, decode};
    use style_primitives::{Setting, Tag};

    fn tag(s: &str) -> Tag {
        Tag::parse(s).unwrap()
    }

    #[test]
    fn normal_and_empty_yield_the_sentinel() {
        assert_eq!(decode("normal"), ParsedVariant::normal());
        assert_eq!(decode("  normal  "), ParsedVariant::normal());
        assert_eq!(decode(""), ParsedVariant::normal());
        assert_eq!(decode("   "), ParsedVariant::normal());
    }

    #[test]
    fn unrecognized_keywords_collapse_to_normal() {
        assert_eq!(decode("bogus keywords"), ParsedVariant::normal());
    }

    #[test]
    fn small_caps_toggles_smcp_and_onum() {
        let variant = decode("small-caps");
        assert_eq!(variant.variant, "small-caps");
        assert_eq!(variant.features.on.as_slice(), [tag("smcp"), tag("onum")]);
        assert!(variant.features.off.is_empty());
    }

    #[test]
    fn negative_tags_accumulate_in_off() {
        let variant = decode("no-common-ligatures");
        assert_eq!(variant.features.off.as_slice(), [tag("liga"), tag("clig")]);
        assert!(variant.features.on.is_empty());
    }

    #[test]
    fn keywords_keep_order_of_appearance() {
        let variant = decode("tabular-nums small-caps");
        assert_eq!(variant.variant, "tabular-nums small-caps");
        assert_eq!(
            variant.features.on.as_slice(),
            [tag("tnum"), tag("smcp"), tag("onum")]
        );
    }

    #[test]
    fn styleset_substitutes_a_zero_padded_index() {
        let variant = decode("styleset(3)");
        assert_eq!(variant.variant, "styleset(3)");
        assert_eq!(variant.features.on.as_slice(), [tag("ss03")]);
        assert!(variant.features.overrides.is_empty());
    }

    #[test]
    fn stylistic_caps_the_value_at_nine() {
        let variant = decode("stylistic(12)");
        assert_eq!(variant.variant, "stylistic(12)");
        assert_eq!(
            variant.features.overrides.as_slice(),
            [Setting::new(tag("salt"), 9)]
        );
        assert!(variant.features.on.is_empty());
    }

    #[test]
    fn alternate_values_clamp_to_ninety_nine() {
        let variant = decode("styleset(250)");
        assert_eq!(variant.variant, "styleset(99)");
        assert_eq!(variant.features.on.as_slice(), [tag("ss99")]);
    }

    #[test]
    fn alternates_follow_plain_keywords_in_the_output() {
        let variant = decode("styleset(1) small-caps");
        assert_eq!(variant.variant, "small-caps styleset(1)");
    }

    #[test]
    fn malformed_alternates_are_ignored() {
        assert_eq!(decode("styleset()"), ParsedVariant::normal());
        assert_eq!(decode("styleset(abc)"), ParsedVariant::normal());
        assert_eq!(decode("unknown(3)"), ParsedVariant::normal());
    }
}
