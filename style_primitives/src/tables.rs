// Copyright 2026 the Canvas CSS Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only keyword tables consumed by the shorthand parsers.
//!
//! These map CSS keywords to the numeric values and OpenType feature tags a
//! typography backend understands. The parsers only ever look values up;
//! nothing here is mutable.

/// Returns the numeric weight for a named CSS `font-weight` keyword.
///
/// ```
/// use style_primitives::tables::weight;
///
/// assert_eq!(weight("normal"), Some(400));
/// assert_eq!(weight("semi-heavy"), None);
/// ```
pub fn weight(name: &str) -> Option<u16> {
    Some(match name {
        "lighter" => 300,
        "normal" => 400,
        "bold" => 700,
        "bolder" => 800,
        _ => return None,
    })
}

/// Returns the multiplier applied to the base size for a named CSS size.
///
/// The `normal` entry exists so that a `normal` line-height resolves to
/// 1.2 times the font size.
pub fn size_multiplier(name: &str) -> Option<f32> {
    Some(match name {
        "xx-small" => 3.0 / 5.0,
        "x-small" => 3.0 / 4.0,
        "small" => 8.0 / 9.0,
        "smaller" => 5.0 / 6.0,
        "medium" => 1.0,
        "large" => 6.0 / 5.0,
        "larger" => 6.0 / 5.0,
        "x-large" => 3.0 / 2.0,
        "xx-large" => 2.0,
        "normal" => 1.2,
        _ => return None,
    })
}

/// Returns the ordered OpenType tag list for a `font-variant` keyword.
///
/// A leading `-` on a tag means the feature is disabled rather than enabled.
///
/// ```
/// use style_primitives::tables::variant_features;
///
/// assert_eq!(variant_features("small-caps"), Some(&["smcp", "onum"][..]));
/// assert_eq!(
///     variant_features("no-common-ligatures"),
///     Some(&["-liga", "-clig"][..])
/// );
/// ```
pub fn variant_features(keyword: &str) -> Option<&'static [&'static str]> {
    Some(match keyword {
        // Ligatures.
        "common-ligatures" => &["liga", "clig"],
        "no-common-ligatures" => &["-liga", "-clig"],
        "discretionary-ligatures" => &["dlig"],
        "no-discretionary-ligatures" => &["-dlig"],
        "historical-ligatures" => &["hlig"],
        "no-historical-ligatures" => &["-hlig"],
        "contextual" => &["calt"],
        "no-contextual" => &["-calt"],
        // Caps.
        "small-caps" => &["smcp", "onum"],
        "all-small-caps" => &["c2sc", "smcp"],
        "petite-caps" => &["pcap"],
        "all-petite-caps" => &["c2pc", "pcap"],
        "unicase" => &["unic"],
        "titling-caps" => &["titl"],
        // Numerals.
        "lining-nums" => &["lnum"],
        "oldstyle-nums" => &["onum"],
        "proportional-nums" => &["pnum"],
        "tabular-nums" => &["tnum"],
        "diagonal-fractions" => &["frac"],
        "stacked-fractions" => &["afrc"],
        "ordinal" => &["ordn"],
        "slashed-zero" => &["zero"],
        // East Asian forms.
        "jis78" => &["jp78"],
        "jis83" => &["jp83"],
        "jis90" => &["jp90"],
        "jis04" => &["jp04"],
        "simplified" => &["smpl"],
        "traditional" => &["trad"],
        "full-width" => &["fwid"],
        "proportional-width" => &["pwid"],
        "ruby" => &["ruby"],
        // Position and misc.
        "historical-forms" => &["hist"],
        "subscript" => &["subs"],
        "superscript" => &["sups"],
        _ => return None,
    })
}

/// Returns the parameter template for a `font-variant-alternates` keyword.
///
/// A template holds a feature tag and a placeholder pattern: `##` is replaced
/// inside the tag by the two-digit zero-padded index, while a trailing `#`
/// stands for a numeric value capped at 9.
pub fn alternate_pattern(keyword: &str) -> Option<&'static str> {
    Some(match keyword {
        "stylistic" => "salt #",
        "styleset" => "ss##",
        "character-variant" => "cv##",
        "swash" => "swsh #",
        "ornaments" => "ornm #",
        "annotation" => "nalt #",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::{alternate_pattern, size_multiplier, variant_features, weight};

    #[test]
    fn weight_covers_the_four_css_keywords() {
        assert_eq!(weight("lighter"), Some(300));
        assert_eq!(weight("normal"), Some(400));
        assert_eq!(weight("bold"), Some(700));
        assert_eq!(weight("bolder"), Some(800));
        assert_eq!(weight("heavy"), None);
    }

    #[test]
    fn size_multiplier_scales_around_medium() {
        assert_eq!(size_multiplier("medium"), Some(1.0));
        assert_eq!(size_multiplier("xx-large"), Some(2.0));
        assert_eq!(size_multiplier("xx-small"), Some(0.6));
        assert_eq!(size_multiplier("gigantic"), None);
    }

    #[test]
    fn disabled_features_carry_the_minus_prefix() {
        for keyword in [
            "no-common-ligatures",
            "no-discretionary-ligatures",
            "no-historical-ligatures",
            "no-contextual",
        ] {
            let tags = variant_features(keyword).unwrap();
            assert!(tags.iter().all(|t| t.starts_with('-')), "{keyword}");
        }
    }

    #[test]
    fn alternate_patterns_hold_a_tag_and_placeholder() {
        assert_eq!(alternate_pattern("styleset"), Some("ss##"));
        assert_eq!(alternate_pattern("stylistic"), Some("salt #"));
        assert_eq!(alternate_pattern("ligatures"), None);
    }
}
