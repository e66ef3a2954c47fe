// Copyright 2026 the Canvas CSS Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Process-wide memoization of parsed shorthand results.
//!
//! Fonts and variants are assigned repeatedly with the same literal strings,
//! so each of those two parsers keeps a map keyed by the raw input. The maps
//! live for the duration of the process and are never evicted. A font entry
//! of `None` marks a previously failed parse: repeated calls with the same
//! failing input return the sentinel without re-parsing or re-warning.
//!
//! Each map sits behind its own mutex; the parse closure runs while the lock
//! is held so concurrent first inserts for the same key cannot race. The
//! filter parser is never cached and needs no such protection.

use std::sync::{LazyLock, Mutex, PoisonError};

use hashbrown::HashMap;

use crate::font::ParsedFont;
use crate::variant::ParsedVariant;

static FONT_CACHE: LazyLock<Mutex<HashMap<String, Option<ParsedFont>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

static VARIANT_CACHE: LazyLock<Mutex<HashMap<String, ParsedVariant>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

pub(crate) fn font_entry(
    raw: &str,
    parse: impl FnOnce() -> Option<ParsedFont>,
) -> Option<ParsedFont> {
    let mut cache = FONT_CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(hit) = cache.get(raw) {
        return hit.clone();
    }
    let value = parse();
    cache.insert(raw.to_owned(), value.clone());
    value
}

pub(crate) fn variant_entry(raw: &str, parse: impl FnOnce() -> ParsedVariant) -> ParsedVariant {
    let mut cache = VARIANT_CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(hit) = cache.get(raw) {
        return hit.clone();
    }
    let value = parse();
    cache.insert(raw.to_owned(), value.clone());
    value
}

/// Empties both caches so a test can observe a fresh first parse.
#[cfg(test)]
pub(crate) fn reset_for_tests() {
    FONT_CACHE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
    VARIANT_CACHE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::sync::{Mutex, PoisonError};

    use super::{font_entry, reset_for_tests, variant_entry};
    use crate::variant::ParsedVariant;

    // These tests count parse runs, so they must not interleave with the
    // reset test clearing the maps under them.
    static TEST_GUARD: Mutex<()> = Mutex::new(());

    #[test]
    fn failed_font_parse_is_cached_and_not_rerun() {
        let _guard = TEST_GUARD.lock().unwrap_or_else(PoisonError::into_inner);
        let runs = Cell::new(0);
        let key = "cache-test: definitely not a font";
        for _ in 0..3 {
            let result = font_entry(key, || {
                runs.set(runs.get() + 1);
                None
            });
            assert!(result.is_none());
        }
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn variant_parse_runs_once_per_distinct_input() {
        let _guard = TEST_GUARD.lock().unwrap_or_else(PoisonError::into_inner);
        let runs = Cell::new(0);
        let key = "cache-test: variant";
        for _ in 0..3 {
            let result = variant_entry(key, || {
                runs.set(runs.get() + 1);
                ParsedVariant::normal()
            });
            assert_eq!(result.variant, "normal");
        }
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn reset_discards_memoized_entries() {
        let _guard = TEST_GUARD.lock().unwrap_or_else(PoisonError::into_inner);
        let runs = Cell::new(0);
        let key = "cache-test: reset";
        let mut parse = || {
            font_entry(key, || {
                runs.set(runs.get() + 1);
                None
            })
        };
        parse();
        parse();
        assert_eq!(runs.get(), 1);
        reset_for_tests();
        parse();
        assert_eq!(runs.get(), 2);
    }
}
