// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text normalization for extracted page text.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Anything that is not a letter (any script), combining mark, digit,
/// whitespace, or one of the kept punctuation marks.
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[^\p{L}\p{M}\p{N}\s.,!?¡¿;:'"()\-]"#).expect("disallowed-character pattern is valid")
});

/// Strip unsupported characters, compose diacritics (NFC) and trim.
///
/// Filtering happens before composition so that a removed character can
/// never leave a base letter and its combining mark newly adjacent for a
/// second pass to compose; this keeps the function idempotent.
pub fn normalize(raw: &str) -> String {
    let filtered = DISALLOWED.replace_all(raw, "");
    let composed: String = filtered.nfc().collect();
    composed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn keeps_accents_and_punctuation() {
        assert_eq!(
            normalize("  ¿Qué tal? ¡Très bien! (naïve) \"quoted\" it's fine; ok: yes-no.  "),
            "¿Qué tal? ¡Très bien! (naïve) \"quoted\" it's fine; ok: yes-no."
        );
    }

    #[test]
    fn strips_symbols_and_control_characters() {
        assert_eq!(normalize("price: $40 & 50% off\u{0}"), "price: 40  50 off");
        assert_eq!(normalize("• bullet → arrow"), "bullet  arrow");
    }

    #[test]
    fn composes_combining_marks() {
        assert_eq!(normalize("cafe\u{0301}"), "café");
    }

    #[test]
    fn keeps_other_scripts() {
        assert_eq!(normalize("Привет, мир. 你好"), "Привет, мир. 你好");
    }

    #[test]
    fn unsupported_input_yields_empty() {
        assert_eq!(normalize("@#$%^&*"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn mark_separated_by_removed_symbol_is_stable() {
        let once = normalize("e#\u{0301}");
        assert_eq!(normalize(&once), once);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(text in "\\PC{0,200}") {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
