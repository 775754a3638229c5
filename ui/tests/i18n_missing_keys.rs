use std::collections::{BTreeSet, HashSet};

/// Every locale must define exactly the fallback's keys, each with a
/// non-empty value, and no key twice.
///
/// Adding a locale:
/// 1. Create `ui/i18n/<locale>/mipa-ui.ftl`
/// 2. Copy all keys from `en-US/mipa-ui.ftl` and translate them
/// 3. Register it in `LOCALES` below and in `i18n::Language`
const EN_US: &str = include_str!("../i18n/en-US/mipa-ui.ftl");

const LOCALES: &[(&str, &str)] = &[
    ("it-IT", include_str!("../i18n/it-IT/mipa-ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/mipa-ui.ftl")),
    ("es-ES", include_str!("../i18n/es-ES/mipa-ui.ftl")),
    ("de-DE", include_str!("../i18n/de-DE/mipa-ui.ftl")),
    ("zh-CN", include_str!("../i18n/zh-CN/mipa-ui.ftl")),
    ("ru-RU", include_str!("../i18n/ru-RU/mipa-ui.ftl")),
];

#[test]
fn all_locales_match_fallback_keys() {
    let fallback = keys(EN_US, "en-US");
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let keys = keys(src, locale);
        let missing: BTreeSet<_> = fallback.difference(&keys).cloned().collect();
        let extra: BTreeSet<_> = keys.difference(&fallback).cloned().collect();

        if !missing.is_empty() {
            failures.push(format!(
                "{locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
        if !extra.is_empty() {
            failures.push(format!(
                "{locale} defines {} key(s) unknown to en-US:\n  {}",
                extra.len(),
                extra.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn no_message_is_empty() {
    for (locale, src) in std::iter::once(&("en-US", EN_US)).chain(LOCALES) {
        for (key, value) in messages(src) {
            assert!(
                !value.is_empty(),
                "{locale}: message `{key}` has an empty value"
            );
        }
    }
}

/// `(key, value)` for every top-level message line.
fn messages(src: &str) -> impl Iterator<Item = (&str, &str)> {
    src.lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty() && !key.contains(char::is_whitespace))
}

/// Key set of one file; panics on duplicate definitions.
fn keys(src: &str, locale: &str) -> HashSet<String> {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();
    for (key, _) in messages(src) {
        if !seen.insert(key.to_string()) {
            dups.insert(key.to_string());
        }
    }
    assert!(
        dups.is_empty(),
        "Duplicate key definitions in {locale}:\n  {}",
        dups.into_iter().collect::<Vec<_>>().join("\n  ")
    );
    seen
}
