// crates/geospace-core/src/text.rs

/// Convert a string into a folded key suitable for name comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
/// 3\) Trim surrounding whitespace
///
/// Non-Latin scripts are transliterated too (`Рим` -> `rim`), so a Cyrillic
/// query still lines up with an ASCII alias.
///
/// # Examples
///
/// ```rust
/// use geospace_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key(" Straße "), "strasse");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}

/// Folded prefix test, used for country hints like `"It"` -> `"Italy"`.
pub fn starts_with_folded(haystack: &str, prefix: &str) -> bool {
    fold_key(haystack).starts_with(&fold_key(prefix))
}
