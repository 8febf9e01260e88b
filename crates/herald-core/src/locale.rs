//! Locale code handling: BCP-47 for hreflang/`inLanguage`, underscore form
//! for Open Graph.

/// The hreflang value that marks the language-neutral fallback page.
pub const X_DEFAULT: &str = "x-default";

/// Convert `ar_SA`, `AR-sa`, `en`, `zh_hant_tw` to BCP-47
/// (`ar-SA`, `ar-SA`, `en`, `zh-Hant-TW`).
///
/// Language is lowercased, a 4-letter script subtag is title-cased, and a
/// 2-letter or 3-digit region is uppercased. Returns `None` for input without
/// a usable language subtag.
#[must_use]
pub fn to_bcp47(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case(X_DEFAULT) {
        return Some(X_DEFAULT.to_string());
    }

    let mut subtags = raw.split(['_', '-']).filter(|s| !s.is_empty());
    let language = subtags.next()?;
    if !(2..=8).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut parts = vec![language.to_ascii_lowercase()];
    for subtag in subtags {
        if !subtag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        let normalized = match subtag.len() {
            4 if subtag.chars().all(|c| c.is_ascii_alphabetic()) => {
                let (head, tail) = subtag.split_at(1);
                format!("{}{}", head.to_ascii_uppercase(), tail.to_ascii_lowercase())
            }
            2 if subtag.chars().all(|c| c.is_ascii_alphabetic()) => subtag.to_ascii_uppercase(),
            3 if subtag.chars().all(|c| c.is_ascii_digit()) => subtag.to_string(),
            _ => subtag.to_ascii_lowercase(),
        };
        parts.push(normalized);
    }
    Some(parts.join("-"))
}

/// Open Graph locale form (`ar_SA`). Falls back to the trimmed input when it
/// is not a recognizable locale.
#[must_use]
pub fn to_og_locale(raw: &str) -> String {
    to_bcp47(raw).map_or_else(|| raw.trim().to_string(), |code| code.replace('-', "_"))
}

/// The primary language subtag (`ar` for `ar_SA`).
#[must_use]
pub fn language_of(raw: &str) -> Option<String> {
    to_bcp47(raw).and_then(|code| code.split('-').next().map(str::to_string))
}

/// Split a comma-separated locale list, dropping blanks.
#[must_use]
pub fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).collect()
}
