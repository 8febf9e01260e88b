//! Text helpers.

/// Default suffix appended to truncated titles and descriptions.
pub const DEFAULT_TRUNCATION_SUFFIX: &str = "...";

/// Truncate `text` to at most `max` characters.
///
/// Text of `max` characters or fewer is returned unchanged. Longer text
/// becomes exactly `max` characters: `max - suffix_len` characters of content
/// followed by `suffix`. When the suffix alone does not fit, the first `max`
/// characters of the suffix are returned. Lengths count `char`s, so Arabic
/// and other non-ASCII text is never split inside a code point.
#[must_use]
pub fn truncate(text: &str, max: usize, suffix: &str) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let suffix_len = suffix.chars().count();
    if suffix_len >= max {
        return suffix.chars().take(max).collect();
    }

    let mut out: String = text.chars().take(max - suffix_len).collect();
    out.push_str(suffix);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("About us", 60, "..."), "About us");
        assert_eq!(truncate("exactly", 7, "..."), "exactly");
    }

    #[test]
    fn long_text_has_exact_length_and_suffix() {
        let title = "a".repeat(75);
        let out = truncate(&title, 60, DEFAULT_TRUNCATION_SUFFIX);
        assert_eq!(out.chars().count(), 60);
        assert!(out.ends_with("..."));
        assert_eq!(&out[..57], &title[..57]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let title = "عن منصة مدونتي للمحتوى العربي";
        let out = truncate(title, 10, "…");
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn oversized_suffix_is_clipped() {
        assert_eq!(truncate("abcdef", 2, "..."), "..");
        assert_eq!(truncate("abcdef", 0, "..."), "");
    }
}
