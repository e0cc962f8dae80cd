//! Text classification helpers
//!
//! Used by composition objects to derive attributes from caller input:
//! `PlainText` sets its `emoji` flag from [`contains_emoji`] and `SlackFile`
//! picks between `url` and `id` with [`is_url`].

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Pictograph, emoticon, transport, alchemical, geometric, arrow,
/// supplemental symbol, chess, extended pictograph, dingbat and misc
/// symbol ranges
static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "[",
        r"\x{1F300}-\x{1F5FF}",
        r"\x{1F600}-\x{1F64F}",
        r"\x{1F680}-\x{1F6FF}",
        r"\x{1F700}-\x{1F77F}",
        r"\x{1F780}-\x{1F7FF}",
        r"\x{1F800}-\x{1F8FF}",
        r"\x{1F900}-\x{1F9FF}",
        r"\x{1FA00}-\x{1FA6F}",
        r"\x{1FA70}-\x{1FAFF}",
        r"\x{2700}-\x{27BF}",
        r"\x{2600}-\x{26FF}",
        r"\x{2B00}-\x{2BFF}",
        "]"
    ))
    .unwrap()
});

/// Whether the text contains at least one emoji codepoint
///
/// # Examples
///
/// ```rust
/// use blockkit_core::utils::contains_emoji;
///
/// assert!(!contains_emoji("Hello"));
/// assert!(contains_emoji("Hello 🎉"));
/// ```
pub fn contains_emoji(text: &str) -> bool {
    EMOJI_RE.is_match(text)
}

/// Whether the value parses as a URL with both a scheme and a host
pub fn is_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| url.host_str().is_some_and(|host| !host.is_empty()))
        .unwrap_or(false)
}

/// Lower-cased extension of a URL's path, if any
///
/// Query strings and fragments are ignored.
pub fn url_extension(value: &str) -> Option<String> {
    let url = Url::parse(value).ok()?;
    let file_name = url.path_segments()?.next_back()?;
    let (stem, extension) = file_name.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_emoji() {
        assert!(!contains_emoji("Hello"));
        assert!(!contains_emoji(""));
        assert!(contains_emoji("Hello 🎉"));
        assert!(contains_emoji("🚀 launch"));
        assert!(contains_emoji("check ✅"));
        assert!(contains_emoji("sun ☀"));
    }

    #[test]
    fn test_non_emoji_symbols() {
        assert!(!contains_emoji("a + b = c"));
        assert!(!contains_emoji("café naïve"));
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/image.png"));
        assert!(is_url("http://localhost:8080"));
        assert!(!is_url("F0123456789"));
        assert!(!is_url("not a url"));
        assert!(!is_url("mailto:someone@example.com"));
    }

    #[test]
    fn test_url_extension() {
        assert_eq!(
            url_extension("https://example.com/a/photo.PNG"),
            Some("png".to_string())
        );
        assert_eq!(
            url_extension("https://example.com/photo.jpeg?size=large#top"),
            Some("jpeg".to_string())
        );
        assert_eq!(url_extension("https://example.com/photo"), None);
        assert_eq!(url_extension("https://example.com/"), None);
        assert_eq!(url_extension("not a url"), None);
    }
}
