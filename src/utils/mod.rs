// src/utils/mod.rs

//! Utility functions and helpers.

pub mod log;

use std::sync::OnceLock;

use unicode_segmentation::UnicodeSegmentation;
use url::Url;

/// Resolve a potentially relative URL against a base URL.
///
/// Image and file fields arrive as either absolute URLs or paths relative
/// to the API host.
pub fn resolve_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

fn tag_pattern() -> &'static regex::Regex {
    static TAG: OnceLock<regex::Regex> = OnceLock::new();
    TAG.get_or_init(|| regex::Regex::new(r"<[^>]*>").expect("valid tag pattern"))
}

/// Remove markup tags from a rich-text field.
pub fn strip_tags(text: &str) -> String {
    tag_pattern().replace_all(text, " ").into_owned()
}

/// Collapse runs of whitespace into single spaces.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to at most `max` grapheme clusters, appending an ellipsis.
pub fn truncate_graphemes(text: &str, max: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max {
        text.to_string()
    } else {
        let mut out: String = graphemes[..max].concat();
        out.push('…');
        out
    }
}

/// Prepare a rich-text field for one-line display.
pub fn clean_rich_text(text: &str, max_graphemes: usize) -> String {
    truncate_graphemes(&normalize_whitespace(&strip_tags(text)), max_graphemes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let base = Url::parse("http://localhost:8000/api/").unwrap();
        assert_eq!(
            resolve_url(&base, "/media/news/1.jpg"),
            "http://localhost:8000/media/news/1.jpg"
        );
        assert_eq!(
            resolve_url(&base, "https://cdn.example.com/x.jpg"),
            "https://cdn.example.com/x.jpg"
        );
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(
            normalize_whitespace(&strip_tags("<p>Hello <b>world</b></p>")),
            "Hello world"
        );
    }

    #[test]
    fn test_truncate_graphemes_multibyte_safe() {
        // Georgian letters are multi-byte; truncation must not split them
        let text = "სპორტული დარბაზი";
        let short = truncate_graphemes(text, 8);
        assert_eq!(short, "სპორტული…");
        assert_eq!(truncate_graphemes("abc", 10), "abc");
    }

    #[test]
    fn test_clean_rich_text() {
        assert_eq!(
            clean_rich_text("<div>New\n  sports\thall</div>", 100),
            "New sports hall"
        );
    }
}
