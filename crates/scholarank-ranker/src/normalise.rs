//! Text normalisation ahead of keyword matching.

use regex::Regex;
use std::sync::OnceLock;

struct Patterns {
    whitespace: Regex,
    url: Regex,
    code_fence: Regex,
    inline_code: Regex,
    punctuation: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        whitespace: Regex::new(r"\s+").expect("static regex"),
        url: Regex::new(r"https?://\S+").expect("static regex"),
        code_fence: Regex::new(r"(?s)```.*?```").expect("static regex"),
        inline_code: Regex::new(r"`[^`]*`").expect("static regex"),
        punctuation: Regex::new(r#"[/:;()\[\]{}*_"“”]"#).expect("static regex"),
    })
}

/// Lower-case, collapse whitespace, trim.
/// Used for keywords, stopwords and author names.
pub fn normalise_phrase(text: &str) -> String {
    patterns()
        .whitespace
        .replace_all(text.trim(), " ")
        .to_lowercase()
}

/// Normalise free text for substring matching.
///
/// Drops URLs and code spans (fenced, then inline), turns the punctuation set
/// `/ : ; ( ) [ ] { } * _ " “ ”` into spaces, and collapses whitespace.
/// Total: empty in, empty out.
pub fn tokenize(text: &str) -> String {
    let p = patterns();
    let t = normalise_phrase(text);
    let t = p.url.replace_all(&t, " ");
    let t = p.code_fence.replace_all(&t, " ");
    let t = p.inline_code.replace_all(&t, " ");
    let t = p.punctuation.replace_all(&t, " ");
    p.whitespace.replace_all(&t, " ").trim().to_string()
}
