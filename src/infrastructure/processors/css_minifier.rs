use crate::core::interfaces::CssMinifier;
use crate::utils::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

// Pre-compiled substitution patterns. The comment pattern is non-greedy with
// dot-matches-newline and accepts end of input as a terminator, so an
// unterminated /* strips to end of file.
static BLOCK_COMMENTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?(?:\*/|\z)").unwrap());
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static AROUND_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*([{}:;,>+~])\s*").unwrap());

/// Pattern-based CSS minifier: strip comments, collapse whitespace runs,
/// drop whitespace next to structural punctuation, trim. CSS comments cannot
/// nest or hide inside strings the way JS slashes can, so three substitution
/// passes are enough.
pub struct RegexCssMinifier;

impl RegexCssMinifier {
    pub fn new() -> Self {
        Self
    }

    /// Minify CSS source. Never fails.
    pub fn minify_source(&self, source: &str) -> String {
        let text = BLOCK_COMMENTS.replace_all(source, "");
        let text = WHITESPACE_RUNS.replace_all(&text, " ");
        let text = AROUND_PUNCTUATION.replace_all(&text, "${1}");
        text.trim().to_string()
    }
}

impl Default for RegexCssMinifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CssMinifier for RegexCssMinifier {
    async fn minify(&self, content: &str, _path: &Path) -> Result<String> {
        Ok(self.minify_source(content))
    }
}
