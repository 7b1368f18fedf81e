use crate::core::interfaces::JsMinifier;
use crate::utils::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

// Pre-compiled patterns for the whitespace post-passes
static HARD_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\t\r\n]+").unwrap());
static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());
static AROUND_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*([{}=;:,()<>+\-*/%&|!?\[\]])\s*").unwrap());

/// Lexical mode at the current scan position. Exactly one is active;
/// string and comment modes are entered only from `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanMode {
    Normal,
    LineComment,
    BlockComment,
    StringSingle,
    StringDouble,
    TemplateLiteral,
}

impl ScanMode {
    /// The character that closes the current string-like mode, if any.
    fn terminator(self) -> Option<char> {
        match self {
            ScanMode::StringSingle => Some('\''),
            ScanMode::StringDouble => Some('"'),
            ScanMode::TemplateLiteral => Some('`'),
            _ => None,
        }
    }
}

/// Single-pass JavaScript comment stripper + whitespace collapser.
///
/// Best effort by design: regex literals and nested template interpolation
/// are not understood, and the whitespace passes run over the emitted buffer,
/// so whitespace inside preserved string literals is collapsed too.
pub struct ScannerJsMinifier;

impl ScannerJsMinifier {
    pub fn new() -> Self {
        Self
    }

    /// Minify JavaScript source. Never fails; malformed input degrades
    /// (an unterminated comment discards the remainder of the file, an
    /// unterminated string is emitted verbatim to end of input).
    pub fn minify_source(&self, source: &str) -> String {
        collapse_whitespace(&strip_comments(source))
    }
}

impl Default for ScannerJsMinifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl JsMinifier for ScannerJsMinifier {
    async fn minify(&self, content: &str, _path: &Path) -> Result<String> {
        Ok(self.minify_source(content))
    }
}

/// Forward pass with one character of lookahead: drops `//` and `/* */`
/// comments, emits string/template literal content byte-for-byte.
fn strip_comments(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut mode = ScanMode::Normal;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        match mode {
            ScanMode::LineComment => {
                // Comment text is dropped; the terminating newline survives.
                if c == '\n' {
                    out.push(c);
                    mode = ScanMode::Normal;
                }
            }
            ScanMode::BlockComment => {
                if c == '*' && next == Some('/') {
                    mode = ScanMode::Normal;
                    i += 1;
                }
            }
            ScanMode::StringSingle | ScanMode::StringDouble | ScanMode::TemplateLiteral => {
                out.push(c);
                if Some(c) == mode.terminator() && !is_escaped(&chars, i) {
                    mode = ScanMode::Normal;
                }
            }
            ScanMode::Normal => match (c, next) {
                ('/', Some('/')) => {
                    mode = ScanMode::LineComment;
                    i += 1;
                }
                ('/', Some('*')) => {
                    mode = ScanMode::BlockComment;
                    i += 1;
                }
                ('\'', _) => {
                    mode = ScanMode::StringSingle;
                    out.push(c);
                }
                ('"', _) => {
                    mode = ScanMode::StringDouble;
                    out.push(c);
                }
                ('`', _) => {
                    mode = ScanMode::TemplateLiteral;
                    out.push(c);
                }
                _ => out.push(c),
            },
        }

        i += 1;
    }

    out
}

/// Whether the character at `pos` is escaped: true when an odd number of
/// contiguous backslashes immediately precedes it.
fn is_escaped(chars: &[char], pos: usize) -> bool {
    let mut backslashes = 0;
    let mut j = pos;
    while j > 0 && chars[j - 1] == '\\' {
        backslashes += 1;
        j -= 1;
    }
    backslashes % 2 == 1
}

/// Post-passes over the comment-stripped buffer: hard whitespace to a single
/// space, space runs to a single space, then no whitespace next to the
/// punctuation set, then trim.
fn collapse_whitespace(text: &str) -> String {
    let text = HARD_WHITESPACE.replace_all(text, " ");
    let text = SPACE_RUNS.replace_all(&text, " ");
    let text = AROUND_PUNCTUATION.replace_all(&text, "${1}");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minify(source: &str) -> String {
        ScannerJsMinifier::new().minify_source(source)
    }

    #[test]
    fn test_line_comment_removed() {
        let out = minify("let a = 1; // counter\nlet b = 2;\n");
        assert_eq!(out, "let a=1;let b=2;");
        assert!(!out.contains("counter"));
    }

    #[test]
    fn test_block_comment_removed() {
        let out = minify("let a = 1; /* a block\n   comment */ let b = 2;");
        assert_eq!(out, "let a=1;let b=2;");
    }

    #[test]
    fn test_add_function_exact_output() {
        let source = "// header comment\nfunction add(a, b) {\n  return a + b; // inline\n}\n";
        assert_eq!(minify(source), "function add(a,b){return a+b;}");
    }

    #[test]
    fn test_slashes_inside_string_survive() {
        let out = minify("const url = \"http://example.com\";");
        assert!(out.contains("http://example.com"));
    }

    #[test]
    fn test_slashes_inside_template_survive() {
        let out = minify("const u = `https://example.com/${path}`;");
        assert!(out.contains("https://example.com/"));
    }

    #[test]
    fn test_escaped_quote_does_not_terminate() {
        let out = minify("const s = \"a\\\"b\"; // tail");
        assert!(out.contains("a\\\"b"));
        assert!(!out.contains("tail"));
    }

    #[test]
    fn test_double_backslash_before_quote_terminates() {
        // "x\\" is a complete string: the quote follows an even backslash run.
        let out = minify("const s = \"x\\\\\"; // gone");
        assert!(out.contains("\"x\\\\\""));
        assert!(!out.contains("gone"));
    }

    #[test]
    fn test_unterminated_block_comment_yields_empty() {
        assert_eq!(minify("/* never closes"), "");
    }

    #[test]
    fn test_unterminated_line_comment_at_eof() {
        assert_eq!(minify("let a = 1; // no trailing newline"), "let a=1;");
    }

    #[test]
    fn test_whitespace_collapse_and_punctuation() {
        let out = minify("if (a >   b) {\n\treturn a\t- b;\r\n}");
        assert_eq!(out, "if(a>b){return a-b;}");
    }

    #[test]
    fn test_fixed_point_on_minified_output() {
        let source = "// header\nfunction mul(a, b) {\n  return a * b;\n}\nconst u = 'http://x.io';\n";
        let once = minify(source);
        let twice = minify(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_is_escaped_backslash_parity() {
        let chars: Vec<char> = "ab\\\"".chars().collect();
        assert!(is_escaped(&chars, 3)); // one backslash before the quote

        let chars: Vec<char> = "ab\\\\\"".chars().collect();
        assert!(!is_escaped(&chars, 4)); // two backslashes

        let chars: Vec<char> = "\\\\\\\"".chars().collect();
        assert!(is_escaped(&chars, 3)); // three backslashes

        let chars: Vec<char> = "abc\"".chars().collect();
        assert!(!is_escaped(&chars, 3)); // none
    }

    #[test]
    fn test_empty_string_literal_closes() {
        let out = minify("const e = ''; // note");
        assert!(out.starts_with("const e="));
        assert!(!out.contains("note"));
    }

}
