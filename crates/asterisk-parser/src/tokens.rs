//! Named tokenizers over console text
//!
//! Each tokenizer is one compiled pattern, built once and shared read-only by
//! every parser. Callers ask for at most `n` matches and must check how many
//! came back before indexing.

use regex::Regex;
use std::sync::LazyLock;

static PATTERNS: LazyLock<TokenPatterns> = LazyLock::new(TokenPatterns::new);

struct TokenPatterns {
    integers: Regex,
    numbers: Regex,
    words: Regex,
    yes_no: Regex,
}

impl TokenPatterns {
    fn new() -> Self {
        // Compile-time constant patterns; a failure here is a programmer error.
        Self {
            integers: Regex::new(r"\d+").expect("static regex must compile"),
            // 12,345 or 12.50 as well as plain 12
            numbers: Regex::new(r"\d[\d,]*\.?\d*").expect("static regex must compile"),
            words: Regex::new(r"\S+").expect("static regex must compile"),
            yes_no: Regex::new(r"yes|no").expect("static regex must compile"),
        }
    }
}

/// The token classes recognised in console replies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tokenizer {
    /// Plain digit runs
    Integers,
    /// Digit runs with optional thousands grouping and decimal part
    Numbers,
    /// Maximal non-whitespace runs
    Words,
    /// Literal `yes` / `no`
    YesNo,
}

impl Tokenizer {
    fn pattern(&self) -> &'static Regex {
        let patterns = &*PATTERNS;
        match self {
            Tokenizer::Integers => &patterns.integers,
            Tokenizer::Numbers => &patterns.numbers,
            Tokenizer::Words => &patterns.words,
            Tokenizer::YesNo => &patterns.yes_no,
        }
    }

    /// Up to `limit` matches in `text`, left to right
    pub fn find<'t>(&self, text: &'t str, limit: usize) -> Vec<&'t str> {
        self.pattern()
            .find_iter(text)
            .take(limit)
            .map(|m| m.as_str())
            .collect()
    }
}

/// Up to `limit` plain digit runs
pub fn find_integers(text: &str, limit: usize) -> Vec<&str> {
    Tokenizer::Integers.find(text, limit)
}

/// Up to `limit` grouped or decimal numbers
pub fn find_numbers(text: &str, limit: usize) -> Vec<&str> {
    Tokenizer::Numbers.find(text, limit)
}

/// Up to `limit` whitespace-delimited tokens
pub fn find_tokens(text: &str, limit: usize) -> Vec<&str> {
    Tokenizer::Words.find(text, limit)
}

/// Up to `limit` literal `yes`/`no` occurrences
pub fn find_yes_no(text: &str, limit: usize) -> Vec<&str> {
    Tokenizer::YesNo.find(text, limit)
}
