use crate::types::Token;

/// Non-letter symbols stripped on top of ASCII punctuation and digits
const EXTRA_SYMBOLS: &[char] = &['º', '’', '‘', '“', '”', '«', '»', '–', '—', '…'];

fn is_stripped(c: char) -> bool {
    c.is_whitespace()
        || c.is_ascii_punctuation()
        || c.is_ascii_digit()
        || EXTRA_SYMBOLS.contains(&c)
}

pub trait Tokenizer {
    // Default unigram normalization
    fn normalize(&self, text: &str) -> String {
        // No Unicode normalization: combining marks stay separate tokens
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

        compact
            .to_lowercase()
            .chars()
            .filter(|c| !is_stripped(*c))
            .collect()
    }

    /// Break text into single-character tokens, left to right
    fn tokenize(&self, text: &str) -> Vec<Token> {
        self.normalize(text).chars().collect()
    }
}

/// Tokenizer used for every profile built from text
pub struct UnigramTokenizer;
impl Tokenizer for UnigramTokenizer {}

pub fn tokenize(text: &str) -> Vec<Token> {
    UnigramTokenizer.tokenize(text)
}
