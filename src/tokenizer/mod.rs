//! Text normalization
//!
//! Turns raw text into the token sequence the counters work on. The rules are
//! applied in a fixed order:
//!
//! 1. drop every `.`
//! 2. drop every `,`
//! 3. lowercase
//! 4. split on runs of whitespace
//!
//! # Example
//!
//! ```
//! use wordpulse::tokenizer::tokenize;
//!
//! let tokens = tokenize("The cat sat. The cat ran, fast.");
//! assert_eq!(tokens, vec!["the", "cat", "sat", "the", "cat", "ran", "fast"]);
//! ```

/// Tokenize raw text into lowercase words without `.` or `,`
///
/// Never fails; empty or whitespace-only input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let stripped: String = text.chars().filter(|&c| c != '.' && c != ',').collect();

    stripped
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_tokenize_strips_dots_and_commas() {
        assert_eq!(tokenize("a.b, c,d."), vec!["ab", "cd"]);
    }

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("Hello WORLD"), vec!["hello", "world"]);
    }

    #[test]
    fn test_tokenize_punctuation_only_word_vanishes() {
        // "..." becomes empty before splitting, so it never yields a token
        assert_eq!(tokenize("one ... two , three"), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_tokenize_keeps_other_punctuation() {
        assert_eq!(tokenize("don't stop!"), vec!["don't", "stop!"]);
    }

    #[test]
    fn test_tokenize_splits_on_mixed_whitespace() {
        assert_eq!(tokenize("a\tb\nc  \r\n d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        let text = "The cat sat. The cat ran, fast.";
        assert_eq!(tokenize(text), tokenize(text));
    }

    #[test]
    fn test_tokenize_unicode_lowercase() {
        assert_eq!(tokenize("ÉCOLE Straße"), vec!["école", "straße"]);
    }
}
