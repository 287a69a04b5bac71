use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    // A word is a run of Unicode letters and/or numbers
    static ref WORD: Regex = Regex::new(r"[\p{L}\p{N}]+").unwrap();
    static ref NON_WORD_CHAR: Regex = Regex::new(r"[^\p{L}\p{N}]").unwrap();
    static ref SEPARATORS: Regex = Regex::new(r"[-_\s\x{FEFF}]+").unwrap();
}

/// Tokenization rule used to break text into words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Every maximal letter/digit run is a word; everything else splits.
    Pattern,
    /// Only whitespace, `-` and `_` split; other punctuation is dropped
    /// from inside the pieces.
    #[default]
    Separator,
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pattern" | "a" => Ok(Variant::Pattern),
            "separator" | "b" => Ok(Variant::Separator),
            _ => Err(format!("Unknown tokenizer variant: {}", s)),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Pattern => write!(f, "pattern"),
            Variant::Separator => write!(f, "separator"),
        }
    }
}

/// Strip leading and trailing whitespace, byte order marks included
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Trim `text`, split it with `variant` and lowercase every word
pub fn tokenize(text: &str, variant: Variant) -> Vec<String> {
    let trimmed = trim_text(text);
    if trimmed.is_empty() {
        return Vec::new();
    }

    let words = match variant {
        Variant::Pattern => extract_words(trimmed),
        Variant::Separator => split_words(trimmed),
    };

    words.into_iter().map(|w| w.to_lowercase()).collect()
}

/// Collect every maximal run of letters/digits, case preserved.
///
/// `"2.0-beta"` yields `["2", "0", "beta"]`.
pub fn extract_words(text: &str) -> Vec<String> {
    WORD.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Split on runs of whitespace, `-` and `_`, then strip any other
/// non-letter/non-digit character from each piece, case preserved.
///
/// `"2.0-beta"` yields `["20", "beta"]`.
pub fn split_words(text: &str) -> Vec<String> {
    let separated = SEPARATORS.replace_all(text, " ");

    separated
        .split(' ')
        .map(|piece| NON_WORD_CHAR.replace_all(piece, "").into_owned())
        .filter(|piece| !piece.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_splits_on_punctuation() {
        assert_eq!(extract_words("2.0-beta"), vec!["2", "0", "beta"]);
        assert_eq!(
            extract_words("  This-is_an Example!  "),
            vec!["This", "is", "an", "Example"]
        );
    }

    #[test]
    fn test_separator_drops_inner_punctuation() {
        assert_eq!(split_words("2.0-beta"), vec!["20", "beta"]);
        assert_eq!(split_words("hello__world-test"), vec!["hello", "world", "test"]);
        assert_eq!(split_words("-leading and trailing_"), vec!["leading", "and", "trailing"]);
    }

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(
            tokenize("SCREEN_NAME", Variant::Separator),
            vec!["screen", "name"]
        );
        assert_eq!(
            tokenize(" Version 2.0-BETA ", Variant::Pattern),
            vec!["version", "2", "0", "beta"]
        );
    }

    #[test]
    fn test_blank_and_punctuation_only() {
        for variant in [Variant::Pattern, Variant::Separator] {
            assert!(tokenize("", variant).is_empty());
            assert!(tokenize(" \t\n ", variant).is_empty());
            assert!(tokenize("!?.,;", variant).is_empty());
            assert!(tokenize("-- __ --", variant).is_empty());
        }
    }

    #[test]
    fn test_unicode_letters_and_digits_are_words() {
        assert_eq!(tokenize("éxemple test", Variant::Separator), vec!["éxemple", "test"]);
        assert_eq!(extract_words("straße·Ωmega"), vec!["straße", "Ωmega"]);
        // Arabic-Indic digits are numbers too
        assert_eq!(extract_words("v٣ release"), vec!["v٣", "release"]);
    }

    #[test]
    fn test_separator_runs_collapse_to_one_boundary() {
        let text = "alpha - _ \t beta";
        assert_eq!(split_words(text), vec!["alpha", "beta"]);
        assert_eq!(extract_words("alpha-!_?beta"), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert_eq!(trim_text("\u{FEFF} padded \u{FEFF}"), "padded");
        assert!(tokenize("\u{FEFF}", Variant::Separator).is_empty());
        assert_eq!(split_words("left\u{FEFF}right"), vec!["left", "right"]);
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!("pattern".parse::<Variant>().unwrap(), Variant::Pattern);
        assert_eq!("Separator".parse::<Variant>().unwrap(), Variant::Separator);
        assert!("regex".parse::<Variant>().is_err());
        assert_eq!(Variant::default().to_string(), "separator");
    }
}
