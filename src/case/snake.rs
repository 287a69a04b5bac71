use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"[\s\x{FEFF}]+").unwrap();
    static ref NON_WORD: Regex = Regex::new(r"\W+").unwrap();
    static ref UNDERSCORES: Regex = Regex::new(r"_+").unwrap();
}

/// Convert text to snake_case.
///
/// Whitespace runs become `_`, other non-word characters (hyphens included)
/// are removed and repeated underscores collapse. Leading and trailing
/// whitespace is not trimmed, so `" a b "` gives `"_a_b_"`.
pub fn to_snake_case(text: &str) -> String {
    let lowered = text.to_lowercase();
    let underscored = WHITESPACE.replace_all(&lowered, "_");
    let cleaned = NON_WORD.replace_all(&underscored, "");
    UNDERSCORES.replace_all(&cleaned, "_").into_owned()
}
