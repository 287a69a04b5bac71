use crate::error::CaseError;
use crate::tokenizer::trim_text;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_WORD_RUN: Regex = Regex::new(r"[^\p{L}\p{N}]+").unwrap();
    static ref INVALID: Regex = Regex::new(r"[^\p{L}\p{N}-]+").unwrap();
}

/// Convert text to kebab-case: lowercase words joined with `-`.
///
/// Every run of characters that are not letters or digits becomes a single
/// hyphen, and hyphens at either end are stripped. Fails when the input is
/// blank after trimming. Input made only of punctuation converts to `""`.
pub fn to_kebab_case(text: &str) -> Result<String, CaseError> {
    let trimmed = trim_text(text);
    if trimmed.is_empty() {
        return Err(CaseError::Empty {
            function: "to_kebab_case",
        });
    }

    let lowered = trimmed.to_lowercase();
    let hyphenated = NON_WORD_RUN.replace_all(&lowered, "-");
    let cleaned = INVALID.replace_all(&hyphenated, "");

    Ok(cleaned.trim_matches('-').to_string())
}
