use crate::tokenizer::{tokenize, Variant};

/// Convert text to camelCase.
///
/// Whitespace, `-` and `_` separate words; other punctuation is removed.
/// The first word stays lowercase and every following word gets an
/// uppercase first character. Blank or word-less input gives `""`.
///
/// ```
/// assert_eq!(casekit::to_camel_case("  This-is_an Example!  "), "thisIsAnExample");
/// ```
pub fn to_camel_case(text: &str) -> String {
    let words = tokenize(text, Variant::Separator);

    let mut result = String::with_capacity(text.len());
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            result.push_str(word);
        } else {
            result.push_str(&capitalize(word));
        }
    }
    result
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
