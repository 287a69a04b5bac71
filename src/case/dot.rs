use crate::tokenizer::{tokenize, Variant};

/// Convert text to dot.case: lowercase words joined with `.`.
///
/// Uses the same word rules as [`to_camel_case`](super::to_camel_case).
pub fn to_dot_case(text: &str) -> String {
    tokenize(text, Variant::Separator).join(".")
}
