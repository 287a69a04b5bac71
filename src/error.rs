use thiserror::Error;

/// Invalid-argument errors raised by the case conversions.
///
/// `function` is the name of the conversion that rejected its input, so the
/// rendered message reads like `to_kebab_case: expected a non-empty string`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    #[error("{function}: input is null or missing; expected a string")]
    Missing { function: &'static str },

    #[error("{function}: expected string but received {found}")]
    WrongType {
        function: &'static str,
        found: &'static str,
    },

    #[error("{function}: expected a non-empty string")]
    Empty { function: &'static str },
}

impl CaseError {
    pub fn function(&self) -> &'static str {
        match self {
            CaseError::Missing { function }
            | CaseError::WrongType { function, .. }
            | CaseError::Empty { function } => function,
        }
    }
}
