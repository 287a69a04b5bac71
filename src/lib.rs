pub mod case;
pub mod cli;
pub mod config;
pub mod error;
pub mod tokenizer;

pub use case::{
    convert_all, to_camel_case, to_dot_case, to_kebab_case, to_snake_case, Convention, Input,
};
pub use config::Config;
pub use error::CaseError;
pub use tokenizer::{tokenize, Variant};

/// Result of converting a single input
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub input: String,
    pub output: Result<String, CaseError>,
}

impl Conversion {
    pub fn is_ok(&self) -> bool {
        self.output.is_ok()
    }
}

/// Totals over a batch of conversions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_conversions(conversions: &[Conversion]) -> Self {
        Self {
            total: conversions.len(),
            failed: conversions.iter().filter(|c| !c.is_ok()).count(),
        }
    }
}
