pub mod camel;
pub mod dot;
pub mod kebab;
pub mod snake;

pub use camel::to_camel_case;
pub use dot::to_dot_case;
pub use kebab::to_kebab_case;
pub use snake::to_snake_case;

use crate::error::CaseError;
use crate::Conversion;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Target naming convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    #[default]
    Camel,
    Dot,
    Kebab,
    Snake,
}

impl Convention {
    pub const ALL: [Convention; 4] = [
        Convention::Camel,
        Convention::Dot,
        Convention::Kebab,
        Convention::Snake,
    ];

    /// Name of the conversion function, used in error messages
    pub fn function_name(&self) -> &'static str {
        match self {
            Convention::Camel => "to_camel_case",
            Convention::Dot => "to_dot_case",
            Convention::Kebab => "to_kebab_case",
            Convention::Snake => "to_snake_case",
        }
    }

    /// Convert a string. Only kebab-case can fail, on blank input.
    pub fn convert(&self, text: &str) -> Result<String, CaseError> {
        match self {
            Convention::Camel => Ok(to_camel_case(text)),
            Convention::Dot => Ok(to_dot_case(text)),
            Convention::Kebab => to_kebab_case(text),
            Convention::Snake => Ok(to_snake_case(text)),
        }
    }

    /// Convert a loosely typed value.
    ///
    /// `None` and JSON `null` are missing input, any other non-string value
    /// is a type mismatch. Strings go through [`Convention::convert`].
    pub fn convert_value(&self, value: Option<&Value>) -> Result<String, CaseError> {
        let function = self.function_name();
        match value {
            None | Some(Value::Null) => Err(CaseError::Missing { function }),
            Some(Value::String(text)) => self.convert(text),
            Some(other) => Err(CaseError::WrongType {
                function,
                found: type_name(other),
            }),
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl FromStr for Convention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | '.' | ' '))
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "camel" | "camelcase" => Ok(Convention::Camel),
            "dot" | "dotcase" => Ok(Convention::Dot),
            "kebab" | "kebabcase" => Ok(Convention::Kebab),
            "snake" | "snakecase" => Ok(Convention::Snake),
            _ => Err(format!("Unknown convention: {}", s)),
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convention::Camel => write!(f, "camel"),
            Convention::Dot => write!(f, "dot"),
            Convention::Kebab => write!(f, "kebab"),
            Convention::Snake => write!(f, "snake"),
        }
    }
}

/// One input to a batch conversion
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Text(String),
    Value(Option<Value>),
}

impl Input {
    /// How the input is shown next to its result
    pub fn display(&self) -> String {
        match self {
            Input::Text(text) => text.clone(),
            Input::Value(None) => "<missing>".to_string(),
            Input::Value(Some(Value::String(text))) => text.clone(),
            Input::Value(Some(value)) => value.to_string(),
        }
    }
}

/// Convert every input, keeping input order in the result
pub fn convert_all(convention: Convention, inputs: &[Input]) -> Vec<Conversion> {
    inputs
        .par_iter()
        .map(|input| {
            let output = match input {
                Input::Text(text) => convention.convert(text),
                Input::Value(value) => convention.convert_value(value.as_ref()),
            };
            Conversion {
                input: input.display(),
                output,
            }
        })
        .collect()
}
