use std::fmt::Display;

use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalError {
    internal_error: ErrorImpl,
    line: Option<u32>,
}

impl LexicalError {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        LexicalError {
            internal_error: error_impl,
            line: Some(line),
        }
    }

    /// Error that concerns the whole program rather than one line.
    pub fn program_wide(error_impl: ErrorImpl) -> Self {
        LexicalError {
            internal_error: error_impl,
            line: None,
        }
    }

    pub fn get_line(&self) -> Option<u32> {
        self.line
    }

    /// Line as reported to consumers, `-1` for whole-program findings.
    pub fn get_reported_line(&self) -> i64 {
        match self.line {
            Some(line) => line as i64,
            None => -1,
        }
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownSymbol { .. } => "UnknownSymbol",
            ErrorImpl::ExpectedSymbol { .. } => "ExpectedSymbol",
            ErrorImpl::VariableRedeclared { .. } => "VariableRedeclared",
            ErrorImpl::VariableUsedWithoutDeclaration { .. } => "VariableUsedWithoutDeclaration",
            ErrorImpl::LabelReferencedMoreThanOnce { .. } => "LabelReferencedMoreThanOnce",
            ErrorImpl::LabelRedeclared { .. } => "LabelRedeclared",
            ErrorImpl::LabelNeverDeclared { .. } => "LabelNeverDeclared",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnknownSymbol { .. } => ErrorTip::None,
            ErrorImpl::ExpectedSymbol { found, expected } => ErrorTip::Suggestion(format!(
                "Expected `{}` after `{}`",
                expected, found
            )),
            ErrorImpl::VariableRedeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::VariableUsedWithoutDeclaration { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` not declared, did you forget `int {}`?",
                variable, variable
            )),
            ErrorImpl::LabelReferencedMoreThanOnce { label } => {
                ErrorTip::Suggestion(format!("Label `{}` is already the target of a goto", label))
            }
            ErrorImpl::LabelRedeclared { label } => {
                ErrorTip::Suggestion(format!("Label `{}` already declared", label))
            }
            ErrorImpl::LabelNeverDeclared { label } => ErrorTip::Suggestion(format!(
                "Label `{}` is referenced but never declared, add `{}:` before a statement",
                label, label
            )),
        }
    }
}

impl Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.get_reported_line(), self.internal_error)
    }
}

impl std::error::Error for LexicalError {}

impl Serialize for LexicalError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("LexicalError", 4)?;
        state.serialize_field("kind", self.get_error_name())?;
        state.serialize_field("line", &self.get_reported_line())?;
        state.serialize_field("message", &self.internal_error.to_string())?;
        state.serialize_field("detail", &self.internal_error)?;
        state.end()
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorImpl {
    #[error("unknown symbol: {symbol:?}")]
    UnknownSymbol { symbol: char },
    #[error("expected {expected:?} after {found:?}")]
    ExpectedSymbol { found: String, expected: String },
    #[error("variable {variable:?} already declared")]
    VariableRedeclared { variable: String },
    #[error("variable {variable:?} used without declaration")]
    VariableUsedWithoutDeclaration { variable: String },
    #[error("label {label:?} referenced more than once")]
    LabelReferencedMoreThanOnce { label: String },
    #[error("label {label:?} already declared")]
    LabelRedeclared { label: String },
    #[error("label {label:?} never declared")]
    LabelNeverDeclared { label: String },
}
