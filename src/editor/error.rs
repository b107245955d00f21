use std::fmt;

/// Errors raised at the text boundary (CLI, config files, wasm).
/// Editor operations themselves never fail.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    UnknownUnit(String),
    InvalidSeed(String),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::UnknownUnit(unit) => {
                write!(f, "Unknown unit: '{}' (expected '%' or 'px')", unit)
            }
            UnitError::InvalidSeed(msg) => write!(f, "Invalid initial value: {}", msg),
        }
    }
}

impl std::error::Error for UnitError {}
