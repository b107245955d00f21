// Unit-aware numeric value editing: sanitize typed text, resolve it against
// the last good value, and keep the committed value inside the unit's range

pub mod error;
pub mod number;
pub mod resolver;
pub mod sanitizer;
pub mod stepper;
pub mod types;


pub use error::UnitError;
pub use number::{canonicalize, parse_number, parse_or_zero};
pub use resolver::resolve;
pub use sanitizer::sanitize;
pub use stepper::{UnitValueEditor, DEFAULT_VALUE};
pub use types::{EditorSnapshot, Unit, UnitRange};
