use crate::editor::number::parse_number;
use crate::editor::sanitizer::sanitize;
use log::debug;

/// Turn raw input into text that parses to a finite number.
///
/// Returns the sanitized input when it is usable, otherwise `last_good`
/// unchanged.
pub fn resolve(raw_input: &str, last_good: &str) -> String {
    let cleaned = sanitize(raw_input);

    if is_incomplete(&cleaned) || parse_number(&cleaned).is_none() {
        debug!(
            "resolve({:?}) unusable, falling back to {:?}",
            raw_input, last_good
        );
        return last_good.to_string();
    }

    cleaned
}

// Sanitizer outputs that carry no digits
pub(crate) fn is_incomplete(cleaned: &str) -> bool {
    matches!(cleaned, "" | "." | "-")
}
