use crate::editor::error::UnitError;
use crate::editor::number::{canonicalize, parse_number, parse_or_zero};
use crate::editor::resolver::{is_incomplete, resolve};
use crate::editor::sanitizer::sanitize;
use crate::editor::types::{EditorSnapshot, Unit};
use log::debug;

pub const DEFAULT_VALUE: &str = "1.0";

/// Last value known to be a finite, in-range number
#[derive(Debug, Clone, PartialEq)]
struct CommittedValue {
    text: String,
    number: f64,
}

impl CommittedValue {
    fn from_number(number: f64) -> Self {
        Self {
            text: canonicalize(number),
            number,
        }
    }
}

/// Unit-aware numeric field: free-form edit text plus a committed fallback.
///
/// Every operation is total. Invalid text is absorbed on commit, and the
/// committed value always lies inside the range of the unit that was active
/// when it was written.
#[derive(Debug, Clone)]
pub struct UnitValueEditor {
    unit: Unit,
    text: String,
    committed: CommittedValue,
}

impl Default for UnitValueEditor {
    fn default() -> Self {
        Self {
            unit: Unit::Percent,
            text: DEFAULT_VALUE.to_string(),
            committed: CommittedValue {
                text: DEFAULT_VALUE.to_string(),
                number: 1.0,
            },
        }
    }
}

impl UnitValueEditor {
    /// Create an editor seeded with `value` in `unit`.
    /// The seed keeps its text as given (e.g. "1.0") until the first commit.
    pub fn new(unit: Unit, value: &str) -> Result<Self, UnitError> {
        let number = parse_number(value)
            .filter(|_| sanitize(value) == value && !is_incomplete(value))
            .ok_or_else(|| UnitError::InvalidSeed(format!("'{}' is not a number", value)))?;

        if !unit.range().contains(number) {
            return Err(UnitError::InvalidSeed(format!(
                "{} is outside the {} range",
                value, unit
            )));
        }

        Ok(Self {
            unit,
            text: value.to_string(),
            committed: CommittedValue {
                text: value.to_string(),
                number,
            },
        })
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Text currently shown in the field
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn committed(&self) -> &str {
        &self.committed.text
    }

    pub fn committed_number(&self) -> f64 {
        self.committed.number
    }

    /// Replace the edit text verbatim, without validation
    pub fn edit_text(&mut self, raw: &str) -> &str {
        self.text = raw.to_string();
        debug!("edit_text -> {:?}", self.text);
        &self.text
    }

    /// Converge the edit text to a valid value and commit it
    pub fn commit_on_blur(&mut self) -> &str {
        let mut cleaned = sanitize(&self.text);
        if matches!(cleaned.as_str(), "" | ".") {
            cleaned = resolve(&self.text, &self.committed.text);
        }

        let mut number = match parse_number(&cleaned) {
            Some(n) => n,
            None => {
                debug!(
                    "commit: {:?} is not a number, keeping {:?}",
                    self.text, self.committed.text
                );
                self.committed.number
            }
        };

        if number < 0.0 {
            debug!("commit: {} is negative, flooring at 0", number);
            number = 0.0;
        }

        if let Some(max) = self.unit.range().max {
            if number > max {
                number = if self.committed.number <= max {
                    debug!(
                        "commit: {} exceeds {}, reverting to {}",
                        number, max, self.committed.text
                    );
                    self.committed.number
                } else {
                    debug!("commit: {} exceeds {}, clamping", number, max);
                    max
                };
            }
        }

        self.store(number);
        debug!("commit_on_blur -> {:?}", self.text);
        &self.text
    }

    /// Switch units. Moving into percent clamps anything above 100 to "100".
    pub fn change_unit(&mut self, unit: Unit) -> &str {
        if unit == self.unit {
            return &self.text;
        }

        if let Some(max) = unit.range().max {
            let shown = parse_number(&self.text).unwrap_or(self.committed.number);
            if shown > max || self.committed.number > max {
                debug!(
                    "change_unit: {:?} exceeds {} {}, resetting",
                    self.text, max, unit
                );
                self.store(max);
            }
        }

        debug!("change_unit {} -> {}", self.unit, unit);
        self.unit = unit;
        &self.text
    }

    /// Step up by one. Rejected outright (no state change) when the result
    /// would leave the unit's range; it does not clamp like a commit does.
    pub fn increment(&mut self) -> &str {
        let next = parse_or_zero(&self.text) + 1.0;
        let range = self.unit.range();

        if range.max.map_or(false, |max| next > max) {
            debug!("increment to {} rejected in {}", next, self.unit);
            return &self.text;
        }

        self.store(range.clamp(next));
        debug!("increment -> {:?}", self.text);
        &self.text
    }

    /// Step down by one, never below zero
    pub fn decrement(&mut self) -> &str {
        let next = parse_or_zero(&self.text) - 1.0;
        self.store(self.unit.range().clamp(next));
        debug!("decrement -> {:?}", self.text);
        &self.text
    }

    pub fn is_increment_disabled(&self) -> bool {
        match self.unit.range().max {
            Some(max) => parse_or_zero(&self.text) == max,
            None => false,
        }
    }

    pub fn is_decrement_disabled(&self) -> bool {
        self.unit == Unit::Percent && parse_or_zero(&self.text) == self.unit.range().min
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            unit: self.unit,
            text: self.text.clone(),
            committed: self.committed.text.clone(),
            increment_disabled: self.is_increment_disabled(),
            decrement_disabled: self.is_decrement_disabled(),
        }
    }

    // Write a canonical value to both the edit text and the committed value
    fn store(&mut self, number: f64) {
        self.committed = CommittedValue::from_number(number);
        self.text = self.committed.text.clone();
    }
}
