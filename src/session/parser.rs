use crate::editor::{Unit, UnitError};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    /// One event per line: a keyword, optionally followed by one space and an argument
    /// Examples: "edit 12,5", "edit \"  5\"", "blur", "unit px", "inc", "dec"
    static ref EVENT_PATTERN: Regex = Regex::new(r"^([a-z]+)(?: (.*))?$").unwrap();
}

/// A discrete user input event
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "event", content = "arg", rename_all = "camelCase")]
pub enum EditorEvent {
    // Keystroke(s) replacing the field text
    Edit(String),
    // Field lost focus
    Blur,
    ChangeUnit(Unit),
    Increment,
    Decrement,
}

impl fmt::Display for EditorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorEvent::Edit(text) => write!(f, "edit {:?}", text),
            EditorEvent::Blur => write!(f, "blur"),
            EditorEvent::ChangeUnit(unit) => write!(f, "unit {}", unit),
            EditorEvent::Increment => write!(f, "inc"),
            EditorEvent::Decrement => write!(f, "dec"),
        }
    }
}

#[derive(Debug)]
pub enum ScriptError {
    UnknownEvent(usize, String),
    MissingArgument(usize, &'static str),
    UnexpectedArgument(usize, String),
    InvalidUnit(usize, UnitError),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownEvent(line, text) => {
                write!(f, "line {}: unknown event '{}'", line, text)
            }
            ScriptError::MissingArgument(line, event) => {
                write!(f, "line {}: '{}' needs an argument", line, event)
            }
            ScriptError::UnexpectedArgument(line, event) => {
                write!(f, "line {}: '{}' takes no argument", line, event)
            }
            ScriptError::InvalidUnit(line, e) => write!(f, "line {}: {}", line, e),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Parse a whole event script. Blank lines and lines starting with '#' are skipped.
pub fn parse_script(script: &str) -> Result<Vec<EditorEvent>, ScriptError> {
    let mut events = Vec::new();

    for (index, raw_line) in script.lines().enumerate() {
        let line = raw_line.trim_start().trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        events.push(parse_event_at(line, index + 1)?);
    }

    Ok(events)
}

/// Parse a single event
pub fn parse_event(text: &str) -> Result<EditorEvent, ScriptError> {
    parse_event_at(text.trim_start(), 1)
}

fn parse_event_at(text: &str, line: usize) -> Result<EditorEvent, ScriptError> {
    let captures = EVENT_PATTERN
        .captures(text)
        .ok_or_else(|| ScriptError::UnknownEvent(line, text.to_string()))?;

    let keyword = captures.get(1).map_or("", |m| m.as_str());
    let argument = captures.get(2).map(|m| m.as_str());

    match keyword {
        // Edit text may legitimately be empty
        "edit" => Ok(EditorEvent::Edit(unquote(argument.unwrap_or("")).to_string())),
        "unit" => {
            let unit = argument
                .filter(|arg| !arg.trim().is_empty())
                .ok_or(ScriptError::MissingArgument(line, "unit"))?;
            unit.parse::<Unit>()
                .map(EditorEvent::ChangeUnit)
                .map_err(|e| ScriptError::InvalidUnit(line, e))
        }
        "blur" | "inc" | "dec" => {
            if argument.map_or(false, |arg| !arg.trim().is_empty()) {
                return Err(ScriptError::UnexpectedArgument(line, keyword.to_string()));
            }
            Ok(match keyword {
                "blur" => EditorEvent::Blur,
                "inc" => EditorEvent::Increment,
                _ => EditorEvent::Decrement,
            })
        }
        _ => Err(ScriptError::UnknownEvent(line, text.to_string())),
    }
}

// "  5" in quotes keeps its spaces
fn unquote(arg: &str) -> &str {
    if arg.len() >= 2 && arg.starts_with('"') && arg.ends_with('"') {
        &arg[1..arg.len() - 1]
    } else {
        arg
    }
}
