use crate::editor::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display unit of the edited value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum Unit {
    /// Percentage, bounded to [0, 100]
    #[default]
    #[serde(rename = "%")]
    Percent,
    /// Pixels, bounded below by 0 only
    #[serde(rename = "px")]
    Pixel,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::Pixel => "px",
        }
    }

    /// Valid numeric range for values in this unit
    pub fn range(&self) -> UnitRange {
        match self {
            Unit::Percent => UnitRange {
                min: 0.0,
                max: Some(100.0),
            },
            Unit::Pixel => UnitRange {
                min: 0.0,
                max: None,
            },
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "%" => Ok(Unit::Percent),
            "px" => Ok(Unit::Pixel),
            other => Err(UnitError::UnknownUnit(other.to_string())),
        }
    }
}

/// Closed lower bound with an optional closed upper bound
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl UnitRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }

    pub fn clamp(&self, value: f64) -> f64 {
        let floored = value.max(self.min);
        match self.max {
            Some(max) => floored.min(max),
            None => floored,
        }
    }
}

/// Everything a presentation layer needs to redraw the editor
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    pub unit: Unit,
    /// Text shown in the editable field
    pub text: String,
    /// Last committed value
    pub committed: String,
    pub increment_disabled: bool,
    pub decrement_disabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_str() {
        assert_eq!("%".parse::<Unit>().unwrap(), Unit::Percent);
        assert_eq!(" px ".parse::<Unit>().unwrap(), Unit::Pixel);
        assert_eq!(
            "em".parse::<Unit>(),
            Err(UnitError::UnknownUnit("em".to_string()))
        );
    }

    #[test]
    fn test_unit_serde_names() {
        assert_eq!(serde_json::to_string(&Unit::Percent).unwrap(), "\"%\"");
        assert_eq!(serde_json::to_string(&Unit::Pixel).unwrap(), "\"px\"");
        let unit: Unit = serde_json::from_str("\"px\"").unwrap();
        assert_eq!(unit, Unit::Pixel);
    }

    #[test]
    fn test_ranges() {
        let percent = Unit::Percent.range();
        assert!(percent.contains(0.0));
        assert!(percent.contains(100.0));
        assert!(!percent.contains(100.5));
        assert!(!percent.contains(-1.0));
        assert_eq!(percent.clamp(250.0), 100.0);
        assert_eq!(percent.clamp(-3.0), 0.0);

        let pixel = Unit::Pixel.range();
        assert!(pixel.contains(1e9));
        assert_eq!(pixel.clamp(1e9), 1e9);
        assert_eq!(pixel.clamp(-0.5), 0.0);
    }

    #[test]
    fn test_snapshot_json_keys() {
        let snapshot = EditorSnapshot {
            unit: Unit::Percent,
            text: "100".to_string(),
            committed: "100".to_string(),
            increment_disabled: true,
            decrement_disabled: false,
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["unit"], "%");
        assert_eq!(json["incrementDisabled"], true);
        assert_eq!(json["decrementDisabled"], false);
    }
}
