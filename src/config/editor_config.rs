use crate::editor::{Unit, UnitError, UnitValueEditor, DEFAULT_VALUE};
use serde::{Deserialize, Serialize};

/// Seed for a new editor session
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub unit: Unit,

    // Kept as text so seeds like "1.0" survive until the first commit
    #[serde(default = "default_value")]
    pub value: String,
}

fn default_value() -> String {
    DEFAULT_VALUE.to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::empty()
    }
}

impl EditorConfig {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: EditorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self {
            unit: Unit::Percent,
            value: default_value(),
        }
    }

    /// Check that the seed value is a usable number inside the unit's range
    pub fn validate(&self) -> Result<(), UnitError> {
        self.build_editor().map(|_| ())
    }

    pub fn build_editor(&self) -> Result<UnitValueEditor, UnitError> {
        UnitValueEditor::from_config(self)
    }
}

impl UnitValueEditor {
    pub fn from_config(config: &EditorConfig) -> Result<Self, UnitError> {
        Self::new(config.unit, &config.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_matches_default_seed() {
        let config = EditorConfig::empty();
        assert_eq!(config.unit, Unit::Percent);
        assert_eq!(config.value, "1.0");
        assert_eq!(EditorConfig::default(), config);
    }

    #[test]
    fn test_load_from_str() {
        let config = EditorConfig::load_from_str(
            r#"
unit = "px"
value = "250"
"#,
        )
        .unwrap();
        assert_eq!(config.unit, Unit::Pixel);
        assert_eq!(config.value, "250");

        let editor = config.build_editor().unwrap();
        assert_eq!(editor.text(), "250");
        assert_eq!(editor.unit(), Unit::Pixel);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = EditorConfig::load_from_str("unit = \"px\"").unwrap();
        assert_eq!(config.value, "1.0");

        let config = EditorConfig::load_from_str("").unwrap();
        assert_eq!(config, EditorConfig::empty());
    }

    #[test]
    fn test_rejects_unknown_unit() {
        assert!(EditorConfig::load_from_str("unit = \"em\"").is_err());
    }

    #[test]
    fn test_rejects_out_of_range_seed() {
        let err = EditorConfig::load_from_str("unit = \"%\"\nvalue = \"250\"").unwrap_err();
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn test_rejects_non_numeric_seed() {
        let config = EditorConfig {
            unit: Unit::Pixel,
            value: "wide".to_string(),
        };
        assert!(matches!(config.validate(), Err(UnitError::InvalidSeed(_))));
    }

    #[test]
    fn test_load_from_missing_file() {
        assert!(EditorConfig::load_from_file("/nonexistent/unit-value.toml").is_err());
    }
}
