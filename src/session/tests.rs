#[cfg(test)]
mod tests {
    use super::super::executor::SessionExecutor;
    use super::super::formatter::{format_initial, format_steps_json, format_steps_text};
    use super::super::parser::{parse_script, EditorEvent};
    use crate::config::EditorConfig;
    use crate::editor::{Unit, UnitValueEditor};

    const PIXEL_TO_PERCENT: &str = r#"
# type a large pixel width, then switch to percent
unit px
edit 250
blur
unit %
inc
dec
"#;

    #[test]
    fn test_run_script_records_every_step() {
        let events = parse_script(PIXEL_TO_PERCENT).unwrap();
        let mut editor = UnitValueEditor::default();
        let steps = SessionExecutor::new(&mut editor).run(&events);

        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0].state.unit, Unit::Pixel);
        assert_eq!(steps[1].state.text, "250");
        assert_eq!(steps[1].state.committed, "1.0");
        assert_eq!(steps[2].state.committed, "250");
        assert_eq!(steps[3].state.text, "100");
        assert!(steps[3].state.increment_disabled);
        // rejected at the ceiling
        assert_eq!(steps[4].state.text, "100");
        assert_eq!(steps[5].state.text, "99");

        assert_eq!(editor.committed(), "99");
    }

    #[test]
    fn test_run_from_config_seed() {
        let config = EditorConfig::load_from_str("unit = \"%\"\nvalue = \"7\"").unwrap();
        let mut editor = config.build_editor().unwrap();
        let events = parse_script("edit abc\nblur\nedit -5\nblur\nedit 12,5\nblur").unwrap();
        let steps = SessionExecutor::new(&mut editor).run(&events);

        let committed: Vec<&str> = steps.iter().map(|s| s.state.committed.as_str()).collect();
        assert_eq!(committed, vec!["7", "7", "7", "0", "0", "12.5"]);
    }

    #[test]
    fn test_apply_single_event() {
        let mut editor = UnitValueEditor::new(Unit::Percent, "50").unwrap();
        let mut executor = SessionExecutor::new(&mut editor);
        let snapshot = executor.apply(&EditorEvent::Increment);
        assert_eq!(snapshot.text, "51");
        assert_eq!(snapshot.committed, "51");
    }

    #[test]
    fn test_format_text() {
        let mut editor = UnitValueEditor::new(Unit::Percent, "100").unwrap();
        let steps = SessionExecutor::new(&mut editor).run(&[EditorEvent::Increment]);
        let text = format_steps_text(&steps);

        assert!(text.starts_with("inc"));
        assert!(text.contains("text=\"100\""));
        assert!(text.contains("committed=100"));
        assert!(text.ends_with("[- ]"));
    }

    #[test]
    fn test_format_json() {
        let mut editor = UnitValueEditor::default();
        let steps = SessionExecutor::new(&mut editor).run(&[
            EditorEvent::Edit("12,5".to_string()),
            EditorEvent::Blur,
        ]);
        let json: serde_json::Value = serde_json::from_str(&format_steps_json(&steps).unwrap()).unwrap();

        assert_eq!(json[0]["event"], "edit");
        assert_eq!(json[0]["arg"], "12,5");
        assert_eq!(json[0]["state"]["text"], "12,5");
        assert_eq!(json[1]["event"], "blur");
        assert_eq!(json[1]["state"]["committed"], "12.5");
        assert_eq!(json[1]["state"]["unit"], "%");
    }

    #[test]
    fn test_format_initial_lines_up_with_steps() {
        let mut editor = UnitValueEditor::default();
        let steps = SessionExecutor::new(&mut editor).run(&[EditorEvent::Blur]);
        let initial = format_initial("1.0", Unit::Percent);
        let step = format_steps_text(&steps);

        assert!(initial.starts_with("initial "));
        assert!(initial.contains("text=\"1.0\""));
        assert!(initial.contains("committed=1.0"));
        assert_eq!(initial.find("text="), step.find("text="));
        assert_eq!(initial.find("committed="), step.find("committed="));
        assert_eq!(initial.find("unit="), step.find("unit="));
    }
}
