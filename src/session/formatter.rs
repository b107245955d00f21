use crate::editor::Unit;
use crate::session::executor::SessionStep;

/// Seed line laid out in the same columns as `format_steps_text`
pub fn format_initial(value: &str, unit: Unit) -> String {
    format!(
        "{:<16} text={:<12} committed={:<10} unit={:<2}",
        "initial",
        format!("{:?}", value),
        value,
        unit.to_string(),
    )
}

/// One line per step: event, field text, committed value, unit and which
/// stepper buttons are enabled ("-" and "+", blank when disabled)
pub fn format_steps_text(steps: &[SessionStep]) -> String {
    steps
        .iter()
        .map(|step| {
            let state = &step.state;
            let text = format!("{:?}", state.text);
            format!(
                "{:<16} text={:<12} committed={:<10} unit={:<2} [{}{}]",
                step.event.to_string(),
                text,
                state.committed,
                state.unit.to_string(),
                if state.decrement_disabled { " " } else { "-" },
                if state.increment_disabled { " " } else { "+" },
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_steps_json(steps: &[SessionStep]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(steps)
}
