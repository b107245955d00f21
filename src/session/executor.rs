use crate::editor::{EditorSnapshot, UnitValueEditor};
use crate::session::parser::EditorEvent;
use log::debug;
use serde::Serialize;

/// An applied event together with the editor state it produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStep {
    #[serde(flatten)]
    pub event: EditorEvent,
    pub state: EditorSnapshot,
}

/// Drives an editor through a sequence of input events
pub struct SessionExecutor<'a> {
    editor: &'a mut UnitValueEditor,
}

impl<'a> SessionExecutor<'a> {
    pub fn new(editor: &'a mut UnitValueEditor) -> Self {
        Self { editor }
    }

    pub fn apply(&mut self, event: &EditorEvent) -> EditorSnapshot {
        debug!("apply {}", event);
        match event {
            EditorEvent::Edit(text) => {
                self.editor.edit_text(text);
            }
            EditorEvent::Blur => {
                self.editor.commit_on_blur();
            }
            EditorEvent::ChangeUnit(unit) => {
                self.editor.change_unit(*unit);
            }
            EditorEvent::Increment => {
                self.editor.increment();
            }
            EditorEvent::Decrement => {
                self.editor.decrement();
            }
        }
        self.editor.snapshot()
    }

    pub fn run(&mut self, events: &[EditorEvent]) -> Vec<SessionStep> {
        events
            .iter()
            .map(|event| SessionStep {
                event: event.clone(),
                state: self.apply(event),
            })
            .collect()
    }
}
