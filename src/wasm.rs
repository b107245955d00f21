// WebAssembly bindings so a browser front end can drive the editor.
// The page forwards input, blur and click events here and redraws from the getters.
use crate::config::EditorConfig;
use crate::editor::{self, Unit, UnitValueEditor};
use crate::session;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct UnitValueWasm {
    editor: UnitValueEditor,
}

impl Default for UnitValueWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl UnitValueWasm {
    /// Editor seeded with the default unit and value ("%", "1.0")
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            editor: UnitValueEditor::default(),
        }
    }

    /// Editor seeded from TOML config content (`unit = "px"`, `value = "12"`)
    #[wasm_bindgen]
    pub fn from_config(config_content: &str) -> Result<UnitValueWasm, JsValue> {
        let config = EditorConfig::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;
        let editor = config
            .build_editor()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { editor })
    }

    #[wasm_bindgen]
    pub fn edit_text(&mut self, text: &str) -> String {
        self.editor.edit_text(text).to_string()
    }

    #[wasm_bindgen]
    pub fn commit_on_blur(&mut self) -> String {
        self.editor.commit_on_blur().to_string()
    }

    /// Switch unit ("%" or "px")
    #[wasm_bindgen]
    pub fn change_unit(&mut self, unit: &str) -> Result<String, JsValue> {
        let unit: Unit = unit
            .parse()
            .map_err(|e: editor::UnitError| JsValue::from_str(&e.to_string()))?;
        Ok(self.editor.change_unit(unit).to_string())
    }

    #[wasm_bindgen]
    pub fn increment(&mut self) -> String {
        self.editor.increment().to_string()
    }

    #[wasm_bindgen]
    pub fn decrement(&mut self) -> String {
        self.editor.decrement().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.editor.text().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn unit(&self) -> String {
        self.editor.unit().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn increment_disabled(&self) -> bool {
        self.editor.is_increment_disabled()
    }

    #[wasm_bindgen(getter)]
    pub fn decrement_disabled(&self) -> bool {
        self.editor.is_decrement_disabled()
    }

    /// Full state as a JSON string
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.editor.snapshot())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize state: {}", e)))
    }

    /// Replay an event script and return every step as JSON
    #[wasm_bindgen]
    pub fn run_script(&mut self, script: &str) -> Result<String, JsValue> {
        let events = session::parse_script(script)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse script: {}", e)))?;
        let steps = session::SessionExecutor::new(&mut self.editor).run(&events);
        session::format_steps_json(&steps)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize steps: {}", e)))
    }
}

/// Sanitize raw input without an editor instance
#[wasm_bindgen]
pub fn sanitize(input: &str) -> String {
    editor::sanitize(input)
}

/// Resolve raw input against a last good value without an editor instance
#[wasm_bindgen]
pub fn resolve(input: &str, last_good: &str) -> String {
    editor::resolve(input, last_good)
}
