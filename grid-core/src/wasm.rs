//! WebAssembly bindings for grid-core.
//!
//! This module provides JavaScript-callable functions when compiled to WASM.
//! State and controller events cross the boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::{
    ConfigField, ControllerEvent, GridEditor, GridState, PointerEvent, PointerPhase,
    ViewportClass,
};

/// Initialize the grid WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Grid editor instance for WASM.
#[wasm_bindgen]
pub struct WasmGridEditor {
    editor: GridEditor,
}

#[wasm_bindgen]
impl WasmGridEditor {
    /// Create an editor with the default 6x4 grid.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self {
            editor: GridEditor::default(),
        }
    }

    /// Get the current grid state as JSON.
    #[wasm_bindgen(js_name = getStateJson)]
    #[must_use]
    pub fn get_state_json(&self) -> String {
        self.editor.state().to_json().unwrap_or_default()
    }

    /// Replace the grid state from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error string if JSON parsing fails.
    #[wasm_bindgen(js_name = loadStateJson)]
    pub fn load_state_json(&mut self, json: &str) -> Result<(), String> {
        let state = GridState::from_json(json).map_err(|e| e.to_string())?;
        self.editor.load(state);
        Ok(())
    }

    /// Get the current canvas layout as JSON.
    #[wasm_bindgen(js_name = getLayoutJson)]
    #[must_use]
    pub fn get_layout_json(&self) -> String {
        serde_json::to_string(self.editor.layout()).unwrap_or_default()
    }

    /// ID of the selected item, if any.
    #[wasm_bindgen(js_name = selectedId)]
    #[must_use]
    pub fn selected_id(&self) -> Option<String> {
        self.editor.selected().map(ToString::to_string)
    }

    /// Press at a canvas point.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pointer(PointerPhase::Down, x, y);
    }

    /// Move to a canvas point. Returns the applied event as JSON, if any.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Option<String> {
        self.pointer(PointerPhase::Move, x, y)
    }

    /// Release the pointer.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, x: f32, y: f32) {
        self.pointer(PointerPhase::Up, x, y);
    }

    /// Cancel the current gesture.
    #[wasm_bindgen(js_name = pointerCancel)]
    pub fn pointer_cancel(&mut self) {
        self.pointer(PointerPhase::Cancel, 0.0, 0.0);
    }

    /// Click at a canvas point. Returns the applied event as JSON, if any.
    pub fn click(&mut self, x: f32, y: f32) -> Option<String> {
        self.editor.click(x, y).as_ref().and_then(event_json)
    }

    /// Apply a raw text edit to `columns`, `rows` or `gap`.
    ///
    /// Returns `true` if the grid changed.
    #[wasm_bindgen(js_name = editConfigField)]
    pub fn edit_config_field(&mut self, field: &str, input: &str) -> bool {
        let field = match field {
            "columns" => ConfigField::Columns,
            "rows" => ConfigField::Rows,
            "gap" => ConfigField::Gap,
            _ => return false,
        };
        self.editor.edit_config_field(field, input)
    }

    /// Delete the selected item. Returns `true` if one was removed.
    #[wasm_bindgen(js_name = deleteSelected)]
    pub fn delete_selected(&mut self) -> bool {
        self.editor.delete_selected().is_some()
    }

    /// Remove every item.
    pub fn reset(&mut self) {
        self.editor.reset();
    }

    /// Report a new container size and viewport width.
    #[wasm_bindgen(js_name = resizeContainer)]
    pub fn resize_container(&mut self, width: f32, height: f32, viewport_width: f32) {
        self.editor.set_viewport(ViewportClass::from_width(viewport_width));
        self.editor.resize_container(width, height);
    }
}

impl WasmGridEditor {
    fn pointer(&mut self, phase: PointerPhase, x: f32, y: f32) -> Option<String> {
        self.editor
            .handle_pointer(&PointerEvent::new(phase, x, y))
            .as_ref()
            .and_then(event_json)
    }
}

impl Default for WasmGridEditor {
    fn default() -> Self {
        Self::new()
    }
}

fn event_json(event: &ControllerEvent) -> Option<String> {
    serde_json::to_string(event).ok()
}
