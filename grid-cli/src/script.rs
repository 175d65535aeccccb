//! Replay scripts - a JSON list of editor inputs applied in order.
//!
//! ```json
//! [
//!   { "type": "config", "data": { "field": "columns", "input": "4" } },
//!   { "type": "click_cell", "data": { "col": 1, "row": 1 } },
//!   { "type": "pointer", "data": { "phase": "down", "x": 60, "y": 60 } },
//!   { "type": "pointer", "data": { "phase": "move", "x": 260, "y": 60 } },
//!   { "type": "pointer", "data": { "phase": "up", "x": 260, "y": 60 } }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use grid_core::{ConfigField, ControllerEvent, GridAction, GridEditor, PointerEvent};

/// One input to the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ReplayStep {
    /// A raw pointer event in canvas coordinates.
    Pointer(PointerEvent),
    /// A click at a canvas point.
    Click {
        /// X position.
        x: f32,
        /// Y position.
        y: f32,
    },
    /// A click on a known cell.
    ClickCell {
        /// 1-based column.
        col: u32,
        /// 1-based row.
        row: u32,
    },
    /// A text edit of one config field.
    Config {
        /// Field edited.
        field: ConfigField,
        /// Raw input text.
        input: String,
    },
    /// Delete the selected item.
    DeleteSelected,
    /// Remove all items.
    Reset,
    /// The canvas container changed size.
    Resize {
        /// New container width.
        width: f32,
        /// New container height.
        height: f32,
    },
    /// A state transition applied directly.
    Action(GridAction),
}

/// Outcome of a replay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayReport {
    /// Steps applied.
    pub steps: usize,
    /// Controller output, in order.
    pub events: Vec<ControllerEvent>,
    /// Steps that changed the grid state.
    pub changes: usize,
}

/// Parse a script.
///
/// # Errors
///
/// Returns an error if the JSON is not a list of steps.
pub fn parse(json: &str) -> Result<Vec<ReplayStep>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Apply `steps` to `editor` in order.
pub fn replay(editor: &mut GridEditor, steps: &[ReplayStep]) -> ReplayReport {
    let mut report = ReplayReport::default();
    for step in steps {
        let before = editor.state().clone();
        let event = match step {
            ReplayStep::Pointer(event) => editor.handle_pointer(event),
            ReplayStep::Click { x, y } => editor.click(*x, *y),
            ReplayStep::ClickCell { col, row } => editor.click_cell(*col, *row),
            ReplayStep::Config { field, input } => {
                editor.edit_config_field(*field, input);
                None
            }
            ReplayStep::DeleteSelected => {
                editor.delete_selected();
                None
            }
            ReplayStep::Reset => {
                editor.reset();
                None
            }
            ReplayStep::Resize { width, height } => {
                editor.resize_container(*width, *height);
                None
            }
            ReplayStep::Action(action) => {
                editor.dispatch(action);
                None
            }
        };

        report.steps += 1;
        if *editor.state() != before {
            report.changes += 1;
        }
        if let Some(event) = event {
            tracing::trace!("Step {}: {event:?}", report.steps);
            report.events.push(event);
        }
    }
    tracing::debug!(
        "Replayed {} steps, {} changed the grid",
        report.steps,
        report.changes
    );
    report
}
