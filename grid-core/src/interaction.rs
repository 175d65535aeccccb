//! # Interaction Controller
//!
//! Turns raw pointer input into proposed grid mutations.
//!
//! ```text
//!            down on item                 down on handle of selected item
//!   ┌──────┐ ───────────▶ ┌──────────┐   ┌──────────┐ ◀─────────────── ┌──────┐
//!   │ Idle │              │ Dragging │   │ Resizing │                  │ Idle │
//!   └──────┘ ◀─────────── └──────────┘   └──────────┘ ───────────────▶ └──────┘
//!              up / cancel / layout change          up / cancel / layout change
//! ```
//!
//! The controller never mutates the grid. Every accepted move step yields a
//! [`ControllerEvent::ItemChange`] which the host commits; rejected steps
//! (collisions, out-of-bounds candidates) are dropped silently because they
//! are the normal state of a gesture passing near other items or the edges.

use serde::{Deserialize, Serialize};

use crate::{
    CanvasLayout, CellMetrics, GridItem, GridState, ItemId, PointerButton, PointerEvent,
    PointerPhase, PointerTarget, ResizeHandle,
};

/// Pointer travel in pixels before a press on an item becomes a drag.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Current gesture of the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// No gesture in flight.
    Idle,
    /// Moving an item.
    Dragging {
        /// Item being dragged.
        item: ItemId,
        /// Item start column when the press began.
        anchor_col: u32,
        /// Item start row when the press began.
        anchor_row: u32,
        /// Pointer position when the press began.
        anchor_pointer: (f32, f32),
    },
    /// Resizing an item through one of its handles.
    Resizing {
        /// Item being resized.
        item: ItemId,
        /// Active handle.
        handle: ResizeHandle,
        /// Item geometry before the resize began.
        snapshot: GridItem,
    },
}

/// Notification from the controller to its host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ControllerEvent {
    /// An item was tapped without dragging.
    ItemClick(ItemId),
    /// An unoccupied cell was clicked.
    EmptyCellClick {
        /// Column of the clicked cell.
        col: u32,
        /// Row of the clicked cell.
        row: u32,
    },
    /// A validated new geometry for an item.
    ItemChange {
        /// Item being changed.
        id: ItemId,
        /// The proposed item.
        item: GridItem,
    },
}

/// Pointer state machine for one canvas.
#[derive(Debug, Clone)]
pub struct InteractionController {
    gesture: Gesture,
    selected: Option<ItemId>,
    drag_occurred: bool,
    layout: CanvasLayout,
    drag_threshold: f32,
}

impl InteractionController {
    /// Create an idle controller for the given canvas layout.
    #[must_use]
    pub fn new(layout: CanvasLayout) -> Self {
        Self {
            gesture: Gesture::Idle,
            selected: None,
            drag_occurred: false,
            layout,
            drag_threshold: DRAG_THRESHOLD,
        }
    }

    /// Override the drag threshold.
    #[must_use]
    pub fn with_drag_threshold(mut self, threshold: f32) -> Self {
        self.drag_threshold = threshold;
        self
    }

    /// Current gesture.
    #[must_use]
    pub const fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Check if no gesture is in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.gesture == Gesture::Idle
    }

    /// Currently selected item, whose handles are interactable.
    #[must_use]
    pub const fn selected(&self) -> Option<&ItemId> {
        self.selected.as_ref()
    }

    /// Update the selection mirrored from the host.
    pub fn set_selected(&mut self, selected: Option<ItemId>) {
        self.selected = selected;
    }

    /// Whether the current (or last) press turned into a drag.
    #[must_use]
    pub const fn drag_occurred(&self) -> bool {
        self.drag_occurred
    }

    /// Canvas layout used for pixel-to-cell mapping.
    #[must_use]
    pub const fn layout(&self) -> &CanvasLayout {
        &self.layout
    }

    /// Cell metrics of the current layout.
    #[must_use]
    pub const fn metrics(&self) -> &CellMetrics {
        &self.layout.metrics
    }

    /// Replace the canvas layout after a container resize or config change.
    ///
    /// A gesture in flight is cancelled instead of continuing against stale
    /// cell dimensions.
    pub fn set_layout(&mut self, layout: CanvasLayout) {
        if layout == self.layout {
            return;
        }
        if !self.is_idle() {
            tracing::debug!("Layout changed mid-gesture, cancelling {:?}", self.gesture);
            self.pointer_cancel();
        }
        self.layout = layout;
    }

    /// Resolve what lies under a canvas point.
    ///
    /// Handles are only reported for the selected item.
    #[must_use]
    pub fn hit_test(&self, state: &GridState, x: f32, y: f32) -> PointerTarget {
        let metrics = self.metrics();
        if let Some(selected) = self.selected.as_ref().and_then(|id| state.item(id)) {
            if let Some(handle) = metrics.handle_at(selected, x, y) {
                return PointerTarget::Handle {
                    item: selected.id.clone(),
                    handle,
                };
            }
        }
        state
            .items
            .iter()
            .find(|item| metrics.item_rect(item).contains(x, y))
            .map_or(PointerTarget::Canvas, |item| PointerTarget::Item(item.id.clone()))
    }

    /// Process a pointer event.
    pub fn handle_pointer(&mut self, state: &GridState, event: &PointerEvent) -> Option<ControllerEvent> {
        match event.phase {
            PointerPhase::Down => {
                self.pointer_down(state, event);
                None
            }
            PointerPhase::Move => self.pointer_move(state, event.x, event.y),
            PointerPhase::Up => {
                self.pointer_up();
                None
            }
            PointerPhase::Cancel => {
                self.pointer_cancel();
                None
            }
        }
    }

    /// Start a drag or resize gesture.
    pub fn pointer_down(&mut self, state: &GridState, event: &PointerEvent) {
        if event.button != PointerButton::Primary {
            return;
        }
        match &event.target {
            PointerTarget::Item(id) => {
                let Some(item) = state.item(id) else {
                    return;
                };
                tracing::debug!("Drag start on {id} at ({}, {})", event.x, event.y);
                self.drag_occurred = false;
                self.gesture = Gesture::Dragging {
                    item: id.clone(),
                    anchor_col: item.col_start,
                    anchor_row: item.row_start,
                    anchor_pointer: (event.x, event.y),
                };
            }
            PointerTarget::Handle { item: id, handle } => {
                if self.selected.as_ref() != Some(id) {
                    tracing::trace!("Ignoring handle of unselected item {id}");
                    return;
                }
                let Some(item) = state.item(id) else {
                    return;
                };
                tracing::debug!("Resize start on {id} via {handle:?}");
                // A release over the item after resizing must not read as a tap.
                self.drag_occurred = true;
                self.gesture = Gesture::Resizing {
                    item: id.clone(),
                    handle: *handle,
                    snapshot: item.clone(),
                };
            }
            PointerTarget::Canvas => self.drag_occurred = false,
        }
    }

    /// Advance the current gesture to a new pointer position.
    ///
    /// Returns the proposed change when the step is valid and differs from
    /// the current state.
    pub fn pointer_move(&mut self, state: &GridState, x: f32, y: f32) -> Option<ControllerEvent> {
        match self.gesture.clone() {
            Gesture::Idle => None,
            Gesture::Dragging {
                item,
                anchor_pointer,
                ..
            } => {
                let (dx, dy) = (x - anchor_pointer.0, y - anchor_pointer.1);
                if !self.drag_occurred && dx.hypot(dy) < self.drag_threshold {
                    return None;
                }
                self.drag_occurred = true;
                self.propose_move(state, &item, x, y)
            }
            Gesture::Resizing {
                handle, snapshot, ..
            } => self.propose_resize(state, handle, &snapshot, x, y),
        }
    }

    /// End the gesture. Nothing is committed on release.
    pub fn pointer_up(&mut self) {
        if !self.is_idle() {
            tracing::debug!("Gesture finished");
        }
        self.gesture = Gesture::Idle;
    }

    /// Abort the gesture.
    pub fn pointer_cancel(&mut self) {
        if !self.is_idle() {
            tracing::debug!("Gesture cancelled");
        }
        self.gesture = Gesture::Idle;
    }

    /// Handle a click that landed on an item.
    ///
    /// Reported only when the press did not turn into a drag; otherwise the
    /// drag flag is consumed and the click suppressed.
    pub fn click_item(&mut self, id: &ItemId) -> Option<ControllerEvent> {
        if self.drag_occurred {
            self.drag_occurred = false;
            tracing::trace!("Suppressing click on {id} after drag");
            return None;
        }
        Some(ControllerEvent::ItemClick(id.clone()))
    }

    /// Handle a click on the canvas background.
    #[must_use]
    pub fn click_canvas(&self, state: &GridState, x: f32, y: f32) -> Option<ControllerEvent> {
        let (col, row) = self.metrics().pixel_to_cell(x, y);
        Self::click_cell(state, col, row)
    }

    /// Handle a click on a known cell.
    #[must_use]
    pub fn click_cell(state: &GridState, col: u32, row: u32) -> Option<ControllerEvent> {
        if state.config.columns == 0 || state.config.rows == 0 || state.is_cell_occupied(col, row) {
            return None;
        }
        Some(ControllerEvent::EmptyCellClick { col, row })
    }

    /// Handle a click on a resolved target.
    ///
    /// The click that ends a drag or resize is swallowed wherever it lands,
    /// consuming the drag flag.
    pub fn click(&mut self, state: &GridState, target: &PointerTarget, x: f32, y: f32) -> Option<ControllerEvent> {
        if self.drag_occurred {
            self.drag_occurred = false;
            tracing::trace!("Suppressing click on {target:?} after drag");
            return None;
        }
        match target {
            PointerTarget::Item(id) | PointerTarget::Handle { item: id, .. } => self.click_item(id),
            PointerTarget::Canvas => self.click_canvas(state, x, y),
        }
    }

    fn propose_move(&self, state: &GridState, id: &ItemId, x: f32, y: f32) -> Option<ControllerEvent> {
        let current = state.item(id)?;
        let config = &state.config;
        let (col, row) = self.metrics().pixel_to_cell(x, y);

        let max_col = config.columns.saturating_add(1).saturating_sub(current.col_span);
        let max_row = config.rows.saturating_add(1).saturating_sub(current.row_span);
        let candidate = current.moved_to(col.min(max_col).max(1), row.min(max_row).max(1));

        self.accept(state, current, candidate)
    }

    fn propose_resize(
        &self,
        state: &GridState,
        handle: ResizeHandle,
        snapshot: &GridItem,
        x: f32,
        y: f32,
    ) -> Option<ControllerEvent> {
        let current = state.item(&snapshot.id)?;
        let config = &state.config;
        let (col, row) = self.metrics().pixel_to_cell(x, y);

        let (col_start, col_span) = resize_axis(
            snapshot.col_start,
            snapshot.col_span,
            col,
            config.columns,
            handle.moves_left(),
            handle.moves_right(),
        );
        let (row_start, row_span) = resize_axis(
            snapshot.row_start,
            snapshot.row_span,
            row,
            config.rows,
            handle.moves_top(),
            handle.moves_bottom(),
        );

        if col_span < 1 || row_span < 1 {
            tracing::trace!("Rejected resize of {}: empty span", snapshot.id);
            return None;
        }
        if col_start + col_span - 1 > i64::from(config.columns) || row_start + row_span - 1 > i64::from(config.rows) {
            tracing::trace!("Rejected resize of {}: out of bounds", snapshot.id);
            return None;
        }

        let candidate = GridItem::new(
            snapshot.id.clone(),
            u32::try_from(col_start).ok()?,
            u32::try_from(row_start).ok()?,
            u32::try_from(col_span).ok()?,
            u32::try_from(row_span).ok()?,
        );
        self.accept(state, current, candidate)
    }

    fn accept(&self, state: &GridState, current: &GridItem, candidate: GridItem) -> Option<ControllerEvent> {
        if candidate.same_geometry(current) {
            return None;
        }
        if state.collides(&candidate, Some(&candidate.id)) {
            tracing::trace!(
                "Rejected {:?} for {}: collides or out of bounds",
                self.gesture,
                candidate.id
            );
            return None;
        }
        tracing::debug!(
            "Proposing {} at col {} row {} span {}x{}",
            candidate.id,
            candidate.col_start,
            candidate.row_start,
            candidate.col_span,
            candidate.row_span
        );
        Some(ControllerEvent::ItemChange {
            id: candidate.id.clone(),
            item: candidate,
        })
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(CanvasLayout::default())
    }
}

/// Resize one axis of an item towards `cell`.
///
/// Moving the start edge keeps the end edge fixed; moving the end edge keeps
/// the start fixed and stays inside `count` tracks.
fn resize_axis(start: u32, span: u32, cell: u32, count: u32, moves_start: bool, moves_end: bool) -> (i64, i64) {
    let start = i64::from(start);
    let span = i64::from(span);
    let cell = i64::from(cell);
    let last = start + span - 1;

    if moves_start {
        let new_start = cell.min(last).max(1);
        (new_start, last - new_start + 1)
    } else if moves_end {
        let room = i64::from(count) - start + 1;
        (start, (cell - start + 1).min(room).max(1))
    } else {
        (start, span)
    }
}
