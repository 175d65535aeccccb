//! Editor Interaction Integration Tests
//!
//! Drives a [`GridEditor`] with raw pointer input the way a browser host
//! would and checks the committed grid:
//! - Drag and resize gestures
//! - Collision rejection
//! - Click disambiguation and empty-cell creation
//! - Persistence of the resulting state

use std::cell::Cell;
use std::rc::Rc;

use grid_core::{
    CanvasLayout, ControllerEvent, FileStorage, GridConfig, GridEditor, GridItem, GridState,
    ItemId, PersistedState, PointerEvent, PointerPhase, ResizeHandle, StateStorage,
    ViewportClass,
};

fn item(id: &str, col_start: u32, row_start: u32, col_span: u32, row_span: u32) -> GridItem {
    GridItem::new(ItemId::from(id), col_start, row_start, col_span, row_span)
}

fn editor_with(items: Vec<GridItem>) -> GridEditor {
    GridEditor::new(GridState {
        config: GridConfig::default(),
        items,
    })
}

/// Centre of a cell in the editor's current layout.
fn cell_center(editor: &GridEditor, col: u32, row: u32) -> (f32, f32) {
    let rect = editor.layout().metrics.cell_rect(col, row);
    (rect.left + rect.width / 2.0, rect.top + rect.height / 2.0)
}

/// Canvas position of a resize handle on an item.
fn handle_point(editor: &GridEditor, id: &str, handle: ResizeHandle) -> (f32, f32) {
    let item = editor.state().item(&ItemId::from(id)).expect("item exists");
    let rect = editor.layout().metrics.handle_rect(item, handle);
    (rect.left + rect.width / 2.0, rect.top + rect.height / 2.0)
}

fn pointer(editor: &mut GridEditor, phase: PointerPhase, at: (f32, f32)) -> Option<ControllerEvent> {
    editor.handle_pointer(&PointerEvent::new(phase, at.0, at.1))
}

// ============================================================================
// Drag Tests
// ============================================================================

#[test]
fn test_drag_moves_item() {
    let mut editor = editor_with(vec![item("a", 1, 1, 2, 1)]);
    let start = cell_center(&editor, 1, 1);
    let target = cell_center(&editor, 4, 3);

    pointer(&mut editor, PointerPhase::Down, start);
    let event = pointer(&mut editor, PointerPhase::Move, target);
    pointer(&mut editor, PointerPhase::Up, target);

    assert!(matches!(event, Some(ControllerEvent::ItemChange { .. })));
    assert_eq!(editor.state().item(&"a".into()), Some(&item("a", 4, 3, 2, 1)));
    assert!(editor.controller().is_idle());
}

#[test]
fn test_drag_onto_other_item_leaves_state_unchanged() {
    let mut editor = editor_with(vec![item("a", 1, 1, 2, 1), item("b", 4, 1, 2, 2)]);
    let before = editor.state().clone();

    let commits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&commits);
    editor.subscribe(move |_| counter.set(counter.get() + 1));

    let start = cell_center(&editor, 1, 1);
    pointer(&mut editor, PointerPhase::Down, start);
    let pos = cell_center(&editor, 4, 2);
    let event = pointer(&mut editor, PointerPhase::Move, pos);
    let pos = cell_center(&editor, 4, 2);
    pointer(&mut editor, PointerPhase::Up, pos);

    assert!(event.is_none());
    assert_eq!(editor.state(), &before);
    assert_eq!(commits.get(), 0);
}

#[test]
fn test_drag_then_click_is_not_a_selection() {
    let mut editor = editor_with(vec![item("a", 1, 1, 1, 1)]);
    let start = cell_center(&editor, 1, 1);
    let target = cell_center(&editor, 2, 1);

    pointer(&mut editor, PointerPhase::Down, start);
    pointer(&mut editor, PointerPhase::Move, target);
    pointer(&mut editor, PointerPhase::Up, target);
    assert!(editor.click(target.0, target.1).is_none());
    assert!(editor.selected().is_none());

    // A plain tap afterwards selects.
    pointer(&mut editor, PointerPhase::Down, target);
    pointer(&mut editor, PointerPhase::Up, target);
    assert!(matches!(editor.click(target.0, target.1), Some(ControllerEvent::ItemClick(_))));
    assert_eq!(editor.selected(), Some(&"a".into()));
}

#[test]
fn test_rejected_drag_released_over_empty_cell_creates_nothing() {
    let mut editor = editor_with(vec![item("a", 1, 1, 2, 1), item("b", 4, 1, 1, 1)]);
    let start = cell_center(&editor, 1, 1);
    let release = cell_center(&editor, 3, 1);

    pointer(&mut editor, PointerPhase::Down, start);
    let step = pointer(&mut editor, PointerPhase::Move, release);
    pointer(&mut editor, PointerPhase::Up, release);
    assert!(step.is_none(), "a at 3..5 would cover b");

    assert!(editor.click(release.0, release.1).is_none());
    assert_eq!(editor.state().item_count(), 2);
    assert!(!editor.controller().drag_occurred());

    // The next real tap on an item is not swallowed.
    let b = cell_center(&editor, 4, 1);
    pointer(&mut editor, PointerPhase::Down, b);
    pointer(&mut editor, PointerPhase::Up, b);
    assert_eq!(editor.click(b.0, b.1), Some(ControllerEvent::ItemClick("b".into())));
}

#[test]
fn test_loaded_duplicate_ids_leave_one_draggable_item() {
    let mut editor = GridEditor::default();
    editor.load(GridState {
        config: GridConfig::default(),
        items: vec![item("dup", 1, 1, 1, 1), item("dup", 4, 3, 1, 1)],
    });
    assert_eq!(editor.state().items, vec![item("dup", 1, 1, 1, 1)]);

    let start = cell_center(&editor, 1, 1);
    let target = cell_center(&editor, 6, 1);
    pointer(&mut editor, PointerPhase::Down, start);
    pointer(&mut editor, PointerPhase::Move, target);
    pointer(&mut editor, PointerPhase::Up, target);

    assert_eq!(editor.state().items, vec![item("dup", 6, 1, 1, 1)]);
    assert!(editor.state().is_consistent());
}

// ============================================================================
// Resize Tests
// ============================================================================

#[test]
fn test_south_handle_changes_only_row_span() {
    let mut editor = editor_with(vec![item("a", 2, 1, 2, 1)]);
    editor.click_item(&"a".into());

    let grab = handle_point(&editor, "a", ResizeHandle::South);
    pointer(&mut editor, PointerPhase::Down, grab);

    for (col, row) in [(1, 2), (6, 3), (3, 4), (5, 1), (2, 2)] {
        let pos = cell_center(&editor, col, row);
        pointer(&mut editor, PointerPhase::Move, pos);
        let current = editor.state().item(&"a".into()).expect("item");
        assert_eq!((current.col_start, current.row_start, current.col_span), (2, 1, 2));
    }
    pointer(&mut editor, PointerPhase::Up, (0.0, 0.0));

    assert_eq!(editor.state().item(&"a".into()).map(|i| i.row_span), Some(2));
}

#[test]
fn test_resize_stops_at_neighbour() {
    let mut editor = editor_with(vec![item("a", 1, 1, 1, 1), item("b", 4, 1, 1, 1)]);
    editor.click_item(&"a".into());

    let grab = handle_point(&editor, "a", ResizeHandle::East);
    pointer(&mut editor, PointerPhase::Down, grab);
    let pos = cell_center(&editor, 3, 1);
    pointer(&mut editor, PointerPhase::Move, pos);
    let pos = cell_center(&editor, 5, 1);
    pointer(&mut editor, PointerPhase::Move, pos);
    let pos = cell_center(&editor, 5, 1);
    pointer(&mut editor, PointerPhase::Up, pos);

    assert_eq!(editor.state().item(&"a".into()).map(|i| i.col_span), Some(3));
    assert!(editor.state().is_consistent());
}

#[test]
fn test_handles_of_unselected_item_drag_instead() {
    let mut editor = editor_with(vec![item("a", 2, 2, 2, 2)]);
    let grab = handle_point(&editor, "a", ResizeHandle::SouthEast);

    pointer(&mut editor, PointerPhase::Down, grab);
    assert!(matches!(editor.controller().gesture(), grid_core::Gesture::Dragging { .. }));
}

// ============================================================================
// Click and Layout Tests
// ============================================================================

#[test]
fn test_click_empty_cell_compact_viewport() {
    let mut editor = GridEditor::default().with_viewport(ViewportClass::Compact);
    let at = cell_center(&editor, 6, 1);
    let event = editor.click(at.0, at.1);

    assert_eq!(event, Some(ControllerEvent::EmptyCellClick { col: 6, row: 1 }));
    let created = &editor.state().items[0];
    assert_eq!((created.col_start, created.row_start, created.col_span, created.row_span), (5, 1, 2, 2));
    assert_eq!(editor.selected(), Some(&created.id));
}

#[test]
fn test_container_resize_cancels_drag() {
    let mut editor = editor_with(vec![item("a", 1, 1, 1, 1)]);
    let pos = cell_center(&editor, 1, 1);
    pointer(&mut editor, PointerPhase::Down, pos);
    assert!(!editor.controller().is_idle());

    editor.resize_container(400.0, 300.0);
    assert!(editor.controller().is_idle());
    assert_eq!(editor.layout(), &CanvasLayout::compute(400.0, 300.0, &GridConfig::default()));

    assert!(pointer(&mut editor, PointerPhase::Move, (390.0, 290.0)).is_none());
    assert_eq!(editor.state().item(&"a".into()), Some(&item("a", 1, 1, 1, 1)));
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_edited_state_survives_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::new(dir.path().join("state.json"));

    let mut editor = GridEditor::new(storage.load_or_default().grid_state);
    editor.click_cell(2, 2);
    editor.click_cell(4, 1);
    storage
        .save(&PersistedState::new(editor.state().clone()))
        .expect("save");

    let restored = storage.load().expect("persisted");
    assert_eq!(&restored.grid_state, editor.state());
    assert!(restored.with_styled_borders);
}
