//! Editor - explicit state transitions and a host that wires the interaction
//! controller to the grid state.

use serde::{Deserialize, Serialize};

use crate::{
    clamp_grid_item, is_valid_grid_item, items_overlap, CanvasLayout, ConfigField,
    ControllerEvent, GridConfig, GridItem, GridState, InteractionController, ItemId,
    PointerEvent, PointerPhase, PointerTarget,
};

/// Viewport width at and above which the regular editing span applies.
pub const REGULAR_VIEWPORT_MIN_WIDTH: f32 = 768.0;

/// A change to the grid state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum GridAction {
    /// Replace the grid dimensions, re-fitting existing items.
    SetConfig(GridConfig),
    /// Add a new item.
    AddItem(GridItem),
    /// Replace an existing item with new geometry.
    UpdateItem(GridItem),
    /// Remove an item.
    RemoveItem(ItemId),
    /// Remove every item.
    Clear,
}

/// Compute the state that follows `action`.
///
/// Proposals that would break an invariant leave the state unchanged; the
/// result always satisfies [`GridState::is_consistent`] when `state` does.
#[must_use]
pub fn transition(state: &GridState, action: &GridAction) -> GridState {
    let mut next = state.clone();
    let outcome = match action {
        GridAction::SetConfig(config) => {
            next = reconfigure(state, *config);
            Ok(())
        }
        GridAction::AddItem(item) => next.add_item(item.clone()).map(|_| ()),
        GridAction::UpdateItem(item) => next.update_item(item.clone()),
        GridAction::RemoveItem(id) => next.remove_item(id).map(|_| ()),
        GridAction::Clear => {
            next.clear();
            Ok(())
        }
    };

    match outcome {
        Ok(()) => next,
        Err(e) => {
            tracing::trace!("Refused {action:?}: {e}");
            state.clone()
        }
    }
}

/// Re-fit every item into `config`.
///
/// Items are clamped in their stored order; an item that stays invalid,
/// reuses the id of an item already kept, or would land on one, is dropped.
fn reconfigure(state: &GridState, config: GridConfig) -> GridState {
    let mut items: Vec<GridItem> = Vec::with_capacity(state.items.len());
    for item in &state.items {
        if items.iter().any(|kept| kept.id == item.id) {
            tracing::debug!("Dropping duplicate id {}", item.id);
            continue;
        }
        let clamped = clamp_grid_item(item, &config);
        if !is_valid_grid_item(&clamped, &config) {
            tracing::debug!("Dropping {} after config change: no room", item.id);
            continue;
        }
        if items.iter().any(|kept| items_overlap(kept, &clamped)) {
            tracing::debug!("Dropping {} after config change: collides", item.id);
            continue;
        }
        items.push(clamped);
    }
    GridState { config, items }
}

/// Coarse viewport size, deciding the span of items created by a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    /// Tablet or desktop.
    #[default]
    Regular,
    /// Phone-sized screens.
    Compact,
}

impl ViewportClass {
    /// Classify a viewport width in CSS pixels.
    #[must_use]
    pub fn from_width(width: f32) -> Self {
        if width >= REGULAR_VIEWPORT_MIN_WIDTH {
            Self::Regular
        } else {
            Self::Compact
        }
    }

    /// Column and row span of an item created by clicking an empty cell.
    #[must_use]
    pub const fn new_item_span(self) -> u32 {
        match self {
            Self::Regular => 1,
            Self::Compact => 2,
        }
    }
}

/// Observer called with the new state after every committed change.
pub type StateObserver = Box<dyn FnMut(&GridState)>;

/// Reference host: owns the grid state, the selection and the controller,
/// and applies controller output through [`transition`].
pub struct GridEditor {
    state: GridState,
    selected: Option<ItemId>,
    viewport: ViewportClass,
    container: (f32, f32),
    controller: InteractionController,
    observers: Vec<StateObserver>,
}

impl GridEditor {
    /// Create an editor for `state` in a default-sized container.
    #[must_use]
    pub fn new(state: GridState) -> Self {
        let container = (
            crate::geometry::DEFAULT_CONTAINER_WIDTH,
            crate::geometry::DEFAULT_CONTAINER_HEIGHT,
        );
        let layout = CanvasLayout::compute(container.0, container.1, &state.config);
        Self {
            state,
            selected: None,
            viewport: ViewportClass::Regular,
            container,
            controller: InteractionController::new(layout),
            observers: Vec::new(),
        }
    }

    /// Set the viewport class.
    #[must_use]
    pub fn with_viewport(mut self, viewport: ViewportClass) -> Self {
        self.viewport = viewport;
        self
    }

    /// Current grid state.
    #[must_use]
    pub const fn state(&self) -> &GridState {
        &self.state
    }

    /// Currently selected item.
    #[must_use]
    pub const fn selected(&self) -> Option<&ItemId> {
        self.selected.as_ref()
    }

    /// Current viewport class.
    #[must_use]
    pub const fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    /// Change the viewport class.
    pub fn set_viewport(&mut self, viewport: ViewportClass) {
        self.viewport = viewport;
    }

    /// The interaction controller.
    #[must_use]
    pub const fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Current canvas layout.
    #[must_use]
    pub const fn layout(&self) -> &CanvasLayout {
        self.controller.layout()
    }

    /// Register an observer for committed changes.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&GridState) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Apply an action. Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: &GridAction) -> bool {
        let next = transition(&self.state, action);
        if next == self.state {
            return false;
        }
        self.commit(next);
        true
    }

    /// Feed a pointer event through the controller and apply its output.
    ///
    /// A press on the bare canvas is hit-tested against the current layout
    /// so hosts may send raw coordinates.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<ControllerEvent> {
        let mut event = event.clone();
        if event.phase == PointerPhase::Down && event.target == PointerTarget::Canvas {
            event.target = self.controller.hit_test(&self.state, event.x, event.y);
        }
        let output = self.controller.handle_pointer(&self.state, &event)?;
        self.apply(&output);
        Some(output)
    }

    /// Deliver a click at a canvas point.
    pub fn click(&mut self, x: f32, y: f32) -> Option<ControllerEvent> {
        let target = self.controller.hit_test(&self.state, x, y);
        let output = self.controller.click(&self.state, &target, x, y)?;
        self.apply(&output);
        Some(output)
    }

    /// Deliver a click on an item.
    pub fn click_item(&mut self, id: &ItemId) -> Option<ControllerEvent> {
        let output = self.controller.click_item(id)?;
        self.apply(&output);
        Some(output)
    }

    /// Deliver a click on a known cell.
    pub fn click_cell(&mut self, col: u32, row: u32) -> Option<ControllerEvent> {
        let output = InteractionController::click_cell(&self.state, col, row)?;
        self.apply(&output);
        Some(output)
    }

    /// Apply a controller event.
    pub fn apply(&mut self, event: &ControllerEvent) {
        match event {
            ControllerEvent::ItemClick(id) => {
                let next = if self.selected.as_ref() == Some(id) {
                    None
                } else {
                    Some(id.clone())
                };
                self.select(next);
            }
            ControllerEvent::EmptyCellClick { col, row } => {
                self.create_item_at(*col, *row);
            }
            ControllerEvent::ItemChange { item, .. } => {
                self.dispatch(&GridAction::UpdateItem(item.clone()));
            }
        }
    }

    /// Change the selection.
    pub fn select(&mut self, selected: Option<ItemId>) {
        self.selected = selected.filter(|id| self.state.item(id).is_some());
        self.controller.set_selected(self.selected.clone());
    }

    /// Replace the grid config, re-fitting items.
    pub fn set_config(&mut self, config: GridConfig) -> bool {
        self.dispatch(&GridAction::SetConfig(config))
    }

    /// Apply a raw text edit to one config field, with the UI policy
    /// (empty means 0, non-numeric is ignored, values are clamped).
    pub fn edit_config_field(&mut self, field: ConfigField, input: &str) -> bool {
        let config = self.state.config.with_field_input(field, input);
        if config == self.state.config {
            return false;
        }
        self.set_config(config)
    }

    /// Remove the selected item, if any.
    pub fn delete_selected(&mut self) -> Option<GridItem> {
        let id = self.selected.clone()?;
        let removed = self.state.item(&id).cloned();
        self.dispatch(&GridAction::RemoveItem(id));
        self.select(None);
        removed
    }

    /// Remove every item, keeping the config.
    pub fn reset(&mut self) {
        self.dispatch(&GridAction::Clear);
        self.select(None);
    }

    /// Record a new container size and recompute the canvas layout.
    pub fn resize_container(&mut self, width: f32, height: f32) {
        self.container = (width, height);
        self.refresh_layout();
    }

    /// Replace the whole state, e.g. after loading persisted data.
    ///
    /// Items that are invalid or overlap an earlier item are dropped.
    pub fn load(&mut self, state: GridState) {
        let fitted = transition(&state, &GridAction::SetConfig(state.config));
        if fitted != self.state {
            self.commit(fitted);
        }
    }

    fn create_item_at(&mut self, col: u32, row: u32) {
        let config = self.state.config;
        let span = self.viewport.new_item_span();
        let col_start = col.min(config.columns.saturating_add(1).saturating_sub(span)).max(1);
        let row_start = row.min(config.rows.saturating_add(1).saturating_sub(span)).max(1);

        let id = ItemId::generate();
        let mut item = GridItem::new(id.clone(), col_start, row_start, span, span);
        if self.state.collides(&item, None) {
            // The wider span does not fit here; the clicked cell itself is free.
            item = GridItem::new(id.clone(), col, row, 1, 1);
        }

        if self.dispatch(&GridAction::AddItem(item)) {
            tracing::debug!("Created {id} at col {col} row {row}");
            self.select(Some(id));
        }
    }

    fn commit(&mut self, next: GridState) {
        let config_changed = next.config != self.state.config;
        self.state = next;
        if self.selected.as_ref().is_some_and(|id| self.state.item(id).is_none()) {
            self.select(None);
        }
        if config_changed {
            self.refresh_layout();
        }
        for observer in &mut self.observers {
            observer(&self.state);
        }
    }

    fn refresh_layout(&mut self) {
        let layout = CanvasLayout::compute(self.container.0, self.container.1, &self.state.config);
        self.controller.set_layout(layout);
    }
}

impl Default for GridEditor {
    fn default() -> Self {
        Self::new(GridState::default())
    }
}

impl std::fmt::Debug for GridEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridEditor")
            .field("state", &self.state)
            .field("selected", &self.selected)
            .field("viewport", &self.viewport)
            .field("container", &self.container)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn item(id: &str, col_start: u32, row_start: u32, col_span: u32, row_span: u32) -> GridItem {
        GridItem::new(ItemId::from(id), col_start, row_start, col_span, row_span)
    }

    fn state_with(items: Vec<GridItem>) -> GridState {
        GridState {
            config: GridConfig::default(),
            items,
        }
    }

    #[test]
    fn test_add_refuses_invalid() {
        let state = state_with(vec![item("a", 1, 1, 2, 2)]);

        let overlapping = transition(&state, &GridAction::AddItem(item("b", 2, 2, 1, 1)));
        assert_eq!(overlapping, state);

        let outside = transition(&state, &GridAction::AddItem(item("b", 6, 1, 2, 1)));
        assert_eq!(outside, state);

        let ok = transition(&state, &GridAction::AddItem(item("b", 3, 1, 1, 1)));
        assert_eq!(ok.item_count(), 2);
    }

    #[test]
    fn test_update_and_remove() {
        let state = state_with(vec![item("a", 1, 1, 1, 1), item("b", 3, 1, 1, 1)]);

        let blocked = transition(&state, &GridAction::UpdateItem(item("a", 2, 1, 2, 1)));
        assert_eq!(blocked, state);

        let moved = transition(&state, &GridAction::UpdateItem(item("a", 1, 2, 2, 1)));
        assert_eq!(moved.item(&"a".into()), Some(&item("a", 1, 2, 2, 1)));

        let removed = transition(&moved, &GridAction::RemoveItem("b".into()));
        assert_eq!(removed.item_count(), 1);

        let missing = transition(&removed, &GridAction::RemoveItem("zzz".into()));
        assert_eq!(missing, removed);

        let cleared = transition(&removed, &GridAction::Clear);
        assert!(cleared.is_empty());
        assert_eq!(cleared.config, state.config);
    }

    #[test]
    fn test_config_shrink_clamps_and_drops() {
        let state = GridState {
            config: GridConfig::new(4, 3, 8),
            items: vec![item("keep", 1, 1, 2, 1), item("tall", 3, 1, 1, 3), item("edge", 4, 1, 1, 1)],
        };

        let next = transition(&state, &GridAction::SetConfig(GridConfig::new(3, 2, 8)));
        assert_eq!(next.config, GridConfig::new(3, 2, 8));
        assert_eq!(next.item(&"keep".into()), Some(&item("keep", 1, 1, 2, 1)));
        assert_eq!(next.item(&"tall".into()), Some(&item("tall", 3, 1, 1, 2)));
        // Clamped onto "tall", which was kept first.
        assert!(next.item(&"edge".into()).is_none());
        assert!(next.is_consistent());
    }

    #[test]
    fn test_config_to_zero_drops_everything() {
        let state = state_with(vec![item("a", 1, 1, 1, 1)]);
        let next = transition(&state, &GridAction::SetConfig(GridConfig::new(0, 4, 8)));
        assert!(next.is_empty());
    }

    #[test]
    fn test_viewport_classes() {
        assert_eq!(ViewportClass::from_width(1024.0), ViewportClass::Regular);
        assert_eq!(ViewportClass::from_width(768.0), ViewportClass::Regular);
        assert_eq!(ViewportClass::from_width(375.0), ViewportClass::Compact);
        assert_eq!(ViewportClass::Compact.new_item_span(), 2);
    }

    #[test]
    fn test_empty_cell_click_creates_selected_item() {
        let mut editor = GridEditor::default();
        editor.click_cell(3, 2);

        let state = editor.state();
        assert_eq!(state.item_count(), 1);
        let created = &state.items[0];
        assert_eq!((created.col_start, created.row_start, created.col_span, created.row_span), (3, 2, 1, 1));
        assert_eq!(editor.selected(), Some(&created.id));
    }

    #[test]
    fn test_compact_click_clamps_start() {
        let mut editor = GridEditor::default().with_viewport(ViewportClass::Compact);
        editor.click_cell(6, 4);

        let created = &editor.state().items[0];
        assert_eq!((created.col_start, created.row_start), (5, 3));
        assert_eq!((created.col_span, created.row_span), (2, 2));
    }

    #[test]
    fn test_compact_click_falls_back_to_single_cell() {
        let mut editor = GridEditor::new(state_with(vec![item("a", 2, 1, 1, 1)])).with_viewport(ViewportClass::Compact);
        editor.click_cell(1, 1);

        let created = editor.state().items.iter().find(|i| i.id.as_str() != "a").expect("created");
        assert_eq!((created.col_start, created.row_start, created.col_span, created.row_span), (1, 1, 1, 1));
        assert!(editor.state().is_consistent());
    }

    #[test]
    fn test_occupied_cell_click_does_nothing() {
        let mut editor = GridEditor::new(state_with(vec![item("a", 1, 1, 2, 2)]));
        assert!(editor.click_cell(2, 2).is_none());
        assert_eq!(editor.state().item_count(), 1);
    }

    #[test]
    fn test_item_click_toggles_selection() {
        let mut editor = GridEditor::new(state_with(vec![item("a", 1, 1, 1, 1)]));
        editor.click_item(&"a".into());
        assert_eq!(editor.selected(), Some(&"a".into()));
        assert_eq!(editor.controller().selected(), Some(&"a".into()));
        editor.click_item(&"a".into());
        assert!(editor.selected().is_none());
    }

    #[test]
    fn test_delete_selected_and_reset() {
        let mut editor = GridEditor::new(state_with(vec![item("a", 1, 1, 1, 1), item("b", 2, 1, 1, 1)]));
        assert!(editor.delete_selected().is_none());

        editor.select(Some("a".into()));
        let removed = editor.delete_selected().expect("removed");
        assert_eq!(removed.id.as_str(), "a");
        assert!(editor.selected().is_none());
        assert_eq!(editor.state().item_count(), 1);

        editor.select(Some("b".into()));
        editor.reset();
        assert!(editor.state().is_empty());
        assert!(editor.selected().is_none());
    }

    #[test]
    fn test_edit_config_field_policy() {
        let mut editor = GridEditor::default();
        assert!(editor.edit_config_field(ConfigField::Columns, "20"));
        assert_eq!(editor.state().config.columns, 12);

        assert!(!editor.edit_config_field(ConfigField::Rows, "abc"));
        assert_eq!(editor.state().config.rows, 4);

        assert!(editor.edit_config_field(ConfigField::Gap, ""));
        assert_eq!(editor.state().config.gap, 0);
    }

    #[test]
    fn test_observers_see_commits_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut editor = GridEditor::new(state_with(vec![item("a", 1, 1, 1, 1)]));
        editor.subscribe(move |state| sink.borrow_mut().push(state.item_count()));

        editor.dispatch(&GridAction::AddItem(item("b", 1, 1, 1, 1)));
        assert!(seen.borrow().is_empty());

        editor.dispatch(&GridAction::AddItem(item("b", 2, 1, 1, 1)));
        editor.reset();
        assert_eq!(*seen.borrow(), vec![2, 0]);
    }

    #[test]
    fn test_config_change_deselects_dropped_item() {
        let mut editor = GridEditor::new(state_with(vec![item("b", 1, 1, 1, 1), item("a", 6, 4, 1, 1)]));
        editor.select(Some("a".into()));
        editor.set_config(GridConfig::new(6, 4, 8));
        assert_eq!(editor.selected(), Some(&"a".into()));

        editor.set_config(GridConfig::new(1, 1, 8));
        assert_eq!(editor.state().item_count(), 1);
        assert!(editor.selected().is_none());
        assert_eq!(editor.layout().metrics.columns, 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_config() -> impl Strategy<Value = GridConfig> {
            (0u32..=12, 0u32..=12, 0u32..=100).prop_map(|(columns, rows, gap)| GridConfig::new(columns, rows, gap))
        }

        fn arb_item() -> impl Strategy<Value = GridItem> {
            (0u32..4, 0u32..14, 0u32..14, 0u32..6, 0u32..6).prop_map(|(n, col, row, col_span, row_span)| {
                GridItem::new(ItemId::new(format!("i{n}")), col, row, col_span, row_span)
            })
        }

        fn arb_action() -> impl Strategy<Value = GridAction> {
            prop_oneof![
                arb_config().prop_map(GridAction::SetConfig),
                arb_item().prop_map(GridAction::AddItem),
                arb_item().prop_map(GridAction::UpdateItem),
                (0u32..4).prop_map(|n| GridAction::RemoveItem(ItemId::new(format!("i{n}")))),
                Just(GridAction::Clear),
            ]
        }

        proptest! {
            #[test]
            fn prop_transitions_keep_state_consistent(
                config in arb_config(),
                actions in prop::collection::vec(arb_action(), 0..24)
            ) {
                let mut state = GridState::new(config);
                for action in &actions {
                    state = transition(&state, action);
                    prop_assert!(state.is_consistent(), "inconsistent after {:?}: {:?}", action, state);
                }
            }

            #[test]
            fn prop_set_config_is_idempotent(
                first in arb_config(),
                second in arb_config(),
                items in prop::collection::vec(arb_item(), 0..8)
            ) {
                let state = GridState { config: first, items };
                let once = transition(&state, &GridAction::SetConfig(second));
                let twice = transition(&once, &GridAction::SetConfig(second));
                prop_assert_eq!(once, twice);
            }
        }
    }
}
