//! Input events for canvas interaction.

use serde::{Deserialize, Serialize};

use crate::ItemId;

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    /// Button pressed.
    Down,
    /// Pointer moved.
    Move,
    /// Button released.
    Up,
    /// Gesture cancelled (lost capture, system interruption).
    Cancel,
}

/// Pointer button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    /// Left mouse button or touch contact.
    #[default]
    Primary,
    /// Middle mouse button.
    Auxiliary,
    /// Right mouse button.
    Secondary,
}

/// One of the eight resize affordances on a selected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeHandle {
    /// Top-left corner.
    #[serde(rename = "nw")]
    NorthWest,
    /// Top-right corner.
    #[serde(rename = "ne")]
    NorthEast,
    /// Bottom-left corner.
    #[serde(rename = "sw")]
    SouthWest,
    /// Bottom-right corner.
    #[serde(rename = "se")]
    SouthEast,
    /// Top edge.
    #[serde(rename = "n")]
    North,
    /// Bottom edge.
    #[serde(rename = "s")]
    South,
    /// Right edge.
    #[serde(rename = "e")]
    East,
    /// Left edge.
    #[serde(rename = "w")]
    West,
}

impl ResizeHandle {
    /// Every handle, corners first.
    pub const ALL: [Self; 8] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
        Self::North,
        Self::South,
        Self::East,
        Self::West,
    ];

    /// Whether this handle moves the start (left) column edge.
    #[must_use]
    pub const fn moves_left(self) -> bool {
        matches!(self, Self::NorthWest | Self::SouthWest | Self::West)
    }

    /// Whether this handle moves the end (right) column edge.
    #[must_use]
    pub const fn moves_right(self) -> bool {
        matches!(self, Self::NorthEast | Self::SouthEast | Self::East)
    }

    /// Whether this handle moves the start (top) row edge.
    #[must_use]
    pub const fn moves_top(self) -> bool {
        matches!(self, Self::NorthWest | Self::NorthEast | Self::North)
    }

    /// Whether this handle moves the end (bottom) row edge.
    #[must_use]
    pub const fn moves_bottom(self) -> bool {
        matches!(self, Self::SouthWest | Self::SouthEast | Self::South)
    }

    /// Position of the handle on the item as fractions of its width/height.
    #[must_use]
    pub const fn anchor(self) -> (f32, f32) {
        match self {
            Self::NorthWest => (0.0, 0.0),
            Self::NorthEast => (1.0, 0.0),
            Self::SouthWest => (0.0, 1.0),
            Self::SouthEast => (1.0, 1.0),
            Self::North => (0.5, 0.0),
            Self::South => (0.5, 1.0),
            Self::East => (1.0, 0.5),
            Self::West => (0.0, 0.5),
        }
    }
}

/// What the pointer landed on when pressed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum PointerTarget {
    /// Empty canvas or a background cell.
    #[default]
    Canvas,
    /// The body of an item.
    Item(ItemId),
    /// A resize handle of an item.
    Handle {
        /// Item owning the handle.
        item: ItemId,
        /// Which handle.
        handle: ResizeHandle,
    },
}

/// A pointer event in canvas coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Phase of this event.
    pub phase: PointerPhase,
    /// X position relative to the canvas.
    pub x: f32,
    /// Y position relative to the canvas.
    pub y: f32,
    /// Button involved.
    #[serde(default)]
    pub button: PointerButton,
    /// Hit target resolved by the host, if any.
    #[serde(default)]
    pub target: PointerTarget,
}

impl PointerEvent {
    /// Create a new pointer event on the bare canvas.
    #[must_use]
    pub fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            x,
            y,
            button: PointerButton::Primary,
            target: PointerTarget::Canvas,
        }
    }

    /// Set the hit target.
    #[must_use]
    pub fn with_target(mut self, target: PointerTarget) -> Self {
        self.target = target;
        self
    }

    /// Set the button.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_handles_move_two_edges() {
        for handle in [
            ResizeHandle::NorthWest,
            ResizeHandle::NorthEast,
            ResizeHandle::SouthWest,
            ResizeHandle::SouthEast,
        ] {
            let edges = [
                handle.moves_left(),
                handle.moves_right(),
                handle.moves_top(),
                handle.moves_bottom(),
            ];
            assert_eq!(edges.iter().filter(|&&moved| moved).count(), 2, "{handle:?}");
        }
    }

    #[test]
    fn test_edge_handles_move_one_edge() {
        assert!(ResizeHandle::South.moves_bottom());
        assert!(!ResizeHandle::South.moves_top());
        assert!(!ResizeHandle::South.moves_left());
        assert!(!ResizeHandle::South.moves_right());
        assert!(ResizeHandle::West.moves_left());
        assert!(!ResizeHandle::West.moves_bottom());
    }

    #[test]
    fn test_handle_serde_names() {
        let json = serde_json::to_string(&ResizeHandle::SouthEast).expect("serialize");
        assert_eq!(json, "\"se\"");
        let handle: ResizeHandle = serde_json::from_str("\"n\"").expect("parse");
        assert_eq!(handle, ResizeHandle::North);
    }

    #[test]
    fn test_pointer_event_defaults() {
        let event: PointerEvent =
            serde_json::from_str(r#"{"phase":"down","x":10.0,"y":20.0}"#).expect("parse");
        assert_eq!(event.button, PointerButton::Primary);
        assert_eq!(event.target, PointerTarget::Canvas);
    }
}
