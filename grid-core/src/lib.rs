//! # Gridforge Core
//!
//! Core logic for the visual grid layout composer.
//! Compiles to WASM so browser hosts can drive it directly.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               grid-core.wasm                │
//! ├─────────────────────────────────────────────┤
//! │  Grid Model      │  Interaction Controller  │
//! │  - Config        │  - Drag / resize         │
//! │  - Items         │  - Click disambiguation  │
//! │  - Validation    │  - Empty-cell creation   │
//! ├─────────────────────────────────────────────┤
//! │  Geometry        │  Editor                  │
//! │  - Pixel ↔ cell  │  - State transitions     │
//! │  - Cell sizing   │  - Persisted state       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The host owns the authoritative [`GridState`]. Pointer input flows into the
//! [`InteractionController`], which proposes [`ControllerEvent`]s; the host
//! applies them through [`transition`] (or lets a [`GridEditor`] do it).

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod editor;
pub mod error;
pub mod event;
pub mod geometry;
pub mod grid;
pub mod interaction;
pub mod item;
pub mod store;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{ConfigField, GridConfig};
pub use editor::{transition, GridAction, GridEditor, ViewportClass};
pub use error::{GridError, GridResult};
pub use event::{PointerButton, PointerEvent, PointerPhase, PointerTarget, ResizeHandle};
pub use geometry::{CanvasLayout, CellMetrics, PixelRect, SizingMode};
pub use grid::GridState;
pub use interaction::{ControllerEvent, Gesture, InteractionController, DRAG_THRESHOLD};
pub use item::{clamp_grid_item, is_valid_grid_item, items_overlap, GridItem, ItemId};
pub use store::{CodeFormat, FileStorage, MemoryStorage, PersistedState, StateStorage, StoreError};

/// Grid core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
