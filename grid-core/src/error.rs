//! Error types for grid operations.

use thiserror::Error;

use crate::ItemId;

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur in grid operations.
#[derive(Debug, Error)]
pub enum GridError {
    /// Item not found in the grid.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// Item violates a structural invariant against the current config.
    #[error("Item {0} does not fit the grid")]
    OutOfBounds(ItemId),

    /// Item would overlap another item.
    #[error("Item {item} overlaps item {other}")]
    Overlap {
        /// The proposed item.
        item: ItemId,
        /// The item it collides with.
        other: ItemId,
    },

    /// An item with the same ID already exists.
    #[error("Duplicate item ID: {0}")]
    DuplicateId(ItemId),

    /// Grid state serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
