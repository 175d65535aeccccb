//! Grid state - the configuration plus every placed item.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    is_valid_grid_item, items_overlap, GridConfig, GridError, GridItem, GridResult, ItemId,
};

/// The complete layout: grid dimensions and the items placed on it.
///
/// Item order carries no meaning; it is preserved only so serialization is
/// stable. Display numbering always uses row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridState {
    /// Grid dimensions.
    pub config: GridConfig,
    /// Placed items.
    pub items: Vec<GridItem>,
}

impl GridState {
    /// Create an empty grid with the given config.
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
        }
    }

    /// Get an item by ID.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&GridItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Find the item covering the given cell.
    #[must_use]
    pub fn item_at(&self, col: u32, row: u32) -> Option<&GridItem> {
        self.items.iter().find(|item| item.contains_cell(col, row))
    }

    /// Whether any item covers the given cell.
    #[must_use]
    pub fn is_cell_occupied(&self, col: u32, row: u32) -> bool {
        self.item_at(col, row).is_some()
    }

    /// Whether any item spans more than one row.
    #[must_use]
    pub fn has_vertical_items(&self) -> bool {
        self.items.iter().any(|item| item.row_span > 1)
    }

    /// Get the number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the grid has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items ordered row-major: by `row_start`, then `col_start`.
    #[must_use]
    pub fn sorted_items(&self) -> Vec<&GridItem> {
        let mut sorted: Vec<_> = self.items.iter().collect();
        sorted.sort_by_key(|item| (item.row_start, item.col_start));
        sorted
    }

    /// Map each item ID to its 1-based "Item N" label number.
    #[must_use]
    pub fn item_numbers(&self) -> HashMap<ItemId, usize> {
        self.sorted_items()
            .into_iter()
            .enumerate()
            .map(|(index, item)| (item.id.clone(), index + 1))
            .collect()
    }

    /// Find the first item other than `exclude` that overlaps `candidate`.
    #[must_use]
    pub fn overlapping(&self, candidate: &GridItem, exclude: Option<&ItemId>) -> Option<&GridItem> {
        self.items
            .iter()
            .filter(|item| Some(&item.id) != exclude)
            .find(|item| items_overlap(candidate, item))
    }

    /// Whether `candidate` is out of bounds or overlaps any item other than
    /// `exclude`.
    #[must_use]
    pub fn collides(&self, candidate: &GridItem, exclude: Option<&ItemId>) -> bool {
        !is_valid_grid_item(candidate, &self.config) || self.overlapping(candidate, exclude).is_some()
    }

    /// Check whether `candidate` may be committed in place of the item with
    /// the same ID (or added, if no such item exists).
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] or [`GridError::Overlap`] when the
    /// candidate breaks an invariant.
    pub fn check(&self, candidate: &GridItem) -> GridResult<()> {
        if !is_valid_grid_item(candidate, &self.config) {
            return Err(GridError::OutOfBounds(candidate.id.clone()));
        }
        if let Some(other) = self.overlapping(candidate, Some(&candidate.id)) {
            return Err(GridError::Overlap {
                item: candidate.id.clone(),
                other: other.id.clone(),
            });
        }
        Ok(())
    }

    /// Whether every item is valid, ids are unique and no two items overlap.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.items.iter().enumerate().all(|(index, item)| {
            is_valid_grid_item(item, &self.config)
                && self.items[index + 1..]
                    .iter()
                    .all(|other| other.id != item.id && !items_overlap(item, other))
        })
    }

    /// Add an item after validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is taken or the item breaks an invariant.
    pub fn add_item(&mut self, item: GridItem) -> GridResult<ItemId> {
        if self.item(&item.id).is_some() {
            return Err(GridError::DuplicateId(item.id));
        }
        self.check(&item)?;
        let id = item.id.clone();
        self.items.push(item);
        Ok(id)
    }

    /// Replace an existing item after validating the new geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is unknown or the update breaks an invariant.
    pub fn update_item(&mut self, item: GridItem) -> GridResult<()> {
        let index = self
            .items
            .iter()
            .position(|existing| existing.id == item.id)
            .ok_or_else(|| GridError::ItemNotFound(item.id.clone()))?;
        self.check(&item)?;
        self.items[index] = item;
        Ok(())
    }

    /// Remove an item from the grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is not found.
    pub fn remove_item(&mut self, id: &ItemId) -> GridResult<GridItem> {
        let index = self
            .items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| GridError::ItemNotFound(id.clone()))?;
        Ok(self.items.remove(index))
    }

    /// Remove all items, keeping the config.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Serialize the state to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> GridResult<String> {
        serde_json::to_string(self).map_err(GridError::Serialization)
    }

    /// Deserialize a state from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> GridResult<Self> {
        serde_json::from_str(json).map_err(GridError::Serialization)
    }
}
