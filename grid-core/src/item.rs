//! Grid items - the rectangles placed on the layout grid.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::GridConfig;

/// Unique identifier for a grid item.
///
/// Stored as a string so state written by other hosts (which may use any
/// id scheme) deserializes unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a new unique item ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("grid-item-{}", Uuid::new_v4()))
    }

    /// Wrap an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::generate()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// An item occupying a rectangle of grid cells.
///
/// Coordinates are 1-based; spans count cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridItem {
    /// Unique identifier.
    pub id: ItemId,
    /// First column occupied.
    pub col_start: u32,
    /// Number of columns occupied.
    pub col_span: u32,
    /// First row occupied.
    pub row_start: u32,
    /// Number of rows occupied.
    pub row_span: u32,
}

impl GridItem {
    /// Create an item at the given position and size.
    #[must_use]
    pub fn new(id: ItemId, col_start: u32, row_start: u32, col_span: u32, row_span: u32) -> Self {
        Self {
            id,
            col_start,
            col_span,
            row_start,
            row_span,
        }
    }

    /// Create a 1x1 item at the top-left cell.
    #[must_use]
    pub fn unit(id: ItemId) -> Self {
        Self::new(id, 1, 1, 1, 1)
    }

    /// Exclusive end column (`col_start + col_span`).
    #[must_use]
    pub const fn col_end(&self) -> u32 {
        self.col_start.saturating_add(self.col_span)
    }

    /// Exclusive end row (`row_start + row_span`).
    #[must_use]
    pub const fn row_end(&self) -> u32 {
        self.row_start.saturating_add(self.row_span)
    }

    /// Whether the item covers the given cell.
    #[must_use]
    pub const fn contains_cell(&self, col: u32, row: u32) -> bool {
        col >= self.col_start && col < self.col_end() && row >= self.row_start && row < self.row_end()
    }

    /// Copy of this item moved to a new start cell.
    #[must_use]
    pub fn moved_to(&self, col_start: u32, row_start: u32) -> Self {
        Self {
            col_start,
            row_start,
            ..self.clone()
        }
    }

    /// Whether position and size match `other` (ids are ignored).
    #[must_use]
    pub const fn same_geometry(&self, other: &Self) -> bool {
        self.col_start == other.col_start
            && self.col_span == other.col_span
            && self.row_start == other.row_start
            && self.row_span == other.row_span
    }
}

/// Check the structural invariants of `item` against `config`.
///
/// Overlap with other items is not checked here; see [`items_overlap`].
#[must_use]
pub fn is_valid_grid_item(item: &GridItem, config: &GridConfig) -> bool {
    let col_last = u64::from(item.col_start) + u64::from(item.col_span);
    let row_last = u64::from(item.row_start) + u64::from(item.row_span);

    item.col_start >= 1
        && item.row_start >= 1
        && item.col_span > 0
        && item.row_span > 0
        && col_last - 1 <= u64::from(config.columns)
        && row_last - 1 <= u64::from(config.rows)
}

/// Whether the rectangles of two items intersect on both axes.
///
/// Symmetric. An item overlaps itself iff both its spans are non-zero.
#[must_use]
pub fn items_overlap(a: &GridItem, b: &GridItem) -> bool {
    a.col_start < b.col_end()
        && b.col_start < a.col_end()
        && a.row_start < b.row_end()
        && b.row_start < a.row_end()
}

/// Project `item` into the bounds of `config`.
///
/// Starts are clamped into `[1, columns]` / `[1, rows]`, then spans into the
/// remaining room. Spans are always at least 1, so the result can still be
/// invalid when the grid has no columns or rows. Idempotent.
#[must_use]
pub fn clamp_grid_item(item: &GridItem, config: &GridConfig) -> GridItem {
    let col_start = item.col_start.min(config.columns).max(1);
    let row_start = item.row_start.min(config.rows).max(1);
    let max_col_span = config.columns.saturating_add(1).saturating_sub(col_start);
    let max_row_span = config.rows.saturating_add(1).saturating_sub(row_start);

    GridItem {
        id: item.id.clone(),
        col_start,
        col_span: item.col_span.min(max_col_span).max(1),
        row_start,
        row_span: item.row_span.min(max_row_span).max(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, col_start: u32, row_start: u32, col_span: u32, row_span: u32) -> GridItem {
        GridItem::new(ItemId::from(id), col_start, row_start, col_span, row_span)
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = ItemId::generate();
        let b = ItemId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("grid-item-"));
    }

    #[test]
    fn test_valid_item() {
        let config = GridConfig::default();
        assert!(is_valid_grid_item(&item("a", 1, 1, 6, 4), &config));
        assert!(is_valid_grid_item(&item("a", 6, 4, 1, 1), &config));
    }

    #[test]
    fn test_invalid_items() {
        let config = GridConfig::default();
        assert!(!is_valid_grid_item(&item("a", 0, 1, 1, 1), &config));
        assert!(!is_valid_grid_item(&item("a", 1, 0, 1, 1), &config));
        assert!(!is_valid_grid_item(&item("a", 1, 1, 0, 1), &config));
        assert!(!is_valid_grid_item(&item("a", 1, 1, 1, 0), &config));
        assert!(!is_valid_grid_item(&item("a", 6, 1, 2, 1), &config));
        assert!(!is_valid_grid_item(&item("a", 1, 4, 1, 2), &config));
        assert!(!is_valid_grid_item(&item("a", u32::MAX, 1, u32::MAX, 1), &config));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = item("a", 1, 1, 2, 2);
        let b = item("b", 2, 2, 2, 2);
        let c = item("c", 3, 1, 1, 1);
        assert!(items_overlap(&a, &b));
        assert!(items_overlap(&b, &a));
        assert!(!items_overlap(&a, &c));
        assert!(!items_overlap(&c, &a));
        assert!(items_overlap(&b, &c) == items_overlap(&c, &b));
    }

    #[test]
    fn test_adjacent_items_do_not_overlap() {
        let a = item("a", 1, 1, 2, 1);
        let right = item("b", 3, 1, 1, 1);
        let below = item("c", 1, 2, 2, 1);
        assert!(!items_overlap(&a, &right));
        assert!(!items_overlap(&a, &below));
    }

    #[test]
    fn test_self_overlap_requires_spans() {
        let a = item("a", 2, 2, 1, 1);
        assert!(items_overlap(&a, &a));
        let flat = item("a", 2, 2, 0, 1);
        assert!(!items_overlap(&flat, &flat));
    }

    #[test]
    fn test_clamp_item() {
        let config = GridConfig::new(4, 3, 8);
        let clamped = clamp_grid_item(&item("a", 6, 5, 3, 3), &config);
        assert_eq!((clamped.col_start, clamped.row_start), (4, 3));
        assert_eq!((clamped.col_span, clamped.row_span), (1, 1));

        let clamped = clamp_grid_item(&item("a", 2, 1, 9, 9), &config);
        assert_eq!((clamped.col_span, clamped.row_span), (3, 3));
        assert!(is_valid_grid_item(&clamped, &config));
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let configs = [GridConfig::new(4, 3, 8), GridConfig::new(0, 0, 0), GridConfig::new(1, 12, 4)];
        let items = [item("a", 0, 0, 0, 0), item("b", 9, 9, 9, 9), item("c", 2, 3, 1, 5)];
        for config in &configs {
            for original in &items {
                let once = clamp_grid_item(original, config);
                let twice = clamp_grid_item(&once, config);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_clamp_empty_grid_stays_invalid() {
        let config = GridConfig::new(0, 0, 8);
        let clamped = clamp_grid_item(&item("a", 1, 1, 1, 1), &config);
        assert!(!is_valid_grid_item(&clamped, &config));
    }

    #[test]
    fn test_item_serde_uses_camel_case() {
        let json = serde_json::to_value(item("x", 2, 3, 1, 2)).expect("serialize");
        assert_eq!(json["colStart"], 2);
        assert_eq!(json["rowSpan"], 2);
        assert_eq!(json["id"], "x");
    }

    #[test]
    fn test_contains_cell() {
        let a = item("a", 2, 2, 2, 1);
        assert!(a.contains_cell(2, 2));
        assert!(a.contains_cell(3, 2));
        assert!(!a.contains_cell(4, 2));
        assert!(!a.contains_cell(2, 3));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_item(id: &'static str) -> impl Strategy<Value = GridItem> {
            (0u32..16, 0u32..16, 0u32..8, 0u32..8)
                .prop_map(move |(col, row, col_span, row_span)| item(id, col, row, col_span, row_span))
        }

        proptest! {
            #[test]
            fn prop_overlap_is_symmetric(a in arb_item("a"), b in arb_item("b")) {
                prop_assert_eq!(items_overlap(&a, &b), items_overlap(&b, &a));
            }

            #[test]
            fn prop_clamp_is_idempotent(
                candidate in arb_item("a"),
                columns in 0u32..=12,
                rows in 0u32..=12
            ) {
                let config = GridConfig::new(columns, rows, 8);
                let once = clamp_grid_item(&candidate, &config);
                prop_assert_eq!(clamp_grid_item(&once, &config), once.clone());
                if columns > 0 && rows > 0 {
                    prop_assert!(is_valid_grid_item(&once, &config));
                }
            }
        }
    }
}
