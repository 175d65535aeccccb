//! Technology-independent preprocessing: ordering, numbering and the choice
//! between flow and explicit placement.

use grid_core::{GridConfig, GridItem, GridState};

use crate::technology::{FlowUnits, TechnologyProfile};

/// Which markup shape a generator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPath {
    /// No items; a placeholder takes their place.
    Empty,
    /// Items fill a single row system using the technology's column units.
    Flow,
    /// Every item carries explicit start/end lines on both axes.
    Placed,
}

/// One item as seen by the markup templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedItem {
    /// 1-based label number in row-major order.
    pub number: usize,
    /// First column.
    pub col_start: u32,
    /// Columns spanned.
    pub col_span: u32,
    /// First row.
    pub row_start: u32,
    /// Rows spanned.
    pub row_span: u32,
    /// Span in the technology's flow units.
    pub flow_span: u32,
}

impl PlacedItem {
    /// Exclusive end column line.
    #[must_use]
    pub const fn col_end(&self) -> u32 {
        self.col_start + self.col_span
    }

    /// Exclusive end row line.
    #[must_use]
    pub const fn row_end(&self) -> u32 {
        self.row_start + self.row_span
    }
}

/// The grid prepared for one technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    /// Markup shape.
    pub path: LayoutPath,
    /// Grid dimensions.
    pub config: GridConfig,
    /// Items in row-major order.
    pub items: Vec<PlacedItem>,
}

impl LayoutPlan {
    /// Prepare `state` for a technology profile.
    #[must_use]
    pub fn new(state: &GridState, profile: &TechnologyProfile) -> Self {
        let config = state.config;
        let path = if state.is_empty() {
            LayoutPath::Empty
        } else if profile.flow != FlowUnits::None && !state.has_vertical_items() {
            LayoutPath::Flow
        } else {
            LayoutPath::Placed
        };

        let items = state
            .sorted_items()
            .into_iter()
            .enumerate()
            .map(|(index, item)| PlacedItem {
                number: index + 1,
                col_start: item.col_start,
                col_span: item.col_span,
                row_start: item.row_start,
                row_span: item.row_span,
                flow_span: flow_span(item, &config, profile.flow),
            })
            .collect();

        Self {
            path,
            config,
            items,
        }
    }
}

/// Rescale a column span into `units`, rounding half up. Never below 1.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn flow_span(item: &GridItem, config: &GridConfig, units: FlowUnits) -> u32 {
    match units {
        FlowUnits::Fixed(units) => {
            let ratio = f64::from(units) / f64::from(config.columns.max(1));
            ((f64::from(item.col_span) * ratio).round() as u32).max(1)
        }
        FlowUnits::Native | FlowUnits::None => item.col_span,
    }
}

/// Divide and round half up, falling back when the result is zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn scaled_or(value: u32, divisor: u32, fallback: u32) -> u32 {
    let scaled = (f64::from(value) / f64::from(divisor)).round() as u32;
    if scaled == 0 {
        fallback
    } else {
        scaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Technology;
    use grid_core::ItemId;

    fn state(columns: u32, items: &[(u32, u32, u32, u32)]) -> GridState {
        GridState {
            config: GridConfig::new(columns, 4, 8),
            items: items
                .iter()
                .enumerate()
                .map(|(i, &(col, row, cs, rs))| GridItem::new(ItemId::new(format!("i{i}")), col, row, cs, rs))
                .collect(),
        }
    }

    #[test]
    fn test_empty_path() {
        let plan = LayoutPlan::new(&GridState::default(), Technology::MaterialUi.profile());
        assert_eq!(plan.path, LayoutPath::Empty);
        assert!(plan.items.is_empty());
    }

    #[test]
    fn test_flow_only_without_vertical_items() {
        let flat = state(6, &[(1, 1, 2, 1), (3, 2, 1, 1)]);
        assert_eq!(LayoutPlan::new(&flat, Technology::AntDesign.profile()).path, LayoutPath::Flow);

        let tall = state(6, &[(1, 1, 2, 2)]);
        assert_eq!(LayoutPlan::new(&tall, Technology::AntDesign.profile()).path, LayoutPath::Placed);

        assert_eq!(LayoutPlan::new(&flat, Technology::Tailwind.profile()).path, LayoutPath::Placed);
    }

    #[test]
    fn test_flow_span_rescaling() {
        let flat = state(6, &[(1, 1, 2, 1)]);
        assert_eq!(LayoutPlan::new(&flat, Technology::AntDesign.profile()).items[0].flow_span, 8);
        assert_eq!(LayoutPlan::new(&flat, Technology::MaterialUi.profile()).items[0].flow_span, 4);
        assert_eq!(LayoutPlan::new(&flat, Technology::ChakraUi.profile()).items[0].flow_span, 2);

        // 1 * 12 / 8 = 1.5 rounds up.
        let odd = state(8, &[(1, 1, 1, 1)]);
        assert_eq!(LayoutPlan::new(&odd, Technology::Mantine.profile()).items[0].flow_span, 2);
    }

    #[test]
    fn test_flow_span_never_zero_on_wide_grids() {
        let wide = state(30, &[(1, 1, 1, 1)]);
        assert_eq!(LayoutPlan::new(&wide, Technology::MaterialUi.profile()).items[0].flow_span, 1);
        assert_eq!(LayoutPlan::new(&wide, Technology::AntDesign.profile()).items[0].flow_span, 1);
    }

    #[test]
    fn test_row_major_numbering() {
        let plan = LayoutPlan::new(&state(6, &[(4, 2, 1, 1), (5, 1, 1, 1), (1, 2, 1, 1)]), Technology::Tailwind.profile());
        let order: Vec<_> = plan.items.iter().map(|i| (i.col_start, i.row_start, i.number)).collect();
        assert_eq!(order, vec![(5, 1, 1), (1, 2, 2), (4, 2, 3)]);
    }

    #[test]
    fn test_scaled_or() {
        assert_eq!(scaled_or(8, 8, 2), 1);
        assert_eq!(scaled_or(4, 8, 2), 1);
        assert_eq!(scaled_or(3, 8, 2), 2);
        assert_eq!(scaled_or(0, 4, 4), 4);
        assert_eq!(scaled_or(10, 4, 4), 3);
    }
}
