//! Geometry - mapping between canvas pixels and grid cells, and the
//! responsive sizing policy that decides how large cells are drawn.
//!
//! All pixel coordinates are relative to the canvas origin (top-left corner
//! of the padded grid surface).

use serde::{Deserialize, Serialize};

use crate::{GridConfig, GridItem, ResizeHandle};

/// Padding between the canvas edge and the first cell, in pixels.
pub const CANVAS_PADDING: f32 = 8.0;

/// Fallback container width when the measurement is unusable.
pub const DEFAULT_CONTAINER_WIDTH: f32 = 800.0;

/// Fallback container height when the measurement is unusable.
pub const DEFAULT_CONTAINER_HEIGHT: f32 = 600.0;

/// Widest the canvas grows when fitting its container.
pub const MAX_CANVAS_WIDTH: f32 = 800.0;

/// Height-to-width ratio of a fitted canvas.
pub const CANVAS_ASPECT_RATIO: f32 = DEFAULT_CONTAINER_HEIGHT / DEFAULT_CONTAINER_WIDTH;

/// Smallest cell edge before the canvas switches to fixed-size cells.
pub const MIN_CELL_SIZE: f32 = 40.0;

/// Edge length of the square resize handle hit areas.
pub const HANDLE_SIZE: f32 = 12.0;

/// An axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    /// Distance from the canvas left edge.
    pub left: f32,
    /// Distance from the canvas top edge.
    pub top: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl PixelRect {
    /// Check if a point is within this rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
    }

    /// Square of side `size` centred on `(cx, cy)`.
    #[must_use]
    fn square(cx: f32, cy: f32, size: f32) -> Self {
        Self {
            left: cx - size / 2.0,
            top: cy - size / 2.0,
            width: size,
            height: size,
        }
    }
}

/// Resolved cell dimensions for a grid drawn on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellMetrics {
    /// Width of one cell.
    pub cell_width: f32,
    /// Height of one cell.
    pub cell_height: f32,
    /// Gap between cells.
    pub gap: f32,
    /// Canvas padding around the grid.
    pub padding: f32,
    /// Column count the metrics were computed for.
    pub columns: u32,
    /// Row count the metrics were computed for.
    pub rows: u32,
}

impl CellMetrics {
    /// Map a canvas point to the 1-based cell under it, clamped into the grid.
    ///
    /// Non-finite coordinates map to the first cell.
    #[must_use]
    pub fn pixel_to_cell(&self, x: f32, y: f32) -> (u32, u32) {
        (
            axis_cell(x, self.padding, self.cell_width + self.gap, self.columns),
            axis_cell(y, self.padding, self.cell_height + self.gap, self.rows),
        )
    }

    /// Pixel rectangle covered by `item`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn item_rect(&self, item: &GridItem) -> PixelRect {
        let col_offset = item.col_start.saturating_sub(1) as f32;
        let row_offset = item.row_start.saturating_sub(1) as f32;
        let col_span = item.col_span as f32;
        let row_span = item.row_span as f32;

        PixelRect {
            left: self.padding + col_offset * (self.cell_width + self.gap),
            top: self.padding + row_offset * (self.cell_height + self.gap),
            width: col_span * self.cell_width + (col_span - 1.0).max(0.0) * self.gap,
            height: row_span * self.cell_height + (row_span - 1.0).max(0.0) * self.gap,
        }
    }

    /// Pixel rectangle of a single background cell.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn cell_rect(&self, col: u32, row: u32) -> PixelRect {
        PixelRect {
            left: self.padding + col.saturating_sub(1) as f32 * (self.cell_width + self.gap),
            top: self.padding + row.saturating_sub(1) as f32 * (self.cell_height + self.gap),
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Hit area of one resize handle on `item`.
    #[must_use]
    pub fn handle_rect(&self, item: &GridItem, handle: ResizeHandle) -> PixelRect {
        let rect = self.item_rect(item);
        let (fx, fy) = handle.anchor();
        PixelRect::square(
            rect.left + rect.width * fx,
            rect.top + rect.height * fy,
            HANDLE_SIZE,
        )
    }

    /// Find the resize handle of `item` under a canvas point.
    ///
    /// Corner handles take priority over edge handles.
    #[must_use]
    pub fn handle_at(&self, item: &GridItem, x: f32, y: f32) -> Option<ResizeHandle> {
        ResizeHandle::ALL
            .into_iter()
            .find(|&handle| self.handle_rect(item, handle).contains(x, y))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn axis_cell(pos: f32, padding: f32, step: f32, count: u32) -> u32 {
    let count = count.max(1);
    if !pos.is_finite() || !step.is_finite() || step <= 0.0 {
        return 1;
    }
    let index = ((pos - padding) / step).floor() as i64 + 1;
    u32::try_from(index.clamp(1, i64::from(count))).unwrap_or(1)
}

/// How the canvas resolved its cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizingMode {
    /// Canvas fits its container; cells share the available space.
    Fit,
    /// Cells are pinned at [`MIN_CELL_SIZE`]; the canvas may exceed its
    /// container and must be scrollable.
    FixedCell,
}

/// Canvas size and cell metrics for a container and grid config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasLayout {
    /// Canvas width in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
    /// Measured container width the layout was computed for.
    pub container_width: f32,
    /// Measured container height the layout was computed for.
    pub container_height: f32,
    /// Sizing mode chosen.
    pub mode: SizingMode,
    /// Resolved cell metrics.
    pub metrics: CellMetrics,
}

impl CanvasLayout {
    /// Compute the canvas layout for a container of the given size.
    ///
    /// Unusable measurements (zero, negative, non-finite) fall back to the
    /// default container size.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(container_width: f32, container_height: f32, config: &GridConfig) -> Self {
        let container_width = sanitize(container_width, DEFAULT_CONTAINER_WIDTH);
        let container_height = sanitize(container_height, DEFAULT_CONTAINER_HEIGHT);

        let columns = config.columns.max(1) as f32;
        let rows = config.rows.max(1) as f32;
        let gap = config.gap as f32;

        let width = container_width.min(MAX_CANVAS_WIDTH);
        let height = width * CANVAS_ASPECT_RATIO;
        let cell_width = (width - 2.0 * CANVAS_PADDING - gap * (columns - 1.0)) / columns;
        let cell_height = (height - 2.0 * CANVAS_PADDING - gap * (rows - 1.0)) / rows;

        let (mode, width, height, cell_width, cell_height) =
            if cell_width < MIN_CELL_SIZE || cell_height < MIN_CELL_SIZE {
                (
                    SizingMode::FixedCell,
                    fixed_extent(columns, gap),
                    fixed_extent(rows, gap),
                    MIN_CELL_SIZE,
                    MIN_CELL_SIZE,
                )
            } else {
                (SizingMode::Fit, width, height, cell_width, cell_height)
            };

        tracing::trace!(
            "Canvas layout {width}x{height} ({mode:?}) for container {container_width}x{container_height}"
        );

        Self {
            width,
            height,
            container_width,
            container_height,
            mode,
            metrics: CellMetrics {
                cell_width,
                cell_height,
                gap,
                padding: CANVAS_PADDING,
                columns: config.columns,
                rows: config.rows,
            },
        }
    }

    /// Whether the canvas is larger than its container in either axis.
    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.width > self.container_width || self.height > self.container_height
    }

    /// Whether this layout was computed for the given container and config.
    #[must_use]
    pub fn matches(&self, container_width: f32, container_height: f32, config: &GridConfig) -> bool {
        *self == Self::compute(container_width, container_height, config)
    }
}

impl Default for CanvasLayout {
    fn default() -> Self {
        Self::compute(
            DEFAULT_CONTAINER_WIDTH,
            DEFAULT_CONTAINER_HEIGHT,
            &GridConfig::default(),
        )
    }
}

fn sanitize(measurement: f32, fallback: f32) -> f32 {
    if measurement.is_finite() && measurement > 0.0 {
        measurement
    } else {
        fallback
    }
}

fn fixed_extent(count: f32, gap: f32) -> f32 {
    MIN_CELL_SIZE * count + gap * (count - 1.0) + 2.0 * CANVAS_PADDING
}
