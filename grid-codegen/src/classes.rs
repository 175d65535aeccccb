//! Style fragments shared by the markup templates.

use std::fmt::Write;

use grid_core::GridConfig;

use crate::layout::PlacedItem;

/// Border as a JS style object entry.
pub const BORDER_STYLE: &str = "border: '1px solid #4a5565'";

/// Border as a CSS declaration.
pub const BORDER_CSS: &str = "border: 1px solid #4a5565;";

/// Border as Tailwind classes.
pub const BORDER_CLASSES: &str = "border border-gray-600";

/// Tailwind gap class: the spacing scale when `gap` is a multiple of 4 px,
/// an arbitrary value otherwise.
#[must_use]
pub fn gap_class(gap: u32) -> String {
    if gap % 4 == 0 {
        format!("gap-{}", gap / 4)
    } else {
        format!("gap-[{gap}px]")
    }
}

/// Tailwind classes for a grid container.
#[must_use]
pub fn container_classes(config: &GridConfig) -> String {
    format!(
        "grid grid-cols-{} grid-rows-{} {}",
        config.columns,
        config.rows,
        gap_class(config.gap)
    )
}

/// Tailwind placement classes for an item. Start classes are omitted for
/// the first line.
#[must_use]
pub fn item_classes(item: &PlacedItem, with_borders: bool) -> String {
    let mut classes = format!("col-span-{} row-span-{}", item.col_span, item.row_span);
    if item.col_start > 1 {
        let _ = write!(classes, " col-start-{}", item.col_start);
    }
    if item.row_start > 1 {
        let _ = write!(classes, " row-start-{}", item.row_start);
    }
    if with_borders {
        classes.push(' ');
        classes.push_str(BORDER_CLASSES);
    }
    classes
}

/// JS style object entries for a grid container.
#[must_use]
pub fn container_style_entries(config: &GridConfig) -> [String; 4] {
    [
        "display: 'grid'".to_string(),
        format!("gridTemplateColumns: `repeat({}, 1fr)`", config.columns),
        format!("gridTemplateRows: `repeat({}, 1fr)`", config.rows),
        format!("gap: `{}px`", config.gap),
    ]
}

/// JS style object entries placing an item on both axes.
#[must_use]
pub fn placement_style_entries(item: &PlacedItem, with_borders: bool) -> Vec<String> {
    let mut entries = vec![
        format!("gridColumnStart: {}", item.col_start),
        format!("gridColumnEnd: {}", item.col_end()),
        format!("gridRowStart: {}", item.row_start),
        format!("gridRowEnd: {}", item.row_end()),
    ];
    if with_borders {
        entries.push(BORDER_STYLE.to_string());
    }
    entries
}

/// Render style entries as a multi-line JSX object attribute:
///
/// ```text
/// {indent}name={{
/// {indent}  entry,
/// {indent}}}
/// ```
#[must_use]
pub fn style_block<S: AsRef<str>>(name: &str, entries: &[S], indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut out = format!("{pad}{name}={{{{\n");
    for entry in entries {
        let _ = writeln!(out, "{pad}  {},", entry.as_ref());
    }
    let _ = write!(out, "{pad}}}}}");
    out
}

/// Render style entries as a single-line JSX object attribute.
#[must_use]
pub fn inline_style<S: AsRef<str>>(name: &str, entries: &[S]) -> String {
    let joined: Vec<&str> = entries.iter().map(AsRef::as_ref).collect();
    format!("{name}={{{{ {} }}}}", joined.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(col_start: u32, row_start: u32, col_span: u32, row_span: u32) -> PlacedItem {
        PlacedItem {
            number: 1,
            col_start,
            col_span,
            row_start,
            row_span,
            flow_span: col_span,
        }
    }

    #[test]
    fn test_gap_class() {
        assert_eq!(gap_class(8), "gap-2");
        assert_eq!(gap_class(0), "gap-0");
        assert_eq!(gap_class(10), "gap-[10px]");
    }

    #[test]
    fn test_item_classes_omit_first_line_starts() {
        assert_eq!(item_classes(&placed(1, 1, 2, 1), false), "col-span-2 row-span-1");
        assert_eq!(
            item_classes(&placed(3, 2, 1, 2), true),
            "col-span-1 row-span-2 col-start-3 row-start-2 border border-gray-600"
        );
    }

    #[test]
    fn test_container_classes() {
        assert_eq!(container_classes(&GridConfig::new(6, 4, 8)), "grid grid-cols-6 grid-rows-4 gap-2");
    }

    #[test]
    fn test_style_block() {
        let block = style_block("sx", &["a: 1", "b: 2"], 4);
        assert_eq!(block, "    sx={{\n      a: 1,\n      b: 2,\n    }}");
    }

    #[test]
    fn test_inline_style() {
        assert_eq!(inline_style("style", &[BORDER_STYLE]), "style={{ border: '1px solid #4a5565' }}");
    }
}
