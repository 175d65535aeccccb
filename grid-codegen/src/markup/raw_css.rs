//! Raw CSS: grid properties as inline styles, or as a stylesheet with one
//! rule per item in standalone documents.

use std::fmt::Write;

use grid_core::CodeFormat;

use super::{document, item_node, nodes, Component, ITEM_INDENT};
use crate::classes::{container_style_entries, inline_style, placement_style_entries, BORDER_CSS};
use crate::layout::LayoutPlan;
use crate::technology::Technology;
use crate::GeneratorOptions;

/// Render the plan as plain CSS grid markup.
pub(crate) fn render(plan: &LayoutPlan, options: &GeneratorOptions) -> String {
    match options.format {
        CodeFormat::Embedded => {
            let items = nodes(plan, |item| {
                let style = inline_style("style", &placement_style_entries(item, options.with_styled_borders));
                item_node(ITEM_INDENT, &format!("div {style}"), "div", item)
            });
            let container = inline_style("style", &container_style_entries(&plan.config));
            Component::new(Technology::RawCss.profile(), "import React from 'react'")
                .container(format!("<div {container}>"), "</div>")
                .render(&items)
        }
        CodeFormat::Standalone => {
            let items = nodes(plan, |item| {
                item_node(4, &format!("div class=\"grid-item-{}\"", item.number), "div", item)
            });
            document("Grid Layout", &stylesheet(plan, options), "<div class=\"grid-container\">", &items)
        }
    }
}

fn stylesheet(plan: &LayoutPlan, options: &GeneratorOptions) -> String {
    let config = &plan.config;
    let mut css = String::from("  <style>\n");
    css.push_str("    .grid-container {\n      display: grid;\n");
    let _ = writeln!(css, "      grid-template-columns: repeat({}, 1fr);", config.columns);
    let _ = writeln!(css, "      grid-template-rows: repeat({}, 1fr);", config.rows);
    let _ = writeln!(css, "      gap: {}px;", config.gap);
    css.push_str("    }\n");

    for item in &plan.items {
        let _ = writeln!(css, "    .grid-item-{} {{", item.number);
        let _ = writeln!(css, "      grid-column-start: {};", item.col_start);
        let _ = writeln!(css, "      grid-column-end: {};", item.col_end());
        let _ = writeln!(css, "      grid-row-start: {};", item.row_start);
        let _ = writeln!(css, "      grid-row-end: {};", item.row_end());
        if options.with_styled_borders {
            let _ = writeln!(css, "      {BORDER_CSS}");
        }
        css.push_str("    }\n");
    }

    css.push_str("  </style>\n");
    css
}
