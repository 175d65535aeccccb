//! Tailwind CSS: utility classes on a plain grid container.

use grid_core::CodeFormat;

use super::{document, item_node, nodes, Component, ITEM_INDENT};
use crate::classes::{container_classes, item_classes};
use crate::layout::LayoutPlan;
use crate::technology::Technology;
use crate::GeneratorOptions;

const CDN_SCRIPT: &str = "  <script src=\"https://cdn.tailwindcss.com\"></script>\n";

/// Render the plan as Tailwind markup.
pub(crate) fn render(plan: &LayoutPlan, options: &GeneratorOptions) -> String {
    let container = container_classes(&plan.config);
    match options.format {
        CodeFormat::Embedded => {
            let items = nodes(plan, |item| {
                let open = format!("div className=\"{}\"", item_classes(item, options.with_styled_borders));
                item_node(ITEM_INDENT, &open, "div", item)
            });
            Component::new(Technology::Tailwind.profile(), "")
                .container(format!("<div className=\"{container}\">"), "</div>")
                .render(&items)
        }
        CodeFormat::Standalone => {
            let items = nodes(plan, |item| {
                let open = format!("div class=\"{}\"", item_classes(item, options.with_styled_borders));
                item_node(4, &open, "div", item)
            });
            document(
                "Tailwind Grid Layout",
                CDN_SCRIPT,
                &format!("<div class=\"{container}\">"),
                &items,
            )
        }
    }
}
