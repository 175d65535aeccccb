//! Chakra UI: `GridItem` column spans on a template sized to the grid for
//! flat layouts, explicit lines otherwise.

use super::{item_node, multiline_tag, nodes, Component, CONTAINER_INDENT, ITEM_INDENT};
use crate::classes::{container_style_entries, inline_style, placement_style_entries, style_block, BORDER_STYLE};
use crate::layout::{scaled_or, LayoutPath, LayoutPlan};
use crate::technology::Technology;
use crate::GeneratorOptions;

const IMPORT: &str = "import { Grid, GridItem } from \"@chakra-ui/react\"";

/// Render the plan as Chakra UI markup.
pub(crate) fn render(plan: &LayoutPlan, options: &GeneratorOptions) -> String {
    let profile = Technology::ChakraUi.profile();
    let config = &plan.config;

    if plan.path == LayoutPath::Flow {
        let gap = scaled_or(config.gap, 4, 4);
        let items = nodes(plan, |item| {
            let mut open = format!("GridItem colSpan={{{}}}", item.flow_span);
            if options.with_styled_borders {
                open.push(' ');
                open.push_str(&inline_style("style", &[BORDER_STYLE]));
            }
            item_node(ITEM_INDENT, &open, "GridItem", item)
        });
        return Component::new(profile, IMPORT)
            .container(
                format!("<Grid templateColumns={{`repeat({}, 1fr)`}} gap={{{gap}}}>", config.columns),
                "</Grid>",
            )
            .render(&items);
    }

    let items = nodes(plan, |item| {
        let style = style_block(
            "style",
            &placement_style_entries(item, options.with_styled_borders),
            ITEM_INDENT + 2,
        );
        item_node(ITEM_INDENT, &multiline_tag("GridItem", &style, ITEM_INDENT), "GridItem", item)
    });
    let container_style = style_block("style", &container_style_entries(config), CONTAINER_INDENT + 2);

    Component::new(profile, IMPORT)
        .container(multiline_tag("<Grid", &container_style, CONTAINER_INDENT) + ">", "</Grid>")
        .render(&items)
}
