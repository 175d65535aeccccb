//! Material UI: `Grid` sizes on the 12-column system for flat layouts,
//! `Box` + `Card` with explicit lines otherwise.

use super::{item_node, multiline_tag, nodes, Component, CONTAINER_INDENT, ITEM_INDENT};
use crate::classes::{container_style_entries, inline_style, placement_style_entries, style_block, BORDER_STYLE};
use crate::layout::{scaled_or, LayoutPath, LayoutPlan};
use crate::technology::Technology;
use crate::GeneratorOptions;

/// Render the plan as Material UI markup.
pub(crate) fn render(plan: &LayoutPlan, options: &GeneratorOptions) -> String {
    let profile = Technology::MaterialUi.profile();
    let spacing = scaled_or(plan.config.gap, 8, 2);
    let container_style = style_block("sx", &container_style_entries(&plan.config), CONTAINER_INDENT + 2);

    match plan.path {
        LayoutPath::Flow => {
            let items = nodes(plan, |item| {
                let mut open = format!("Grid size={{{}}}", item.flow_span);
                if options.with_styled_borders {
                    open.push(' ');
                    open.push_str(&inline_style("sx", &[BORDER_STYLE]));
                }
                item_node(ITEM_INDENT, &open, "Grid", item)
            });
            Component::new(profile, "import { Grid } from '@mui/material'")
                .container(format!("<Grid container spacing={{{spacing}}}>"), "</Grid>")
                .render(&items)
        }
        LayoutPath::Empty => {
            let attributes = format!("      container\n      spacing={{{spacing}}}\n{container_style}");
            Component::new(profile, "import { Grid } from '@mui/material'")
                .container(multiline_tag("<Grid", &attributes, CONTAINER_INDENT) + ">", "</Grid>")
                .render(&[])
        }
        LayoutPath::Placed => {
            let items = nodes(plan, |item| {
                let sx = style_block(
                    "sx",
                    &placement_style_entries(item, options.with_styled_borders),
                    ITEM_INDENT + 2,
                );
                item_node(ITEM_INDENT, &multiline_tag("Card", &sx, ITEM_INDENT), "Card", item)
            });
            Component::new(profile, "import { Box, Card } from '@mui/material'")
                .container(multiline_tag("<Box", &container_style, CONTAINER_INDENT) + ">", "</Box>")
                .render(&items)
        }
    }
}
