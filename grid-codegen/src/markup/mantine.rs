//! Mantine: `Grid.Col` spans for flat layouts, `Card`s on a CSS grid
//! otherwise. The only component library here that honours the utility
//! class toggle.

use super::{item_node, multiline_tag, nodes, Component, CONTAINER_INDENT, ITEM_INDENT};
use crate::classes::{
    container_classes, container_style_entries, inline_style, item_classes, placement_style_entries,
    style_block, BORDER_STYLE,
};
use crate::layout::{LayoutPath, LayoutPlan};
use crate::technology::Technology;
use crate::GeneratorOptions;

/// Render the plan as Mantine markup.
pub(crate) fn render(plan: &LayoutPlan, options: &GeneratorOptions) -> String {
    let profile = Technology::Mantine.profile();
    let config = &plan.config;

    let container = |tag: &str| {
        if options.with_tailwind {
            format!("<{tag} className=\"{}\">", container_classes(config))
        } else {
            let style = style_block("style", &container_style_entries(config), CONTAINER_INDENT + 2);
            multiline_tag(&format!("<{tag}"), &style, CONTAINER_INDENT) + ">"
        }
    };

    match plan.path {
        LayoutPath::Flow => {
            let gutter = if config.gap % 4 == 0 {
                (config.gap / 4).to_string()
            } else {
                format!("`{}px`", config.gap)
            };
            let items = nodes(plan, |item| {
                let mut open = format!("Grid.Col span={{{}}}", item.flow_span);
                if options.with_styled_borders {
                    open.push(' ');
                    open.push_str(&inline_style("style", &[BORDER_STYLE]));
                }
                item_node(ITEM_INDENT, &open, "Grid.Col", item)
            });
            Component::new(profile, "import { Grid } from \"@mantine/core\";")
                .container(format!("<Grid gutter={{{gutter}}}>"), "</Grid>")
                .with_semicolons()
                .render(&items)
        }
        LayoutPath::Empty => Component::new(profile, "import { Grid } from \"@mantine/core\";")
            .container(container("Grid"), "</Grid>")
            .with_semicolons()
            .render(&[]),
        LayoutPath::Placed => {
            let items = nodes(plan, |item| {
                let open = if options.with_tailwind {
                    format!("Card className=\"{}\"", item_classes(item, options.with_styled_borders))
                } else {
                    let style = style_block(
                        "style",
                        &placement_style_entries(item, options.with_styled_borders),
                        ITEM_INDENT + 2,
                    );
                    multiline_tag("Card", &style, ITEM_INDENT)
                };
                item_node(ITEM_INDENT, &open, "Card", item)
            });
            Component::new(profile, "import { Card } from \"@mantine/core\";")
                .container(container("div"), "</div>")
                .with_semicolons()
                .render(&items)
        }
    }
}
