//! Ant Design: `Row`/`Col` on the 24-column system for flat layouts,
//! `Card`s on a CSS grid otherwise. Cards draw their own border, so the
//! border option maps to the `borderless` variant there.

use super::{item_node, multiline_tag, nodes, Component, CONTAINER_INDENT, ITEM_INDENT};
use crate::classes::{container_style_entries, inline_style, placement_style_entries, style_block, BORDER_STYLE};
use crate::layout::{LayoutPath, LayoutPlan};
use crate::technology::Technology;
use crate::GeneratorOptions;

/// Render the plan as Ant Design markup.
pub(crate) fn render(plan: &LayoutPlan, options: &GeneratorOptions) -> String {
    let profile = Technology::AntDesign.profile();
    let gap = plan.config.gap;

    if plan.path == LayoutPath::Flow {
        let items = nodes(plan, |item| {
            let pad = " ".repeat(ITEM_INDENT);
            let inner = if options.with_styled_borders {
                format!("div {}", inline_style("style", &[BORDER_STYLE]))
            } else {
                "div".to_string()
            };
            format!(
                "{pad}<Col span={{{}}}>\n{}\n{pad}</Col>",
                item.flow_span,
                item_node(ITEM_INDENT + 2, &inner, "div", item)
            )
        });
        return Component::new(profile, "import { Row, Col } from 'antd'")
            .container(format!("<Row gutter={{[{gap}, {gap}]}}>"), "</Row>")
            .render(&items);
    }

    let variant = if options.with_styled_borders {
        ""
    } else {
        " variant=\"borderless\""
    };
    let items = nodes(plan, |item| {
        let style = style_block("style", &placement_style_entries(item, false), ITEM_INDENT + 2);
        let open = multiline_tag(&format!("Card{variant}"), &style, ITEM_INDENT);
        item_node(ITEM_INDENT, &open, "Card", item)
    });
    let container_style = style_block("style", &container_style_entries(&plan.config), CONTAINER_INDENT + 2);

    Component::new(profile, "import { Card } from 'antd'")
        .container(multiline_tag("<div", &container_style, CONTAINER_INDENT) + ">", "</div>")
        .render(&items)
}
