//! Markup templates, one per technology, plus the scaffolding they share.
//!
//! Every template receives a [`LayoutPlan`] and emits one of three shapes
//! (empty, flow, placed). Component output always follows the same skeleton:
//!
//! ```text
//! // Quickstart: <url>
//! import { ... } from '...'
//!
//! const MyGrid = () => {
//!   return (
//!     <container>
//!       <item>...</item>
//!     </container>
//!   )
//! }
//!
//! export default MyGrid;
//! ```

pub mod ant_design;
pub mod chakra_ui;
pub mod mantine;
pub mod material_ui;
pub mod raw_css;
pub mod tailwind;

use std::fmt::Write;

use crate::layout::{LayoutPlan, PlacedItem};
use crate::technology::TechnologyProfile;

/// Marker left in component markup when there are no items.
pub const COMPONENT_PLACEHOLDER: &str = "{/* Grid items code will appear here */}";

/// Marker left in standalone documents when there are no items.
pub const DOCUMENT_PLACEHOLDER: &str = "<!-- Add grid items here -->";

/// Indentation of the container element inside the component.
pub(crate) const CONTAINER_INDENT: usize = 4;

/// Indentation of item elements inside the container.
pub(crate) const ITEM_INDENT: usize = 6;

/// Skeleton of a generated React component.
pub(crate) struct Component<'a> {
    header: Option<String>,
    import: &'a str,
    open: String,
    close: &'a str,
    semicolons: bool,
}

impl<'a> Component<'a> {
    /// Start a component for `profile` with an import line.
    pub(crate) fn new(profile: &TechnologyProfile, import: &'a str) -> Self {
        Self {
            header: profile.quickstart.map(|url| format!("// Quickstart: {url}")),
            import,
            open: String::new(),
            close: "",
            semicolons: false,
        }
    }

    /// Set the container element. `open` is the full opening tag, which may
    /// span several lines.
    pub(crate) fn container(mut self, open: String, close: &'a str) -> Self {
        self.open = open;
        self.close = close;
        self
    }

    /// Terminate the `return` statement with a semicolon.
    pub(crate) fn with_semicolons(mut self) -> Self {
        self.semicolons = true;
        self
    }

    /// Render with item nodes, or the placeholder when there are none.
    pub(crate) fn render(&self, nodes: &[String]) -> String {
        let mut out = String::new();
        let preamble: Vec<&str> = self
            .header
            .as_deref()
            .into_iter()
            .chain(Some(self.import).filter(|line| !line.is_empty()))
            .collect();
        if !preamble.is_empty() {
            let _ = write!(out, "{}\n\n", preamble.join("\n"));
        }

        let pad = " ".repeat(CONTAINER_INDENT);
        out.push_str("const MyGrid = () => {\n  return (\n");
        let _ = writeln!(out, "{pad}{}", self.open);
        out.push_str(&body(nodes, ITEM_INDENT, COMPONENT_PLACEHOLDER));
        let _ = writeln!(out, "{pad}{}", self.close);
        out.push_str(if self.semicolons { "  );\n" } else { "  )\n" });
        out.push_str("}\n\nexport default MyGrid;");
        out
    }
}

/// Item nodes joined one per line, or an indented placeholder.
fn body(nodes: &[String], indent: usize, placeholder: &str) -> String {
    if nodes.is_empty() {
        format!("{}{placeholder}\n", " ".repeat(indent))
    } else {
        let mut out = nodes.join("\n");
        out.push('\n');
        out
    }
}

/// An element wrapping the "Item N" label.
///
/// ```text
/// {indent}<open>
/// {indent}  Item N
/// {indent}</close>
/// ```
pub(crate) fn item_node(indent: usize, open: &str, close: &str, item: &PlacedItem) -> String {
    let pad = " ".repeat(indent);
    format!("{pad}<{open}>\n{pad}  Item {}\n{pad}</{close}>", item.number)
}

/// An opening tag whose attribute block sits on its own lines.
pub(crate) fn multiline_tag(tag: &str, attributes: &str, indent: usize) -> String {
    format!("{tag}\n{attributes}\n{}", " ".repeat(indent))
}

/// A complete HTML document.
///
/// `head` and `body` are inserted verbatim and must carry their own
/// indentation; a body without nodes gets the document placeholder.
pub(crate) fn document(title: &str, head: &str, container_open: &str, nodes: &[String]) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("  <meta charset=\"UTF-8\">\n");
    out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    let _ = writeln!(out, "  <title>{title}</title>");
    out.push_str(head);
    out.push_str("</head>\n<body>\n");
    let _ = writeln!(out, "  {container_open}");
    out.push_str(&body(nodes, 4, DOCUMENT_PLACEHOLDER));
    out.push_str("  </div>\n</body>\n</html>");
    out
}

/// Plan nodes rendered by `node`, in label order.
pub(crate) fn nodes(plan: &LayoutPlan, node: impl Fn(&PlacedItem) -> String) -> Vec<String> {
    plan.items.iter().map(node).collect()
}
