//! JSX-style markup builder.

use figura_core::{DesignNode, DesignTree};

/// Tag and attribute rendered for one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub tag: String,
    /// Extra attribute text, e.g. `className="card"`.
    pub attribute: Option<String>,
}

impl Decoration {
    pub fn plain(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attribute: None,
        }
    }
}

/// Decides how a node is tagged and styled in the markup.
pub trait MarkupStyler {
    fn decorate(&self, node: &DesignNode, default_tag: &'static str) -> Decoration;
}

/// Markup without any styling.
pub struct Unstyled;

impl MarkupStyler for Unstyled {
    fn decorate(&self, _node: &DesignNode, default_tag: &'static str) -> Decoration {
        Decoration::plain(default_tag)
    }
}

/// Default tag for a node: text is inline, everything else a block.
pub fn default_tag(node: &DesignNode) -> &'static str {
    if node.is_text() {
        "span"
    } else {
        "div"
    }
}

/// Builds nested markup for a node and its descendants.
pub struct JsxBuilder<'a> {
    tree: &'a DesignTree,
    styler: &'a dyn MarkupStyler,
}

impl<'a> JsxBuilder<'a> {
    pub fn new(tree: &'a DesignTree, styler: &'a dyn MarkupStyler) -> Self {
        Self { tree, styler }
    }

    /// Markup for `node`, indented by `indent` spaces.
    pub fn build(&self, node: &DesignNode, indent: usize) -> String {
        let spaces = " ".repeat(indent);
        let decoration = self.styler.decorate(node, default_tag(node));
        let open = match &decoration.attribute {
            Some(attribute) => format!("<{} {}>", decoration.tag, attribute),
            None => format!("<{}>", decoration.tag),
        };
        let close = format!("</{}>", decoration.tag);

        if node.is_text() {
            let content = node.text().map(text_content).unwrap_or_default();
            return format!("{spaces}{open}{content}{close}");
        }

        let children: Vec<&DesignNode> = self.tree.children(node).collect();
        if children.is_empty() {
            return format!("{spaces}{open}{close}");
        }

        let mut lines = vec![format!("{spaces}{open}")];
        for child in children {
            lines.push(self.build(child, indent + 2));
        }
        lines.push(format!("{spaces}{close}"));
        lines.join("\n")
    }
}

/// Literal text, or a quoted expression when the text would break JSX.
fn text_content(text: &str) -> String {
    let needs_expression = text
        .chars()
        .any(|c| matches!(c, '{' | '}' | '<' | '>' | '\n' | '\r'));
    if needs_expression {
        // A JSON string literal is a valid JS string expression.
        format!("{{{}}}", serde_json::Value::String(text.to_string()))
    } else {
        text.to_string()
    }
}
