//! Inline `style={{ ... }}` attributes on every styled node.

use figura_core::{DesignNode, NodeId};
use rustc_hash::FxHashMap;

use super::StyledNode;
use crate::jsx::{Decoration, MarkupStyler};
use crate::style::{to_inline_object, StyleMap};

pub(crate) struct InlinePlan {
    styles: FxHashMap<NodeId, StyleMap>,
}

impl InlinePlan {
    pub(crate) fn new(nodes: Vec<StyledNode<'_>>) -> Self {
        Self {
            styles: nodes
                .into_iter()
                .map(|styled| (styled.node.id.clone(), styled.styles))
                .collect(),
        }
    }
}

impl MarkupStyler for InlinePlan {
    fn decorate(&self, node: &DesignNode, default_tag: &'static str) -> Decoration {
        Decoration {
            tag: default_tag.to_string(),
            attribute: self
                .styles
                .get(&node.id)
                .map(|styles| format!("style={{{}}}", to_inline_object(styles))),
        }
    }
}
