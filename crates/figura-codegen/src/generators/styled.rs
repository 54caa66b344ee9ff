//! styled-components declarations, one per styled node.

use figura_core::{normalize_name, DesignNode, NamingConvention, NodeId};
use rustc_hash::{FxHashMap, FxHashSet};

use super::StyledNode;
use crate::jsx::{default_tag, Decoration, MarkupStyler};
use crate::style::to_css_declarations;

pub(crate) struct StyledPlan {
    tags: FxHashMap<NodeId, String>,
    declarations: Vec<String>,
}

impl StyledPlan {
    /// Assign one tag per styled node. Tags never shadow the component
    /// function, its props type or the imported names.
    pub(crate) fn new(identifier: &str, nodes: Vec<StyledNode<'_>>) -> Self {
        let mut used: FxHashSet<String> = ["React".to_string(), "styled".to_string()]
            .into_iter()
            .collect();
        used.insert(identifier.to_string());
        used.insert(format!("{identifier}Props"));
        let mut tags = FxHashMap::default();
        let mut declarations = Vec::new();

        for (index, styled) in nodes.into_iter().enumerate() {
            let base = match normalize_name(&styled.node.name, NamingConvention::Pascal) {
                Ok(name) => format!("Styled{}", name.trim_start_matches('_')),
                Err(_) => format!("StyledNode{index}"),
            };
            let mut ident = base.clone();
            let mut n = 2;
            while used.contains(&ident) {
                ident = format!("{base}{n}");
                n += 1;
            }
            used.insert(ident.clone());

            let mut lines = vec![format!(
                "const {} = styled.{}`",
                ident,
                default_tag(styled.node)
            )];
            lines.extend(to_css_declarations(&styled.styles, 2));
            lines.push("`;".to_string());
            declarations.push(lines.join("\n"));

            tags.insert(styled.node.id.clone(), ident);
        }

        Self { tags, declarations }
    }

    pub(crate) fn imports(&self) -> Vec<String> {
        if self.declarations.is_empty() {
            return Vec::new();
        }
        vec!["import styled from 'styled-components';".to_string()]
    }

    pub(crate) fn declarations(&self) -> &[String] {
        &self.declarations
    }
}

impl MarkupStyler for StyledPlan {
    fn decorate(&self, node: &DesignNode, default_tag: &'static str) -> Decoration {
        match self.tags.get(&node.id) {
            Some(tag) => Decoration {
                tag: tag.clone(),
                attribute: None,
            },
            None => Decoration::plain(default_tag),
        }
    }
}
