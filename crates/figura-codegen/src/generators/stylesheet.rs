//! Class-based styling with a companion CSS or SCSS stylesheet.
//!
//! The root gets the block class `root-slug`; every other styled node gets
//! `root-slug__node-slug`. Suffixes are unique within one component.

use figura_core::{normalize_name, DesignNode, NamingConvention, NodeId};
use rustc_hash::{FxHashMap, FxHashSet};

use super::StyledNode;
use crate::jsx::{Decoration, MarkupStyler};
use crate::model::GeneratedFile;
use crate::style::{to_css_declarations, StyleMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Syntax {
    Css,
    Scss,
}

impl Syntax {
    fn extension(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
        }
    }
}

struct ClassRule {
    /// `None` for the root block.
    suffix: Option<String>,
    styles: StyleMap,
}

pub(crate) struct StylesheetPlan {
    syntax: Syntax,
    block: String,
    file_stem: String,
    classes: FxHashMap<NodeId, String>,
    rules: Vec<ClassRule>,
}

/// CSS class names cannot start with a digit.
fn block_name(slug: &str) -> String {
    if slug.starts_with(|c: char| c.is_ascii_digit()) {
        format!("c-{slug}")
    } else {
        slug.to_string()
    }
}

impl StylesheetPlan {
    pub(crate) fn new(syntax: Syntax, root: &DesignNode, slug: &str, nodes: Vec<StyledNode<'_>>) -> Self {
        let block = block_name(slug);
        let mut used: FxHashSet<String> = FxHashSet::default();
        let mut classes = FxHashMap::default();
        let mut rules = Vec::new();

        for (index, styled) in nodes.into_iter().enumerate() {
            let suffix = if styled.node.id == root.id {
                None
            } else {
                let base = normalize_name(&styled.node.name, NamingConvention::Slug)
                    .unwrap_or_else(|_| format!("node-{index}"));
                let mut suffix = base.clone();
                let mut n = 2;
                while used.contains(&suffix) {
                    suffix = format!("{base}-{n}");
                    n += 1;
                }
                used.insert(suffix.clone());
                Some(suffix)
            };
            let class = match &suffix {
                Some(suffix) => format!("{block}__{suffix}"),
                None => block.clone(),
            };
            classes.insert(styled.node.id.clone(), class);
            rules.push(ClassRule {
                suffix,
                styles: styled.styles,
            });
        }

        Self {
            syntax,
            block,
            file_stem: slug.to_string(),
            classes,
            rules,
        }
    }

    fn file_name(&self) -> String {
        format!("{}.{}", self.file_stem, self.syntax.extension())
    }

    pub(crate) fn imports(&self) -> Vec<String> {
        if self.rules.is_empty() {
            return Vec::new();
        }
        vec![format!("import './{}';", self.file_name())]
    }

    pub(crate) fn stylesheet(&self) -> Option<GeneratedFile> {
        if self.rules.is_empty() {
            return None;
        }
        let content = match self.syntax {
            Syntax::Css => self.render_css(),
            Syntax::Scss => self.render_scss(),
        };
        Some(GeneratedFile {
            path: self.file_name(),
            content,
        })
    }

    fn render_css(&self) -> String {
        let blocks: Vec<String> = self
            .rules
            .iter()
            .map(|rule| {
                let selector = match &rule.suffix {
                    Some(suffix) => format!(".{}__{}", self.block, suffix),
                    None => format!(".{}", self.block),
                };
                let mut lines = vec![format!("{selector} {{")];
                lines.extend(to_css_declarations(&rule.styles, 2));
                lines.push("}".to_string());
                lines.join("\n")
            })
            .collect();
        format!("{}\n", blocks.join("\n\n"))
    }

    fn render_scss(&self) -> String {
        let mut lines = vec![format!(".{} {{", self.block)];
        let mut first = true;
        for rule in &self.rules {
            match &rule.suffix {
                None => {
                    lines.extend(to_css_declarations(&rule.styles, 2));
                }
                Some(suffix) => {
                    if !first {
                        lines.push(String::new());
                    }
                    lines.push(format!("  &__{suffix} {{"));
                    lines.extend(to_css_declarations(&rule.styles, 4));
                    lines.push("  }".to_string());
                }
            }
            first = false;
        }
        lines.push("}".to_string());
        format!("{}\n", lines.join("\n"))
    }
}

impl MarkupStyler for StylesheetPlan {
    fn decorate(&self, node: &DesignNode, default_tag: &'static str) -> Decoration {
        Decoration {
            tag: default_tag.to_string(),
            attribute: self
                .classes
                .get(&node.id)
                .map(|class| format!("className=\"{class}\"")),
        }
    }
}
