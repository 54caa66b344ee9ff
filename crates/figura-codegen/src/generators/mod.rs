//! Component source generation, dispatching on a styling dialect.

mod inline;
mod styled;
mod stylesheet;
mod templates;

pub use templates::TemplateEngine;

use figura_core::{DesignNode, DesignTree, NamingConvention};
use serde::{Deserialize, Serialize};

use self::inline::InlinePlan;
use self::styled::StyledPlan;
use self::stylesheet::{StylesheetPlan, Syntax};
use self::templates::{COMPONENT_FILE, TYPES_FILE};
use crate::error::Result;
use crate::jsx::{Decoration, JsxBuilder, MarkupStyler};
use crate::model::{GeneratedArtifacts, GeneratedFile, Prop, PropSource, StylingSupport};
use crate::style::{extract_styles, StyleMap};

/// Styling dialect of the generated markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// `style={{ ... }}` on every styled node.
    #[default]
    Inline,
    /// Class names plus a `.css` stylesheet.
    Css,
    /// Class names plus a `.scss` stylesheet with nested child rules.
    Scss,
    /// One `styled.<tag>` declaration per styled node.
    StyledComponents,
    /// Utility classes. No mapping exists yet.
    Tailwind,
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::StyledComponents => "styled-components",
            Self::Tailwind => "tailwind",
        }
    }
}

/// Options for component generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformOptions {
    /// Emit TypeScript (`.tsx`) with a props interface.
    pub static_types: bool,
    pub dialect: Dialect,
    /// Convention for the reported component name.
    pub naming: NamingConvention,
    /// Append the `visible` prop and its render guard.
    pub include_props: bool,
    /// Put the props interface in a separate `.types.ts` file.
    pub include_type_declarations: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            static_types: true,
            dialect: Dialect::Inline,
            naming: NamingConvention::Pascal,
            include_props: true,
            include_type_declarations: false,
        }
    }
}

/// Names derived for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentNames {
    /// Function identifier, always Pascal case.
    pub identifier: String,
    /// Hyphenated slug used for class names and stylesheet files.
    pub slug: String,
}

/// Output of the generator for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    pub artifacts: GeneratedArtifacts,
    pub styling: StylingSupport,
}

/// A node with a non-empty style map.
pub(crate) struct StyledNode<'a> {
    pub node: &'a DesignNode,
    pub styles: StyleMap,
}

/// Styled nodes of a subtree in pre-order.
fn styled_nodes<'a>(tree: &'a DesignTree, root: &'a DesignNode) -> Vec<StyledNode<'a>> {
    tree.walk(&root.id)
        .filter_map(|(_, node)| {
            let styles = extract_styles(node);
            (!styles.is_empty()).then_some(StyledNode { node, styles })
        })
        .collect()
}

/// How one component is styled under the selected dialect.
enum StylePlan {
    Inline(InlinePlan),
    Stylesheet(StylesheetPlan),
    Styled(StyledPlan),
    Unsupported { dialect: Dialect },
}

impl StylePlan {
    fn new(dialect: Dialect, tree: &DesignTree, root: &DesignNode, names: &ComponentNames) -> Self {
        match dialect {
            Dialect::Inline => Self::Inline(InlinePlan::new(styled_nodes(tree, root))),
            Dialect::Css => Self::Stylesheet(StylesheetPlan::new(
                Syntax::Css,
                root,
                &names.slug,
                styled_nodes(tree, root),
            )),
            Dialect::Scss => Self::Stylesheet(StylesheetPlan::new(
                Syntax::Scss,
                root,
                &names.slug,
                styled_nodes(tree, root),
            )),
            Dialect::StyledComponents => {
                Self::Styled(StyledPlan::new(&names.identifier, styled_nodes(tree, root)))
            }
            Dialect::Tailwind => Self::Unsupported { dialect },
        }
    }

    fn imports(&self) -> Vec<String> {
        match self {
            Self::Stylesheet(plan) => plan.imports(),
            Self::Styled(plan) => plan.imports(),
            Self::Inline(_) | Self::Unsupported { .. } => Vec::new(),
        }
    }

    fn declarations(&self) -> &[String] {
        match self {
            Self::Styled(plan) => plan.declarations(),
            _ => &[],
        }
    }

    fn stylesheet(&self) -> Option<GeneratedFile> {
        match self {
            Self::Stylesheet(plan) => plan.stylesheet(),
            _ => None,
        }
    }

    fn support(&self) -> StylingSupport {
        match self {
            Self::Unsupported { dialect } => StylingSupport::Unsupported {
                dialect: dialect.name().to_string(),
                reason: "no utility-class mapping exists for extracted styles".to_string(),
            },
            _ => StylingSupport::Supported,
        }
    }
}

impl MarkupStyler for StylePlan {
    fn decorate(&self, node: &DesignNode, default_tag: &'static str) -> Decoration {
        match self {
            Self::Inline(plan) => plan.decorate(node, default_tag),
            Self::Stylesheet(plan) => plan.decorate(node, default_tag),
            Self::Styled(plan) => plan.decorate(node, default_tag),
            Self::Unsupported { .. } => Decoration::plain(default_tag),
        }
    }
}

#[derive(Serialize)]
struct ComponentFileData<'a> {
    imports: String,
    blocks: Vec<String>,
    identifier: &'a str,
}

#[derive(Serialize)]
struct TypesFileData {
    interface: String,
}

/// Generates component source files.
pub struct ComponentGenerator<'a> {
    options: TransformOptions,
    engine: TemplateEngine<'a>,
}

impl<'a> ComponentGenerator<'a> {
    pub fn new(options: TransformOptions) -> Result<Self> {
        Ok(Self {
            options,
            engine: TemplateEngine::with_defaults()?,
        })
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    fn ext(&self) -> &'static str {
        if self.options.static_types {
            "tsx"
        } else {
            "jsx"
        }
    }

    /// Generate all files for the component rooted at `root`.
    pub fn generate(
        &self,
        tree: &DesignTree,
        root: &DesignNode,
        names: &ComponentNames,
        props: &[Prop],
    ) -> Result<GeneratedSource> {
        let identifier = names.identifier.as_str();
        let props_type = format!("{identifier}Props");
        let plan = StylePlan::new(self.options.dialect, tree, root, names);

        let typed = self.options.static_types && !props.is_empty();
        let separate_types = typed && self.options.include_type_declarations;

        let mut imports = vec!["import React from 'react';".to_string()];
        if separate_types {
            imports.push(format!(
                "import type {{ {props_type} }} from './{identifier}.types';"
            ));
        }
        imports.extend(plan.imports());

        let mut blocks = Vec::new();
        let mut type_declarations = None;
        if typed {
            let interface = props_interface(&props_type, props);
            if separate_types {
                let content = self.engine.render(
                    TYPES_FILE,
                    &TypesFileData {
                        interface: format!("export {interface}"),
                    },
                )?;
                type_declarations = Some(GeneratedFile {
                    path: format!("{identifier}.types.ts"),
                    content,
                });
            } else {
                blocks.push(interface);
            }
        }
        blocks.extend(plan.declarations().iter().cloned());

        let markup = JsxBuilder::new(tree, &plan).build(root, 4);
        blocks.push(self.component_function(identifier, &props_type, props, &markup));

        let content = self.engine.render(
            COMPONENT_FILE,
            &ComponentFileData {
                imports: imports.join("\n"),
                blocks,
                identifier,
            },
        )?;

        Ok(GeneratedSource {
            artifacts: GeneratedArtifacts {
                component: GeneratedFile {
                    path: format!("{}.{}", identifier, self.ext()),
                    content,
                },
                stylesheet: plan.stylesheet(),
                type_declarations,
            },
            styling: plan.support(),
        })
    }

    fn component_function(
        &self,
        identifier: &str,
        props_type: &str,
        props: &[Prop],
        markup: &str,
    ) -> String {
        let params = if props.is_empty() {
            String::new()
        } else {
            let bindings = props
                .iter()
                .map(|p| format!("{} = {}", p.name, p.default_literal()))
                .collect::<Vec<_>>()
                .join(", ");
            if self.options.static_types {
                format!("{{ {bindings} }}: {props_type}")
            } else {
                format!("{{ {bindings} }}")
            }
        };

        let mut lines = vec![format!("export function {identifier}({params}) {{")];
        if props.iter().any(|p| p.source == PropSource::Visibility) {
            lines.push("  if (!visible) {".to_string());
            lines.push("    return null;".to_string());
            lines.push("  }".to_string());
            lines.push(String::new());
        }
        lines.push("  return (".to_string());
        lines.push(markup.to_string());
        lines.push("  );".to_string());
        lines.push("}".to_string());
        lines.join("\n")
    }
}

/// TypeScript props interface; every prop is optional.
fn props_interface(props_type: &str, props: &[Prop]) -> String {
    let mut lines = vec![format!("interface {props_type} {{")];
    for prop in props {
        lines.push(format!("  /** {} */", prop.description));
        lines.push(format!(
            "  {}?: {};",
            prop.name,
            prop.prop_type.to_typescript()
        ));
    }
    lines.push("}".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::infer_props;
    use figura_core::{Color, DesignDocument, NodeId, NodeSpec, Paint, TreeLimits, VariantValue};
    use pretty_assertions::assert_eq;

    fn tree_of(spec: NodeSpec) -> DesignTree {
        DesignTree::from_document(DesignDocument::Node(Box::new(spec)), &TreeLimits::default())
            .unwrap()
            .0
    }

    fn card() -> DesignTree {
        tree_of(
            NodeSpec::frame("1", "Profile Card")
                .with_size(200.0, 100.0)
                .with_fill(Paint::solid(Color::WHITE))
                .with_child(NodeSpec::text("2", "Title", "Ada").with_font("Inter", 18.0, 600.0))
                .with_child(NodeSpec::text("3", "Title", "Lovelace").with_font("Inter", 14.0, 400.0))
                .with_child(NodeSpec::rectangle("4", "Divider")),
        )
    }

    fn names() -> ComponentNames {
        ComponentNames {
            identifier: "ProfileCard".into(),
            slug: "profile-card".into(),
        }
    }

    fn generate(tree: &DesignTree, options: TransformOptions) -> GeneratedSource {
        let root = tree.get(&NodeId::from("1")).unwrap();
        let props = infer_props(root, options.include_props);
        ComponentGenerator::new(options)
            .unwrap()
            .generate(tree, root, &names(), &props)
            .unwrap()
    }

    #[test]
    fn test_css_dialect_is_class_based() {
        let tree = card();
        let source = generate(
            &tree,
            TransformOptions {
                dialect: Dialect::Css,
                include_props: false,
                ..Default::default()
            },
        );
        let component = &source.artifacts.component.content;
        assert!(component.contains("import './profile-card.css';"));
        assert!(component.contains("<div className=\"profile-card\">"));
        assert!(component.contains("<span className=\"profile-card__title\">Ada</span>"));
        assert!(component.contains("<span className=\"profile-card__title-2\">Lovelace</span>"));
        assert!(component.contains("      <div></div>"));
        assert!(!component.contains("style="));

        let stylesheet = source.artifacts.stylesheet.unwrap();
        assert_eq!(stylesheet.path, "profile-card.css");
        assert_eq!(
            stylesheet.content,
            [
                ".profile-card {",
                "  width: 200px;",
                "  height: 100px;",
                "  background-color: #ffffff;",
                "}",
                "",
                ".profile-card__title {",
                "  font-family: \"Inter\";",
                "  font-size: 18px;",
                "  font-weight: 600;",
                "}",
                "",
                ".profile-card__title-2 {",
                "  font-family: \"Inter\";",
                "  font-size: 14px;",
                "  font-weight: 400;",
                "}",
                "",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_scss_nests_child_rules() {
        let tree = card();
        let source = generate(
            &tree,
            TransformOptions {
                dialect: Dialect::Scss,
                ..Default::default()
            },
        );
        let stylesheet = source.artifacts.stylesheet.unwrap();
        assert_eq!(stylesheet.path, "profile-card.scss");
        assert!(stylesheet.content.starts_with(".profile-card {\n  width: 200px;"));
        assert!(stylesheet.content.contains("\n\n  &__title {\n    font-family: \"Inter\";"));
        assert!(stylesheet.content.ends_with("  }\n}\n"));
    }

    #[test]
    fn test_styled_components_suppress_inline_styles() {
        let tree = card();
        let source = generate(
            &tree,
            TransformOptions {
                dialect: Dialect::StyledComponents,
                include_props: false,
                ..Default::default()
            },
        );
        let component = &source.artifacts.component.content;
        assert!(component.contains("import styled from 'styled-components';"));
        assert!(component.contains("const StyledProfileCard = styled.div`\n  width: 200px;"));
        assert!(component.contains("const StyledTitle2 = styled.span`"));
        assert!(component.contains("<StyledTitle>Ada</StyledTitle>"));
        assert!(!component.contains("style="));
        assert!(source.artifacts.stylesheet.is_none());
    }

    #[test]
    fn test_styled_tags_never_shadow_the_component() {
        let tree = tree_of(
            NodeSpec::frame("1", "Styled Card").with_child(
                NodeSpec::rectangle("2", "Card")
                    .with_size(10.0, 10.0)
                    .with_fill(Paint::solid(Color::WHITE)),
            ),
        );
        let root = tree.get(&NodeId::from("1")).unwrap();
        let names = ComponentNames {
            identifier: "StyledCard".into(),
            slug: "styled-card".into(),
        };
        let options = TransformOptions {
            dialect: Dialect::StyledComponents,
            ..Default::default()
        };
        let props = infer_props(root, options.include_props);
        let source = ComponentGenerator::new(options)
            .unwrap()
            .generate(&tree, root, &names, &props)
            .unwrap();
        let component = &source.artifacts.component.content;
        assert!(component.contains("const StyledCard2 = styled.div`"));
        assert!(component.contains("<StyledCard2></StyledCard2>"));
        assert!(!component.contains("const StyledCard = "));
        assert_eq!(component.matches("export function StyledCard(").count(), 1);
    }

    #[test]
    fn test_tailwind_is_marked_unsupported() {
        let tree = card();
        let source = generate(
            &tree,
            TransformOptions {
                dialect: Dialect::Tailwind,
                ..Default::default()
            },
        );
        assert_eq!(
            source.styling,
            StylingSupport::Unsupported {
                dialect: "tailwind".into(),
                reason: "no utility-class mapping exists for extracted styles".into(),
            }
        );
        let component = &source.artifacts.component.content;
        assert!(!component.contains("style="));
        assert!(!component.contains("className="));
    }

    #[test]
    fn test_separate_type_declarations() {
        let tree = tree_of(
            NodeSpec::instance("1", "Profile Card")
                .with_variant("Size", VariantValue::EnumVariant("Large".into())),
        );
        let source = generate(
            &tree,
            TransformOptions {
                include_type_declarations: true,
                ..Default::default()
            },
        );
        let types = source.artifacts.type_declarations.unwrap();
        assert_eq!(types.path, "ProfileCard.types.ts");
        assert_eq!(
            types.content,
            [
                "export interface ProfileCardProps {",
                "  /** Variant property \"Size\" */",
                "  size?: string;",
                "  /** Whether the component is rendered */",
                "  visible?: boolean;",
                "}",
                "",
            ]
            .join("\n")
        );
        let component = &source.artifacts.component.content;
        assert!(component.contains("import type { ProfileCardProps } from './ProfileCard.types';"));
        assert!(component.contains(
            "export function ProfileCard({ size = \"Large\", visible = true }: ProfileCardProps) {"
        ));
        assert!(!component.contains("interface ProfileCardProps"));
    }

    #[test]
    fn test_javascript_output() {
        let tree = tree_of(NodeSpec::frame("1", "Profile Card"));
        let source = generate(
            &tree,
            TransformOptions {
                static_types: false,
                ..Default::default()
            },
        );
        assert_eq!(source.artifacts.component.path, "ProfileCard.jsx");
        let component = &source.artifacts.component.content;
        assert!(component.contains("export function ProfileCard({ visible = true }) {"));
        assert!(!component.contains("interface"));
        assert!(source.artifacts.type_declarations.is_none());
    }
}
