//! Root-to-component transformation with per-root failure isolation.

use chrono::Utc;
use figura_core::{
    normalize_name, AliasTable, DesignNode, DesignTree, LayoutDirection, NamingConvention, NodeId,
    SubtreeMetrics,
};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{CodegenError, Result};
use crate::generators::{ComponentGenerator, ComponentNames, TransformOptions};
use crate::model::{
    ComponentMetadata, LayoutClass, StructureSummary, TransformFailure, TransformOutcome,
    TransformedComponent,
};
use crate::props::infer_props;
use crate::roles::ComponentClassifier;
use crate::style::extract_styles;

/// Turns tree roots into generated components.
pub struct ComponentTransformer<'a> {
    generator: ComponentGenerator<'a>,
    classifier: ComponentClassifier,
}

impl<'a> ComponentTransformer<'a> {
    pub fn new(options: TransformOptions) -> Result<Self> {
        Ok(Self {
            generator: ComponentGenerator::new(options)?,
            classifier: ComponentClassifier::new(),
        })
    }

    pub fn options(&self) -> &TransformOptions {
        self.generator.options()
    }

    /// Transform one node into a component.
    pub fn transform(
        &self,
        tree: &DesignTree,
        aliases: &AliasTable,
        id: &NodeId,
    ) -> Result<TransformedComponent> {
        let root = tree
            .get(id)
            .ok_or_else(|| CodegenError::UnknownNode(id.to_string()))?;
        let options = self.generator.options();

        let source_name = aliases.display_name(root);
        let name = normalize_name(source_name, options.naming)?;
        let names = ComponentNames {
            identifier: normalize_name(source_name, NamingConvention::Pascal)?,
            slug: normalize_name(source_name, NamingConvention::Slug)?,
        };

        let props = infer_props(root, options.include_props);
        let generated = self.generator.generate(tree, root, &names, &props)?;
        let metrics = SubtreeMetrics::collect(tree, id);

        debug!(
            node = %id,
            component = %names.identifier,
            props = props.len(),
            complexity = metrics.complexity(),
            "Generated component"
        );

        Ok(TransformedComponent {
            name,
            structure: StructureSummary {
                kind: root.kind,
                child_count: root.children.len(),
                depth: metrics.depth,
                layout: classify_layout(root),
            },
            props,
            styles: extract_styles(root),
            artifacts: generated.artifacts,
            metadata: ComponentMetadata {
                original_id: root.id.clone(),
                original_name: root.name.clone(),
                component_type: self.classifier.classify(root),
                complexity: metrics.complexity(),
                generated_at: Utc::now(),
                styling: generated.styling,
            },
        })
    }

    /// Transform every root of the tree, in root order.
    ///
    /// Roots are processed in parallel. A root that fails is replaced by a
    /// [`TransformFailure`]; the batch always has one entry per root.
    pub fn transform_roots(&self, tree: &DesignTree, aliases: &AliasTable) -> Vec<TransformOutcome> {
        tree.roots()
            .par_iter()
            .map(|id| match self.transform(tree, aliases, id) {
                Ok(component) => TransformOutcome::Generated(Box::new(component)),
                Err(err) => {
                    warn!(node = %id, error = %err, "Component generation failed");
                    TransformOutcome::Failed(failure_record(tree, id, &err))
                }
            })
            .collect()
    }
}

fn failure_record(tree: &DesignTree, id: &NodeId, err: &CodegenError) -> TransformFailure {
    let node: Option<&DesignNode> = tree.get(id);
    TransformFailure {
        id: id.clone(),
        name: node.map(|n| n.name.clone()).unwrap_or_default(),
        message: err.to_string(),
        node: node.cloned(),
    }
}

fn classify_layout(node: &DesignNode) -> LayoutClass {
    match node.attrs.auto_layout {
        Some(layout) => match layout.direction {
            LayoutDirection::Horizontal => LayoutClass::Horizontal,
            LayoutDirection::Vertical => LayoutClass::Vertical,
        },
        None if node.children.is_empty() => LayoutClass::Leaf,
        None => LayoutClass::Absolute,
    }
}
