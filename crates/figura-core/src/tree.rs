//! Validated design tree arena.
//!
//! Nodes are stored by id in pre-order insertion order with children as id
//! lists. [`TreeBuilder`] runs the structural checks once; the resulting
//! [`DesignTree`] is immutable.

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::alias::AliasTable;
use crate::errors::TreeError;
use crate::node::{DesignDocument, DesignNode, FlatDocument, NodeId, NodeSpec};

/// Resource bounds enforced at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeLimits {
    pub max_depth: usize,
    pub max_nodes: usize,
}

impl Default for TreeLimits {
    fn default() -> Self {
        Self {
            max_depth: 256,
            max_nodes: 100_000,
        }
    }
}

/// An immutable, validated forest of design nodes.
#[derive(Debug, Clone, Default)]
pub struct DesignTree {
    nodes: IndexMap<NodeId, DesignNode>,
    roots: Vec<NodeId>,
    parents: FxHashMap<NodeId, NodeId>,
}

impl DesignTree {
    /// Decode and validate a document.
    pub fn from_document(
        document: DesignDocument,
        limits: &TreeLimits,
    ) -> Result<(Self, AliasTable), TreeError> {
        let mut builder = TreeBuilder::new(*limits);
        match document {
            DesignDocument::Flat(flat) => builder.add_flat(flat)?,
            DesignDocument::Nested { roots } | DesignDocument::Nodes(roots) => {
                for spec in roots {
                    builder.add_spec(spec)?;
                }
            }
            DesignDocument::Node(spec) => builder.add_spec(*spec)?,
        }
        builder.build()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn root_nodes(&self) -> impl Iterator<Item = &DesignNode> {
        self.roots.iter().filter_map(|id| self.nodes.get(id))
    }

    pub fn get(&self, id: &NodeId) -> Option<&DesignNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &DesignNode> {
        self.nodes.values()
    }

    /// Direct children of a node, in order.
    pub fn children<'a>(&'a self, node: &'a DesignNode) -> impl Iterator<Item = &'a DesignNode> + 'a {
        node.children.iter().filter_map(|id| self.nodes.get(id))
    }

    pub fn parent(&self, id: &NodeId) -> Option<&DesignNode> {
        self.parents.get(id).and_then(|parent| self.nodes.get(parent))
    }

    /// Pre-order walk of the subtree under `id`, which sits at depth 1.
    pub fn walk<'a>(&'a self, id: &'a NodeId) -> Walk<'a> {
        Walk {
            tree: self,
            stack: vec![(1, id)],
        }
    }

    /// Pre-order walk of every root in order, roots at depth 1.
    pub fn walk_all(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: self.roots.iter().rev().map(|id| (1, id)).collect(),
        }
    }

    /// Depth of the subtree under `id` (a leaf has depth 1).
    pub fn subtree_depth(&self, id: &NodeId) -> usize {
        self.walk(id).map(|(depth, _)| depth).max().unwrap_or(0)
    }
}

/// Iterative pre-order traversal yielding `(depth, node)`.
pub struct Walk<'a> {
    tree: &'a DesignTree,
    stack: Vec<(usize, &'a NodeId)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a DesignNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, id)) = self.stack.pop() {
            let Some(node) = self.tree.nodes.get(id) else {
                continue;
            };
            self.stack
                .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
            return Some((depth, node));
        }
        None
    }
}

/// Collects nodes from any document shape and validates them into a tree.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    limits: TreeLimits,
    nodes: IndexMap<NodeId, DesignNode>,
    declared_roots: Vec<NodeId>,
    aliases: AliasTable,
}

impl TreeBuilder {
    pub fn new(limits: TreeLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    fn insert(&mut self, node: DesignNode, alias: Option<String>) -> Result<(), TreeError> {
        if self.nodes.contains_key(&node.id) {
            return Err(TreeError::DuplicateId {
                id: node.id.to_string(),
            });
        }
        if self.nodes.len() >= self.limits.max_nodes {
            return Err(TreeError::NodeLimit {
                limit: self.limits.max_nodes,
            });
        }
        if let Some(alias) = alias.filter(|a| !a.trim().is_empty()) {
            self.aliases.assign(node.id.clone(), alias);
        }
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Add a nested node as a root, flattening its descendants in pre-order.
    pub fn add_spec(&mut self, spec: NodeSpec) -> Result<(), TreeError> {
        self.declared_roots.push(spec.id.clone());

        let mut stack = vec![spec];
        while let Some(mut spec) = stack.pop() {
            let children = std::mem::take(&mut spec.children);
            let child_ids: SmallVec<[NodeId; 4]> =
                children.iter().map(|child| child.id.clone()).collect();
            let node = DesignNode {
                id: spec.id,
                name: spec.name,
                kind: spec.kind,
                attrs: spec.attrs,
                children: child_ids,
            };
            self.insert(node, spec.alias)?;
            stack.extend(children.into_iter().rev());
        }
        Ok(())
    }

    /// Add every node of a flat document.
    pub fn add_flat(&mut self, document: FlatDocument) -> Result<(), TreeError> {
        if let Some(roots) = document.roots {
            self.declared_roots.extend(roots);
        }
        for flat in document.nodes {
            let node = DesignNode {
                id: flat.id,
                name: flat.name,
                kind: flat.kind,
                attrs: flat.attrs,
                children: flat.children.into_iter().collect(),
            };
            self.insert(node, flat.alias)?;
        }
        Ok(())
    }

    /// Validate structure and produce the tree plus its alias table.
    pub fn build(self) -> Result<(DesignTree, AliasTable), TreeError> {
        let Self {
            limits,
            nodes,
            declared_roots,
            aliases,
        } = self;

        let mut parents: FxHashMap<NodeId, NodeId> = FxHashMap::default();
        for node in nodes.values() {
            for child in &node.children {
                if !nodes.contains_key(child) {
                    return Err(TreeError::DanglingChild {
                        parent: node.id.to_string(),
                        child: child.to_string(),
                    });
                }
                if let Some(first) = parents.insert(child.clone(), node.id.clone()) {
                    return Err(TreeError::MultipleParents {
                        node: child.to_string(),
                        first: first.to_string(),
                        second: node.id.to_string(),
                    });
                }
            }
        }

        let roots = if declared_roots.is_empty() {
            nodes
                .keys()
                .filter(|id| !parents.contains_key(*id))
                .cloned()
                .collect()
        } else {
            let mut seen = FxHashSet::default();
            for root in &declared_roots {
                if !nodes.contains_key(root) {
                    return Err(TreeError::UnknownRoot {
                        root: root.to_string(),
                    });
                }
                if let Some(parent) = parents.get(root) {
                    return Err(TreeError::RootHasParent {
                        root: root.to_string(),
                        parent: parent.to_string(),
                    });
                }
                if !seen.insert(root) {
                    return Err(TreeError::DuplicateId {
                        id: root.to_string(),
                    });
                }
            }
            declared_roots
        };

        let mut visited: FxHashSet<&NodeId> = FxHashSet::default();
        let mut stack: Vec<(usize, &NodeId)> = roots.iter().map(|id| (1, id)).collect();
        while let Some((depth, id)) = stack.pop() {
            if depth > limits.max_depth {
                return Err(TreeError::DepthLimit {
                    limit: limits.max_depth,
                    node: id.to_string(),
                });
            }
            if !visited.insert(id) {
                return Err(TreeError::Cycle {
                    node: id.to_string(),
                });
            }
            if let Some(node) = nodes.get(id) {
                stack.extend(node.children.iter().map(|child| (depth + 1, child)));
            }
        }

        if let Some(orphan) = nodes.keys().find(|id| !visited.contains(*id)) {
            return Err(classify_unvisited(orphan, &parents));
        }

        debug!(nodes = nodes.len(), roots = roots.len(), "Validated design tree");

        let tree = DesignTree {
            nodes,
            roots,
            parents,
        };
        Ok((tree, aliases))
    }
}

/// Follow the parent chain of a node no root reaches: it either loops or
/// ends at a parentless node that was not declared a root.
fn classify_unvisited(start: &NodeId, parents: &FxHashMap<NodeId, NodeId>) -> TreeError {
    let mut seen = FxHashSet::default();
    let mut current = start;
    loop {
        if !seen.insert(current) {
            return TreeError::Cycle {
                node: current.to_string(),
            };
        }
        match parents.get(current) {
            Some(parent) => current = parent,
            None => {
                return TreeError::Unreachable {
                    node: start.to_string(),
                }
            }
        }
    }
}
