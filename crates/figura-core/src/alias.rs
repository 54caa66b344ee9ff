//! Append-only table of human aliases keyed by node id.
//!
//! Aliases are never written back into the tree. Lookups return the most
//! recent assignment while the full history stays available.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::node::{DesignNode, NodeId};

/// One alias assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasEntry {
    pub node_id: NodeId,
    pub alias: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
    #[serde(skip)]
    latest: FxHashMap<NodeId, usize>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an alias for a node. Earlier assignments are kept.
    pub fn assign(&mut self, node_id: impl Into<NodeId>, alias: impl Into<String>) {
        let node_id = node_id.into();
        self.latest.insert(node_id.clone(), self.entries.len());
        self.entries.push(AliasEntry {
            node_id,
            alias: alias.into(),
        });
    }

    /// Latest alias of a node.
    pub fn get(&self, node_id: &NodeId) -> Option<&str> {
        self.latest
            .get(node_id)
            .map(|&index| self.entries[index].alias.as_str())
    }

    /// Every alias ever assigned to a node, oldest first.
    pub fn history<'a>(&'a self, node_id: &'a NodeId) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |entry| &entry.node_id == node_id)
            .map(|entry| entry.alias.as_str())
    }

    /// The alias of a node if one exists, otherwise its display name.
    pub fn display_name<'a>(&'a self, node: &'a DesignNode) -> &'a str {
        self.get(&node.id).unwrap_or(&node.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }
}
