//! The element tree backing a [`crate::Document`].
//!
//! Hooks need exactly one capability from the host's element tree: a
//! containment test ("is node B inside node A?"). [`Tree`] is a minimal
//! parent/child arena providing that, with named nodes for debuggability.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use convert_case::{Case, Casing};

use crate::{Result, error};

/// Source of unique node ids.
static CURRENT_ID: AtomicU64 = AtomicU64::new(0);

/// Is this a valid character for a node name?
fn valid_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

/// A node name: lowercase ASCII alphanumerics plus underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeName {
    /// The validated name string.
    name: String,
}

impl NodeName {
    /// Create a new `NodeName`, returning an error if the string contains
    /// invalid characters.
    fn new(name: &str) -> Result<Self> {
        if name.is_empty() || !name.chars().all(valid_name_char) {
            return Err(error::Error::Invalid(name.into()));
        }
        Ok(Self {
            name: name.to_string(),
        })
    }

    /// Munge an arbitrary string into a valid node name by snake-casing it
    /// and stripping whatever invalid characters remain.
    pub fn convert(name: &str) -> Self {
        let name = name.to_case(Case::Snake);
        Self {
            name: name.chars().filter(|c| valid_name_char(*c)).collect(),
        }
    }
}

impl std::fmt::Display for NodeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl PartialEq<&str> for NodeName {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

impl TryFrom<&str> for NodeName {
    type Error = error::Error;
    fn try_from(name: &str) -> Result<Self> {
        Self::new(name)
    }
}

/// A unique id for a tree node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    /// Globally unique numeric id.
    id: u64,
    /// Human-readable name for diagnostics.
    name: NodeName,
}

impl NodeId {
    /// Mint a fresh id with the given name.
    fn fresh(name: NodeName) -> Self {
        Self {
            id: CURRENT_ID.fetch_add(1, Ordering::Relaxed),
            name,
        }
    }

    /// The node's name.
    pub fn name(&self) -> &NodeName {
        &self.name
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}

/// Parent and child links for a single attached node.
#[derive(Debug, Default)]
struct Links {
    /// Parent node; `None` only for the root.
    parent: Option<NodeId>,
    /// Children, in attachment order.
    children: Vec<NodeId>,
}

/// A minimal element tree: a root plus parent/child links.
#[derive(Debug)]
pub struct Tree {
    /// The root node id.
    root: NodeId,
    /// Links for every attached node.
    nodes: HashMap<NodeId, Links>,
}

impl Tree {
    /// Construct a tree containing only a root node with the given name.
    pub fn new(root_name: NodeName) -> Self {
        let root = NodeId::fresh(root_name);
        let mut nodes = HashMap::new();
        nodes.insert(root.clone(), Links::default());
        Self { root, nodes }
    }

    /// The root node id.
    pub fn root(&self) -> NodeId {
        self.root.clone()
    }

    /// Attach a new child under `parent`. Errors if `parent` isn't attached.
    pub fn add(&mut self, parent: &NodeId, name: NodeName) -> Result<NodeId> {
        let id = NodeId::fresh(name);
        let links = self
            .nodes
            .get_mut(parent)
            .ok_or_else(|| error::Error::Tree(format!("unknown parent {parent}")))?;
        links.children.push(id.clone());
        self.nodes.insert(
            id.clone(),
            Links {
                parent: Some(parent.clone()),
                children: Vec::new(),
            },
        );
        Ok(id)
    }

    /// Detach `id` and its entire subtree. Errors on the root or an unknown
    /// node.
    pub fn remove(&mut self, id: &NodeId) -> Result<()> {
        if *id == self.root {
            return Err(error::Error::Tree("cannot remove the root".into()));
        }
        let links = self
            .nodes
            .remove(id)
            .ok_or_else(|| error::Error::Tree(format!("unknown node {id}")))?;
        if let Some(parent) = links.parent
            && let Some(parent_links) = self.nodes.get_mut(&parent)
        {
            parent_links.children.retain(|c| c != id);
        }
        for child in links.children {
            // Children are always attached while their parent is, so this
            // can't fail with Tree errors below the first level.
            self.remove(&child)?;
        }
        Ok(())
    }

    /// Is this node currently attached to the tree?
    pub fn is_attached(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Is `node` equal to `ancestor`, or a descendant of it? Unknown or
    /// detached nodes are contained by nothing.
    pub fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        if !self.nodes.contains_key(ancestor) {
            return false;
        }
        let mut current = Some(node.clone());
        while let Some(id) = current {
            if id == *ancestor {
                return true;
            }
            current = self.nodes.get(&id).and_then(|l| l.parent.clone());
        }
        false
    }
}
