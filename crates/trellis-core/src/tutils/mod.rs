//! Utilities for testing code built on a [`Document`].

use crate::Result;
use crate::document::Document;
use crate::event::key::Key;
use crate::event::pointer::Pointer;
use crate::event::Event;
use crate::tree::{NodeId, NodeName};

/// A simple harness that holds a [`Document`]. Tests drive it by sending
/// synthetic key and pointer events and can then inspect hook behaviour.
pub struct Harness {
    /// The document under test.
    pub doc: Document,
}

impl Harness {
    /// Create a harness around a fresh document.
    pub fn new() -> Self {
        Self {
            doc: Document::new(),
        }
    }

    /// The document's root node.
    pub fn root(&self) -> NodeId {
        self.doc.tree().root()
    }

    /// Attach a child node under `parent`, munging `name` into a valid node
    /// name.
    pub fn add(&mut self, parent: &NodeId, name: &str) -> Result<NodeId> {
        self.doc.tree_mut().add(parent, NodeName::convert(name))
    }

    /// Dispatch a key-down event.
    pub fn key<K: Into<Key>>(&self, k: K) {
        self.doc.dispatch(&Event::Key(k.into()));
    }

    /// Dispatch a left-button pointer-down on `target`.
    pub fn press(&self, target: &NodeId) {
        self.doc
            .dispatch(&Event::Pointer(Pointer::down(target.clone())));
    }
}
