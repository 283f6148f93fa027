#![allow(clippy::new_without_default)]
//! Core types for the Trellis UI component library: class-name composition,
//! a document/element tree, an explicit event channel, and interaction hooks.

pub mod class;
pub mod document;
pub mod error;
pub mod event;
pub mod hooks;
pub mod tree;
pub mod tutils;

// Public exports
pub use class::{ClassValue, compose};
pub use document::{Channel, Document, ListenerId};
pub use error::{Error, Result};
pub use hooks::{Boundary, EscapeKey, OutsidePress};
pub use tree::{NodeId, NodeName, Tree};
