//! Input event primitives.

pub mod key;
pub mod pointer;

/// The event types delivered through a document's channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keystroke.
    Key(key::Key),
    /// A pointer action on a target node.
    Pointer(pointer::Pointer),
}
