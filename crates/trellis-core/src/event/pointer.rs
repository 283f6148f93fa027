//! Pointer input primitives.
//!
//! Unlike a terminal mouse event, a pointer event here carries the tree node
//! it landed on rather than screen coordinates: hit testing is the host's
//! job, and the hooks only need the target for containment checks.

use crate::event::key;
use crate::tree::NodeId;

/// Pointer button codes.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Button {
    /// Left pointer button.
    Left,
    /// Right pointer button.
    Right,
    /// Middle pointer button.
    Middle,
}

/// Pointer action kinds.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Action {
    /// Button press.
    Down,
    /// Button release.
    Up,
}

/// A pointer action on a target node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pointer {
    /// Pointer action type.
    pub action: Action,
    /// Pointer button.
    pub button: Button,
    /// Keyboard modifiers.
    pub modifiers: key::Mods,
    /// The node the pointer event was produced on.
    pub target: NodeId,
}

impl Pointer {
    /// A left-button press on `target` with no modifiers.
    pub fn down(target: NodeId) -> Self {
        Self {
            action: Action::Down,
            button: Button::Left,
            modifiers: key::Empty,
            target,
        }
    }

    /// A left-button release on `target` with no modifiers.
    pub fn up(target: NodeId) -> Self {
        Self {
            action: Action::Up,
            ..Self::down(target)
        }
    }

    /// Build a pointer event with a different button.
    pub fn with_button(mut self, button: Button) -> Self {
        self.button = button;
        self
    }
}
