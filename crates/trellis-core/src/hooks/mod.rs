//! Interaction hooks: document-level listeners scoped to a component's
//! mounted lifetime.
//!
//! Each hook owns exactly one listener registration at a time. There is no
//! implicit unmount lifecycle to hang cleanup on, so teardown is explicit:
//! call `unmount` with the document the hook was mounted on. `rebind`
//! replaces the callback, deregistering the old listener before registering
//! the new one so a stale callback can never fire again.

mod escape_key;
mod outside_press;

pub use escape_key::EscapeKey;
pub use outside_press::{Boundary, OutsidePress};
