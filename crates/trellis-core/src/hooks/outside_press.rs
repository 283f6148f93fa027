//! Detects pointer presses outside a boundary element. The classic use is
//! dismissing a menu, modal or backdrop when the user clicks elsewhere.

use std::cell::RefCell;
use std::rc::Rc;

use crate::document::{Channel, Document, ListenerId};
use crate::event::Event;
use crate::tree::NodeId;
use crate::Result;

/// A cloneable handle designating the boundary element: the node that
/// defines "inside". Starts unbound; while unbound, the hook never fires.
#[derive(Clone)]
pub struct Boundary {
    /// The currently bound node, shared with the hook's listener.
    node: Rc<RefCell<Option<NodeId>>>,
}

impl Boundary {
    /// A new, unbound handle.
    fn new() -> Self {
        Self {
            node: Rc::new(RefCell::new(None)),
        }
    }

    /// Attach the boundary to a node.
    pub fn bind(&self, node: NodeId) {
        *self.node.borrow_mut() = Some(node);
    }

    /// Detach the boundary. The hook stops firing until rebound.
    pub fn clear(&self) {
        *self.node.borrow_mut() = None;
    }

    /// The currently bound node, if any.
    pub fn get(&self) -> Option<NodeId> {
        self.node.borrow().clone()
    }
}

/// A hook that invokes a callback whenever a pointer press lands outside the
/// boundary element.
pub struct OutsidePress {
    /// The active listener registration.
    listener: ListenerId,
    /// The boundary handle, shared with the listener.
    boundary: Boundary,
}

impl OutsidePress {
    /// Mount the hook on a document. The returned hook holds one pointer-down
    /// registration; bind the boundary via [`OutsidePress::boundary`] to arm
    /// it.
    pub fn mount(doc: &mut Document, on_outside: impl FnMut() + 'static) -> Self {
        let boundary = Boundary::new();
        let listener = Self::register(doc, &boundary, on_outside);
        Self { listener, boundary }
    }

    /// Register the listener closure for a boundary handle.
    fn register(
        doc: &mut Document,
        boundary: &Boundary,
        mut on_outside: impl FnMut() + 'static,
    ) -> ListenerId {
        let boundary = boundary.clone();
        doc.subscribe(Channel::PointerDown, move |tree, event| {
            let Event::Pointer(pointer) = event else {
                return;
            };
            // No boundary bound yet - nothing counts as outside.
            let Some(node) = boundary.get() else {
                return;
            };
            if !tree.contains(&node, &pointer.target) {
                on_outside();
            }
        })
    }

    /// The handle used to bind the boundary element. Handles are cloneable
    /// and survive rebinding.
    pub fn boundary(&self) -> Boundary {
        self.boundary.clone()
    }

    /// Replace the callback. The old listener is deregistered before the new
    /// one is registered, so the old callback can never fire again.
    pub fn rebind(&mut self, doc: &mut Document, on_outside: impl FnMut() + 'static) -> Result<()> {
        doc.unsubscribe(self.listener)?;
        self.listener = Self::register(doc, &self.boundary, on_outside);
        Ok(())
    }

    /// Tear the hook down, deregistering its listener.
    pub fn unmount(self, doc: &mut Document) -> Result<()> {
        doc.unsubscribe(self.listener)
    }
}
