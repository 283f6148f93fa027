//! The document: an element tree plus the process-wide event channels.
//!
//! Rather than a hidden singleton, the event channel is an explicit
//! capability: hooks subscribe against a [`Document`] they are handed, and
//! tests drive one with synthetic events. Everything is single-threaded;
//! registration and deregistration happen at well-defined lifecycle points
//! on the one UI thread, so there is no locking.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::event::{Event, pointer};
use crate::tree::{NodeName, Tree};
use crate::{Result, error};

/// The event channels a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Pointer button presses, anywhere in the document.
    PointerDown,
    /// Key presses, anywhere in the document.
    KeyDown,
}

/// Identifies a single listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// A registered callback. Shared so dispatch can snapshot the table.
type Callback = Rc<RefCell<dyn FnMut(&Tree, &Event)>>;

/// One entry in a channel's listener table.
struct Registration {
    /// The registration's id.
    id: ListenerId,
    /// The callback to invoke.
    callback: Callback,
}

/// A document: the element tree plus per-channel listener tables.
pub struct Document {
    /// The element tree.
    tree: Tree,
    /// Next listener id to hand out.
    next_listener: u64,
    /// Listeners for [`Channel::PointerDown`], in registration order.
    pointer_down: Vec<Registration>,
    /// Listeners for [`Channel::KeyDown`], in registration order.
    key_down: Vec<Registration>,
}

impl Document {
    /// Construct an empty document with a root node named `document`.
    pub fn new() -> Self {
        Self {
            tree: Tree::new(NodeName::convert("document")),
            next_listener: 0,
            pointer_down: Vec::new(),
            key_down: Vec::new(),
        }
    }

    /// The element tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Mutable access to the element tree.
    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    /// The listener table for a channel.
    fn table_mut(&mut self, channel: Channel) -> &mut Vec<Registration> {
        match channel {
            Channel::PointerDown => &mut self.pointer_down,
            Channel::KeyDown => &mut self.key_down,
        }
    }

    /// Register a callback on a channel. Listeners fire in registration
    /// order.
    pub fn subscribe(
        &mut self,
        channel: Channel,
        callback: impl FnMut(&Tree, &Event) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.table_mut(channel).push(Registration {
            id,
            callback: Rc::new(RefCell::new(callback)),
        });
        debug!(?channel, %id, "registered listener");
        id
    }

    /// Remove a registration. Deregistration is exactly-once: a second
    /// attempt with the same id is an error.
    pub fn unsubscribe(&mut self, id: ListenerId) -> Result<()> {
        for channel in [Channel::PointerDown, Channel::KeyDown] {
            let table = self.table_mut(channel);
            if let Some(pos) = table.iter().position(|r| r.id == id) {
                table.remove(pos);
                debug!(?channel, %id, "removed listener");
                return Ok(());
            }
        }
        Err(error::Error::Listener(format!("unknown {id}")))
    }

    /// Synchronously deliver an event to every listener on its channel, in
    /// registration order.
    ///
    /// The table is snapshotted at dispatch start, so registrations changed
    /// by a callback take effect from the next dispatch. Pointer events only
    /// reach the pointer-down channel on a `Down` action; releases are
    /// dropped. Callback panics are not caught.
    pub fn dispatch(&self, event: &Event) {
        let table = match event {
            Event::Key(_) => &self.key_down,
            Event::Pointer(p) if p.action == pointer::Action::Down => &self.pointer_down,
            Event::Pointer(_) => return,
        };
        let snapshot: Vec<Callback> = table.iter().map(|r| Rc::clone(&r.callback)).collect();
        trace!(?event, listeners = snapshot.len(), "dispatch");
        for callback in snapshot {
            (&mut *callback.borrow_mut())(&self.tree, event);
        }
    }
}
