//! Invokes a callback when the Escape key is pressed anywhere in the
//! document. Global by design: there is no focus or boundary scoping.

use crate::document::{Channel, Document, ListenerId};
use crate::event::{Event, key::KeyCode};
use crate::Result;

/// A hook that fires on every Escape key-down for as long as it is mounted.
pub struct EscapeKey {
    /// The active listener registration.
    listener: ListenerId,
}

impl EscapeKey {
    /// Mount the hook on a document, registering one key-down listener.
    pub fn mount(doc: &mut Document, on_escape: impl FnMut() + 'static) -> Self {
        Self {
            listener: Self::register(doc, on_escape),
        }
    }

    /// Register the listener closure.
    fn register(doc: &mut Document, mut on_escape: impl FnMut() + 'static) -> ListenerId {
        doc.subscribe(Channel::KeyDown, move |_, event| {
            // Only the code is compared; modifier state is not filtered.
            if let Event::Key(k) = event
                && k.key == KeyCode::Esc
            {
                on_escape();
            }
        })
    }

    /// Replace the callback, deregistering the old listener first.
    pub fn rebind(&mut self, doc: &mut Document, on_escape: impl FnMut() + 'static) -> Result<()> {
        doc.unsubscribe(self.listener)?;
        self.listener = Self::register(doc, on_escape);
        Ok(())
    }

    /// Tear the hook down, deregistering its listener.
    pub fn unmount(self, doc: &mut Document) -> Result<()> {
        doc.unsubscribe(self.listener)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::event::key::{Ctrl, KeyCode};
    use crate::tutils::Harness;

    /// A counter and a callback that increments it.
    fn counter() -> (Rc<Cell<usize>>, impl FnMut() + 'static) {
        let hits = Rc::new(Cell::new(0));
        let shared = Rc::clone(&hits);
        (hits, move || shared.set(shared.get() + 1))
    }

    #[test]
    fn fires_once_per_escape() -> Result<()> {
        let mut h = Harness::new();
        let (hits, on_escape) = counter();
        let hook = EscapeKey::mount(&mut h.doc, on_escape);

        h.key(KeyCode::Esc);
        assert_eq!(hits.get(), 1);
        h.key(KeyCode::Enter);
        h.key('q');
        assert_eq!(hits.get(), 1);
        // Modifiers don't suppress it.
        h.key(Ctrl + KeyCode::Esc);
        assert_eq!(hits.get(), 2);

        hook.unmount(&mut h.doc)?;
        h.key(KeyCode::Esc);
        assert_eq!(hits.get(), 2);
        Ok(())
    }

    #[test]
    fn rebinding_replaces_the_callback() -> Result<()> {
        let mut h = Harness::new();
        let (old_hits, old_cb) = counter();
        let mut hook = EscapeKey::mount(&mut h.doc, old_cb);

        h.key(KeyCode::Esc);
        assert_eq!(old_hits.get(), 1);

        let (new_hits, new_cb) = counter();
        hook.rebind(&mut h.doc, new_cb)?;
        h.key(KeyCode::Esc);
        assert_eq!(old_hits.get(), 1);
        assert_eq!(new_hits.get(), 1);

        hook.unmount(&mut h.doc)
    }
}
