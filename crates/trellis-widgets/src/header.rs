//! Header widget with a collapsible nav menu.
//!
//! While mounted, the menu dismisses itself the way the hooks intend: an
//! Escape press or a pointer press outside the nav closes it.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;
use trellis_core::{classes, Document, EscapeKey, NodeId, NodeName, OutsidePress, Result, error};

use crate::markup::{escape_attr, escape_text};

/// A single navigation link.
#[derive(Debug, Clone)]
pub struct NavItem {
    /// Link text.
    pub label: String,
    /// Link target.
    pub href: String,
}

/// Listener state held while the header is mounted on a document.
struct Mounted {
    /// The header's node in the document tree.
    node: NodeId,
    /// Escape closes the menu.
    escape: EscapeKey,
    /// A press outside the nav closes the menu.
    outside: OutsidePress,
}

/// A page header: logo, nav links and a menu toggle.
pub struct Header {
    /// Logo text.
    logo: String,
    /// Navigation links, in order.
    nav_items: Vec<NavItem>,
    /// Whether the nav menu is open. Shared with the hook callbacks.
    menu_open: Rc<Cell<bool>>,
    /// Hook registrations while mounted.
    mounted: Option<Mounted>,
}

impl Header {
    /// Construct a new header with a logo.
    pub fn new(logo: impl Into<String>) -> Self {
        Self {
            logo: logo.into(),
            nav_items: Vec::new(),
            menu_open: Rc::new(Cell::new(false)),
            mounted: None,
        }
    }

    /// Build a header with an extra nav link.
    pub fn nav_item(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.nav_items.push(NavItem {
            label: label.into(),
            href: href.into(),
        });
        self
    }

    /// Is the nav menu open?
    pub fn menu_open(&self) -> bool {
        self.menu_open.get()
    }

    /// Flip the nav menu open or closed.
    pub fn toggle_menu(&mut self) {
        self.menu_open.set(!self.menu_open.get());
    }

    /// The nav element's class string.
    pub fn nav_class(&self) -> String {
        classes!("nav", [("nav-open", self.menu_open.get())])
    }

    /// Mount the header under `parent`: create its nodes in the document
    /// tree and register the menu-dismiss hooks, with the nav node as the
    /// outside-press boundary. Returns the nav node id. Errors if already
    /// mounted.
    pub fn mount(&mut self, doc: &mut Document, parent: &NodeId) -> Result<NodeId> {
        if self.mounted.is_some() {
            return Err(error::Error::Invalid("header is already mounted".into()));
        }
        let node = doc.tree_mut().add(parent, NodeName::convert("Header"))?;
        let nav = doc
            .tree_mut()
            .add(&node, NodeName::convert("MainNavigation"))?;

        let open = Rc::clone(&self.menu_open);
        let escape = EscapeKey::mount(doc, move || open.set(false));
        let open = Rc::clone(&self.menu_open);
        let outside = OutsidePress::mount(doc, move || open.set(false));
        outside.boundary().bind(nav.clone());

        debug!(%node, %nav, "mounted header");
        self.mounted = Some(Mounted {
            node,
            escape,
            outside,
        });
        Ok(nav)
    }

    /// Unmount: deregister both hooks and detach the header's nodes. A
    /// no-op when not mounted.
    pub fn unmount(&mut self, doc: &mut Document) -> Result<()> {
        if let Some(mounted) = self.mounted.take() {
            mounted.escape.unmount(doc)?;
            mounted.outside.unmount(doc)?;
            doc.tree_mut().remove(&mounted.node)?;
            debug!(node = %mounted.node, "unmounted header");
        }
        Ok(())
    }

    /// Render the header as markup.
    pub fn markup(&self) -> String {
        let mut out = String::from("<header class=\"header\"><div class=\"container\">");
        out.push_str(&format!(
            "<div class=\"logo\">{}</div>",
            escape_text(&self.logo)
        ));
        out.push_str(&format!(
            "<nav class=\"{}\" aria-label=\"Main navigation\"><ul>",
            self.nav_class()
        ));
        for item in &self.nav_items {
            out.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>",
                escape_attr(&item.href),
                escape_text(&item.label)
            ));
        }
        out.push_str("</ul></nav>");
        out.push_str(&format!(
            concat!(
                "<button class=\"menu-toggle\" aria-expanded=\"{}\" ",
                "aria-controls=\"main-navigation\" aria-label=\"Toggle navigation\">",
                "<span class=\"hamburger-icon\"></span></button>"
            ),
            self.menu_open.get()
        ));
        out.push_str("</div></header>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::event::key::KeyCode;
    use trellis_core::tutils::Harness;

    #[test]
    fn nav_class_tracks_menu_state() {
        let mut header = Header::new("Acme");
        assert_eq!(header.nav_class(), "nav");
        header.toggle_menu();
        assert_eq!(header.nav_class(), "nav nav-open");
        header.toggle_menu();
        assert_eq!(header.nav_class(), "nav");
    }

    #[test]
    fn escape_closes_the_menu() -> Result<()> {
        let mut h = Harness::new();
        let root = h.root();
        let mut header = Header::new("Acme");
        header.mount(&mut h.doc, &root)?;

        header.toggle_menu();
        assert!(header.menu_open());
        h.key(KeyCode::Esc);
        assert!(!header.menu_open());

        header.unmount(&mut h.doc)
    }

    #[test]
    fn outside_press_closes_the_menu() -> Result<()> {
        let mut h = Harness::new();
        let root = h.root();
        let aside = h.add(&root, "aside")?;
        let mut header = Header::new("Acme");
        let nav = header.mount(&mut h.doc, &root)?;
        let link = h.add(&nav, "link")?;

        header.toggle_menu();
        h.press(&link);
        assert!(header.menu_open(), "press inside the nav must not close it");
        h.press(&aside);
        assert!(!header.menu_open());

        header.unmount(&mut h.doc)
    }

    #[test]
    fn unmount_tears_down_listeners_and_nodes() -> Result<()> {
        let mut h = Harness::new();
        let root = h.root();
        let aside = h.add(&root, "aside")?;
        let mut header = Header::new("Acme");
        let nav = header.mount(&mut h.doc, &root)?;
        header.unmount(&mut h.doc)?;

        assert!(!h.doc.tree().is_attached(&nav));
        header.toggle_menu();
        h.key(KeyCode::Esc);
        h.press(&aside);
        assert!(header.menu_open(), "listeners must be gone after unmount");

        // Unmounting twice is a no-op, and remounting works.
        header.unmount(&mut h.doc)?;
        assert!(header.mount(&mut h.doc, &root).is_ok());
        assert!(header.mount(&mut h.doc, &root).is_err());
        header.unmount(&mut h.doc)
    }

    #[test]
    fn markup_reflects_state() {
        let header = Header::new("Acme").nav_item("Docs", "/docs");
        let markup = header.markup();
        assert!(markup.contains(r#"<nav class="nav" aria-label="Main navigation">"#));
        assert!(markup.contains(r#"<li><a href="/docs">Docs</a></li>"#));
        assert!(markup.contains(r#"aria-expanded="false""#));

        let mut open = Header::new("Acme");
        open.toggle_menu();
        assert!(open.markup().contains(r#"<nav class="nav nav-open""#));
        assert!(open.markup().contains(r#"aria-expanded="true""#));
    }
}
