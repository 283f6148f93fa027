#![allow(clippy::new_without_default)]
//! Presentational widgets for Trellis: Button, Header and Input.
//!
//! Widgets are plain builders that produce a class string via
//! [`trellis_core::compose`] and HTML-style markup. The Header additionally
//! wires interaction hooks into a [`trellis_core::Document`] so its menu
//! closes on Escape or on a press outside the nav.

mod button;
mod header;
mod input;
mod markup;

pub use button::{Button, Variant};
pub use header::{Header, NavItem};
pub use input::{Input, Kind};
