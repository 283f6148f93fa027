//! Button widget.

use trellis_core::classes;

use crate::markup::escape_text;

/// Visual variants for a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Filled button. The default; contributes no extra class.
    #[default]
    Contained,
    /// Outlined button.
    Outlined,
    /// Borderless text button.
    Text,
}

impl Variant {
    /// The class this variant contributes, if any.
    fn class(self) -> Option<&'static str> {
        match self {
            Self::Contained => None,
            Self::Outlined => Some("outlined"),
            Self::Text => Some("text"),
        }
    }
}

/// A push button with a label.
#[derive(Debug, Clone)]
pub struct Button {
    /// Button label.
    label: String,
    /// Visual variant.
    variant: Variant,
    /// Whether the button is disabled.
    disabled: bool,
}

impl Button {
    /// Construct a new button with a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: Variant::default(),
            disabled: false,
        }
    }

    /// Build a button with the given variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Build a button with the disabled flag set.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Return the button label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The composed class string.
    pub fn class_string(&self) -> String {
        classes!(
            "button",
            self.variant.class(),
            [("disabled", self.disabled)]
        )
    }

    /// Render the button as markup.
    pub fn markup(&self) -> String {
        let disabled = if self.disabled { " disabled" } else { "" };
        format!(
            "<button class=\"{}\"{}>{}</button>",
            self.class_string(),
            disabled,
            escape_text(&self.label)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_per_variant() {
        assert_eq!(Button::new("Go").class_string(), "button");
        assert_eq!(
            Button::new("Go").with_variant(Variant::Outlined).class_string(),
            "button outlined"
        );
        assert_eq!(
            Button::new("Go").with_variant(Variant::Text).class_string(),
            "button text"
        );
        assert_eq!(
            Button::new("Go").disabled(true).class_string(),
            "button disabled"
        );
    }

    #[test]
    fn markup() {
        assert_eq!(
            Button::new("Save").markup(),
            r#"<button class="button">Save</button>"#
        );
        assert_eq!(
            Button::new("A & B").with_variant(Variant::Text).disabled(true).markup(),
            r#"<button class="button text disabled" disabled>A &amp; B</button>"#
        );
    }
}
