//! Single-line input widget.

use std::sync::atomic::{AtomicU64, Ordering};

use trellis_core::classes;

use crate::markup::{escape_attr, escape_text};

/// Source of generated input ids.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// The input's content kind, mapped to the `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Free text.
    #[default]
    Text,
    /// Numeric input.
    Number,
    /// Email address.
    Email,
}

impl Kind {
    /// The `type` attribute value.
    fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Email => "email",
        }
    }
}

/// A labelled input field with optional error and helper text.
#[derive(Debug, Clone)]
pub struct Input {
    /// Optional label, tied to the input by id.
    label: Option<String>,
    /// Error text. When present it wins over helper text and adds the
    /// `error` class.
    error: Option<String>,
    /// Helper text shown under the field.
    helper: Option<String>,
    /// Content kind.
    kind: Kind,
    /// Whether the field stretches to its container's width.
    full_width: bool,
    /// The element id, generated unless set explicitly.
    id: String,
}

impl Input {
    /// Construct a new input with a generated `input-N` id.
    pub fn new() -> Self {
        Self {
            label: None,
            error: None,
            helper: None,
            kind: Kind::default(),
            full_width: false,
            id: format!("input-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed)),
        }
    }

    /// Build an input with an explicit id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Build an input with a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Build an input with error text.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Build an input with helper text.
    pub fn with_helper(mut self, helper: impl Into<String>) -> Self {
        self.helper = Some(helper.into());
        self
    }

    /// Build an input with the given content kind.
    pub fn with_kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Build an input that stretches to full width.
    pub fn full_width(mut self, on: bool) -> Self {
        self.full_width = on;
        self
    }

    /// The element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The composed class string for the wrapper.
    pub fn class_string(&self) -> String {
        classes!(
            "input",
            [
                ("full-width", self.full_width),
                ("error", self.error.is_some())
            ]
        )
    }

    /// Render the field as markup: wrapper, optional label, the input, then
    /// error or helper text.
    pub fn markup(&self) -> String {
        let mut out = format!("<div class=\"{}\">", self.class_string());
        if let Some(label) = &self.label {
            out.push_str(&format!(
                "<label for=\"{}\">{}</label>",
                escape_attr(&self.id),
                escape_text(label)
            ));
        }
        out.push_str(&format!(
            "<input type=\"{}\" id=\"{}\">",
            self.kind.as_str(),
            escape_attr(&self.id)
        ));
        match (&self.error, &self.helper) {
            (Some(error), _) => {
                out.push_str(&format!(
                    "<span class=\"error-text\">{}</span>",
                    escape_text(error)
                ));
            }
            (None, Some(helper)) => {
                out.push_str(&format!(
                    "<span class=\"helper-text\">{}</span>",
                    escape_text(helper)
                ));
            }
            (None, None) => {}
        }
        out.push_str("</div>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let first = Input::new();
        let second = Input::new();
        assert!(first.id().starts_with("input-"));
        assert_ne!(first.id(), second.id());
        assert_eq!(Input::new().with_id("email").id(), "email");
    }

    #[test]
    fn classes() {
        assert_eq!(Input::new().class_string(), "input");
        assert_eq!(Input::new().full_width(true).class_string(), "input full-width");
        assert_eq!(
            Input::new().full_width(true).with_error("required").class_string(),
            "input full-width error"
        );
    }

    #[test]
    fn markup_with_label_and_error() {
        let field = Input::new()
            .with_id("age")
            .with_label("Age")
            .with_kind(Kind::Number)
            .with_helper("Years")
            .with_error("required");
        // Error wins over helper.
        assert_eq!(
            field.markup(),
            concat!(
                r#"<div class="input error">"#,
                r#"<label for="age">Age</label>"#,
                r#"<input type="number" id="age">"#,
                r#"<span class="error-text">required</span>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn markup_with_helper_only() {
        let field = Input::new().with_id("name").with_helper("Full name");
        assert_eq!(
            field.markup(),
            concat!(
                r#"<div class="input">"#,
                r#"<input type="text" id="name">"#,
                r#"<span class="helper-text">Full name</span>"#,
                "</div>"
            )
        );
    }
}
