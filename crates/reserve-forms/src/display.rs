// File: src/display.rs
// Purpose: Error indicators shown next to each field

use std::collections::BTreeMap;

/// Attribute holding the message on the field's container.
pub const DATA_ERROR: &str = "data-error";
/// Attribute the stylesheet uses to reveal the message.
pub const DATA_ERROR_VISIBLE: &str = "data-error-visible";

/// Presentation side of field errors.
pub trait ErrorDisplay {
    /// Show `message` as the error indicator of `field`.
    fn show_error(&mut self, field: &str, message: &str);

    /// Remove any error indicator from `field`.
    fn clear_error(&mut self, field: &str);
}

/// Clear on `None`, show the literal message on `Some`.
pub fn render_outcome<D>(display: &mut D, field: &str, outcome: Option<&str>)
where
    D: ErrorDisplay + ?Sized,
{
    match outcome {
        Some(message) => display.show_error(field, message),
        None => display.clear_error(field),
    }
}

/// In-memory model of the `data-error` attributes set on field containers.
///
/// A field with an error carries `data-error="<message>"` and
/// `data-error-visible="true"`; clearing removes both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorAttributes {
    errors: BTreeMap<String, String>,
}

impl ErrorAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message currently shown for `field`
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_visible(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Number of fields currently showing an error
    pub fn visible_count(&self) -> usize {
        self.errors.len()
    }

    /// Attributes to set on the container of `field`; empty when it has no error.
    pub fn attrs(&self, field: &str) -> Vec<(&'static str, String)> {
        match self.errors.get(field) {
            Some(message) => vec![
                (DATA_ERROR, message.clone()),
                (DATA_ERROR_VISIBLE, "true".to_string()),
            ],
            None => Vec::new(),
        }
    }

    /// Render the attributes of `field` as an HTML attribute string
    pub fn render(&self, field: &str) -> String {
        self.attrs(field)
            .iter()
            .map(|(name, value)| format!("{}=\"{}\"", name, escape_attr(value)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ErrorDisplay for ErrorAttributes {
    fn show_error(&mut self, field: &str, message: &str) {
        self.errors.insert(field.to_string(), message.to_string());
    }

    fn clear_error(&mut self, field: &str) {
        self.errors.remove(field);
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
