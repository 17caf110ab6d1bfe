//! Field Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::helpers::escape::escape_attr;
use crate::skin::Skin;

/// A single input field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    /// Input `type` attribute (text, email, password, ...)
    #[serde(default = "default_field_type")]
    pub field_type: String,
    pub name: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub class: String,
}

fn default_field_type() -> String {
    "text".to_string()
}

impl Field {
    /// Create a text field with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field_type: default_field_type(),
            name: name.into(),
            placeholder: String::new(),
            value: String::new(),
            class: String::new(),
        }
    }

    /// Set the input `type` attribute
    pub fn field_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = field_type.into();
        self
    }

    /// Set the placeholder text
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the initial value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set extra class names
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub(crate) fn render(&self, skin: Skin) -> String {
        let base = match skin {
            Skin::Bootstrap5 => "form-control",
            Skin::Purecss => "",
        };
        format!(
            r#"<input type="{}" name="{}" placeholder="{}" value="{}" class="{}" />"#,
            escape_attr(&self.field_type),
            escape_attr(&self.name),
            escape_attr(&self.placeholder),
            escape_attr(&self.value),
            class_list([base, self.class.as_str()])
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_field() {
        let html = Field::new("email")
            .field_type("email")
            .placeholder("you@example.com")
            .render(Skin::Bootstrap5);
        assert_eq!(
            html,
            r#"<input type="email" name="email" placeholder="you@example.com" value="" class="form-control" />"#
        );
    }

    #[test]
    fn test_value_is_attribute_escaped() {
        let html = Field::new("q").value(r#""><script>"#).render(Skin::Purecss);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }
}
