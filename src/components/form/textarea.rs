//! Textarea Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::helpers::escape::escape_attr;
use crate::skin::Skin;

/// A multi-line text input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Textarea {
    pub name: String,
    #[serde(default)]
    pub placeholder: String,
    /// Visible rows, defaults to 3
    #[serde(default = "default_rows")]
    pub rows: u32,
    #[serde(default)]
    pub class: String,
}

fn default_rows() -> u32 {
    3
}

impl Textarea {
    /// Create a textarea with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            placeholder: String::new(),
            rows: default_rows(),
            class: String::new(),
        }
    }

    /// Set the placeholder text
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the visible row count
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows;
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
            r#"<textarea name="{}" placeholder="{}" rows="{}" class="{}"></textarea>"#,
            escape_attr(&self.name),
            escape_attr(&self.placeholder),
            self.rows,
            class_list([base, self.class.as_str()])
        )
    }
}
