//! Label Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::helpers::escape::{escape_attr, escape_text};
use crate::skin::Skin;

/// A label bound to an input by name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Label {
    /// `for` attribute: the name of the input this label describes
    pub for_input: String,
    pub text: String,
    #[serde(default)]
    pub class: String,
}

impl Label {
    /// Create a label for an input
    pub fn new(for_input: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            for_input: for_input.into(),
            text: text.into(),
            class: String::new(),
        }
    }

    /// Set extra class names
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    // Labels carry no framework base class; both skins emit the same markup.
    pub(crate) fn render(&self, _skin: Skin) -> String {
        format!(
            r#"<label for="{}" class="{}">{}</label>"#,
            escape_attr(&self.for_input),
            class_list([self.class.as_str()]),
            escape_text(&self.text)
        )
    }
}
