//! Fieldset Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::helpers::escape::escape_text;
use crate::skin::Skin;

/// A fieldset grouping form controls under a legend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fieldset {
    pub legend: String,
    /// Inner HTML fragment, embedded verbatim
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub class: String,
}

impl Fieldset {
    /// Create a fieldset from its legend and content fragment
    pub fn new(legend: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            legend: legend.into(),
            content: content.into(),
            class: String::new(),
        }
    }

    /// Set extra class names
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub(crate) fn render(&self, skin: Skin) -> String {
        let base = match skin {
            Skin::Bootstrap5 => "form-group",
            Skin::Purecss => "",
        };
        format!(
            r#"<fieldset class="{}"><legend>{}</legend>{}</fieldset>"#,
            class_list([base, self.class.as_str()]),
            escape_text(&self.legend),
            self.content
        )
    }
}
