//! Row Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::skin::Skin;

/// A horizontal row of columns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Row {
    /// Extra class names
    #[serde(default)]
    pub class: String,
    /// Inner HTML fragment, embedded verbatim
    #[serde(default)]
    pub content: String,
}

impl Row {
    /// Create a row around a fragment
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Set extra class names
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub(crate) fn render(&self, skin: Skin) -> String {
        let base = match skin {
            Skin::Bootstrap5 => "row",
            Skin::Purecss => "pure-g",
        };
        format!(
            r#"<div class="{}">{}</div>"#,
            class_list([base, self.class.as_str()]),
            self.content
        )
    }
}
