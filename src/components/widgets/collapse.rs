//! Collapse Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::helpers::escape::escape_attr;
use crate::skin::Skin;

/// A collapsible panel, optionally collapsed by default
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collapse {
    pub id: String,
    /// Body fragment, embedded verbatim
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default)]
    pub class: String,
}

impl Collapse {
    /// Create a collapsible panel from its id and content fragment
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            collapsed: false,
            class: String::new(),
        }
    }

    /// Collapse the panel by default
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// Set extra class names
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub(crate) fn render(&self, skin: Skin) -> String {
        let base = match skin {
            // Bootstrap panels are hidden unless `show` is present
            Skin::Bootstrap5 => {
                if self.collapsed { "collapse" } else { "collapse show" }
            }
            Skin::Purecss => {
                if self.collapsed {
                    "custom-collapse collapsed"
                } else {
                    "custom-collapse"
                }
            }
        };
        format!(
            r#"<div class="{}" id="{}">{}</div>"#,
            class_list([base, self.class.as_str()]),
            escape_attr(&self.id),
            self.content
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_flag_per_skin() {
        let open = Collapse::new("panel", "x");
        let closed = Collapse::new("panel", "x").collapsed(true);

        assert!(open.render(Skin::Bootstrap5).contains("collapse show"));
        assert!(!closed.render(Skin::Bootstrap5).contains("show"));

        assert!(closed.render(Skin::Purecss).contains("collapsed"));
        assert!(!open.render(Skin::Purecss).contains("collapsed"));
    }
}
