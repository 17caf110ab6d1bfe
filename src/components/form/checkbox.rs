//! Checkbox Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::helpers::escape::{escape_attr, escape_text};
use crate::skin::Skin;

/// A checkbox, optionally with a visible label
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Checkbox {
    pub name: String,
    #[serde(default)]
    pub checked: bool,
    /// Visible label text next to the box
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub class: String,
}

impl Checkbox {
    /// Create a checkbox with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the visible label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set extra class names
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub(crate) fn render(&self, skin: Skin) -> String {
        let checked = if self.checked { " checked" } else { "" };
        let label = self
            .label
            .as_deref()
            .map(escape_text)
            .unwrap_or_default();
        match skin {
            Skin::Bootstrap5 => format!(
                r#"<div class="form-check"><input type="checkbox" name="{name}" class="{class}"{checked}><label class="form-check-label" for="{name}">{label}</label></div>"#,
                name = escape_attr(&self.name),
                class = class_list(["form-check-input", self.class.as_str()]),
            ),
            Skin::Purecss => format!(
                r#"<label class="{class}"><input type="checkbox" name="{name}"{checked}> {label}</label>"#,
                name = escape_attr(&self.name),
                class = class_list(["pure-checkbox", self.class.as_str()]),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_attribute() {
        let on = Checkbox::new("opt").checked(true).render(Skin::Bootstrap5);
        let off = Checkbox::new("opt").render(Skin::Bootstrap5);
        assert!(on.contains(" checked"));
        assert!(!off.contains(" checked"));
    }

    #[test]
    fn test_purecss_wraps_in_label() {
        let html = Checkbox::new("opt").label("Enable").render(Skin::Purecss);
        assert!(html.starts_with(r#"<label class="pure-checkbox""#));
        assert!(html.contains("Enable"));
    }
}
