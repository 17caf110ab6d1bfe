//! Popup Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::helpers::escape::escape_text;
use crate::skin::Skin;

/// A popup/modal shell. The header block is emitted only when a title is
/// present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Popup {
    /// Body fragment, embedded verbatim
    pub content: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub class: String,
}

impl Popup {
    /// Create a popup around a fragment
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Set the header title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set extra class names
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub(crate) fn render(&self, skin: Skin) -> String {
        match skin {
            Skin::Bootstrap5 => {
                let header = self
                    .title
                    .as_deref()
                    .map(|title| {
                        format!(
                            r#"<div class="modal-header"><h5 class="modal-title">{}</h5><button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button></div>"#,
                            escape_text(title)
                        )
                    })
                    .unwrap_or_default();
                format!(
                    r#"<div class="{}" tabindex="-1"><div class="modal-dialog"><div class="modal-content">{}<div class="modal-body">{}</div></div></div></div>"#,
                    class_list(["modal", self.class.as_str()]),
                    header,
                    self.content
                )
            }
            Skin::Purecss => {
                let header = self
                    .title
                    .as_deref()
                    .map(|title| {
                        format!(
                            r#"<div class="custom-modal-header"><h3 class="custom-modal-title">{}</h3></div>"#,
                            escape_text(title)
                        )
                    })
                    .unwrap_or_default();
                format!(
                    r#"<div class="{}">{}<div class="custom-modal-body">{}</div></div>"#,
                    class_list(["custom-modal", self.class.as_str()]),
                    header,
                    self.content
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_iff_title_present() {
        let bare = Popup::new("body").render(Skin::Bootstrap5);
        assert!(!bare.contains("modal-header"));

        let with = Popup::new("body").title("Confirm").render(Skin::Bootstrap5);
        assert!(with.contains(r#"<h5 class="modal-title">Confirm</h5>"#));
    }

    #[test]
    fn test_purecss_vocabulary() {
        let html = Popup::new("body").title("Hi").render(Skin::Purecss);
        assert!(html.contains("custom-modal-header"));
        assert!(html.contains(r#"<div class="custom-modal-body">body</div>"#));
    }
}
