//! Card Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::helpers::escape::{escape_attr, escape_text};
use crate::skin::Skin;

/// A card with optional header image and footer.
///
/// The image block is emitted only when `image_url` is non-empty, the footer
/// block only when `footer` is non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    /// Body fragment, embedded verbatim
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Footer fragment, embedded verbatim
    #[serde(default)]
    pub footer: Option<String>,
    #[serde(default)]
    pub class: String,
}

impl Card {
    /// Create a card from its title and body fragment
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    /// Set the header image url
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Set the footer fragment
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Set extra class names
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }

    fn footer_fragment(&self) -> Option<&str> {
        self.footer.as_deref().filter(|f| !f.is_empty())
    }

    pub(crate) fn render(&self, skin: Skin) -> String {
        match skin {
            Skin::Bootstrap5 => {
                let image = self
                    .image()
                    .map(|url| {
                        format!(
                            r#"<img src="{}" class="card-img-top" alt="" />"#,
                            escape_attr(url)
                        )
                    })
                    .unwrap_or_default();
                let footer = self
                    .footer_fragment()
                    .map(|f| format!(r#"<div class="card-footer">{f}</div>"#))
                    .unwrap_or_default();
                format!(
                    r#"<div class="{}">{}<div class="card-body"><h5 class="card-title">{}</h5><div class="card-text">{}</div></div>{}</div>"#,
                    class_list(["card", self.class.as_str()]),
                    image,
                    escape_text(&self.title),
                    self.content,
                    footer
                )
            }
            Skin::Purecss => {
                let image = self
                    .image()
                    .map(|url| {
                        format!(
                            r#"<img src="{}" class="custom-card-img" alt="" />"#,
                            escape_attr(url)
                        )
                    })
                    .unwrap_or_default();
                let footer = self
                    .footer_fragment()
                    .map(|f| format!(r#"<div class="custom-card-footer">{f}</div>"#))
                    .unwrap_or_default();
                format!(
                    r#"<div class="{}">{}<div class="custom-card-body"><h3 class="custom-card-title">{}</h3>{}</div>{}</div>"#,
                    class_list(["custom-card", self.class.as_str()]),
                    image,
                    escape_text(&self.title),
                    self.content,
                    footer
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_iff_url_non_empty() {
        let bare = Card::new("T", "body").render(Skin::Bootstrap5);
        assert!(!bare.contains("<img"));

        let empty = Card::new("T", "body").image_url("").render(Skin::Bootstrap5);
        assert!(!empty.contains("<img"));

        let with = Card::new("T", "body")
            .image_url("pic.png")
            .render(Skin::Bootstrap5);
        assert!(with.contains(r#"<img src="pic.png" class="card-img-top""#));
    }

    #[test]
    fn test_footer_iff_non_empty() {
        let bare = Card::new("T", "body").render(Skin::Purecss);
        assert!(!bare.contains("footer"));

        let with = Card::new("T", "body")
            .footer("<em>fin</em>")
            .render(Skin::Purecss);
        assert!(with.contains(r#"<div class="custom-card-footer"><em>fin</em></div>"#));
    }

    #[test]
    fn test_title_escaped_content_verbatim() {
        let html = Card::new("a < b", "<strong>raw</strong>").render(Skin::Bootstrap5);
        assert!(html.contains("a &lt; b"));
        assert!(html.contains("<strong>raw</strong>"));
    }
}
