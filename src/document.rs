//! Document - Base HTML Document Renderer
//!
//! Assembles complete `<!DOCTYPE html>` documents from head/body fragments.
//! The skeleton itself is skin-independent; the skin shows up in the default
//! meta tags (stylesheet links) and the trailing script tags.

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::helpers::escape::escape_text;
use crate::skin::Skin;

/// Head/body sections of a full HTML document, all pre-rendered fragments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HtmlDocument {
    #[serde(default)]
    pub head_tags: String,
    #[serde(default)]
    pub body_class: String,
    /// Raw attribute text appended to the `<body>` tag
    #[serde(default)]
    pub body_attributes: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub script_tags: String,
}

impl HtmlDocument {
    /// Create a document around a body fragment
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Set the head fragment
    pub fn head_tags(mut self, head_tags: impl Into<String>) -> Self {
        self.head_tags = head_tags.into();
        self
    }

    /// Set the body class attribute
    pub fn body_class(mut self, body_class: impl Into<String>) -> Self {
        self.body_class = body_class.into();
        self
    }

    /// Set raw extra attributes on the body tag
    pub fn body_attributes(mut self, body_attributes: impl Into<String>) -> Self {
        self.body_attributes = body_attributes.into();
        self
    }

    /// Set the trailing script fragment
    pub fn script_tags(mut self, script_tags: impl Into<String>) -> Self {
        self.script_tags = script_tags.into();
        self
    }
}

/// Document provider for one skin
#[derive(Debug, Clone, Copy)]
pub struct Document {
    skin: Skin,
}

impl Document {
    pub(crate) fn new(skin: Skin) -> Self {
        Self { skin }
    }

    /// Charset and viewport meta tags plus the skin's stylesheet links
    pub fn meta_tags_default(&self) -> String {
        format!(
            "<meta charset=\"UTF-8\" />\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n    {}",
            self.skin.stylesheet_tags()
        )
    }

    /// A title tag
    pub fn title_tag(&self, title: &str) -> String {
        format!("<title>{}</title>", escape_text(title))
    }

    /// Assemble a complete HTML document from its sections
    pub fn html_document(&self, doc: &HtmlDocument) -> String {
        tracing::trace!(skin = ?self.skin, "assembling html document");
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n\n<head>\n    {}\n</head>\n\n<body class=\"{}\" {}>\n    {}\n    {}\n</body>\n\n</html>\n",
            doc.head_tags,
            class_list([doc.body_class.as_str()]),
            doc.body_attributes,
            doc.content,
            doc.script_tags
        )
    }

    /// Assemble a default document around one content fragment: default meta
    /// tags, the skin's default title and its trailing scripts
    pub fn render_html(&self, content: &str) -> String {
        let head = format!(
            "{}{}",
            self.meta_tags_default(),
            self.title_tag(self.skin.title())
        );
        self.html_document(
            &HtmlDocument::new(content)
                .head_tags(head)
                .script_tags(self.skin.script_tags()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdn;

    #[test]
    fn test_document_skeleton() {
        let doc = Document::new(Skin::Bootstrap5);
        let html = doc.html_document(&HtmlDocument::new("<p>hi</p>").body_class("dark"));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<body class="dark" >"#));
        assert!(html.contains("<p>hi</p>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_render_html_carries_skin_assets() {
        let bootstrap = Document::new(Skin::Bootstrap5).render_html("<p>x</p>");
        assert!(bootstrap.contains(cdn::BOOTSTRAP_5_CSS));
        assert!(bootstrap.contains(cdn::BOOTSTRAP_5_JS));
        assert!(bootstrap.contains("<title>Bootstrap 5</title>"));

        let pure = Document::new(Skin::Purecss).render_html("<p>x</p>");
        assert!(pure.contains(cdn::PURECSS));
        assert!(!pure.contains(cdn::BOOTSTRAP_5_JS));
        assert!(pure.contains("<title>Purecss</title>"));
    }

    #[test]
    fn test_title_tag_escapes() {
        let doc = Document::new(Skin::Purecss);
        assert_eq!(doc.title_tag("a < b"), "<title>a &lt; b</title>");
    }
}
