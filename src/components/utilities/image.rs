//! Image Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::helpers::escape::escape_attr;
use crate::skin::Skin;

/// An image tag
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    /// Omitted when empty
    #[serde(default)]
    pub width: String,
    /// Omitted when empty
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub class: String,
}

impl Image {
    /// Create an image for the given source url
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }

    /// Set the alt text
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    /// Set the width attribute
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }

    /// Set the height attribute
    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }

    /// Set extra class names
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub(crate) fn render(&self, skin: Skin) -> String {
        let base = match skin {
            Skin::Bootstrap5 => "img-fluid",
            Skin::Purecss => "pure-img",
        };
        let mut attrs = format!(
            r#"src="{}" alt="{}""#,
            escape_attr(&self.src),
            escape_attr(&self.alt)
        );
        if !self.width.is_empty() {
            attrs.push_str(&format!(r#" width="{}""#, escape_attr(&self.width)));
        }
        if !self.height.is_empty() {
            attrs.push_str(&format!(r#" height="{}""#, escape_attr(&self.height)));
        }
        format!(
            r#"<img {} class="{}" />"#,
            attrs,
            class_list([base, self.class.as_str()])
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_class_per_skin() {
        let img = Image::new("logo.png").alt("Logo");
        assert!(img.render(Skin::Bootstrap5).contains("img-fluid"));
        assert!(img.render(Skin::Purecss).contains("pure-img"));
    }

    #[test]
    fn test_dimensions_omitted_when_empty() {
        let html = Image::new("logo.png").render(Skin::Bootstrap5);
        assert!(!html.contains("width="));
        assert!(!html.contains("height="));
    }
}
