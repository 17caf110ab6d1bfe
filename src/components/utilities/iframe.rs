//! Iframe Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::helpers::escape::escape_attr;
use crate::skin::Skin;

/// An iframe embed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Iframe {
    pub src: String,
    /// Defaults to full width
    #[serde(default = "default_width")]
    pub width: String,
    /// Omitted when empty
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub class: String,
    #[serde(default = "default_frameborder")]
    pub frameborder: String,
    /// `allow` feature policy, omitted when empty
    #[serde(default)]
    pub allow: String,
    #[serde(default)]
    pub allowfullscreen: bool,
}

fn default_width() -> String {
    "100%".to_string()
}

fn default_frameborder() -> String {
    "0".to_string()
}

impl Iframe {
    /// Create an iframe for the given source url
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            width: default_width(),
            height: String::new(),
            class: String::new(),
            frameborder: default_frameborder(),
            allow: String::new(),
            allowfullscreen: false,
        }
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

    /// Set the frameborder attribute
    pub fn frameborder(mut self, frameborder: impl Into<String>) -> Self {
        self.frameborder = frameborder.into();
        self
    }

    /// Set the `allow` feature policy
    pub fn allow(mut self, allow: impl Into<String>) -> Self {
        self.allow = allow.into();
        self
    }

    /// Allow fullscreen mode
    pub fn allowfullscreen(mut self) -> Self {
        self.allowfullscreen = true;
        self
    }

    // Neither framework styles iframes; the markup is skin-independent.
    pub(crate) fn render(&self, _skin: Skin) -> String {
        let mut attrs = format!(
            r#"src="{}" width="{}""#,
            escape_attr(&self.src),
            escape_attr(&self.width)
        );
        if !self.height.is_empty() {
            attrs.push_str(&format!(r#" height="{}""#, escape_attr(&self.height)));
        }
        attrs.push_str(&format!(
            r#" frameborder="{}""#,
            escape_attr(&self.frameborder)
        ));
        if !self.allow.is_empty() {
            attrs.push_str(&format!(r#" allow="{}""#, escape_attr(&self.allow)));
        }
        if self.allowfullscreen {
            attrs.push_str(" allowfullscreen");
        }
        format!(
            r#"<iframe {} class="{}"></iframe>"#,
            attrs,
            class_list([self.class.as_str()])
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let html = Iframe::new("https://example.com").render(Skin::Bootstrap5);
        assert_eq!(
            html,
            r#"<iframe src="https://example.com" width="100%" frameborder="0" class=""></iframe>"#
        );
    }

    #[test]
    fn test_optional_attributes() {
        let html = Iframe::new("https://example.com/embed")
            .height("315")
            .allow("autoplay; fullscreen")
            .allowfullscreen()
            .render(Skin::Purecss);
        assert!(html.contains(r#"height="315""#));
        assert!(html.contains(r#"allow="autoplay; fullscreen""#));
        assert!(html.contains(" allowfullscreen"));
    }
}
