//! Container Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::skin::Skin;

/// Container width keyword
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerSize {
    Sm,
    Md,
    Lg,
    #[default]
    Xl,
    Xxl,
}

impl ContainerSize {
    fn suffix(self) -> &'static str {
        match self {
            ContainerSize::Sm => "sm",
            ContainerSize::Md => "md",
            ContainerSize::Lg => "lg",
            ContainerSize::Xl => "xl",
            ContainerSize::Xxl => "xxl",
        }
    }
}

/// A top-level structural container around a pre-rendered fragment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Container {
    /// Width keyword; ignored when `fluid` is set
    #[serde(default)]
    pub size: ContainerSize,
    /// Span the full viewport width
    #[serde(default)]
    pub fluid: bool,
    /// Extra class names
    #[serde(default)]
    pub class: String,
    /// Inner HTML fragment, embedded verbatim
    #[serde(default)]
    pub content: String,
}

impl Container {
    /// Create a container around a fragment
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Set the width keyword
    pub fn size(mut self, size: ContainerSize) -> Self {
        self.size = size;
        self
    }

    /// Make the container fluid
    pub fn fluid(mut self) -> Self {
        self.fluid = true;
        self
    }

    /// Set extra class names
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub(crate) fn render(&self, skin: Skin) -> String {
        let base = match skin {
            Skin::Bootstrap5 => {
                if self.fluid {
                    "container-fluid".to_string()
                } else {
                    format!("container-{}", self.size.suffix())
                }
            }
            // PureCSS has no dedicated container class; fluid falls back to
            // the grid wrapper
            Skin::Purecss => {
                if self.fluid { "pure-g" } else { "custom-container" }.to_string()
            }
        };
        format!(
            r#"<div class="{}">{}</div>"#,
            class_list([base.as_str(), self.class.as_str()]),
            self.content
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_defaults_to_xl() {
        let html = Container::new("x").render(Skin::Bootstrap5);
        assert_eq!(html, r#"<div class="container-xl">x</div>"#);
    }

    #[test]
    fn test_fluid_overrides_size() {
        let html = Container::new("x")
            .size(ContainerSize::Sm)
            .fluid()
            .render(Skin::Bootstrap5);
        assert!(html.contains("container-fluid"));
        assert!(!html.contains("container-sm"));
    }

    #[test]
    fn test_purecss_container() {
        let html = Container::new("x").class("side-nav").render(Skin::Purecss);
        assert_eq!(html, r#"<div class="custom-container side-nav">x</div>"#);
    }
}
