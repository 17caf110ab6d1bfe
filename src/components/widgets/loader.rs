//! Loader Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::skin::Skin;

/// Loading indicator variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderType {
    #[default]
    Spinner,
    Grow,
}

/// A loading indicator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Loader {
    #[serde(default)]
    pub loader_type: LoaderType,
    #[serde(default)]
    pub class: String,
}

impl Loader {
    /// Create a loader of the given variant
    pub fn new(loader_type: LoaderType) -> Self {
        Self {
            loader_type,
            class: String::new(),
        }
    }

    /// Set extra class names
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub(crate) fn render(&self, skin: Skin) -> String {
        match skin {
            Skin::Bootstrap5 => {
                let base = match self.loader_type {
                    LoaderType::Spinner => "spinner-border",
                    LoaderType::Grow => "spinner-grow",
                };
                format!(
                    r#"<div class="{}" role="status"><span class="visually-hidden">Loading...</span></div>"#,
                    class_list([base, self.class.as_str()])
                )
            }
            Skin::Purecss => {
                let variant = match self.loader_type {
                    LoaderType::Spinner => "custom-loader-spinner",
                    LoaderType::Grow => "custom-loader-grow",
                };
                format!(
                    r#"<div class="{}"></div>"#,
                    class_list(["custom-loader", variant, self.class.as_str()])
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_selects_class() {
        assert!(Loader::new(LoaderType::Spinner)
            .render(Skin::Bootstrap5)
            .contains("spinner-border"));
        assert!(Loader::new(LoaderType::Grow)
            .render(Skin::Bootstrap5)
            .contains("spinner-grow"));
        assert!(Loader::new(LoaderType::Grow)
            .render(Skin::Purecss)
            .contains("custom-loader-grow"));
    }
}
