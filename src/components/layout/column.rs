//! Column Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::skin::Skin;

/// Column width on the 24-share grid scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnSize {
    /// Auto / full-width behavior
    #[default]
    Auto,
    /// A share of the 24-column grid; values outside `1..=24` are clamped
    Share(u8),
}

impl ColumnSize {
    /// Bootstrap class for this size
    fn bootstrap_class(self) -> String {
        match self {
            ColumnSize::Auto => "col".to_string(),
            ColumnSize::Share(n) => format!("col-{}", n.clamp(1, 24)),
        }
    }

    /// PureCSS class for this size.
    ///
    /// Pure uses fraction classes, so grid shares map through a fixed lookup
    /// table (share 6 of 24 is a quarter, `pure-u-1-4`). Shares without a
    /// clean fraction render full width.
    fn purecss_class(self) -> String {
        let fraction = match self {
            ColumnSize::Auto => "1",
            ColumnSize::Share(1) => "1-24",
            ColumnSize::Share(2) => "1-12",
            ColumnSize::Share(3) => "1-8",
            ColumnSize::Share(4) => "1-6",
            ColumnSize::Share(6) => "1-4",
            ColumnSize::Share(8) => "1-3",
            ColumnSize::Share(12) => "1-2",
            ColumnSize::Share(24) => "1",
            ColumnSize::Share(_) => "1",
        };
        format!("pure-u-{fraction}")
    }
}

/// A single column inside a row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Column {
    /// Width share; missing size means auto/full-width
    #[serde(default)]
    pub size: ColumnSize,
    /// Extra class names
    #[serde(default)]
    pub class: String,
    /// Inner HTML fragment, embedded verbatim
    #[serde(default)]
    pub content: String,
}

impl Column {
    /// Create a column around a fragment
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Set the width share
    pub fn size(mut self, size: ColumnSize) -> Self {
        self.size = size;
        self
    }

    /// Set extra class names
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub(crate) fn render(&self, skin: Skin) -> String {
        let base = match skin {
            Skin::Bootstrap5 => self.size.bootstrap_class(),
            Skin::Purecss => self.size.purecss_class(),
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
    fn test_auto_column() {
        assert_eq!(
            Column::new("x").render(Skin::Bootstrap5),
            r#"<div class="col">x</div>"#
        );
        assert_eq!(
            Column::new("x").render(Skin::Purecss),
            r#"<div class="pure-u-1">x</div>"#
        );
    }

    #[test]
    fn test_share_maps_per_skin() {
        let col = Column::new("x").size(ColumnSize::Share(6));
        assert!(col.render(Skin::Bootstrap5).contains("col-6"));
        assert!(col.render(Skin::Purecss).contains("pure-u-1-4"));
    }

    #[test]
    fn test_unmapped_share_is_full_width_on_purecss() {
        let col = Column::new("x").size(ColumnSize::Share(5));
        assert!(col.render(Skin::Purecss).contains(r#"class="pure-u-1""#));
    }

    #[test]
    fn test_share_clamped_for_bootstrap() {
        let col = Column::new("x").size(ColumnSize::Share(99));
        assert!(col.render(Skin::Bootstrap5).contains("col-24"));
    }
}
