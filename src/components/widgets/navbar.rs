//! Navbar Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::helpers::escape::{escape_attr, escape_text};
use crate::skin::Skin;

/// Navbar orientation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarType {
    #[default]
    Horizontal,
    Vertical,
}

/// One navigation entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavItem {
    /// Anchor id attribute, omitted when empty
    #[serde(default)]
    pub id: String,
    pub text: String,
    pub href: String,
    #[serde(default)]
    pub active: bool,
}

impl NavItem {
    /// Create a navigation entry
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            text: text.into(),
            href: href.into(),
            active: false,
        }
    }

    /// Set the anchor id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the active state
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    fn id_attr(&self) -> String {
        if self.id.is_empty() {
            String::new()
        } else {
            format!(r#" id="{}""#, escape_attr(&self.id))
        }
    }
}

/// A navigation bar; item order is preserved
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Navbar {
    #[serde(default)]
    pub navbar_type: NavbarType,
    pub items: Vec<NavItem>,
    #[serde(default)]
    pub class: String,
}

impl Navbar {
    /// Create a navbar from its entries
    pub fn new(items: Vec<NavItem>) -> Self {
        Self {
            navbar_type: NavbarType::default(),
            items,
            class: String::new(),
        }
    }

    /// Set the orientation
    pub fn navbar_type(mut self, navbar_type: NavbarType) -> Self {
        self.navbar_type = navbar_type;
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
                let list_class = match self.navbar_type {
                    NavbarType::Horizontal => "navbar-nav",
                    NavbarType::Vertical => "navbar-nav flex-column",
                };
                let items: String = self
                    .items
                    .iter()
                    .map(|item| {
                        let link_class = if item.active {
                            "nav-link active"
                        } else {
                            "nav-link"
                        };
                        format!(
                            r#"<li class="nav-item"><a class="{}"{} href="{}">{}</a></li>"#,
                            link_class,
                            item.id_attr(),
                            escape_attr(&item.href),
                            escape_text(&item.text)
                        )
                    })
                    .collect();
                format!(
                    r#"<nav class="{}"><ul class="{}">{}</ul></nav>"#,
                    class_list(["navbar navbar-expand-lg", self.class.as_str()]),
                    list_class,
                    items
                )
            }
            Skin::Purecss => {
                let menu_class = match self.navbar_type {
                    NavbarType::Horizontal => "pure-menu pure-menu-horizontal",
                    NavbarType::Vertical => "pure-menu",
                };
                let items: String = self
                    .items
                    .iter()
                    .map(|item| {
                        let item_class = if item.active {
                            "pure-menu-item pure-menu-selected"
                        } else {
                            "pure-menu-item"
                        };
                        format!(
                            r#"<li class="{}"><a class="pure-menu-link"{} href="{}">{}</a></li>"#,
                            item_class,
                            item.id_attr(),
                            escape_attr(&item.href),
                            escape_text(&item.text)
                        )
                    })
                    .collect();
                format!(
                    r#"<div class="{}"><ul class="pure-menu-list">{}</ul></div>"#,
                    class_list([menu_class, self.class.as_str()]),
                    items
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Navbar {
        Navbar::new(vec![
            NavItem::new("Overview", "#").active(true),
            NavItem::new("Webhooks", "/webhooks"),
        ])
    }

    #[test]
    fn test_item_order_preserved() {
        let html = sample().render(Skin::Bootstrap5);
        let overview = html.find("Overview").expect("first item");
        let webhooks = html.find("Webhooks").expect("second item");
        assert!(overview < webhooks);
    }

    #[test]
    fn test_vertical_variant_classes() {
        let vertical = sample().navbar_type(NavbarType::Vertical);
        assert!(vertical.render(Skin::Bootstrap5).contains("flex-column"));
        assert!(!vertical.render(Skin::Purecss).contains("pure-menu-horizontal"));
    }

    #[test]
    fn test_active_marker_per_skin() {
        assert!(sample().render(Skin::Bootstrap5).contains("nav-link active"));
        assert!(sample().render(Skin::Purecss).contains("pure-menu-selected"));
    }

    #[test]
    fn test_empty_id_omitted() {
        let html = sample().render(Skin::Bootstrap5);
        assert!(!html.contains(r#"id="""#));
    }
}
