//! Tabs Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::helpers::escape::{escape_attr, escape_text};
use crate::skin::Skin;

/// One tab: header title plus content pane
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TabItem {
    pub id: String,
    pub title: String,
    /// Pane fragment, embedded verbatim
    #[serde(default)]
    pub content: String,
    /// Marked active in both the header and the pane. Callers are
    /// responsible for keeping at most one item active; nothing is enforced.
    #[serde(default)]
    pub active: bool,
}

impl TabItem {
    /// Create a tab from its id, header title and pane fragment
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            active: false,
        }
    }

    /// Set the active state
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// A tab header list with matching content panes, in the same order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tabs {
    pub id: String,
    pub items: Vec<TabItem>,
    #[serde(default)]
    pub class: String,
}

impl Tabs {
    /// Create a tab set from its container id and items
    pub fn new(id: impl Into<String>, items: Vec<TabItem>) -> Self {
        Self {
            id: id.into(),
            items,
            class: String::new(),
        }
    }

    /// Set extra class names on the header list
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub(crate) fn render(&self, skin: Skin) -> String {
        match skin {
            Skin::Bootstrap5 => {
                let headers: String = self
                    .items
                    .iter()
                    .map(|item| {
                        let link_class = if item.active {
                            "nav-link active"
                        } else {
                            "nav-link"
                        };
                        format!(
                            r##"<li class="nav-item" role="presentation"><button class="{}" id="{id}-tab" data-bs-toggle="tab" data-bs-target="#{id}" type="button" role="tab">{}</button></li>"##,
                            link_class,
                            escape_text(&item.title),
                            id = escape_attr(&item.id),
                        )
                    })
                    .collect();
                let panes: String = self
                    .items
                    .iter()
                    .map(|item| {
                        let pane_class = if item.active {
                            "tab-pane fade show active"
                        } else {
                            "tab-pane fade"
                        };
                        format!(
                            r#"<div class="{}" id="{}" role="tabpanel">{}</div>"#,
                            pane_class,
                            escape_attr(&item.id),
                            item.content
                        )
                    })
                    .collect();
                format!(
                    r#"<ul class="{}" id="{id}" role="tablist">{}</ul><div class="tab-content" id="{id}-content">{}</div>"#,
                    class_list(["nav nav-tabs", self.class.as_str()]),
                    headers,
                    panes,
                    id = escape_attr(&self.id),
                )
            }
            Skin::Purecss => {
                let headers: String = self
                    .items
                    .iter()
                    .map(|item| {
                        let item_class = if item.active {
                            "pure-menu-item pure-menu-selected"
                        } else {
                            "pure-menu-item"
                        };
                        format!(
                            r##"<li class="{}"><a href="#{}" class="pure-menu-link">{}</a></li>"##,
                            item_class,
                            escape_attr(&item.id),
                            escape_text(&item.title)
                        )
                    })
                    .collect();
                let panes: String = self
                    .items
                    .iter()
                    .map(|item| {
                        let pane_class = if item.active {
                            "custom-tab-pane active"
                        } else {
                            "custom-tab-pane"
                        };
                        format!(
                            r#"<div class="{}" id="{}">{}</div>"#,
                            pane_class,
                            escape_attr(&item.id),
                            item.content
                        )
                    })
                    .collect();
                format!(
                    r#"<div class="{}" id="{id}"><ul class="pure-menu-list">{}</ul></div><div class="custom-tab-content" id="{id}-content">{}</div>"#,
                    class_list(["pure-menu pure-menu-horizontal", self.class.as_str()]),
                    headers,
                    panes,
                    id = escape_attr(&self.id),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tabs {
        Tabs::new(
            "main-tabs",
            vec![
                TabItem::new("overview", "Overview", "<p>o</p>").active(true),
                TabItem::new("settings", "Settings", "<p>s</p>"),
            ],
        )
    }

    #[test]
    fn test_header_and_pane_order_match() {
        let html = sample().render(Skin::Bootstrap5);
        let first_header = html.find("Overview").expect("first header");
        let second_header = html.find("Settings").expect("second header");
        let first_pane = html.find("<p>o</p>").expect("first pane");
        let second_pane = html.find("<p>s</p>").expect("second pane");
        assert!(first_header < second_header);
        assert!(first_pane < second_pane);
    }

    #[test]
    fn test_only_flagged_items_active() {
        let html = sample().render(Skin::Bootstrap5);
        assert_eq!(html.matches("nav-link active").count(), 1);
        assert_eq!(html.matches("show active").count(), 1);
    }

    #[test]
    fn test_purecss_uses_menu_vocabulary() {
        let html = sample().render(Skin::Purecss);
        assert!(html.contains("pure-menu-selected"));
        assert!(html.contains("custom-tab-pane active"));
    }
}
