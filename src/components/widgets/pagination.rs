//! Pagination Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::skin::Skin;

/// Sequential page links numbered `1..=total_pages`.
///
/// The link equal to `current_page` is marked active. No bounds checking: a
/// current page outside `1..=total_pages` simply marks nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub class: String,
}

impl Pagination {
    /// Create pagination for the given position
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
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
                let links: String = (1..=self.total_pages)
                    .map(|page| {
                        let item_class = if page == self.current_page {
                            "page-item active"
                        } else {
                            "page-item"
                        };
                        format!(
                            r##"<li class="{item_class}"><a class="page-link" href="#">{page}</a></li>"##
                        )
                    })
                    .collect();
                format!(
                    r#"<nav><ul class="{}">{}</ul></nav>"#,
                    class_list(["pagination", self.class.as_str()]),
                    links
                )
            }
            Skin::Purecss => {
                let links: String = (1..=self.total_pages)
                    .map(|page| {
                        let link_class = if page == self.current_page {
                            "pure-button active"
                        } else {
                            "pure-button"
                        };
                        format!(
                            r##"<li><a class="{link_class}" href="#">{page}</a></li>"##
                        )
                    })
                    .collect();
                format!(
                    r#"<ul class="{}">{}</ul>"#,
                    class_list(["pure-paginator", self.class.as_str()]),
                    links
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_pages_second_active() {
        let html = Pagination::new(2, 3).render(Skin::Bootstrap5);
        assert_eq!(html.matches("page-item").count(), 3);
        assert_eq!(html.matches("page-item active").count(), 1);
        assert!(html.contains(r##"<li class="page-item active"><a class="page-link" href="#">2</a></li>"##));
    }

    #[test]
    fn test_out_of_range_current_marks_nothing() {
        let html = Pagination::new(7, 3).render(Skin::Purecss);
        assert!(!html.contains("active"));
        assert_eq!(html.matches("<li>").count(), 3);
    }

    #[test]
    fn test_zero_pages_renders_empty_list() {
        let html = Pagination::new(1, 0).render(Skin::Bootstrap5);
        assert!(!html.contains("<li"));
    }
}
