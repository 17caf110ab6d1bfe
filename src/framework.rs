//! Framework - Skin Facade
//!
//! Groups one provider per capability for a chosen skin. Construction is
//! infallible: the skin set is closed, so there is no error path at this
//! layer. The facade holds no mutable state and render methods are pure
//! functions of their input records, so one facade value can be shared for
//! the lifetime of a rendering session.

use crate::components::form::Form;
use crate::components::layout::Layout;
use crate::components::utilities::Utilities;
use crate::components::widgets::Widgets;
use crate::document::Document;
use crate::skin::Skin;

/// One complete provider set for a CSS framework
#[derive(Debug, Clone, Copy)]
pub struct Framework {
    pub layout: Layout,
    pub form: Form,
    pub utilities: Utilities,
    pub widgets: Widgets,
    pub document: Document,
    skin: Skin,
}

impl Framework {
    /// Create the provider set for a skin
    pub fn new(skin: Skin) -> Self {
        tracing::debug!(?skin, "constructing framework facade");
        Self {
            layout: Layout::new(skin),
            form: Form::new(skin),
            utilities: Utilities::new(skin),
            widgets: Widgets::new(skin),
            document: Document::new(skin),
            skin,
        }
    }

    /// Bootstrap 5 provider set
    pub fn bootstrap5() -> Self {
        Self::new(Skin::Bootstrap5)
    }

    /// PureCSS provider set
    pub fn purecss() -> Self {
        Self::new(Skin::Purecss)
    }

    /// The skin this facade renders for
    pub fn skin(&self) -> Skin {
        self.skin
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::components::layout::{Column, ColumnSize, Grid, GridColumn, Row};
    use crate::components::widgets::{Button, NavItem, Navbar};

    #[test]
    fn test_facade_skin_is_consistent() {
        let fw = Framework::purecss();
        assert_eq!(fw.skin(), Skin::Purecss);
        assert!(fw.layout.row(&Row::new("x")).contains("pure-g"));
        assert!(fw.widgets.button(&Button::new("x")).contains("pure-button"));
    }

    /// Switching the skin changes class vocabulary, never the semantic
    /// content embedded in the output.
    #[test]
    fn test_skin_switch_preserves_semantic_content() {
        let navbar = Navbar::new(vec![
            NavItem::new("Overview", "/overview").active(true),
            NavItem::new("API Tokens", "/tokens"),
        ]);
        for fw in [Framework::bootstrap5(), Framework::purecss()] {
            let html = fw.widgets.navbar(&navbar);
            assert!(html.contains("Overview"));
            assert!(html.contains("/overview"));
            assert!(html.contains("API Tokens"));
            assert!(html.contains("/tokens"));
        }
    }

    proptest! {
        /// Every render operation is a pure function of its record.
        #[test]
        fn prop_render_is_deterministic(
            text in "[a-zA-Z0-9 ]{0,32}",
            href in "[a-z/]{0,16}",
            active in any::<bool>(),
        ) {
            for fw in [Framework::bootstrap5(), Framework::purecss()] {
                let navbar = Navbar::new(vec![NavItem::new(text.clone(), href.clone()).active(active)]);
                prop_assert_eq!(fw.widgets.navbar(&navbar), fw.widgets.navbar(&navbar));
            }
        }

        /// Grid output equals one row wrapping the concatenated columns.
        #[test]
        fn prop_grid_is_row_of_columns(
            shares in prop::collection::vec(0u8..26, 1..6),
            class in "[a-z-]{0,8}",
        ) {
            let columns: Vec<GridColumn> = shares
                .iter()
                .enumerate()
                .map(|(i, &n)| {
                    let size = if n == 0 { ColumnSize::Auto } else { ColumnSize::Share(n) };
                    GridColumn::new(size, format!("cell{i}"))
                })
                .collect();
            for fw in [Framework::bootstrap5(), Framework::purecss()] {
                let grid = fw.layout.grid(&Grid::new(columns.clone()).class(class.clone()));
                let cells: String = columns
                    .iter()
                    .map(|c| fw.layout.column(&Column::new(c.content.as_str()).size(c.size)))
                    .collect();
                let row = fw.layout.row(&Row::new(cells).class(class.clone()));
                prop_assert_eq!(grid, row);
            }
        }
    }
}
