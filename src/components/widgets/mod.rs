//! Widget Components
//!
//! Composite application-layer widgets built from literal markup plus
//! interpolated fields. The input contract is identical across skins; only
//! class vocabulary and nesting differ.

mod alert;
mod button;
mod card;
mod collapse;
mod loader;
mod navbar;
mod pagination;
mod popup;
mod progress;
mod tabs;

pub use alert::{Alert, AlertType};
pub use button::{Button, ButtonType};
pub use card::Card;
pub use collapse::Collapse;
pub use loader::{Loader, LoaderType};
pub use navbar::{NavItem, Navbar, NavbarType};
pub use pagination::Pagination;
pub use popup::Popup;
pub use progress::ProgressBar;
pub use tabs::{TabItem, Tabs};

use crate::error::Result;
use crate::skin::Skin;

/// Application-layer widget provider for one skin
#[derive(Debug, Clone, Copy)]
pub struct Widgets {
    skin: Skin,
}

impl Widgets {
    pub(crate) fn new(skin: Skin) -> Self {
        Self { skin }
    }

    /// Render a tab header list with matching content panes
    pub fn tabs(&self, tabs: &Tabs) -> String {
        tabs.render(self.skin)
    }

    /// Render a button with an inline click handler reference
    pub fn button(&self, button: &Button) -> String {
        button.render(self.skin)
    }

    /// Render a card
    pub fn card(&self, card: &Card) -> String {
        card.render(self.skin)
    }

    /// Render sequential page links
    pub fn pagination(&self, pagination: &Pagination) -> String {
        pagination.render(self.skin)
    }

    /// Render a vertical or horizontal navigation bar
    pub fn navbar(&self, navbar: &Navbar) -> String {
        navbar.render(self.skin)
    }

    /// Render a progress bar.
    ///
    /// The only fallible operation: a zero `max` has no defined width and
    /// yields [`crate::Error::Invalid`].
    pub fn progress_bar(&self, progress: &ProgressBar) -> Result<String> {
        progress.render(self.skin)
    }

    /// Render a loading indicator
    pub fn loader(&self, loader: &Loader) -> String {
        loader.render(self.skin)
    }

    /// Render an alert box
    pub fn alert(&self, alert: &Alert) -> String {
        alert.render(self.skin)
    }

    /// Render a popup/modal shell
    pub fn popup(&self, popup: &Popup) -> String {
        popup.render(self.skin)
    }

    /// Render a collapsible panel
    pub fn collapse(&self, collapse: &Collapse) -> String {
        collapse.render(self.skin)
    }
}
