//! Skin - Supported CSS Frameworks

use serde::{Deserialize, Serialize};

use crate::cdn;

/// A CSS framework skin.
///
/// The closed set of frameworks this crate can emit class vocabulary for.
/// Every render operation dispatches on this tag with a `match`; adding a
/// framework means adding a variant here and an arm per operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skin {
    /// Bootstrap 5.3
    #[default]
    Bootstrap5,
    /// PureCSS 3.0
    Purecss,
}

impl Skin {
    /// Framework display name, used as the default document title
    pub fn title(self) -> &'static str {
        match self {
            Skin::Bootstrap5 => "Bootstrap 5",
            Skin::Purecss => "Purecss",
        }
    }

    /// Stylesheet link tags for this framework
    pub fn stylesheet_tags(self) -> &'static str {
        match self {
            Skin::Bootstrap5 => cdn::BOOTSTRAP_5_CSS,
            Skin::Purecss => cdn::PURECSS,
        }
    }

    /// Trailing script tags for this framework, empty when it ships none
    pub fn script_tags(self) -> &'static str {
        match self {
            Skin::Bootstrap5 => cdn::BOOTSTRAP_5_JS,
            Skin::Purecss => "",
        }
    }
}
