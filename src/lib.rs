//! webskin - HTML Markup Generation with Swappable CSS Framework Skins
//!
//! Builds HTML fragments for common UI widgets (containers, forms, embeds,
//! composite widgets, full documents) from plain records. A [`Framework`]
//! facade groups one provider per capability for a chosen [`Skin`]; the same
//! inputs render to Bootstrap 5 or PureCSS class vocabulary. All render
//! operations are pure string functions with no I/O and no shared state.

pub mod cdn;
pub mod components;
pub mod document;
pub mod error;
pub mod framework;
pub mod helpers;
pub mod skin;

pub use error::{Error, Result};
pub use framework::Framework;
pub use skin::Skin;
