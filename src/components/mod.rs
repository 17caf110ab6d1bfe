//! Components - Render Records and Skin Providers
//!
//! Pure markup components: each record maps to one HTML fragment, no I/O and
//! no shared state. Providers group the operations per capability and carry
//! the skin tag they dispatch on.

pub mod form;
pub mod layout;
pub mod utilities;
pub mod widgets;
