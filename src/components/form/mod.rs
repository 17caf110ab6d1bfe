//! Form Components
//!
//! Form controls: fieldset, field, label, textarea, checkbox, select. Each
//! operation maps a small attribute record to one self-contained fragment;
//! there is no cross-field validation.

mod checkbox;
mod field;
mod fieldset;
mod label;
mod select;
mod textarea;

pub use checkbox::Checkbox;
pub use field::Field;
pub use fieldset::Fieldset;
pub use label::Label;
pub use select::{Select, SelectOption};
pub use textarea::Textarea;

use crate::skin::Skin;

/// Form provider for one skin
#[derive(Debug, Clone, Copy)]
pub struct Form {
    skin: Skin,
}

impl Form {
    pub(crate) fn new(skin: Skin) -> Self {
        Self { skin }
    }

    /// Render a fieldset with a legend
    pub fn fieldset(&self, fieldset: &Fieldset) -> String {
        fieldset.render(self.skin)
    }

    /// Render an input field
    pub fn field(&self, field: &Field) -> String {
        field.render(self.skin)
    }

    /// Render a label bound to an input
    pub fn label(&self, label: &Label) -> String {
        label.render(self.skin)
    }

    /// Render a textarea
    pub fn textarea(&self, textarea: &Textarea) -> String {
        textarea.render(self.skin)
    }

    /// Render a checkbox
    pub fn checkbox(&self, checkbox: &Checkbox) -> String {
        checkbox.render(self.skin)
    }

    /// Render a select with its options
    pub fn select(&self, select: &Select) -> String {
        select.render(self.skin)
    }
}
