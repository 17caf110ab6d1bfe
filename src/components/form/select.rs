//! Select Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::helpers::escape::{escape_attr, escape_text};
use crate::skin::Skin;

/// A select option: submitted value plus visible text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// A select with an ordered option list.
///
/// Every option whose value equals `selected_value` receives the `selected`
/// marker (plain string equality); zero or several matches are not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Select {
    pub name: String,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub selected_value: Option<String>,
    #[serde(default)]
    pub class: String,
}

impl Select {
    /// Create a select with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the option list
    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    /// Set the selected value
    pub fn selected_value(mut self, value: impl Into<String>) -> Self {
        self.selected_value = Some(value.into());
        self
    }

    /// Set extra class names
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub(crate) fn render(&self, skin: Skin) -> String {
        let options: String = self
            .options
            .iter()
            .map(|opt| {
                let selected = if self.selected_value.as_deref() == Some(opt.value.as_str()) {
                    " selected"
                } else {
                    ""
                };
                format!(
                    r#"<option value="{}"{}>{}</option>"#,
                    escape_attr(&opt.value),
                    selected,
                    escape_text(&opt.text)
                )
            })
            .collect();
        let base = match skin {
            Skin::Bootstrap5 => "form-select",
            Skin::Purecss => "",
        };
        format!(
            r#"<select name="{}" class="{}">{}</select>"#,
            escape_attr(&self.name),
            class_list([base, self.class.as_str()]),
            options
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Select {
        Select::new("x").options(vec![
            SelectOption::new("a", "A"),
            SelectOption::new("b", "B"),
        ])
    }

    #[test]
    fn test_marks_exactly_the_matching_option() {
        let html = sample().selected_value("b").render(Skin::Bootstrap5);
        assert!(html.contains(r#"<option value="b" selected>B</option>"#));
        assert!(html.contains(r#"<option value="a">A</option>"#));
    }

    #[test]
    fn test_no_selection_marks_nothing() {
        let html = sample().render(Skin::Purecss);
        assert!(!html.contains("selected"));
    }

    #[test]
    fn test_duplicate_values_all_marked() {
        let html = Select::new("x")
            .options(vec![
                SelectOption::new("a", "first"),
                SelectOption::new("a", "second"),
            ])
            .selected_value("a")
            .render(Skin::Bootstrap5);
        assert_eq!(html.matches(" selected").count(), 2);
    }

    #[test]
    fn test_option_order_preserved() {
        let html = sample().render(Skin::Bootstrap5);
        let a = html.find(">A<").expect("option A");
        let b = html.find(">B<").expect("option B");
        assert!(a < b);
    }
}
