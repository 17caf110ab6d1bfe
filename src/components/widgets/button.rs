//! Button Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::helpers::escape::{escape_attr, escape_text};
use crate::skin::Skin;

/// Button `type` attribute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// A button with an inline click handler reference.
///
/// `on_click` names a handler in the page's script; this layer only embeds
/// the reference, it never invokes anything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Button {
    #[serde(default)]
    pub button_type: ButtonType,
    pub text: String,
    /// Inline handler expression, omitted when empty
    #[serde(default)]
    pub on_click: String,
    #[serde(default)]
    pub class: String,
}

impl Button {
    /// Create a button with the given label
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the `type` attribute
    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = button_type;
        self
    }

    /// Set the inline click handler expression
    pub fn on_click(mut self, on_click: impl Into<String>) -> Self {
        self.on_click = on_click.into();
        self
    }

    /// Set extra class names
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub(crate) fn render(&self, skin: Skin) -> String {
        let base = match skin {
            Skin::Bootstrap5 => "btn",
            Skin::Purecss => "pure-button",
        };
        let onclick = if self.on_click.is_empty() {
            String::new()
        } else {
            format!(r#" onclick="{}""#, escape_attr(&self.on_click))
        };
        format!(
            r#"<button type="{}" class="{}"{}>{}</button>"#,
            self.button_type.as_str(),
            class_list([base, self.class.as_str()]),
            onclick,
            escape_text(&self.text)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_button() {
        let html = Button::new("Enable")
            .on_click("toggleWebhook('Gatsby')")
            .class("toggle-button")
            .render(Skin::Bootstrap5);
        assert_eq!(
            html,
            r#"<button type="button" class="btn toggle-button" onclick="toggleWebhook(&#39;Gatsby&#39;)">Enable</button>"#
        );
    }

    #[test]
    fn test_onclick_omitted_when_empty() {
        let html = Button::new("Save").render(Skin::Purecss);
        assert!(!html.contains("onclick"));
        assert!(html.contains("pure-button"));
    }

    #[test]
    fn test_submit_type() {
        let html = Button::new("Go")
            .button_type(ButtonType::Submit)
            .render(Skin::Bootstrap5);
        assert!(html.contains(r#"type="submit""#));
    }
}
