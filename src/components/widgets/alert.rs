//! Alert Component

use serde::{Deserialize, Serialize};

use crate::helpers::class::class_list;
use crate::skin::Skin;

/// Alert severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Success,
    #[default]
    Info,
    Warning,
    Danger,
}

impl AlertType {
    fn as_str(self) -> &'static str {
        match self {
            AlertType::Success => "success",
            AlertType::Info => "info",
            AlertType::Warning => "warning",
            AlertType::Danger => "danger",
        }
    }
}

/// An alert box with a severity class
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Alert {
    /// Body fragment, embedded verbatim
    pub content: String,
    #[serde(default)]
    pub alert_type: AlertType,
    #[serde(default)]
    pub class: String,
}

impl Alert {
    /// Create an alert around a fragment
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Set the severity
    pub fn alert_type(mut self, alert_type: AlertType) -> Self {
        self.alert_type = alert_type;
        self
    }

    /// Set extra class names
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub(crate) fn render(&self, skin: Skin) -> String {
        match skin {
            Skin::Bootstrap5 => {
                let severity = format!("alert-{}", self.alert_type.as_str());
                format!(
                    r#"<div class="{}" role="alert">{}</div>"#,
                    class_list(["alert", severity.as_str(), self.class.as_str()]),
                    self.content
                )
            }
            Skin::Purecss => {
                let severity = format!("custom-alert-{}", self.alert_type.as_str());
                format!(
                    r#"<div class="{}">{}</div>"#,
                    class_list(["custom-alert", severity.as_str(), self.class.as_str()]),
                    self.content
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_class() {
        let html = Alert::new("saved")
            .alert_type(AlertType::Success)
            .render(Skin::Bootstrap5);
        assert_eq!(html, r#"<div class="alert alert-success" role="alert">saved</div>"#);
    }

    #[test]
    fn test_default_severity_is_info() {
        assert!(Alert::new("x").render(Skin::Purecss).contains("custom-alert-info"));
    }
}
