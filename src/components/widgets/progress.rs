//! Progress Bar Component

use serde::{Deserialize, Serialize};
use snafu::ensure;

use crate::error::{InvalidSnafu, Result};
use crate::helpers::class::class_list;
use crate::skin::Skin;

/// A progress bar at `value / max` of its width.
///
/// Rendering fails with [`crate::Error::Invalid`] when `max` is zero; the
/// width is otherwise unclamped, so callers keep `value` within `0..=max`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressBar {
    pub value: f64,
    pub max: f64,
    #[serde(default)]
    pub class: String,
}

impl ProgressBar {
    /// Create a progress bar at the given position
    pub fn new(value: f64, max: f64) -> Self {
        Self {
            value,
            max,
            class: String::new(),
        }
    }

    /// Set extra class names
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub(crate) fn render(&self, skin: Skin) -> Result<String> {
        ensure!(
            self.max != 0.0,
            InvalidSnafu {
                message: "progress bar max must be non-zero".to_string(),
            }
        );
        let percent = format_number(self.value / self.max * 100.0);
        let html = match skin {
            Skin::Bootstrap5 => format!(
                r#"<div class="{}"><div class="progress-bar" role="progressbar" style="width: {}%" aria-valuenow="{}" aria-valuemin="0" aria-valuemax="{}"></div></div>"#,
                class_list(["progress", self.class.as_str()]),
                percent,
                format_number(self.value),
                format_number(self.max)
            ),
            Skin::Purecss => format!(
                r#"<div class="{}"><div class="custom-progress-value" style="width: {}%"></div></div>"#,
                class_list(["custom-progress", self.class.as_str()]),
                percent
            ),
        };
        Ok(html)
    }
}

/// Format with up to two decimal places, trailing zeros trimmed
fn format_number(n: f64) -> String {
    let s = format!("{n:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_half_is_fifty_percent() {
        let html = ProgressBar::new(50.0, 100.0)
            .render(Skin::Bootstrap5)
            .expect("valid max");
        assert!(html.contains("width: 50%"));
        assert!(html.contains(r#"aria-valuenow="50""#));
    }

    #[test]
    fn test_fractional_percent_trimmed() {
        let html = ProgressBar::new(1.0, 3.0)
            .render(Skin::Purecss)
            .expect("valid max");
        assert!(html.contains("width: 33.33%"));
    }

    #[test]
    fn test_zero_max_fails() {
        let err = ProgressBar::new(0.0, 0.0)
            .render(Skin::Bootstrap5)
            .expect_err("zero max must fail");
        assert!(matches!(err, Error::Invalid { .. }));
    }

    #[test]
    fn test_unclamped_overflow() {
        let html = ProgressBar::new(150.0, 100.0)
            .render(Skin::Bootstrap5)
            .expect("valid max");
        assert!(html.contains("width: 150%"));
    }
}
