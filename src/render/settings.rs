use serde::{Deserialize, Serialize};

use crate::layout::text::TextMeasurement;

/// Environment variable selecting [`TextMeasurement`] (`char-class` or `font-advance`).
pub const TEXT_MEASUREMENT_ENV: &str = "CANVAS_GRAPHICS_TEXT_MEASUREMENT";
/// Environment variable overriding the default font family.
pub const DEFAULT_FONT_ENV: &str = "CANVAS_GRAPHICS_DEFAULT_FONT";

/// Renderer-wide knobs that are not part of the per-call options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderSettings {
    pub text_measurement: TextMeasurement,
    /// Family used when a font style names none.
    pub default_font_family: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            text_measurement: TextMeasurement::CharClass,
            default_font_family: "sans-serif".to_owned(),
        }
    }
}

impl RenderSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns. Invalid values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut out = Self::default();

        if let Some(raw) = lookup(TEXT_MEASUREMENT_ENV) {
            match raw.parse::<TextMeasurement>() {
                Ok(m) => out.text_measurement = m,
                Err(e) => tracing::warn!(var = TEXT_MEASUREMENT_ENV, error = %e, "ignoring"),
            }
        }
        if let Some(family) = lookup(DEFAULT_FONT_ENV) {
            let family = family.trim();
            if !family.is_empty() {
                out.default_font_family = family.to_owned();
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/settings.rs"]
mod tests;
