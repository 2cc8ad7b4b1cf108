use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    foundation::color::Rgba8,
    model::shorthand::{LengthPair, PositionSpec, RadiusSpec},
};

/// One stop of a linear gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient axis in `[0, 1]`.
    pub offset: f32,
    pub color: Rgba8,
}

/// Stop-indexed gradient, written in options as `{"0": "#fff", "0.5": "red", "1": "#000"}`.
///
/// Stops are kept sorted by offset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Rgba8>",
    into = "BTreeMap<String, Rgba8>"
)]
pub struct GradientStops(Vec<GradientStop>);

impl GradientStops {
    pub fn new(mut stops: Vec<GradientStop>) -> Self {
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Self(stops)
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.0
    }
}

impl TryFrom<BTreeMap<String, Rgba8>> for GradientStops {
    type Error = String;

    fn try_from(value: BTreeMap<String, Rgba8>) -> Result<Self, Self::Error> {
        let mut stops = Vec::with_capacity(value.len());
        for (key, color) in value {
            let offset = key
                .trim()
                .parse::<f32>()
                .map_err(|_| format!("gradient stop key \"{key}\" is not a number"))?;
            if !(0.0..=1.0).contains(&offset) {
                return Err(format!("gradient stop {offset} is outside [0, 1]"));
            }
            stops.push(GradientStop { offset, color });
        }
        if stops.is_empty() {
            return Err("gradient needs at least one stop".to_owned());
        }
        Ok(Self::new(stops))
    }
}

impl From<GradientStops> for BTreeMap<String, Rgba8> {
    fn from(value: GradientStops) -> Self {
        value
            .0
            .into_iter()
            .map(|s| (s.offset.to_string(), s.color))
            .collect()
    }
}

/// A fill color: solid, or a stop-indexed linear gradient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FillSpec {
    Solid(Rgba8),
    Gradient(GradientStops),
}

impl Default for FillSpec {
    fn default() -> Self {
        Self::Solid(Rgba8::BLACK)
    }
}

impl From<Rgba8> for FillSpec {
    fn from(value: Rgba8) -> Self {
        Self::Solid(value)
    }
}

/// Axis of a background gradient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientDirection {
    /// `(0, 0) -> (width, 0)`.
    #[default]
    Horizontal,
    /// `(0, 0) -> (0, height)`.
    Vertical,
    /// `(0, 0) -> (width, height)`.
    Diagonal,
}

/// Base used for unsized background images and percentage sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// The drawing surface box.
    #[default]
    Ctx,
    /// The image's natural size.
    Img,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<FillSpec>,
    pub direction: GradientDirection,
    /// Image source handed to the image loader.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<LengthPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionSpec>,
    pub fill: FillMode,
}

impl BackgroundStyle {
    /// Image source, ignoring empty strings.
    pub fn image_source(&self) -> Option<&str> {
        self.image.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.image_source().is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BorderStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba8>,
    pub width: f64,
    pub radius: RadiusSpec,
}

#[cfg(test)]
#[path = "../../tests/unit/model/style.rs"]
mod tests;
