use serde::{Deserialize, Serialize};

use crate::{
    foundation::color::Rgba8,
    model::{
        shorthand::{EdgeInsetSpec, SizePair},
        style::{BackgroundStyle, BorderStyle, FillSpec},
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical placement of the text block inside a fixed-height box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Outline stroked around every character.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStroke {
    pub color: Rgba8,
    pub width: f64,
}

impl Default for TextStroke {
    fn default() -> Self {
        Self {
            color: Rgba8::BLACK,
            width: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextShadow {
    pub color: Rgba8,
    pub blur: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for TextShadow {
    fn default() -> Self {
        Self {
            color: Rgba8::BLACK,
            blur: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

/// One shadow or a list of shadows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShadowSpec {
    One(TextShadow),
    Many(Vec<TextShadow>),
}

impl ShadowSpec {
    pub fn as_slice(&self) -> &[TextShadow] {
        match self {
            Self::One(s) => std::slice::from_ref(s),
            Self::Many(v) => v.as_slice(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontStyle {
    pub size: f64,
    pub style: String,
    pub variant: String,
    pub weight: String,
    /// Family list as in CSS; `None` uses the renderer's default family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    pub line_height: f64,
    pub row_gap: f64,
    pub letter_spacing: f64,
    pub color: FillSpec,
    pub text_align: TextAlign,
    pub border: TextStroke,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowSpec>,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            size: 12.0,
            style: "normal".to_owned(),
            variant: "normal".to_owned(),
            weight: "normal".to_owned(),
            family: None,
            line_height: 1.0,
            row_gap: 0.0,
            letter_spacing: 0.0,
            color: FillSpec::Solid(Rgba8::BLACK),
            text_align: TextAlign::Center,
            border: TextStroke::default(),
            shadow: None,
        }
    }
}

impl FontStyle {
    pub fn shadows(&self) -> &[TextShadow] {
        self.shadow.as_ref().map(ShadowSpec::as_slice).unwrap_or(&[])
    }
}

/// Text content: one line or a sequence of lines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextContent {
    One(String),
    Lines(Vec<String>),
}

impl TextContent {
    /// Lines with empty entries removed.
    pub fn lines(&self) -> Vec<&str> {
        let all: Vec<&str> = match self {
            Self::One(s) => vec![s.as_str()],
            Self::Lines(v) => v.iter().map(String::as_str).collect(),
        };
        all.into_iter().filter(|l| !l.is_empty()).collect()
    }
}

impl From<&str> for TextContent {
    fn from(value: &str) -> Self {
        Self::One(value.to_owned())
    }
}

impl From<Vec<&str>> for TextContent {
    fn from(value: Vec<&str>) -> Self {
        Self::Lines(value.into_iter().map(str::to_owned).collect())
    }
}

/// Options of the text panel renderer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextGraphicsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<TextContent>,
    pub border_style: BorderStyle,
    pub background_style: BackgroundStyle,
    pub font_style: FontStyle,
    pub padding: EdgeInsetSpec,
    pub size: SizePair,
    pub align: VerticalAlign,
}

impl TextGraphicsOptions {
    pub fn lines(&self) -> Vec<&str> {
        self.content
            .as_ref()
            .map(TextContent::lines)
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/text.rs"]
mod tests;
