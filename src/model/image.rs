use serde::{Deserialize, Serialize};

use crate::model::{
    shorthand::{EdgeInsetSpec, SizeSpec},
    style::{BackgroundStyle, BorderStyle},
};

/// Stacking axis of an image strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Vertical,
    Horizontal,
}

/// Cross-axis alignment of each image inside the strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImgAlign {
    Start,
    #[default]
    Center,
    End,
}

/// An image entry, either a bare source or a sized item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageSource {
    Url(String),
    Item(ImageItem),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageItem {
    pub url: String,
    /// Zero or missing falls back to the natural width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default)]
    pub z_index: i32,
}

impl ImageSource {
    pub fn url(&self) -> &str {
        match self {
            Self::Url(u) => u,
            Self::Item(item) => &item.url,
        }
    }

    pub fn z_index(&self) -> i32 {
        match self {
            Self::Url(_) => 0,
            Self::Item(item) => item.z_index,
        }
    }

    /// Explicit `(width, height)` overrides; zero counts as unset.
    pub fn size_override(&self) -> (Option<f64>, Option<f64>) {
        fn nonzero(v: Option<f64>) -> Option<f64> {
            v.filter(|v| *v != 0.0)
        }

        match self {
            Self::Url(_) => (None, None),
            Self::Item(item) => (nonzero(item.width), nonzero(item.height)),
        }
    }
}

impl From<&str> for ImageSource {
    fn from(value: &str) -> Self {
        Self::Url(value.to_owned())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageList {
    One(ImageSource),
    Many(Vec<ImageSource>),
}

impl Default for ImageList {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl ImageList {
    /// Entries with empty sources removed. Positions in the returned list are the
    /// sequence indices used for stacking.
    pub fn sources(&self) -> Vec<&ImageSource> {
        let all: Vec<&ImageSource> = match self {
            Self::One(s) => vec![s],
            Self::Many(v) => v.iter().collect(),
        };
        all.into_iter()
            .filter(|s| !s.url().trim().is_empty())
            .collect()
    }
}

impl From<Vec<ImageSource>> for ImageList {
    fn from(value: Vec<ImageSource>) -> Self {
        Self::Many(value)
    }
}

/// Options of the image strip renderer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageGraphicsOptions {
    pub imgs: ImageList,
    pub padding: EdgeInsetSpec,
    pub direction: Direction,
    pub gap: f64,
    pub img_align: ImgAlign,
    pub width: SizeSpec,
    pub height: SizeSpec,
    pub background_style: BackgroundStyle,
    pub border_style: BorderStyle,
}

#[cfg(test)]
#[path = "../../tests/unit/model/image.rs"]
mod tests;
