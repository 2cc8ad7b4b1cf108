//! Shorthand option forms and their normalized counterparts.
//!
//! Every union accepted from user options (`number | [a, b] | [a, b, c, d]`,
//! `number | "auto" | "bgImg"`, `"50%" | 120`) is a tagged enum here and is resolved
//! exactly once by the geometry layer. Painters only ever see the resolved types.

use serde::{Deserialize, Serialize};

use crate::foundation::core::Point;

/// Four resolved edge insets in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
}

impl Edges {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    /// Grow every side by `by`.
    pub fn expanded(self, by: f64) -> Self {
        Self::new(
            self.top + by,
            self.right + by,
            self.bottom + by,
            self.left + by,
        )
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Padding shorthand.
///
/// A pair is read as `[vertical, horizontal]`, so `[a, b]` expands to
/// `top = a, right = b, bottom = a, left = b`. Both renderers share this mapping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeInsetSpec {
    Uniform(f64),
    Pair([f64; 2]),
    Quad([f64; 4]),
}

impl Default for EdgeInsetSpec {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

impl EdgeInsetSpec {
    pub fn resolve(self) -> Edges {
        match self {
            Self::Uniform(v) => Edges::uniform(v),
            Self::Pair([vertical, horizontal]) => {
                Edges::new(vertical, horizontal, vertical, horizontal)
            }
            Self::Quad([top, right, bottom, left]) => Edges::new(top, right, bottom, left),
        }
    }
}

/// Per-corner radii in `(top-left, top-right, bottom-right, bottom-left)` order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    pub fn uniform(r: f64) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }

    pub fn as_array(&self) -> [f64; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }
}

/// Corner radius shorthand: one radius or `[top-left, top-right, bottom-right, bottom-left]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RadiusSpec {
    Uniform(f64),
    Corners([f64; 4]),
}

impl Default for RadiusSpec {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

impl RadiusSpec {
    pub fn resolve(self) -> CornerRadii {
        match self {
            Self::Uniform(r) => CornerRadii::uniform(r),
            Self::Corners([top_left, top_right, bottom_right, bottom_left]) => CornerRadii {
                top_left,
                top_right,
                bottom_right,
                bottom_left,
            },
        }
    }
}

/// One box dimension before resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SizeSpec {
    /// Explicit pixel size.
    Fixed(f64),
    /// Measured from content.
    #[default]
    Auto,
    /// Natural size of the decoded background image (`"bgImg"`).
    BackgroundImage,
}

impl Serialize for SizeSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Fixed(v) => serializer.serialize_f64(*v),
            Self::Auto => serializer.serialize_str("auto"),
            Self::BackgroundImage => serializer.serialize_str("bgImg"),
        }
    }
}

impl<'de> Deserialize<'de> for SizeSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(f64),
            Str(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Num(v) => Self::Fixed(v),
            Repr::Str(s) => match s.trim() {
                "auto" => Self::Auto,
                "bgImg" => Self::BackgroundImage,
                other => match other.parse::<f64>() {
                    Ok(v) => Self::Fixed(v),
                    Err(_) => {
                        tracing::warn!(value = other, "unrecognized size keyword; using 0");
                        Self::Fixed(0.0)
                    }
                },
            },
        })
    }
}

/// Width/height shorthand: one spec for both axes or `[width, height]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizePair {
    Both(SizeSpec),
    Each([SizeSpec; 2]),
}

impl Default for SizePair {
    fn default() -> Self {
        Self::Both(SizeSpec::Auto)
    }
}

impl SizePair {
    /// `(width, height)`.
    pub fn axes(self) -> (SizeSpec, SizeSpec) {
        match self {
            Self::Both(s) => (s, s),
            Self::Each([w, h]) => (w, h),
        }
    }
}

/// A length that is either absolute or relative to a base extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LengthSpec {
    Px(f64),
    Percent(f64),
}

impl LengthSpec {
    /// Parse `"120"`, `"50%"`. Anything else resolves to `Px(0)`.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        let parsed = match s.strip_suffix('%') {
            Some(pct) => pct.trim().parse::<f64>().map(Self::Percent),
            None => s.parse::<f64>().map(Self::Px),
        };
        parsed.unwrap_or_else(|_| {
            tracing::warn!(value = s, "unparseable length; using 0");
            Self::Px(0.0)
        })
    }

    pub fn resolve(self, base: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(p) => p * base / 100.0,
        }
    }
}

impl Serialize for LengthSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Px(v) => serializer.serialize_f64(*v),
            Self::Percent(p) => serializer.serialize_str(&format!("{p}%")),
        }
    }
}

impl<'de> Deserialize<'de> for LengthSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(f64),
            Str(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Num(v) => Self::Px(v),
            Repr::Str(s) => Self::parse(&s),
        })
    }
}

/// Length shorthand: one length for both axes or `[width, height]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LengthPair {
    Both(LengthSpec),
    Each([LengthSpec; 2]),
}

impl LengthPair {
    pub fn axes(self) -> (LengthSpec, LengthSpec) {
        match self {
            Self::Both(l) => (l, l),
            Self::Each([w, h]) => (w, h),
        }
    }
}

/// Position shorthand: one offset for both axes or `[x, y]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionSpec {
    Both(f64),
    Each([f64; 2]),
}

impl Default for PositionSpec {
    fn default() -> Self {
        Self::Both(0.0)
    }
}

impl PositionSpec {
    pub fn resolve(self) -> Point {
        match self {
            Self::Both(v) => Point::new(v, v),
            Self::Each([x, y]) => Point::new(x, y),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/shorthand.rs"]
mod tests;
