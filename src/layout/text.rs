use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::Point,
    layout::align_offset,
    model::text::TextAlign,
};

/// How per-character advances are measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextMeasurement {
    /// Half an em for code points below 128, a full em otherwise.
    #[default]
    CharClass,
    /// Shaped advance from the resolved font face.
    FontAdvance,
}

impl std::str::FromStr for TextMeasurement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "char-class" | "charclass" => Ok(Self::CharClass),
            "font-advance" | "fontadvance" => Ok(Self::FontAdvance),
            other => Err(format!("unknown text measurement mode \"{other}\"")),
        }
    }
}

/// Width class of a character in ems.
pub fn char_width_class(ch: char) -> f64 {
    if (ch as u32) < 128 { 0.5 } else { 1.0 }
}

/// Source of horizontal advances for single characters.
pub trait CharAdvance {
    /// Advance of `ch` in pixels at `font_size`, without letter spacing.
    fn advance(&mut self, ch: char, font_size: f64) -> f64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CharClassAdvance;

impl CharAdvance for CharClassAdvance {
    fn advance(&mut self, ch: char, font_size: f64) -> f64 {
        char_width_class(ch) * font_size
    }
}

/// One line with its per-character advances.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredLine {
    pub text: String,
    pub advances: Vec<f64>,
}

impl MeasuredLine {
    pub fn measure(text: &str, font_size: f64, advance: &mut dyn CharAdvance) -> Self {
        Self {
            text: text.to_owned(),
            advances: text.chars().map(|c| advance.advance(c, font_size)).collect(),
        }
    }

    pub fn char_count(&self) -> usize {
        self.advances.len()
    }

    /// Sum of advances without letter spacing.
    pub fn visual_width(&self) -> f64 {
        self.advances.iter().sum()
    }

    /// Width used for alignment: advances plus spacing between characters.
    pub fn width(&self, letter_spacing: f64) -> f64 {
        let gaps = self.char_count().saturating_sub(1) as f64;
        self.visual_width() + gaps * letter_spacing
    }
}

pub fn measure_lines(
    lines: &[&str],
    font_size: f64,
    advance: &mut dyn CharAdvance,
) -> Vec<MeasuredLine> {
    lines
        .iter()
        .map(|l| MeasuredLine::measure(l, font_size, advance))
        .collect()
}

/// Widest line by visual width. On ties the later line wins.
pub fn widest_line(lines: &[MeasuredLine]) -> Option<&MeasuredLine> {
    lines
        .iter()
        .reduce(|prev, curr| {
            if prev.visual_width() > curr.visual_width() {
                prev
            } else {
                curr
            }
        })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedChar {
    pub ch: char,
    /// Left edge of the glyph.
    pub x: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    pub chars: Vec<PlacedChar>,
    /// Left edge of the line after alignment.
    pub x: f64,
    /// Vertical middle of the line.
    pub y: f64,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextBlockParams {
    /// Left inset and top of the first row.
    pub origin: Point,
    /// Content box width; zero falls back to the widest measured line.
    pub content_width: f64,
    pub font_size: f64,
    pub row_gap: f64,
    pub letter_spacing: f64,
    pub align: TextAlign,
}

/// Place every character of every line.
///
/// Line `i` is centered on `origin.y + size / 2 + i * (size + row_gap)` and shifted
/// horizontally by the alignment slack against the max line width.
pub fn layout_text_block(lines: &[MeasuredLine], params: &TextBlockParams) -> Vec<PlacedLine> {
    let ls = params.letter_spacing;
    let max_width = if params.content_width != 0.0 {
        params.content_width
    } else {
        widest_line(lines).map(|l| l.width(ls)).unwrap_or(0.0)
    };

    let first_mid = params.origin.y + params.font_size / 2.0;
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let width = line.width(ls);
            let x = params.origin.x + align_offset(max_width, width, params.align);
            let y = first_mid + (i as f64) * (params.font_size + params.row_gap);

            let mut cursor = x;
            let chars = line
                .text
                .chars()
                .zip(&line.advances)
                .map(|(ch, adv)| {
                    let placed = PlacedChar { ch, x: cursor };
                    cursor += adv + ls;
                    placed
                })
                .collect();

            PlacedLine { chars, x, y, width }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/text.rs"]
mod tests;
