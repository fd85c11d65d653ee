// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement for drawing backends.
//!
//! Axis layout needs the width of tick labels before it can decide how many fit. The
//! drawing backend owns fonts, so it answers that question through a [`TextMeasurer`]:
//! a shaping engine (see `vizir_text_parley`), a platform API, or the cheap
//! [`MonospaceMeasurer`].
//!
//! All lengths are in the unit of [`TextStyle::font_size`]; backends that track font
//! sizes in points get metrics in points.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::sync::Arc;

/// Measures single lines of text.
pub trait TextMeasurer {
    /// Measures `text` as one line.
    ///
    /// Implementations should be deterministic: the same text and style always give the
    /// same metrics.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Box<T> {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Font selection and size.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size; metrics come back in the same unit.
    pub font_size: f64,
    /// Preferred family.
    pub family: FontFamily,
    /// CSS-style weight (`400` normal, `700` bold).
    pub weight: u16,
    /// Italic face.
    pub italic: bool,
}

impl TextStyle {
    /// A regular sans-serif style at `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            family: FontFamily::SansSerif,
            weight: 400,
            italic: false,
        }
    }

    /// Sets the family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }

    /// Sets the weight.
    #[must_use]
    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// Generic or named font family.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// CSS `serif`.
    Serif,
    /// CSS `sans-serif`.
    SansSerif,
    /// CSS `monospace`.
    Monospace,
    /// A specific family, e.g. `"Roboto"`.
    Named(Arc<str>),
}

impl FontFamily {
    /// The CSS `font-family` value.
    #[must_use]
    pub fn css_name(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// Metrics of one measured line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// Advance width.
    pub width: f64,
    /// Baseline to top of typical glyphs.
    pub ascent: f64,
    /// Baseline to bottom of typical glyphs.
    pub descent: f64,
}

impl TextMetrics {
    /// Metrics of empty text.
    pub const ZERO: Self = Self {
        width: 0.0,
        ascent: 0.0,
        descent: 0.0,
    };

    /// `ascent + descent`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// Treats every character as the same width, `advance_em * font_size`.
///
/// The default (`0.6em`) is a serviceable stand-in for proportional sans-serif fonts
/// when no shaping engine is available.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasurer {
    /// Advance of one character, as a fraction of the font size.
    pub advance_em: f64,
}

impl MonospaceMeasurer {
    /// Creates a measurer with the given per-character advance.
    #[must_use]
    pub fn new(advance_em: f64) -> Self {
        Self { advance_em }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let line = text.split('\n').next().unwrap_or("");
        TextMetrics {
            width: self.advance_em * style.font_size * line.chars().count() as f64,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monospace_width_scales_with_chars_and_size() {
        let m = MonospaceMeasurer::new(0.5);
        let metrics = m.measure("abcd", &TextStyle::new(10.0));
        assert_eq!(metrics.width, 20.0);
        assert_eq!(metrics.height(), 10.0);
        assert_eq!(m.measure("abcd", &TextStyle::new(20.0)).width, 40.0);
    }

    #[test]
    fn only_the_first_line_is_measured() {
        let m = MonospaceMeasurer::default();
        let one = m.measure("12", &TextStyle::new(10.0));
        let two = m.measure("12\n3456", &TextStyle::new(10.0));
        assert_eq!(one, two);
    }

    #[test]
    fn boxed_and_borrowed_measurers_delegate() {
        let m = MonospaceMeasurer::new(1.0);
        let boxed: Box<dyn TextMeasurer> = Box::new(m);
        let style = TextStyle::new(8.0);
        assert_eq!(boxed.measure("xyz", &style).width, 24.0);
        assert_eq!((&m).measure("xyz", &style).width, 24.0);
    }

    #[test]
    fn css_names() {
        assert_eq!(FontFamily::Monospace.css_name(), "monospace");
        assert_eq!(FontFamily::Named(Arc::from("Inter")).css_name(), "Inter");
    }
}
