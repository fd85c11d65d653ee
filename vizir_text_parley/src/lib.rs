// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shaping-aware [`TextMeasurer`] built on Parley.
//!
//! Tick label widths measured this way account for kerning and real glyph advances, so
//! axis tick estimation matches what a shaping renderer will draw.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use core::cell::RefCell;

use parley::style::{FontFamily as ParleyFamily, FontStack, GenericFamily, StyleProperty};
use parley::{FontContext, FontStyle, FontWeight, Layout, LayoutContext};
use vizir_text::{FontFamily, TextMeasurer, TextMetrics, TextStyle};

/// Measures text by shaping it with Parley's system font collection.
///
/// Contexts are reused between calls; the measurer is meant to be owned by a single
/// drawing backend.
pub struct ParleyMeasurer {
    fonts: RefCell<FontContext>,
    layouts: RefCell<LayoutContext<()>>,
    scale: f32,
}

impl core::fmt::Debug for ParleyMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyMeasurer")
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl ParleyMeasurer {
    /// Creates a measurer using the system font collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fonts: RefCell::new(FontContext::new()),
            layouts: RefCell::new(LayoutContext::new()),
            scale: 1.0,
        }
    }

    /// Shapes at `scale` times the requested size and scales results back down.
    ///
    /// Useful when the output is rasterized at a device pixel ratio other than 1, where
    /// hinting changes advances slightly.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale.max(1.0e-6);
        self
    }

    fn stack(family: &FontFamily) -> FontStack<'_> {
        FontStack::from(match family {
            FontFamily::Serif => ParleyFamily::Generic(GenericFamily::Serif),
            FontFamily::SansSerif => ParleyFamily::Generic(GenericFamily::SansSerif),
            FontFamily::Monospace => ParleyFamily::Generic(GenericFamily::Monospace),
            FontFamily::Named(name) => ParleyFamily::Named(Cow::Borrowed(name.as_ref())),
        })
    }

    fn layout(&self, text: &str, style: &TextStyle) -> Layout<()> {
        let mut fonts = self.fonts.borrow_mut();
        let mut layouts = self.layouts.borrow_mut();
        let mut builder = layouts.ranged_builder(&mut fonts, text, self.scale, true);
        builder.push_default(StyleProperty::FontSize(to_f32(style.font_size)));
        builder.push_default(StyleProperty::FontStack(Self::stack(&style.family)));
        builder.push_default(StyleProperty::FontWeight(FontWeight::new(f32::from(
            style.weight,
        ))));
        if style.italic {
            builder.push_default(StyleProperty::FontStyle(FontStyle::Italic));
        }
        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

impl Default for ParleyMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for ParleyMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let line = text.split('\n').next().unwrap_or("");
        if line.is_empty() {
            return TextMetrics::ZERO;
        }
        let layout = self.layout(line, style);
        let Some(first) = layout.lines().next() else {
            return TextMetrics::ZERO;
        };
        let m = first.metrics();
        let scale = f64::from(self.scale);
        TextMetrics {
            width: f64::from(m.advance) / scale,
            ascent: f64::from(m.ascent) / scale,
            descent: f64::from(m.descent) / scale,
        }
    }
}

/// Clamps a font size into the non-negative `f32` range Parley accepts.
fn to_f32(size: f64) -> f32 {
    if !size.is_finite() || size <= 0.0 {
        return 0.0;
    }
    if size >= f64::from(f32::MAX) {
        return f32::MAX;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "value is within the f32 range checked above"
    )]
    {
        size as f32
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn empty_text_has_zero_metrics() {
        let m = ParleyMeasurer::new();
        assert_eq!(m.measure("", &TextStyle::new(12.0)), TextMetrics::ZERO);
        assert_eq!(m.measure("\nsecond", &TextStyle::new(12.0)), TextMetrics::ZERO);
    }

    #[test]
    fn measurement_is_repeatable() {
        let m = ParleyMeasurer::new();
        let style = TextStyle::new(10.0);
        let a = m.measure("1234.56", &style);
        let b = m.measure("1234.56", &style);
        assert_eq!(a, b);
        assert!(a.width >= 0.0);
    }

    #[test]
    fn font_size_is_clamped() {
        assert_eq!(to_f32(-3.0), 0.0);
        assert_eq!(to_f32(f64::NAN), 0.0);
        assert_eq!(to_f32(f64::MAX), f32::MAX);
        assert_eq!(to_f32(12.0), 12.0);
    }
}
