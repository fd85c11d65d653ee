// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis styling with per-attribute fallbacks.

use peniko::Color;

/// Visual attributes of an axis.
///
/// Every attribute is optional; readers resolve it with an explicit fallback at the point
/// of use (see [`crate::defaults`] for the values the axis uses). The axis never writes
/// to its style.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Style {
    /// Baseline stroke color.
    pub stroke_color: Option<Color>,
    /// Baseline stroke width in pixels.
    pub stroke_width: Option<f64>,
    /// Tick label font size in points.
    pub font_size: Option<f64>,
    /// Tick label color.
    pub font_color: Option<Color>,
}

impl Style {
    /// Sets the stroke color.
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }

    /// Sets the stroke width.
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Sets the font color.
    pub fn with_font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    /// Stroke color, or `default` when unset.
    pub fn stroke_color_or(&self, default: Color) -> Color {
        self.stroke_color.unwrap_or(default)
    }

    /// Stroke width, or `default` when unset or not a usable width.
    pub fn stroke_width_or(&self, default: f64) -> f64 {
        match self.stroke_width {
            Some(w) if w.is_finite() && w >= 0.0 => w,
            _ => default,
        }
    }

    /// Font size, or `default` when unset or not a usable size.
    pub fn font_size_or(&self, default: f64) -> f64 {
        match self.font_size {
            Some(s) if s.is_finite() && s > 0.0 => s,
            _ => default,
        }
    }

    /// Font color, or `default` when unset.
    pub fn font_color_or(&self, default: Color) -> Color {
        self.font_color.unwrap_or(default)
    }
}
