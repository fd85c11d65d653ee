// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing backend seen by the axis.

use kurbo::Point;
use peniko::Color;

/// A stateful 2D drawing context.
///
/// Setters change the current drawing state (font, stroke) used by later calls. The same
/// backend is typically shared by every axis and series of a chart render pass, so callers
/// must set whatever state they rely on immediately before drawing and never assume
/// state left over from a previous call.
///
/// The axis takes the backend by `&mut` for the whole of one layout + draw call; a
/// backend is never driven from two places at once.
pub trait Renderer {
    /// Output resolution in dots per inch.
    fn dpi(&self) -> f64;

    /// Width of `text` in points, at the current font size.
    ///
    /// Must be deterministic: measuring the same text with the same state twice returns the
    /// same width.
    fn measure_text(&self, text: &str) -> f64;

    /// Sets the font size in points.
    fn set_font_size(&mut self, size: f64);

    /// Sets the fill color used for text.
    fn set_font_color(&mut self, color: Color);

    /// Sets the stroke color used by [`Renderer::stroke`].
    fn set_stroke_color(&mut self, color: Color);

    /// Sets the stroke width in pixels used by [`Renderer::stroke`].
    fn set_stroke_width(&mut self, width: f64);

    /// Starts a new subpath at `p`.
    fn move_to(&mut self, p: Point);

    /// Adds a straight segment to `p`.
    fn line_to(&mut self, p: Point);

    /// Strokes the current path with the current stroke state and clears it.
    fn stroke(&mut self);

    /// Draws `text` with its baseline origin at `pos`.
    fn text(&mut self, text: &str, pos: Point);
}
