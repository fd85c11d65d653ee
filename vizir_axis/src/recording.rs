// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`Renderer`] that records every call, for tests.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::Cell;

use kurbo::Point;
use peniko::Color;

use crate::Renderer;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    FontSize(f64),
    FontColor(Color),
    StrokeColor(Color),
    StrokeWidth(f64),
    MoveTo(Point),
    LineTo(Point),
    Stroke,
    Text(String, Point),
}

/// Measures every glyph as `advance` points, regardless of font size.
#[derive(Debug)]
pub(crate) struct RecordingRenderer {
    pub(crate) dpi: f64,
    pub(crate) advance: f64,
    pub(crate) calls: Vec<Call>,
    pub(crate) measured: Cell<usize>,
}

impl RecordingRenderer {
    pub(crate) fn new(dpi: f64, advance: f64) -> Self {
        Self {
            dpi,
            advance,
            calls: Vec::new(),
            measured: Cell::new(0),
        }
    }

    pub(crate) fn texts(&self) -> Vec<(String, Point)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Text(s, p) => Some((s.clone(), *p)),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn dpi(&self) -> f64 {
        self.dpi
    }

    fn measure_text(&self, text: &str) -> f64 {
        self.measured.set(self.measured.get() + 1);
        self.advance * text.chars().count() as f64
    }

    fn set_font_size(&mut self, size: f64) {
        self.calls.push(Call::FontSize(size));
    }

    fn set_font_color(&mut self, color: Color) {
        self.calls.push(Call::FontColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.calls.push(Call::StrokeColor(color));
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.calls.push(Call::StrokeWidth(width));
    }

    fn move_to(&mut self, p: Point) {
        self.calls.push(Call::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.calls.push(Call::LineTo(p));
    }

    fn stroke(&mut self) {
        self.calls.push(Call::Stroke);
    }

    fn text(&mut self, text: &str, pos: Point) {
        self.calls.push(Call::Text(text.to_string(), pos));
    }
}
