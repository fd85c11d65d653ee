// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal axis: tick resolution and drawing.
//!
//! An [`XAxis`] is built once per chart render pass and is read-only afterwards. It
//! answers two questions, in order:
//! 1. which ticks to show ([`XAxis::ticks`]), and
//! 2. where to draw them ([`XAxis::render`]).
//!
//! [`XAxis::draw`] runs both with the axis' own formatter.

extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Point, Rect};

use crate::defaults::{
    DEFAULT_AXIS_COLOR, DEFAULT_AXIS_LINE_WIDTH, DEFAULT_FONT_SIZE,
    DEFAULT_MINIMUM_TICK_HORIZONTAL_SPACING, DEFAULT_X_AXIS_MARGIN,
};
use crate::format::format_float;
use crate::log;
use crate::units::points_to_pixels;
use crate::{Range, Renderer, Style, Tick, ValueFormatter};

/// The horizontal axis of a chart.
#[derive(Clone, Default)]
pub struct XAxis {
    /// Axis name, for the chart driver's use (legends, titles).
    pub name: String,
    /// Visual style; unset attributes fall back to [`crate::defaults`].
    pub style: Style,
    /// Label formatter. [`format_float`] is used when `None`.
    pub value_formatter: Option<ValueFormatter>,
    /// Caller override for the data bounds, as `(min, max)`.
    pub range: Option<(f64, f64)>,
    /// Explicit ticks. When non-empty these are used as-is and no ticks are generated.
    pub ticks: Vec<Tick>,
}

impl core::fmt::Debug for XAxis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("XAxis")
            .field("name", &self.name)
            .field("style", &self.style)
            .field("value_formatter", &self.value_formatter.is_some())
            .field("range", &self.range)
            .field("ticks", &self.ticks)
            .finish()
    }
}

impl XAxis {
    /// Creates an unstyled axis with generated ticks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the axis name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the axis style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Sets the style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets the label formatter.
    pub fn with_value_formatter(mut self, f: impl Fn(f64) -> String + 'static) -> Self {
        self.value_formatter = Some(Arc::new(f));
        self
    }

    /// Overrides the data bounds the chart would otherwise derive from its series.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    /// Sets explicit ticks, replacing generation.
    pub fn with_ticks(mut self, ticks: impl IntoIterator<Item = Tick>) -> Self {
        self.ticks = ticks.into_iter().collect();
        self
    }

    /// Returns the formatter labels should go through.
    pub fn value_formatter(&self) -> ValueFormatter {
        match &self.value_formatter {
            Some(f) => f.clone(),
            None => Arc::new(format_float),
        }
    }

    /// Applies the range override (if any) to a range derived from the data.
    ///
    /// The pixel domain always comes from `data`. An override that does not form a valid
    /// range (inverted or non-finite) is ignored.
    pub fn resolve_range(&self, data: Range) -> Range {
        match self.range {
            Some((min, max)) => match data.with_bounds(min, max) {
                Ok(r) => r,
                Err(_e) => {
                    log::debug!(error = %_e, "ignoring invalid x-axis range override");
                    data
                }
            },
            None => data,
        }
    }

    /// Resolves the ticks to draw for `range`.
    ///
    /// Explicit ticks are returned verbatim without touching `r`. Otherwise ticks are
    /// generated at a uniform step chosen so the widest label fits; this sets the renderer's
    /// font size as part of measuring.
    pub fn ticks<R: Renderer + ?Sized>(
        &self,
        r: &mut R,
        range: &Range,
        vf: &dyn Fn(f64) -> String,
    ) -> Cow<'_, [Tick]> {
        if !self.ticks.is_empty() {
            return Cow::Borrowed(&self.ticks);
        }
        let step = self.tick_step(r, range, vf);
        Cow::Owned(ticks_with_step(range, step, vf))
    }

    /// Estimates how many ticks fit in `range.domain()` pixels.
    ///
    /// The widest label is taken to be whichever of the formatted `min` and `max` has more
    /// characters. Always at least 1.
    fn tick_count<R: Renderer + ?Sized>(
        &self,
        r: &mut R,
        range: &Range,
        vf: &dyn Fn(f64) -> String,
    ) -> usize {
        r.set_font_size(self.style.font_size_or(DEFAULT_FONT_SIZE));

        let first = vf(range.min());
        let last = vf(range.max());
        let widest = if last.chars().count() > first.chars().count() {
            last
        } else {
            first
        };
        let text_width = points_to_pixels(r.dpi(), r.measure_text(&widest));
        let tick_width = text_width + DEFAULT_MINIMUM_TICK_HORIZONTAL_SPACING;
        let count = tick_count_for(range.domain(), tick_width);
        log::trace!(
            label = %widest,
            text_width,
            tick_width,
            count,
            "estimated x-axis tick count"
        );
        count
    }

    fn tick_step<R: Renderer + ?Sized>(
        &self,
        r: &mut R,
        range: &Range,
        vf: &dyn Fn(f64) -> String,
    ) -> f64 {
        let count = self.tick_count(r, range, vf);
        range.delta() / count as f64
    }

    /// Draws the baseline and tick labels.
    ///
    /// The baseline runs along the bottom edge of `canvas`. Labels sit below it and are
    /// right-anchored: a tick at offset `d` from the start of the range is drawn at
    /// `canvas.x1 - d`. Ticks are drawn in ascending value order whatever order they arrive
    /// in; `ticks` itself is left untouched.
    pub fn render<R: Renderer + ?Sized>(
        &self,
        r: &mut R,
        canvas: Rect,
        range: &Range,
        ticks: &[Tick],
    ) {
        let font_size = self.style.font_size_or(DEFAULT_FONT_SIZE);
        let label_height = points_to_pixels(r.dpi(), font_size);
        let label_y = canvas.y1 + DEFAULT_X_AXIS_MARGIN + label_height;

        r.set_stroke_color(self.style.stroke_color_or(DEFAULT_AXIS_COLOR));
        r.set_stroke_width(self.style.stroke_width_or(DEFAULT_AXIS_LINE_WIDTH));
        r.move_to(Point::new(canvas.x0, canvas.y1));
        r.line_to(Point::new(canvas.x1, canvas.y1));
        r.stroke();

        r.set_font_color(self.style.font_color_or(DEFAULT_AXIS_COLOR));
        r.set_font_size(font_size);

        let mut sorted: Vec<&Tick> = ticks.iter().collect();
        sorted.sort_by(|a, b| a.draw_order(b));
        for tick in &sorted {
            let x = canvas.x1 - range.translate(tick.value);
            r.text(&tick.label, Point::new(x, label_y));
        }
        log::debug!(labels = sorted.len(), label_y, "drew x-axis");
    }

    /// Resolves ticks with [`XAxis::value_formatter`] and renders them.
    ///
    /// Returns the ticks that were drawn, in the order they were resolved.
    pub fn draw<R: Renderer + ?Sized>(&self, r: &mut R, canvas: Rect, range: &Range) -> Vec<Tick> {
        let vf = self.value_formatter();
        let ticks = self.ticks(r, range, &*vf).into_owned();
        self.render(r, canvas, range, &ticks);
        ticks
    }
}

/// `ceil(domain / tick_width)`, clamped to `1..=ceil(domain)`.
///
/// Degenerate inputs (zero domain, zero or non-finite width) give a single tick.
fn tick_count_for(domain: f64, tick_width: f64) -> usize {
    if !(tick_width.is_finite() && tick_width > 0.0 && domain > 0.0) {
        return 1;
    }
    let count = (domain / tick_width).ceil().clamp(1.0, domain.ceil().max(1.0));
    #[allow(
        clippy::cast_possible_truncation,
        reason = "count is clamped to at most one tick per pixel of a finite domain"
    )]
    {
        count as usize
    }
}

/// Emits `min + i * step` for every `i` keeping the value strictly below `max`.
///
/// An empty range or a non-positive step gives no ticks.
fn ticks_with_step(range: &Range, step: f64, vf: &dyn Fn(f64) -> String) -> Vec<Tick> {
    if !(step.is_finite() && step > 0.0) {
        return Vec::new();
    }
    let (min, max) = (range.min(), range.max());
    // Rounding can put `min + count * step` a hair below `max`; bound the walk so very
    // large magnitudes can never spin.
    let limit = (range.delta() / step).ceil() + 1.0;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "limit is small: step is delta / count"
    )]
    let limit = limit as usize;
    (0..limit)
        .map(|i| min + i as f64 * step)
        .take_while(|&value| value < max)
        .map(|value| Tick::new(value, vf(value)))
        .collect()
}
