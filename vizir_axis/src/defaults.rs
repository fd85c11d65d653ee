// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fallback values used when a [`Style`](crate::Style) leaves an attribute unset,
//! plus the fixed spacing constants of the horizontal axis.

use peniko::Color;

/// Font size for tick labels, in points.
pub const DEFAULT_FONT_SIZE: f64 = 10.0;

/// Stroke width of the axis baseline, in pixels.
pub const DEFAULT_AXIS_LINE_WIDTH: f64 = 1.0;

/// Stroke and label color of the axis (a dark gray).
pub const DEFAULT_AXIS_COLOR: Color = Color::from_rgba8(51, 51, 51, 255);

/// Minimum horizontal gap reserved next to each tick label, in pixels.
///
/// Added to the widest label's width when estimating how many ticks fit.
pub const DEFAULT_MINIMUM_TICK_HORIZONTAL_SPACING: f64 = 20.0;

/// Gap between the bottom of the canvas and the top of the tick labels, in pixels.
pub const DEFAULT_X_AXIS_MARGIN: f64 = 10.0;
