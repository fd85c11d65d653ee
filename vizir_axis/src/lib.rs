// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal axis layout for a 2D chart renderer.
//!
//! Given a data [`Range`] and a pixel canvas, an [`XAxis`] decides where ticks go,
//! how they are labeled, and draws the baseline and labels through a stateful
//! [`Renderer`] backend.
//!
//! Layout is a two-phase pipeline:
//! - **resolve ticks**: caller-supplied ticks win; otherwise the tick count is estimated
//!   from the widest formatted label and the available pixel domain, and ticks are emitted
//!   at a uniform step.
//! - **draw**: the baseline is stroked along the bottom of the canvas, then labels are
//!   drawn in ascending value order.
//!
//! Chart composition, font loading and the vertical axis live elsewhere; this crate only
//! talks to them through [`Renderer`].

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod axis;
pub mod defaults;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod log;
mod range;
#[cfg(test)]
mod recording;
mod renderer;
mod style;
mod tick;
mod units;

pub use axis::XAxis;
pub use error::RangeError;
pub use format::{ValueFormatter, float_formatter, format_float};
pub use range::Range;
pub use renderer::Renderer;
pub use style::Style;
pub use tick::{Tick, sort_ticks};
pub use units::{DEFAULT_DPI, pixels_to_points, points_to_pixels};
